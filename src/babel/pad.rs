//! The babel [Pad1 and PadN TLVs](https://datatracker.ietf.org/doc/html/rfc6126#section-4.4).
//!
//! Padding TLVs carry no information, they exist purely so a sender can align other TLVs in the
//! packet body.

use bytes::{Buf, BufMut, BytesMut};
use tracing::trace;

/// A single padding TLV with an empty payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pad1;

impl Pad1 {
    /// Calculates the size on the wire of this `Pad1`, excluding the TLV preamble.
    pub fn wire_size(&self) -> usize {
        0
    }

    /// Construct a `Pad1` from wire bytes. A `Pad1` with a non empty payload is rejected, though
    /// the payload bytes are still consumed.
    pub fn from_bytes(src: &mut BytesMut, len: u8) -> Option<Self> {
        if len != 0 {
            trace!("Dropping pad1 tlv with non empty payload");
            src.advance(len as usize);
            return None;
        }
        Some(Pad1)
    }

    /// Encode this `Pad1` tlv as part of a packet.
    pub fn write_bytes(&self, _dst: &mut BytesMut) {}
}

/// A padding TLV with `length` bytes of payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PadN {
    length: u8,
}

impl PadN {
    /// Create a new `PadN` with the given amount of padding bytes.
    pub fn new(length: u8) -> Self {
        Self { length }
    }

    /// Calculates the size on the wire of this `PadN`, excluding the TLV preamble.
    pub fn wire_size(&self) -> usize {
        self.length as usize
    }

    /// Construct a `PadN` from wire bytes. The payload content is ignored.
    pub fn from_bytes(src: &mut BytesMut, len: u8) -> Self {
        src.advance(len as usize);
        Self { length: len }
    }

    /// Encode this `PadN` tlv as part of a packet. Padding is written as zero bytes.
    pub fn write_bytes(&self, dst: &mut BytesMut) {
        dst.put_bytes(0, self.length as usize);
    }
}

#[cfg(test)]
mod tests {
    use bytes::{Buf, BytesMut};

    #[test]
    fn encoding() {
        let mut buf = BytesMut::new();
        super::Pad1.write_bytes(&mut buf);
        assert!(buf.is_empty());

        let mut buf = BytesMut::new();
        super::PadN::new(3).write_bytes(&mut buf);
        assert_eq!(buf[..3], [0, 0, 0]);
    }

    #[test]
    fn decoding() {
        let mut buf = BytesMut::new();
        assert_eq!(super::Pad1::from_bytes(&mut buf, 0), Some(super::Pad1));

        // Padding content is irrelevant, only the length survives.
        let mut buf = BytesMut::from(&[7, 7, 7, 7][..]);
        assert_eq!(super::PadN::from_bytes(&mut buf, 4), super::PadN::new(4));
        assert_eq!(buf.remaining(), 0);
    }

    #[test]
    fn decode_rejects_pad1_with_payload() {
        let mut buf = BytesMut::from(&[1, 2][..]);
        assert_eq!(super::Pad1::from_bytes(&mut buf, 2), None);
        // The payload is consumed regardless so the parser stays aligned.
        assert_eq!(buf.remaining(), 0);
    }
}
