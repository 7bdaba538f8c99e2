//! The babel [Ack TLV](https://datatracker.ietf.org/doc/html/rfc6126#section-4.4.4).

use bytes::{Buf, BufMut, BytesMut};
use tracing::trace;

/// Wire size of an [`Ack`] TLV without the TLV preamble.
const ACK_WIRE_SIZE: u8 = 2;

/// Ack TLV body, sent in response to an [`AckRequest`](super::AckRequest) carrying the same
/// nonce.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ack {
    nonce: u16,
}

impl Ack {
    /// Create a new `Ack` echoing the given nonce.
    pub fn new(nonce: u16) -> Self {
        Self { nonce }
    }

    /// The nonce copied from the request this `Ack` answers.
    pub fn nonce(&self) -> u16 {
        self.nonce
    }

    /// Calculates the size on the wire of this `Ack`, excluding the TLV preamble.
    pub fn wire_size(&self) -> usize {
        ACK_WIRE_SIZE as usize
    }

    /// Construct an `Ack` from wire bytes, consuming exactly `len` bytes of `src`.
    pub fn from_bytes(src: &mut BytesMut, len: u8) -> Option<Self> {
        if len < ACK_WIRE_SIZE {
            trace!("Dropping ack tlv with short payload");
            src.advance(len as usize);
            return None;
        }
        let nonce = src.get_u16();
        // Skip possible trailing sub-tlv data we don't understand.
        src.advance(len as usize - ACK_WIRE_SIZE as usize);

        trace!("Read ack tlv body");

        Some(Self { nonce })
    }

    /// Encode this `Ack` tlv as part of a packet.
    pub fn write_bytes(&self, dst: &mut BytesMut) {
        dst.put_u16(self.nonce);
    }
}

#[cfg(test)]
mod tests {
    use bytes::{Buf, BytesMut};

    #[test]
    fn encoding() {
        let mut buf = BytesMut::new();
        super::Ack::new(2064).write_bytes(&mut buf);

        assert_eq!(buf.len(), 2);
        assert_eq!(buf[..2], [8, 16]);
    }

    #[test]
    fn decoding() {
        let mut buf = BytesMut::from(&[1, 44][..]);
        assert_eq!(
            super::Ack::from_bytes(&mut buf, 2),
            Some(super::Ack::new(300))
        );
        assert_eq!(buf.remaining(), 0);
    }

    #[test]
    fn decode_rejects_short_payload() {
        let mut buf = BytesMut::from(&[1][..]);
        assert_eq!(super::Ack::from_bytes(&mut buf, 1), None);
        assert_eq!(buf.remaining(), 0);
    }

    #[test]
    fn roundtrip() {
        let mut buf = BytesMut::new();

        let ack = super::Ack::new(612);
        ack.write_bytes(&mut buf);
        let buf_len = buf.len();
        let decoded = super::Ack::from_bytes(&mut buf, buf_len as u8);

        assert_eq!(Some(ack), decoded);
        assert_eq!(buf.remaining(), 0);
    }
}
