//! The babel [Ack Request TLV](https://datatracker.ietf.org/doc/html/rfc6126#section-4.4.3).

use bytes::{Buf, BufMut, BytesMut};
use tracing::trace;

/// Wire size of an [`AckRequest`] TLV without the TLV preamble.
const ACK_REQUEST_WIRE_SIZE: u8 = 6;

/// Ack request TLV body. A peer receiving this must answer with an
/// [`Ack`](super::Ack) echoing the nonce within `interval` centiseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AckRequest {
    nonce: u16,
    interval: u16,
}

impl AckRequest {
    /// Create a new `AckRequest` with the given nonce and interval.
    pub fn new(nonce: u16, interval: u16) -> Self {
        Self { nonce, interval }
    }

    /// The nonce a matching [`Ack`](super::Ack) must carry.
    pub fn nonce(&self) -> u16 {
        self.nonce
    }

    /// Deadline for the answer, in centiseconds.
    pub fn interval(&self) -> u16 {
        self.interval
    }

    /// Calculates the size on the wire of this `AckRequest`, excluding the TLV preamble.
    pub fn wire_size(&self) -> usize {
        ACK_REQUEST_WIRE_SIZE as usize
    }

    /// Construct an `AckRequest` from wire bytes, consuming exactly `len` bytes of `src`.
    pub fn from_bytes(src: &mut BytesMut, len: u8) -> Option<Self> {
        if len < ACK_REQUEST_WIRE_SIZE {
            trace!("Dropping ack request tlv with short payload");
            src.advance(len as usize);
            return None;
        }
        // Reserved bytes, ignored on read.
        let _ = src.get_u16();
        let nonce = src.get_u16();
        let interval = src.get_u16();
        src.advance(len as usize - ACK_REQUEST_WIRE_SIZE as usize);

        trace!("Read ack request tlv body");

        Some(Self { nonce, interval })
    }

    /// Encode this `AckRequest` tlv as part of a packet.
    pub fn write_bytes(&self, dst: &mut BytesMut) {
        // Reserved bytes, must be written as 0.
        dst.put_u16(0);
        dst.put_u16(self.nonce);
        dst.put_u16(self.interval);
    }
}

#[cfg(test)]
mod tests {
    use bytes::{Buf, BytesMut};

    #[test]
    fn encoding() {
        let mut buf = BytesMut::new();
        super::AckRequest::new(1024, 2048).write_bytes(&mut buf);

        assert_eq!(buf.len(), 6);
        // Reserved bytes, then nonce and interval in network byte order.
        assert_eq!(buf[..6], [0, 0, 0x04, 0x00, 0x08, 0x00]);
    }

    #[test]
    fn decoding() {
        let mut buf = BytesMut::from(&[0, 0, 0x04, 0x00, 0x08, 0x00][..]);
        assert_eq!(
            super::AckRequest::from_bytes(&mut buf, 6),
            Some(super::AckRequest::new(1024, 2048))
        );
        assert_eq!(buf.remaining(), 0);

        let mut buf = BytesMut::from(&[1, 1, 3, 64, 0, 10][..]);
        assert_eq!(
            super::AckRequest::from_bytes(&mut buf, 6),
            Some(super::AckRequest::new(832, 10))
        );
        assert_eq!(buf.remaining(), 0);
    }

    #[test]
    fn decode_rejects_short_payload() {
        let mut buf = BytesMut::from(&[0, 0, 4][..]);
        assert_eq!(super::AckRequest::from_bytes(&mut buf, 3), None);
        assert_eq!(buf.remaining(), 0);
    }

    #[test]
    fn roundtrip() {
        let mut buf = BytesMut::new();

        let ack_request = super::AckRequest::new(832, 10);
        ack_request.write_bytes(&mut buf);
        let buf_len = buf.len();
        let decoded = super::AckRequest::from_bytes(&mut buf, buf_len as u8);

        assert_eq!(Some(ack_request), decoded);
        assert_eq!(buf.remaining(), 0);
    }
}
