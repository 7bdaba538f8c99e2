//! The babel [Hello TLV](https://datatracker.ietf.org/doc/html/rfc6126#section-4.4.5).

use bytes::{Buf, BufMut, BytesMut};
use tracing::trace;

use crate::sequence_number::SeqNo;

/// Wire size of a [`Hello`] TLV without the TLV preamble.
const HELLO_WIRE_SIZE: u8 = 6;

/// Hello TLV body, periodically announced by a node on each interface so neighbors can detect
/// its presence and measure link quality.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hello {
    seqno: SeqNo,
    interval: u16,
}

impl Hello {
    /// Create a new `Hello` with the given sequence number and interval.
    pub fn new(seqno: SeqNo, interval: u16) -> Self {
        Self { seqno, interval }
    }

    /// The sequence number of this `Hello`.
    pub fn seqno(&self) -> SeqNo {
        self.seqno
    }

    /// Upper bound in centiseconds until the next `Hello` from the sender.
    pub fn interval(&self) -> u16 {
        self.interval
    }

    /// Calculates the size on the wire of this `Hello`, excluding the TLV preamble.
    pub fn wire_size(&self) -> usize {
        HELLO_WIRE_SIZE as usize
    }

    /// Construct a `Hello` from wire bytes, consuming exactly `len` bytes of `src`.
    pub fn from_bytes(src: &mut BytesMut, len: u8) -> Option<Self> {
        if len < HELLO_WIRE_SIZE {
            trace!("Dropping hello tlv with short payload");
            src.advance(len as usize);
            return None;
        }
        // Reserved bytes, ignored on read.
        let _ = src.get_u16();
        let seqno = src.get_u16().into();
        let interval = src.get_u16();
        src.advance(len as usize - HELLO_WIRE_SIZE as usize);

        trace!("Read hello tlv body");

        Some(Self { seqno, interval })
    }

    /// Encode this `Hello` tlv as part of a packet.
    pub fn write_bytes(&self, dst: &mut BytesMut) {
        // Reserved bytes, must be written as 0.
        dst.put_u16(0);
        dst.put_u16(self.seqno.into());
        dst.put_u16(self.interval);
    }
}

#[cfg(test)]
mod tests {
    use bytes::{Buf, BytesMut};

    #[test]
    fn encoding() {
        let mut buf = BytesMut::new();

        let hello = super::Hello::new(25.into(), 400);
        hello.write_bytes(&mut buf);

        assert_eq!(buf.len(), 6);
        assert_eq!(buf[..6], [0, 0, 0, 25, 1, 144]);

        let mut buf = BytesMut::new();

        let hello = super::Hello::new(16.into(), 4000);
        hello.write_bytes(&mut buf);

        assert_eq!(buf.len(), 6);
        assert_eq!(buf[..6], [0, 0, 0, 16, 15, 160]);
    }

    #[test]
    fn decoding() {
        let mut buf = BytesMut::from(&[0, 0, 0, 19, 2, 1][..]);
        assert_eq!(
            super::Hello::from_bytes(&mut buf, 6),
            Some(super::Hello::new(19.into(), 513))
        );
        assert_eq!(buf.remaining(), 0);

        // Reserved bytes are ignored whatever their content.
        let mut buf = BytesMut::from(&[255, 255, 1, 19, 200, 100][..]);
        assert_eq!(
            super::Hello::from_bytes(&mut buf, 6),
            Some(super::Hello::new(275.into(), 51300))
        );
        assert_eq!(buf.remaining(), 0);
    }

    #[test]
    fn decode_rejects_short_payload() {
        let mut buf = BytesMut::from(&[0, 0, 0, 19][..]);
        assert_eq!(super::Hello::from_bytes(&mut buf, 4), None);
        assert_eq!(buf.remaining(), 0);
    }

    #[test]
    fn roundtrip() {
        let mut buf = BytesMut::new();

        let hello = super::Hello::new(16.into(), 400);
        hello.write_bytes(&mut buf);
        let buf_len = buf.len();
        let decoded = super::Hello::from_bytes(&mut buf, buf_len as u8);

        assert_eq!(Some(hello), decoded);
        assert_eq!(buf.remaining(), 0);
    }
}
