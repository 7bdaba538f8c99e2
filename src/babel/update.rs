//! The babel [Update TLV](https://datatracker.ietf.org/doc/html/rfc6126#section-4.4.9).

use bytes::{Buf, BufMut, BytesMut};
use tracing::trace;

use crate::{metric::Metric, sequence_number::SeqNo};

/// Flag bit indicating an [`Update`] TLV establishes a new default prefix.
#[allow(dead_code)]
const UPDATE_FLAG_PREFIX: u8 = 0x80;
/// Flag bit indicating an [`Update`] TLV establishes a new default router-id.
#[allow(dead_code)]
const UPDATE_FLAG_ROUTER_ID: u8 = 0x40;
/// Mask to apply to [`Update`] flags, leaving only valid flags.
const FLAG_MASK: u8 = 0b1100_0000;

/// Base wire size of an [`Update`] without the variable length prefix.
const UPDATE_BASE_WIRE_SIZE: u8 = 10;

/// Update TLV body, advertising (or retracting, with an infinite metric) a route towards a
/// prefix. The prefix is carried as raw bytes, its interpretation through the address encoding
/// byte is left to the consumer of decoded TLVs.
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    ae: u8,
    flags: u8,
    prefix_len: u8,
    /// Amount of prefix bytes omitted on the wire, shared with the preceding update.
    omitted: u8,
    interval: u16,
    seqno: SeqNo,
    metric: Metric,
    prefix: Vec<u8>,
}

impl Update {
    /// Create a new `Update` without flags or omitted prefix bytes.
    pub fn new(
        ae: u8,
        prefix_len: u8,
        interval: u16,
        seqno: SeqNo,
        metric: Metric,
        prefix: Vec<u8>,
    ) -> Self {
        Self {
            ae,
            flags: 0,
            prefix_len,
            omitted: 0,
            interval,
            seqno,
            metric,
            prefix,
        }
    }

    /// The address encoding byte for the carried prefix.
    pub fn ae(&self) -> u8 {
        self.ae
    }

    /// The flags set on this `Update`.
    pub fn flags(&self) -> u8 {
        self.flags
    }

    /// The length, in bits, of the advertised prefix.
    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    /// Amount of prefix bytes omitted on the wire.
    pub fn omitted(&self) -> u8 {
        self.omitted
    }

    /// Upper bound in centiseconds until the next `Update` for this prefix.
    pub fn interval(&self) -> u16 {
        self.interval
    }

    /// The sequence number of the sender for this route.
    pub fn seqno(&self) -> SeqNo {
        self.seqno
    }

    /// The metric of the sender for this route.
    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// The raw (non omitted) prefix bytes.
    pub fn prefix(&self) -> &[u8] {
        &self.prefix
    }

    /// Calculates the size on the wire of this `Update`, excluding the TLV preamble.
    pub fn wire_size(&self) -> usize {
        UPDATE_BASE_WIRE_SIZE as usize + self.prefix.len()
    }

    /// Construct an `Update` from wire bytes, consuming exactly `len` bytes of `src`.
    pub fn from_bytes(src: &mut BytesMut, len: u8) -> Option<Self> {
        if len < UPDATE_BASE_WIRE_SIZE {
            trace!("Dropping update tlv with short payload");
            src.advance(len as usize);
            return None;
        }
        let ae = src.get_u8();
        let flags = src.get_u8() & FLAG_MASK;
        let prefix_len = src.get_u8();
        let omitted = src.get_u8();
        let interval = src.get_u16();
        let seqno = src.get_u16().into();
        let metric = src.get_u16().into();
        let prefix_size = len as usize - UPDATE_BASE_WIRE_SIZE as usize;
        let prefix = src[..prefix_size].to_vec();
        src.advance(prefix_size);

        trace!("Read update tlv body");

        Some(Self {
            ae,
            flags,
            prefix_len,
            omitted,
            interval,
            seqno,
            metric,
            prefix,
        })
    }

    /// Encode this `Update` tlv as part of a packet.
    pub fn write_bytes(&self, dst: &mut BytesMut) {
        dst.put_u8(self.ae);
        dst.put_u8(self.flags);
        dst.put_u8(self.prefix_len);
        dst.put_u8(self.omitted);
        dst.put_u16(self.interval);
        dst.put_u16(self.seqno.into());
        dst.put_u16(self.metric.into());
        dst.put_slice(&self.prefix);
    }
}

#[cfg(test)]
mod tests {
    use bytes::{Buf, BytesMut};

    use crate::metric::Metric;

    #[test]
    fn encoding() {
        let mut buf = BytesMut::new();

        let update = super::Update::new(1, 23, 400, 17.into(), 25.into(), vec![10, 101, 4]);
        update.write_bytes(&mut buf);

        assert_eq!(buf.len(), 13);
        assert_eq!(
            buf[..13],
            [1, 0, 23, 0, 1, 144, 0, 17, 0, 25, 10, 101, 4]
        );
    }

    #[test]
    fn decoding() {
        let mut buf = BytesMut::from(
            &[2, 0, 64, 0, 0, 100, 0, 70, 2, 0, 0, 32, 1, 13, 184, 0, 0, 0][..],
        );

        let update = super::Update::new(
            2,
            64,
            100,
            70.into(),
            512.into(),
            vec![0, 32, 1, 13, 184, 0, 0, 0],
        );

        assert_eq!(super::Update::from_bytes(&mut buf, 18), Some(update));
        assert_eq!(buf.remaining(), 0);
    }

    #[test]
    fn decode_ignores_invalid_flag_bits() {
        let mut buf = BytesMut::from(&[1, 0b0010_1001, 24, 0, 0, 44, 0, 42, 3, 1, 10, 0, 0][..]);

        let update = super::Update::from_bytes(&mut buf, 13).expect("valid update body");
        assert_eq!(update.flags(), 0);
        assert_eq!(buf.remaining(), 0);

        let mut buf = BytesMut::from(&[1, 0b1110_1001, 24, 0, 0, 44, 0, 42, 3, 1, 10, 0, 0][..]);

        let update = super::Update::from_bytes(&mut buf, 13).expect("valid update body");
        assert_eq!(
            update.flags(),
            super::UPDATE_FLAG_PREFIX | super::UPDATE_FLAG_ROUTER_ID
        );
        assert_eq!(buf.remaining(), 0);
    }

    #[test]
    fn decode_retraction() {
        let mut buf = BytesMut::from(&[0, 0, 0, 0, 0, 10, 0, 1, 255, 255][..]);

        let update = super::Update::from_bytes(&mut buf, 10).expect("valid update body");
        assert!(update.metric().is_infinite());
        assert_eq!(update.metric(), Metric::infinite());
        assert_eq!(buf.remaining(), 0);
    }

    #[test]
    fn decode_rejects_short_payload() {
        let mut buf = BytesMut::from(&[1, 0, 24, 0, 0, 44][..]);
        assert_eq!(super::Update::from_bytes(&mut buf, 6), None);
        assert_eq!(buf.remaining(), 0);
    }

    #[test]
    fn roundtrip() {
        let mut buf = BytesMut::new();

        let update = super::Update::new(
            2,
            64,
            600,
            10.into(),
            25.into(),
            vec![0x02, 0x1f, 0x40, 0x25, 0xab, 0xcd, 0xde, 0xad],
        );
        update.write_bytes(&mut buf);
        let buf_len = buf.len();
        let decoded = super::Update::from_bytes(&mut buf, buf_len as u8);

        assert_eq!(Some(update), decoded);
        assert_eq!(buf.remaining(), 0);
    }
}
