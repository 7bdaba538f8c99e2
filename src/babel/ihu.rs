//! The babel [IHU TLV](https://datatracker.ietf.org/doc/html/rfc6126#section-4.4.6).

use bytes::{Buf, BufMut, BytesMut};
use tracing::trace;

use crate::metric::Metric;

/// Base wire size of an [`Ihu`] without the variable length address.
const IHU_BASE_WIRE_SIZE: u8 = 6;

/// IHU ("I Heard You") TLV body, reporting the cost of the link as received from a neighbor.
///
/// The address is carried as opaque bytes together with its address encoding byte. Interpreting
/// the address is up to the component consuming decoded TLVs, the wire layer only guarantees the
/// bytes are transported verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct Ihu {
    ae: u8,
    rx_cost: Metric,
    interval: u16,
    address: Vec<u8>,
}

impl Ihu {
    /// Create a new `Ihu` to be transmitted.
    ///
    /// # Panics
    ///
    /// This function will panic if `interval` is 0, as the receiver uses that value to calculate
    /// the hold time.
    pub fn new(ae: u8, rx_cost: Metric, interval: u16, address: Vec<u8>) -> Self {
        if interval == 0 {
            panic!("Ihu interval MUST NOT be 0");
        }
        Self {
            ae,
            rx_cost,
            interval,
            address,
        }
    }

    /// The address encoding byte for the carried address.
    pub fn ae(&self) -> u8 {
        self.ae
    }

    /// The cost of the link, as measured by the sender.
    pub fn rx_cost(&self) -> Metric {
        self.rx_cost
    }

    /// Upper bound in centiseconds until the next `Ihu` from the sender.
    pub fn interval(&self) -> u16 {
        self.interval
    }

    /// The raw address bytes of the neighbor this `Ihu` is addressed to.
    pub fn address(&self) -> &[u8] {
        &self.address
    }

    /// Calculates the size on the wire of this `Ihu`, excluding the TLV preamble.
    pub fn wire_size(&self) -> usize {
        IHU_BASE_WIRE_SIZE as usize + self.address.len()
    }

    /// Construct an `Ihu` from wire bytes, consuming exactly `len` bytes of `src`.
    pub fn from_bytes(src: &mut BytesMut, len: u8) -> Option<Self> {
        if len < IHU_BASE_WIRE_SIZE {
            trace!("Dropping ihu tlv with short payload");
            src.advance(len as usize);
            return None;
        }
        let ae = src.get_u8();
        // Reserved byte, ignored on read.
        let _ = src.get_u8();
        let rx_cost = src.get_u16().into();
        let interval = src.get_u16();
        let address_len = len as usize - IHU_BASE_WIRE_SIZE as usize;
        let address = src[..address_len].to_vec();
        src.advance(address_len);

        trace!("Read ihu tlv body");

        Some(Self {
            ae,
            rx_cost,
            interval,
            address,
        })
    }

    /// Encode this `Ihu` tlv as part of a packet.
    pub fn write_bytes(&self, dst: &mut BytesMut) {
        dst.put_u8(self.ae);
        // Reserved byte, must be written as 0.
        dst.put_u8(0);
        dst.put_u16(self.rx_cost.into());
        dst.put_u16(self.interval);
        dst.put_slice(&self.address);
    }
}

#[cfg(test)]
mod tests {
    use bytes::{Buf, BytesMut};

    #[test]
    fn encoding() {
        let mut buf = BytesMut::new();

        let ihu = super::Ihu::new(1, 25.into(), 400, vec![1, 1, 1, 1]);
        ihu.write_bytes(&mut buf);

        assert_eq!(buf.len(), 10);
        assert_eq!(buf[..10], [1, 0, 0, 25, 1, 144, 1, 1, 1, 1]);

        let mut buf = BytesMut::new();

        // Wildcard address, empty address field.
        let ihu = super::Ihu::new(0, 100.into(), 4000, vec![]);
        ihu.write_bytes(&mut buf);

        assert_eq!(buf.len(), 6);
        assert_eq!(buf[..6], [0, 0, 0, 100, 15, 160]);
    }

    #[test]
    fn decoding() {
        let mut buf = BytesMut::from(&[0, 0, 0, 1, 1, 44][..]);
        assert_eq!(
            super::Ihu::from_bytes(&mut buf, 6),
            Some(super::Ihu::new(0, 1.into(), 300, vec![]))
        );
        assert_eq!(buf.remaining(), 0);

        let mut buf = BytesMut::from(&[1, 0, 0, 2, 0, 44, 3, 4, 5, 6][..]);
        assert_eq!(
            super::Ihu::from_bytes(&mut buf, 10),
            Some(super::Ihu::new(1, 2.into(), 44, vec![3, 4, 5, 6]))
        );
        assert_eq!(buf.remaining(), 0);
    }

    #[test]
    fn decode_rejects_short_payload() {
        let mut buf = BytesMut::from(&[1, 0, 0, 2][..]);
        assert_eq!(super::Ihu::from_bytes(&mut buf, 4), None);
        assert_eq!(buf.remaining(), 0);
    }

    #[test]
    fn roundtrip() {
        let mut buf = BytesMut::new();

        let ihu = super::Ihu::new(
            2,
            16.into(),
            400,
            vec![0, 2, 0, 0, 4, 210, 9, 41, 13, 128, 17, 215, 22, 46, 0, 1],
        );
        ihu.write_bytes(&mut buf);
        let buf_len = buf.len();
        let decoded = super::Ihu::from_bytes(&mut buf, buf_len as u8);

        assert_eq!(Some(ihu), decoded);
        assert_eq!(buf.remaining(), 0);
    }
}
