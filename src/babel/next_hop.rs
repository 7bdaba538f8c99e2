//! The babel [Next Hop TLV](https://datatracker.ietf.org/doc/html/rfc6126#section-4.4.8).

use bytes::{Buf, BufMut, BytesMut};
use tracing::trace;

/// Base wire size of a [`NextHop`] without the variable length address.
const NEXT_HOP_BASE_WIRE_SIZE: u8 = 2;

/// Next Hop TLV body, establishing the next hop address for subsequent
/// [`Update`](super::Update) TLVs in the same packet. The address is carried verbatim together
/// with its address encoding byte.
#[derive(Debug, Clone, PartialEq)]
pub struct NextHop {
    ae: u8,
    address: Vec<u8>,
}

impl NextHop {
    /// Create a new `NextHop` with the given address encoding and raw address bytes.
    pub fn new(ae: u8, address: Vec<u8>) -> Self {
        Self { ae, address }
    }

    /// The address encoding byte for the carried address.
    pub fn ae(&self) -> u8 {
        self.ae
    }

    /// The raw next hop address bytes.
    pub fn address(&self) -> &[u8] {
        &self.address
    }

    /// Calculates the size on the wire of this `NextHop`, excluding the TLV preamble.
    pub fn wire_size(&self) -> usize {
        NEXT_HOP_BASE_WIRE_SIZE as usize + self.address.len()
    }

    /// Construct a `NextHop` from wire bytes, consuming exactly `len` bytes of `src`.
    pub fn from_bytes(src: &mut BytesMut, len: u8) -> Option<Self> {
        if len < NEXT_HOP_BASE_WIRE_SIZE {
            trace!("Dropping next hop tlv with short payload");
            src.advance(len as usize);
            return None;
        }
        let ae = src.get_u8();
        // Reserved byte, ignored on read.
        let _ = src.get_u8();
        let address_len = len as usize - NEXT_HOP_BASE_WIRE_SIZE as usize;
        let address = src[..address_len].to_vec();
        src.advance(address_len);

        trace!("Read next hop tlv body");

        Some(Self { ae, address })
    }

    /// Encode this `NextHop` tlv as part of a packet.
    pub fn write_bytes(&self, dst: &mut BytesMut) {
        dst.put_u8(self.ae);
        // Reserved byte, must be written as 0.
        dst.put_u8(0);
        dst.put_slice(&self.address);
    }
}
