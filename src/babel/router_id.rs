//! The babel [Router-Id TLV](https://datatracker.ietf.org/doc/html/rfc6126#section-4.4.7).

use bytes::{Buf, BufMut, BytesMut};
use tracing::trace;

/// Wire size of a [`RouterId`] TLV without the TLV preamble.
const ROUTER_ID_WIRE_SIZE: u8 = 10;

/// Router-Id TLV body, establishing the router id for subsequent
/// [`Update`](super::Update) TLVs in the same packet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouterId {
    router_id: u64,
}

impl RouterId {
    /// Create a new `RouterId` announcing the given id.
    pub fn new(router_id: u64) -> Self {
        Self { router_id }
    }

    /// The announced router id.
    pub fn router_id(&self) -> u64 {
        self.router_id
    }

    /// Calculates the size on the wire of this `RouterId`, excluding the TLV preamble.
    pub fn wire_size(&self) -> usize {
        ROUTER_ID_WIRE_SIZE as usize
    }

    /// Construct a `RouterId` from wire bytes, consuming exactly `len` bytes of `src`.
    pub fn from_bytes(src: &mut BytesMut, len: u8) -> Option<Self> {
        if len < ROUTER_ID_WIRE_SIZE {
            trace!("Dropping router id tlv with short payload");
            src.advance(len as usize);
            return None;
        }
        // Reserved bytes, ignored on read.
        let _ = src.get_u16();
        let router_id = src.get_u64();
        src.advance(len as usize - ROUTER_ID_WIRE_SIZE as usize);

        trace!("Read router id tlv body");

        Some(Self { router_id })
    }

    /// Encode this `RouterId` tlv as part of a packet.
    pub fn write_bytes(&self, dst: &mut BytesMut) {
        // Reserved bytes, must be written as 0.
        dst.put_u16(0);
        dst.put_u64(self.router_id);
    }
}
