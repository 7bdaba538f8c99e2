//! The babel [Route Request TLV](https://datatracker.ietf.org/doc/html/rfc6126#section-4.4.10).

use bytes::{Buf, BufMut, BytesMut};
use tracing::trace;

/// Base wire size of a [`RouteRequest`] without the variable length prefix.
const ROUTE_REQUEST_BASE_WIRE_SIZE: u8 = 2;

/// Route request TLV body, asking a neighbor to send an [`Update`](super::Update) for the given
/// prefix. A wildcard request (AE 0, empty prefix) asks for a full route table dump.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRequest {
    ae: u8,
    prefix_len: u8,
    prefix: Vec<u8>,
}

impl RouteRequest {
    /// Create a new `RouteRequest` for the given prefix.
    pub fn new(ae: u8, prefix_len: u8, prefix: Vec<u8>) -> Self {
        Self {
            ae,
            prefix_len,
            prefix,
        }
    }

    /// The address encoding byte for the requested prefix.
    pub fn ae(&self) -> u8 {
        self.ae
    }

    /// The length, in bits, of the requested prefix.
    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    /// The raw prefix bytes being requested.
    pub fn prefix(&self) -> &[u8] {
        &self.prefix
    }

    /// Calculates the size on the wire of this `RouteRequest`, excluding the TLV preamble.
    pub fn wire_size(&self) -> usize {
        ROUTE_REQUEST_BASE_WIRE_SIZE as usize + self.prefix.len()
    }

    /// Construct a `RouteRequest` from wire bytes, consuming exactly `len` bytes of `src`.
    pub fn from_bytes(src: &mut BytesMut, len: u8) -> Option<Self> {
        if len < ROUTE_REQUEST_BASE_WIRE_SIZE {
            trace!("Dropping route request tlv with short payload");
            src.advance(len as usize);
            return None;
        }
        let ae = src.get_u8();
        let prefix_len = src.get_u8();
        let prefix_size = len as usize - ROUTE_REQUEST_BASE_WIRE_SIZE as usize;
        let prefix = src[..prefix_size].to_vec();
        src.advance(prefix_size);

        trace!("Read route request tlv body");

        Some(Self {
            ae,
            prefix_len,
            prefix,
        })
    }

    /// Encode this `RouteRequest` tlv as part of a packet.
    pub fn write_bytes(&self, dst: &mut BytesMut) {
        dst.put_u8(self.ae);
        dst.put_u8(self.prefix_len);
        dst.put_slice(&self.prefix);
    }
}
