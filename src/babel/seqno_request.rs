//! The babel [SeqNo Request TLV](https://datatracker.ietf.org/doc/html/rfc6126#section-4.4.11).

use bytes::{Buf, BufMut, BytesMut};
use tracing::trace;

use crate::sequence_number::SeqNo;

/// The default hop count used in new seqno requests.
const DEFAULT_HOP_COUNT: u8 = 64;

/// Base wire size of a [`SeqNoRequest`] without the variable length prefix.
const SEQNO_REQUEST_BASE_WIRE_SIZE: u8 = 13;

/// Seqno request TLV body, asking the router which originated a route to increase its sequence
/// number so a route which became unfeasible can be selected again.
#[derive(Debug, Clone, PartialEq)]
pub struct SeqNoRequest {
    ae: u8,
    prefix_len: u8,
    /// The sequence number that is being requested.
    seqno: SeqNo,
    /// The maximum number of times this TLV may be forwarded, plus 1.
    hop_count: u8,
    /// The router id that is being requested.
    router_id: u64,
    /// The raw bytes of the prefix being requested.
    prefix: Vec<u8>,
}

impl SeqNoRequest {
    /// Create a new `SeqNoRequest` with the default hop count.
    pub fn new(ae: u8, prefix_len: u8, seqno: SeqNo, router_id: u64, prefix: Vec<u8>) -> Self {
        Self {
            ae,
            prefix_len,
            seqno,
            hop_count: DEFAULT_HOP_COUNT,
            router_id,
            prefix,
        }
    }

    /// The address encoding byte for the carried prefix.
    pub fn ae(&self) -> u8 {
        self.ae
    }

    /// The length, in bits, of the carried prefix.
    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    /// The requested sequence number.
    pub fn seqno(&self) -> SeqNo {
        self.seqno
    }

    /// The remaining hop count of this request.
    pub fn hop_count(&self) -> u8 {
        self.hop_count
    }

    /// The router id the request is aimed at.
    pub fn router_id(&self) -> u64 {
        self.router_id
    }

    /// The raw prefix bytes the request applies to.
    pub fn prefix(&self) -> &[u8] {
        &self.prefix
    }

    /// Calculates the size on the wire of this `SeqNoRequest`, excluding the TLV preamble.
    pub fn wire_size(&self) -> usize {
        SEQNO_REQUEST_BASE_WIRE_SIZE as usize + self.prefix.len()
    }

    /// Construct a `SeqNoRequest` from wire bytes, consuming exactly `len` bytes of `src`.
    pub fn from_bytes(src: &mut BytesMut, len: u8) -> Option<Self> {
        if len < SEQNO_REQUEST_BASE_WIRE_SIZE {
            trace!("Dropping seqno request tlv with short payload");
            src.advance(len as usize);
            return None;
        }
        let ae = src.get_u8();
        let prefix_len = src.get_u8();
        let seqno = src.get_u16().into();
        let hop_count = src.get_u8();
        let router_id = src.get_u64();
        let prefix_size = len as usize - SEQNO_REQUEST_BASE_WIRE_SIZE as usize;
        let prefix = src[..prefix_size].to_vec();
        src.advance(prefix_size);

        trace!("Read seqno request tlv body");

        Some(Self {
            ae,
            prefix_len,
            seqno,
            hop_count,
            router_id,
            prefix,
        })
    }

    /// Encode this `SeqNoRequest` tlv as part of a packet.
    pub fn write_bytes(&self, dst: &mut BytesMut) {
        dst.put_u8(self.ae);
        dst.put_u8(self.prefix_len);
        dst.put_u16(self.seqno.into());
        dst.put_u8(self.hop_count);
        dst.put_u64(self.router_id);
        dst.put_slice(&self.prefix);
    }
}
