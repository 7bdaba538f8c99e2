//! A single `Tlv` type wrapping every TLV body we can send or receive.

use bytes::{Buf, BufMut, BytesMut};

use super::{
    Ack, AckRequest, Hello, Ihu, NextHop, Pad1, PadN, RouteRequest, RouterId, SeqNoRequest, Update,
};

/// A TLV with a type byte we don't recognize. The payload is preserved as raw bytes so it can be
/// re-encoded verbatim, a decoder is always able to skip it based on the length preamble alone.
#[derive(Debug, Clone, PartialEq)]
pub struct Unknown {
    tlv_type: u8,
    payload: Vec<u8>,
}

impl Unknown {
    /// Create a new `Unknown` TLV with the given type byte and raw payload.
    pub fn new(tlv_type: u8, payload: Vec<u8>) -> Self {
        Self { tlv_type, payload }
    }

    /// The unrecognized type byte.
    pub fn tlv_type(&self) -> u8 {
        self.tlv_type
    }

    /// The raw payload bytes.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Calculates the size on the wire of this `Unknown`, excluding the TLV preamble.
    pub fn wire_size(&self) -> usize {
        self.payload.len()
    }

    /// Construct an `Unknown` from wire bytes, consuming exactly `len` bytes of `src`.
    pub fn from_bytes(tlv_type: u8, src: &mut BytesMut, len: u8) -> Self {
        let payload = src[..len as usize].to_vec();
        src.advance(len as usize);
        Self { tlv_type, payload }
    }

    /// Encode this `Unknown` tlv as part of a packet.
    pub fn write_bytes(&self, dst: &mut BytesMut) {
        dst.put_slice(&self.payload);
    }
}

/// A babel TLV in a [`Packet`](super::Packet) body.
#[derive(Debug, Clone, PartialEq)]
pub enum Tlv {
    Pad1(Pad1),
    PadN(PadN),
    AckRequest(AckRequest),
    Ack(Ack),
    Hello(Hello),
    Ihu(Ihu),
    RouterId(RouterId),
    NextHop(NextHop),
    Update(Update),
    RouteRequest(RouteRequest),
    SeqNoRequest(SeqNoRequest),
    /// An unrecognized TLV, carried as raw bytes.
    Unknown(Unknown),
}

impl Tlv {
    /// The type byte identifying this TLV on the wire.
    pub fn tlv_type(&self) -> u8 {
        match self {
            Tlv::Pad1(_) => super::TLV_TYPE_PAD1,
            Tlv::PadN(_) => super::TLV_TYPE_PADN,
            Tlv::AckRequest(_) => super::TLV_TYPE_ACK_REQUEST,
            Tlv::Ack(_) => super::TLV_TYPE_ACK,
            Tlv::Hello(_) => super::TLV_TYPE_HELLO,
            Tlv::Ihu(_) => super::TLV_TYPE_IHU,
            Tlv::RouterId(_) => super::TLV_TYPE_ROUTER_ID,
            Tlv::NextHop(_) => super::TLV_TYPE_NEXT_HOP,
            Tlv::Update(_) => super::TLV_TYPE_UPDATE,
            Tlv::RouteRequest(_) => super::TLV_TYPE_ROUTE_REQUEST,
            Tlv::SeqNoRequest(_) => super::TLV_TYPE_SEQNO_REQUEST,
            Tlv::Unknown(unknown) => unknown.tlv_type(),
        }
    }

    /// Calculates the size on the wire of the body of this `Tlv`, excluding the 2 byte preamble.
    pub fn wire_size(&self) -> usize {
        match self {
            Tlv::Pad1(pad1) => pad1.wire_size(),
            Tlv::PadN(padn) => padn.wire_size(),
            Tlv::AckRequest(ack_request) => ack_request.wire_size(),
            Tlv::Ack(ack) => ack.wire_size(),
            Tlv::Hello(hello) => hello.wire_size(),
            Tlv::Ihu(ihu) => ihu.wire_size(),
            Tlv::RouterId(router_id) => router_id.wire_size(),
            Tlv::NextHop(next_hop) => next_hop.wire_size(),
            Tlv::Update(update) => update.wire_size(),
            Tlv::RouteRequest(route_request) => route_request.wire_size(),
            Tlv::SeqNoRequest(seqno_request) => seqno_request.wire_size(),
            Tlv::Unknown(unknown) => unknown.wire_size(),
        }
    }

    /// Encode the body of this `Tlv` as part of a packet.
    pub fn write_bytes(&self, dst: &mut BytesMut) {
        match self {
            Tlv::Pad1(pad1) => pad1.write_bytes(dst),
            Tlv::PadN(padn) => padn.write_bytes(dst),
            Tlv::AckRequest(ack_request) => ack_request.write_bytes(dst),
            Tlv::Ack(ack) => ack.write_bytes(dst),
            Tlv::Hello(hello) => hello.write_bytes(dst),
            Tlv::Ihu(ihu) => ihu.write_bytes(dst),
            Tlv::RouterId(router_id) => router_id.write_bytes(dst),
            Tlv::NextHop(next_hop) => next_hop.write_bytes(dst),
            Tlv::Update(update) => update.write_bytes(dst),
            Tlv::RouteRequest(route_request) => route_request.write_bytes(dst),
            Tlv::SeqNoRequest(seqno_request) => seqno_request.write_bytes(dst),
            Tlv::Unknown(unknown) => unknown.write_bytes(dst),
        }
    }
}

impl From<Pad1> for Tlv {
    fn from(pad1: Pad1) -> Self {
        Tlv::Pad1(pad1)
    }
}

impl From<PadN> for Tlv {
    fn from(padn: PadN) -> Self {
        Tlv::PadN(padn)
    }
}

impl From<AckRequest> for Tlv {
    fn from(ack_request: AckRequest) -> Self {
        Tlv::AckRequest(ack_request)
    }
}

impl From<Ack> for Tlv {
    fn from(ack: Ack) -> Self {
        Tlv::Ack(ack)
    }
}

impl From<Hello> for Tlv {
    fn from(hello: Hello) -> Self {
        Tlv::Hello(hello)
    }
}

impl From<Ihu> for Tlv {
    fn from(ihu: Ihu) -> Self {
        Tlv::Ihu(ihu)
    }
}

impl From<RouterId> for Tlv {
    fn from(router_id: RouterId) -> Self {
        Tlv::RouterId(router_id)
    }
}

impl From<NextHop> for Tlv {
    fn from(next_hop: NextHop) -> Self {
        Tlv::NextHop(next_hop)
    }
}

impl From<Update> for Tlv {
    fn from(update: Update) -> Self {
        Tlv::Update(update)
    }
}

impl From<RouteRequest> for Tlv {
    fn from(route_request: RouteRequest) -> Self {
        Tlv::RouteRequest(route_request)
    }
}

impl From<SeqNoRequest> for Tlv {
    fn from(seqno_request: SeqNoRequest) -> Self {
        Tlv::SeqNoRequest(seqno_request)
    }
}

impl From<Unknown> for Tlv {
    fn from(unknown: Unknown) -> Self {
        Tlv::Unknown(unknown)
    }
}
