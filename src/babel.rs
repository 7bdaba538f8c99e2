//! This module contains the wire format of the babel protocol: the packet header and the TLV
//! catalogue.
//!
//! We don't fully implement the babel spec, and items which are implemented might deviate to fit
//! our specific use case. For reference, the implementation is based on [this
//! RFC](https://datatracker.ietf.org/doc/html/rfc6126).

use core::fmt;
use std::io;

use bytes::{Buf, BufMut, Bytes, BytesMut};
use tokio_util::codec::{Decoder, Encoder};
use tracing::trace;

pub use self::{
    ack::Ack,
    ack_request::AckRequest,
    hello::Hello,
    ihu::Ihu,
    next_hop::NextHop,
    pad::{Pad1, PadN},
    route_request::RouteRequest,
    router_id::RouterId,
    seqno_request::SeqNoRequest,
    tlv::{Tlv, Unknown},
    update::Update,
};

mod ack;
mod ack_request;
mod hello;
mod ihu;
mod next_hop;
mod pad;
mod route_request;
mod router_id;
mod seqno_request;
mod tlv;
mod update;

/// Magic byte to identify a babel protocol packet.
const BABEL_MAGIC: u8 = 42;
/// The version of the protocol we are currently using.
const BABEL_VERSION: u8 = 2;

/// Size of a babel packet header on the wire.
const HEADER_WIRE_SIZE: usize = 4;
/// Size of the type + length preamble of every TLV on the wire.
const TLV_HEADER_WIRE_SIZE: usize = 2;

/// TLV type for the [`Pad1`] tlv.
const TLV_TYPE_PAD1: u8 = 0;
/// TLV type for the [`PadN`] tlv.
const TLV_TYPE_PADN: u8 = 1;
/// TLV type for the [`AckRequest`] tlv.
const TLV_TYPE_ACK_REQUEST: u8 = 2;
/// TLV type for the [`Ack`] tlv.
const TLV_TYPE_ACK: u8 = 3;
/// TLV type for the [`Hello`] tlv.
const TLV_TYPE_HELLO: u8 = 4;
/// TLV type for the [`Ihu`] tlv.
const TLV_TYPE_IHU: u8 = 5;
/// TLV type for the [`RouterId`] tlv.
const TLV_TYPE_ROUTER_ID: u8 = 6;
/// TLV type for the [`NextHop`] tlv.
const TLV_TYPE_NEXT_HOP: u8 = 7;
/// TLV type for the [`Update`] tlv.
const TLV_TYPE_UPDATE: u8 = 8;
/// TLV type for the [`RouteRequest`] tlv.
const TLV_TYPE_ROUTE_REQUEST: u8 = 9;
/// TLV type for the [`SeqNoRequest`] tlv.
const TLV_TYPE_SEQNO_REQUEST: u8 = 10;

/// A full babel packet: the fixed header followed by an ordered list of TLVs.
///
/// Order is preserved between encode and decode, it has protocol meaning (an ack request
/// typically precedes the data it gates).
#[derive(Debug, Clone, PartialEq)]
pub struct Packet {
    tlvs: Vec<Tlv>,
}

impl Packet {
    /// Create a new `Packet` carrying the given TLVs.
    pub fn new(tlvs: Vec<Tlv>) -> Self {
        Self { tlvs }
    }

    /// The TLVs carried in this `Packet`.
    pub fn tlvs(&self) -> &[Tlv] {
        &self.tlvs
    }

    /// Consume the `Packet`, returning the TLVs it carries.
    pub fn into_tlvs(self) -> Vec<Tlv> {
        self.tlvs
    }

    /// Decode a `Packet` from a byte buffer.
    ///
    /// The buffer must hold the full packet: 4 header bytes followed by at least `body_length`
    /// bytes. TLVs with an unrecognized type byte are skipped based on their length preamble and
    /// surface as [`Tlv::Unknown`], they never abort the parse.
    pub fn from_bytes(src: &[u8]) -> Result<Self, WireError> {
        if src.len() < HEADER_WIRE_SIZE {
            return Err(WireError::MalformedHeader);
        }
        if src[0] != BABEL_MAGIC || src[1] != BABEL_VERSION {
            trace!("Dropping babel packet with wrong magic or version");
            return Err(WireError::MalformedHeader);
        }
        let body_length = u16::from_be_bytes([src[2], src[3]]) as usize;
        if src.len() - HEADER_WIRE_SIZE < body_length {
            return Err(WireError::TruncatedBody {
                expected: body_length,
                available: src.len() - HEADER_WIRE_SIZE,
            });
        }

        let mut body = BytesMut::from(&src[HEADER_WIRE_SIZE..HEADER_WIRE_SIZE + body_length]);
        let mut tlvs = Vec::new();

        while body.has_remaining() {
            if body.remaining() < TLV_HEADER_WIRE_SIZE {
                return Err(WireError::TrailingBytes);
            }
            let tlv_type = body.get_u8();
            let len = body.get_u8();
            if body.remaining() < len as usize {
                return Err(WireError::TrailingBytes);
            }

            // A TLV decoder consumes exactly `len` bytes, also when it rejects the body.
            let tlv: Option<Tlv> = match tlv_type {
                TLV_TYPE_PAD1 => Pad1::from_bytes(&mut body, len).map(From::from),
                TLV_TYPE_PADN => Some(PadN::from_bytes(&mut body, len).into()),
                TLV_TYPE_ACK_REQUEST => AckRequest::from_bytes(&mut body, len).map(From::from),
                TLV_TYPE_ACK => Ack::from_bytes(&mut body, len).map(From::from),
                TLV_TYPE_HELLO => Hello::from_bytes(&mut body, len).map(From::from),
                TLV_TYPE_IHU => Ihu::from_bytes(&mut body, len).map(From::from),
                TLV_TYPE_ROUTER_ID => RouterId::from_bytes(&mut body, len).map(From::from),
                TLV_TYPE_NEXT_HOP => NextHop::from_bytes(&mut body, len).map(From::from),
                TLV_TYPE_UPDATE => Update::from_bytes(&mut body, len).map(From::from),
                TLV_TYPE_ROUTE_REQUEST => RouteRequest::from_bytes(&mut body, len).map(From::from),
                TLV_TYPE_SEQNO_REQUEST => SeqNoRequest::from_bytes(&mut body, len).map(From::from),
                _ => {
                    trace!(tlv_type, "Preserving unrecognized tlv");
                    Some(Unknown::from_bytes(tlv_type, &mut body, len).into())
                }
            };

            if let Some(tlv) = tlv {
                tlvs.push(tlv);
            }
        }

        Ok(Packet { tlvs })
    }

    /// Encode this `Packet` to wire bytes.
    ///
    /// Fails with [`WireError::PayloadTooLarge`] if a TLV payload does not fit the single length
    /// byte, or if the combined body overflows the 16 bit body length field.
    pub fn to_bytes(&self) -> Result<Bytes, WireError> {
        let mut body_length = 0usize;
        for tlv in &self.tlvs {
            let size = tlv.wire_size();
            if size > u8::MAX as usize {
                return Err(WireError::PayloadTooLarge { size });
            }
            body_length += TLV_HEADER_WIRE_SIZE + size;
        }
        if body_length > u16::MAX as usize {
            return Err(WireError::PayloadTooLarge { size: body_length });
        }

        let mut dst = BytesMut::with_capacity(HEADER_WIRE_SIZE + body_length);
        dst.put_u8(BABEL_MAGIC);
        dst.put_u8(BABEL_VERSION);
        dst.put_u16(body_length as u16);

        for tlv in &self.tlvs {
            dst.put_u8(tlv.tlv_type());
            dst.put_u8(tlv.wire_size() as u8);
            tlv.write_bytes(&mut dst);
        }

        Ok(dst.freeze())
    }
}

/// Errors which can occur when translating between wire bytes and [`Packet`] values.
///
/// All of these are local to a single packet, a failed decode never invalidates the decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    /// The buffer is too short for a packet header, or magic/version don't match.
    MalformedHeader,
    /// The header declares a longer body than there are bytes in the buffer.
    TruncatedBody { expected: usize, available: usize },
    /// A TLV length preamble points past the end of the packet body.
    TrailingBytes,
    /// A TLV payload does not fit the length field at encode time.
    PayloadTooLarge { size: usize },
}

impl fmt::Display for WireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireError::MalformedHeader => f.write_str("malformed packet header"),
            WireError::TruncatedBody {
                expected,
                available,
            } => write!(
                f,
                "packet body truncated, header declares {expected} bytes but only {available} are present"
            ),
            WireError::TrailingBytes => {
                f.write_str("tlv length points past the end of the packet body")
            }
            WireError::PayloadTooLarge { size } => {
                write!(f, "tlv payload of {size} bytes exceeds the length field")
            }
        }
    }
}

impl std::error::Error for WireError {}

/// A codec which can send and receive whole babel packets on a byte stream.
#[derive(Debug, Clone, Default)]
pub struct Codec {
    _private: (),
}

impl Codec {
    /// Create a new `Codec`.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Decoder for Codec {
    type Item = Packet;

    type Error = io::Error;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if src.remaining() < HEADER_WIRE_SIZE {
            trace!("Insufficient bytes to read a babel header");
            return Ok(None);
        }
        let body_length = u16::from_be_bytes([src[2], src[3]]) as usize;
        if src.remaining() < HEADER_WIRE_SIZE + body_length {
            trace!("Insufficient bytes to read a babel body");
            return Ok(None);
        }

        let frame = src.split_to(HEADER_WIRE_SIZE + body_length);
        Packet::from_bytes(&frame)
            .map(Some)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

impl Encoder<Packet> for Codec {
    type Error = io::Error;

    fn encode(&mut self, item: Packet, dst: &mut BytesMut) -> Result<(), Self::Error> {
        let frame = item
            .to_bytes()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        dst.extend_from_slice(&frame);
        Ok(())
    }
}
