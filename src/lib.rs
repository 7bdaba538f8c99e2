//! Wire layer of a babel-like distance vector routing protocol.
//!
//! This crate covers two things: the binary packet format (a header followed by a sequence of
//! TLVs, see [`babel`]) and the per interface pipeline which batches outbound TLVs into
//! jitter-scheduled packets and decodes inbound ones (see [`interface`]). Everything downstream
//! of decoded TLVs, neighbor state machines, metric computation and route selection, lives
//! behind the [`TlvListener`] seam and is not part of this crate.

pub mod babel;
pub mod interface;
mod metric;
mod sequence_number;
pub mod transport;

pub use babel::{Packet, Tlv, WireError};
pub use interface::{Interface, InterfaceConfig, QueueFull};
pub use metric::Metric;
pub use sequence_number::SeqNo;
pub use transport::{FrameListener, Loopback, TlvListener, Transport};
