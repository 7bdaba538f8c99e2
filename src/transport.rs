//! Transport abstraction under the [`Interface`](crate::interface::Interface) pipeline.
//!
//! A transport only moves opaque frames: encoded packets go out through [`Transport::send`], and
//! arriving bytes come back in through a registered [`FrameListener`]. A production transport
//! binds this to a network socket, the [`Loopback`] implementation here short circuits frames to
//! its listeners and is mainly useful for wiring nodes together in tests.

use std::sync::{Arc, Mutex};

use bytes::Bytes;
use tracing::trace;

use crate::babel::{Tlv, WireError};

/// Fire and forget frame delivery towards the network.
pub trait Transport: Send + Sync {
    /// Hand an encoded packet to the transport. Delivery is best effort, transport level
    /// failures belong to the transport's own error domain.
    fn send(&self, frame: Bytes);

    /// Register a listener to be invoked for every frame arriving on this transport.
    fn add_listener(&self, listener: Arc<dyn FrameListener>);
}

/// Callback invoked by a [`Transport`] when a frame arrives.
pub trait FrameListener: Send + Sync {
    /// Called with the raw bytes of a single received frame.
    fn received(&self, frame: Bytes);
}

/// Consumer of decoded TLVs, the seam towards the component owning route and neighbor state.
pub trait TlvListener: Send + Sync {
    /// Called for every TLV decoded from an inbound packet, including
    /// [`Unknown`](crate::babel::Unknown) ones.
    fn on_tlv(&self, tlv: Tlv);

    /// Called when an inbound packet can't be decoded. The packet is discarded, reception of
    /// further packets continues.
    fn on_decode_error(&self, error: WireError);
}

/// A transport which synchronously forwards every sent frame to all registered listeners.
#[derive(Default)]
pub struct Loopback {
    listeners: Mutex<Vec<Arc<dyn FrameListener>>>,
}

impl Loopback {
    /// Create a new `Loopback` without any listeners.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transport for Loopback {
    fn send(&self, frame: Bytes) {
        trace!(bytes = frame.len(), "Forwarding frame to loopback listeners");
        for listener in self.listeners.lock().unwrap().iter() {
            listener.received(frame.clone());
        }
    }

    fn add_listener(&self, listener: Arc<dyn FrameListener>) {
        self.listeners.lock().unwrap().push(listener);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use bytes::Bytes;

    use super::{FrameListener, Loopback, Transport};

    #[derive(Default)]
    struct FrameRecorder {
        frames: Mutex<Vec<Bytes>>,
    }

    impl FrameListener for FrameRecorder {
        fn received(&self, frame: Bytes) {
            self.frames.lock().unwrap().push(frame);
        }
    }

    #[test]
    fn loopback_forwards_to_all_listeners() {
        let loopback = Loopback::new();
        let first = Arc::new(FrameRecorder::default());
        let second = Arc::new(FrameRecorder::default());
        loopback.add_listener(first.clone());
        loopback.add_listener(second.clone());

        loopback.send(Bytes::from_static(&[1, 2, 3]));

        assert_eq!(&first.frames.lock().unwrap()[..], [&[1u8, 2, 3][..]]);
        assert_eq!(&second.frames.lock().unwrap()[..], [&[1u8, 2, 3][..]]);
    }

    #[test]
    fn loopback_without_listeners_discards() {
        let loopback = Loopback::new();
        // Must not panic or block.
        loopback.send(Bytes::from_static(&[9]));
    }
}
