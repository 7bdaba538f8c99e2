//! Per interface transmission pipeline.
//!
//! An [`Interface`] decouples TLV production from packet emission: callers enqueue TLVs through
//! [`Interface::submit`], and a background task periodically drains the queue into a single
//! packet which is handed to the [`Transport`]. The delay between drain attempts is drawn
//! randomly from a jitter window, so interfaces on the same node don't transmit in lockstep.
//! Inbound frames delivered by the transport are decoded and dispatched to a [`TlvListener`].

use core::fmt;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex,
};
use std::time::Duration;

use bytes::Bytes;
use rand::Rng;
use tokio::sync::Notify;
use tracing::{debug, error, trace};

use crate::babel::{Packet, Tlv};
use crate::transport::{FrameListener, TlvListener, Transport};

/// Default upper bound of the random delay between two drain attempts.
const DEFAULT_JITTER: Duration = Duration::from_secs(1);
/// Default capacity of the outbound TLV queue.
const DEFAULT_QUEUE_CAPACITY: usize = 64;

/// Tunables for an [`Interface`].
#[derive(Debug, Clone)]
pub struct InterfaceConfig {
    /// Upper bound of the jitter window. Every drain cycle sleeps a duration drawn uniformly
    /// from `[0, jitter]`.
    pub jitter: Duration,
    /// Capacity of the outbound queue. [`Interface::submit`] fails once this many TLVs are
    /// pending.
    pub queue_capacity: usize,
}

impl Default for InterfaceConfig {
    fn default() -> Self {
        Self {
            jitter: DEFAULT_JITTER,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }
}

/// Error returned by [`Interface::submit`] when the outbound queue is at capacity.
///
/// The submitter decides whether to retry, drop or escalate, the interface itself never
/// retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueFull;

impl fmt::Display for QueueFull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("outbound queue is at capacity")
    }
}

impl std::error::Error for QueueFull {}

/// A network interface participating in the protocol.
///
/// Cloning an `Interface` is cheap and yields a handle to the same underlying state.
#[derive(Clone)]
pub struct Interface {
    inner: Arc<InterfaceInner>,
}

struct InterfaceInner {
    /// Human readable label, only used in logs.
    name: String,
    config: InterfaceConfig,
    /// Outbound TLVs waiting for the next drain cycle. The lock is only held for push and
    /// removal, never across encode or send.
    queue: Mutex<Vec<Tlv>>,
    transport: Arc<dyn Transport>,
    listener: Arc<dyn TlvListener>,
    running: AtomicBool,
    /// Wakes the drain task out of its sleep when the interface is stopped.
    stop_notify: Notify,
}

impl Interface {
    /// Create a new `Interface` with the default [`InterfaceConfig`].
    ///
    /// The interface does not register itself with the transport, callers wire inbound delivery
    /// by adding the interface (or something invoking [`Interface::deliver`]) as a frame
    /// listener.
    pub fn new(
        name: impl Into<String>,
        transport: Arc<dyn Transport>,
        listener: Arc<dyn TlvListener>,
    ) -> Self {
        Self::with_config(name, transport, listener, InterfaceConfig::default())
    }

    /// Create a new `Interface` with the given [`InterfaceConfig`].
    pub fn with_config(
        name: impl Into<String>,
        transport: Arc<dyn Transport>,
        listener: Arc<dyn TlvListener>,
        config: InterfaceConfig,
    ) -> Self {
        Self {
            inner: Arc::new(InterfaceInner {
                name: name.into(),
                config,
                queue: Mutex::new(Vec::new()),
                transport,
                listener,
                running: AtomicBool::new(false),
                stop_notify: Notify::new(),
            }),
        }
    }

    /// The name of this `Interface`.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Whether the drain task of this `Interface` is currently running.
    pub fn running(&self) -> bool {
        self.inner.running.load(Ordering::Acquire)
    }

    /// Enqueue a TLV for the next outbound packet.
    ///
    /// This never blocks on the drain cadence or the transport. It fails with [`QueueFull`]
    /// when the bounded queue is saturated.
    pub fn submit(&self, tlv: Tlv) -> Result<(), QueueFull> {
        let mut queue = self.inner.queue.lock().unwrap();
        if queue.len() >= self.inner.config.queue_capacity {
            trace!(
                interface = self.inner.name.as_str(),
                pending = queue.len(),
                "Rejecting tlv, outbound queue full"
            );
            return Err(QueueFull);
        }
        queue.push(tlv);
        Ok(())
    }

    /// Start the background drain task. Calling this on a running `Interface` has no effect.
    ///
    /// # Panics
    ///
    /// This function will panic if called outside of the context of a tokio runtime.
    pub fn start(&self) {
        if self
            .inner
            .running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            // Already running.
            return;
        }

        let inner = self.inner.clone();
        tokio::spawn(async move {
            debug!(
                interface = inner.name.as_str(),
                "Interface transmission task started"
            );
            loop {
                let pause = rand::rng().random_range(Duration::ZERO..=inner.config.jitter);
                tokio::select! {
                    _ = tokio::time::sleep(pause) => {}
                    _ = inner.stop_notify.notified() => {}
                }
                if !inner.running.load(Ordering::Acquire) {
                    break;
                }

                // Hold the queue lock only for the removal, so submitters are never stalled by
                // encoding or a slow transport.
                let batch = {
                    let mut queue = inner.queue.lock().unwrap();
                    if queue.is_empty() {
                        continue;
                    }
                    std::mem::take(&mut *queue)
                };

                trace!(
                    interface = inner.name.as_str(),
                    tlvs = batch.len(),
                    "Draining outbound queue"
                );
                match Packet::new(batch).to_bytes() {
                    Ok(frame) => inner.transport.send(frame),
                    // The batch is dropped, the submitter of the offending TLV is long gone.
                    Err(e) => error!(
                        interface = inner.name.as_str(),
                        "Failed to encode outbound packet: {e}"
                    ),
                }
            }
            debug!(
                interface = inner.name.as_str(),
                "Interface transmission task stopped"
            );
        });
    }

    /// Stop the background drain task. Calling this on a stopped `Interface` has no effect.
    ///
    /// The task observes the stop at its next wake at the latest, so full cessation can lag by
    /// up to the configured jitter window. An in-flight send is not cancelled.
    pub fn stop(&self) {
        if self.inner.running.swap(false, Ordering::AcqRel) {
            self.inner.stop_notify.notify_one();
            debug!(
                interface = self.inner.name.as_str(),
                "Stopping interface transmission task"
            );
        }
    }

    /// Decode a frame received by the transport and dispatch the TLVs it carries to the
    /// listener.
    ///
    /// A frame which fails to decode is reported through
    /// [`TlvListener::on_decode_error`] and discarded, it never disables further reception.
    pub fn deliver(&self, frame: &[u8]) {
        trace!(
            interface = self.inner.name.as_str(),
            bytes = frame.len(),
            "Received frame"
        );
        match Packet::from_bytes(frame) {
            Ok(packet) => {
                for tlv in packet.into_tlvs() {
                    self.inner.listener.on_tlv(tlv);
                }
            }
            Err(e) => {
                debug!(
                    interface = self.inner.name.as_str(),
                    "Dropping malformed packet: {e}"
                );
                self.inner.listener.on_decode_error(e);
            }
        }
    }
}

impl FrameListener for Interface {
    fn received(&self, frame: Bytes) {
        self.deliver(&frame);
    }
}
