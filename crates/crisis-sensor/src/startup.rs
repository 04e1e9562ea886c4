//! Host startup gate.
//!
//! A sensor activated while its host is still starting must not refresh until
//! the host reports that startup is complete. The gate is a readiness flag
//! plus a list of one-shot notifications registered before the flag flipped.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::oneshot;
use tracing::debug;

#[derive(Debug, Default)]
struct GateInner {
    started: AtomicBool,
    waiters: Mutex<Vec<oneshot::Sender<()>>>,
}

/// Readiness flag shared between a host and the sensors it activates.
#[derive(Debug, Clone, Default)]
pub struct StartupGate {
    inner: Arc<GateInner>,
}

impl StartupGate {
    /// A gate whose host is still starting.
    pub fn new() -> Self {
        Self::default()
    }

    /// A gate whose host has already finished starting.
    pub fn started() -> Self {
        let gate = Self::new();
        gate.mark_started();
        gate
    }

    pub fn is_started(&self) -> bool {
        self.inner.started.load(Ordering::SeqCst)
    }

    /// Flip the flag and notify every registered waiter. Idempotent.
    pub fn mark_started(&self) {
        let mut waiters = self
            .inner
            .waiters
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if self.inner.started.swap(true, Ordering::SeqCst) {
            return;
        }

        debug!(waiters = waiters.len(), "Host startup complete");
        for waiter in waiters.drain(..) {
            // A waiter whose receiver was dropped no longer cares.
            let _ = waiter.send(());
        }
    }

    /// Register for the startup notification.
    ///
    /// Returns `None` when the host has already started, so the caller can
    /// proceed at once; otherwise a receiver that fires exactly once.
    pub fn on_started(&self) -> Option<oneshot::Receiver<()>> {
        let mut waiters = self
            .inner
            .waiters
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if self.inner.started.load(Ordering::SeqCst) {
            return None;
        }

        let (tx, rx) = oneshot::channel();
        waiters.push(tx);
        Some(rx)
    }
}
