use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Writable pause/cancel switch held by the external controller.
///
/// Both flags are idempotent: setting an already-set flag is a no-op. The
/// worker never writes them; it only polls a [`ControlHandle`].
#[derive(Debug, Clone, Default)]
pub struct SolverControl {
    pause: Arc<AtomicBool>,
    cancel: Arc<AtomicBool>,
}

impl SolverControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only handle for the worker to poll.
    pub fn handle(&self) -> ControlHandle {
        ControlHandle {
            pause: Arc::clone(&self.pause),
            cancel: Arc::clone(&self.cancel),
        }
    }

    pub fn pause(&self) {
        self.pause.store(true, Ordering::Relaxed);
    }

    pub fn resume(&self) {
        self.pause.store(false, Ordering::Relaxed);
    }

    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }
}

/// Polling side of [`SolverControl`], cloned into the worker.
#[derive(Debug, Clone)]
pub struct ControlHandle {
    pause: Arc<AtomicBool>,
    cancel: Arc<AtomicBool>,
}

impl ControlHandle {
    /// A handle whose flags can never be set, for runs without an external
    /// controller.
    pub fn unmanaged() -> Self {
        SolverControl::new().handle()
    }

    pub fn is_paused(&self) -> bool {
        self.pause.load(Ordering::Relaxed)
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.load(Ordering::Relaxed)
    }
}
