use serde::Serialize;
use tokio::sync::mpsc;

/// Per-generation progress report pushed by the GA worker.
///
/// Events arrive in strictly increasing generation order and carry the best
/// individual observed so far. The stream ends when the sender side is
/// dropped; there is no separate terminal marker.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressEvent {
    pub generation: usize,
    pub routes: Vec<Vec<usize>>,
    pub best_distance: f64,
}

pub type ProgressSender = mpsc::UnboundedSender<ProgressEvent>;
pub type ProgressReceiver = mpsc::UnboundedReceiver<ProgressEvent>;

/// Creates the channel connecting the GA worker to a progress consumer.
pub fn progress_channel() -> (ProgressSender, ProgressReceiver) {
    mpsc::unbounded_channel()
}
