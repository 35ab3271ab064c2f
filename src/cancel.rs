use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};


/// Shared flag used to abort a running search
/// Clones share the same flag, so one can be handed to another thread
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {

    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation - searches notice it on their next loop iteration
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}
