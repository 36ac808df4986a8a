use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Per-client authentication context.
///
/// Carries the "a sign-in flow is running" marker that keeps the auth-state
/// observer from racing the flow. Clones share the marker.
#[derive(Debug, Clone, Default)]
pub struct AuthSession {
    in_progress: Arc<AtomicBool>,
}

impl AuthSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the session for one flow. `None` if another flow holds it.
    pub fn try_begin(&self) -> Option<AuthFlowGuard> {
        self.in_progress
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| AuthFlowGuard {
                in_progress: Arc::clone(&self.in_progress),
            })
    }

    pub fn is_busy(&self) -> bool {
        self.in_progress.load(Ordering::Acquire)
    }
}

/// Held for the duration of a flow; the marker is cleared on drop.
#[derive(Debug)]
pub struct AuthFlowGuard {
    in_progress: Arc<AtomicBool>,
}

impl Drop for AuthFlowGuard {
    fn drop(&mut self) {
        self.in_progress.store(false, Ordering::Release);
    }
}
