//! Cooperative cancellation for in-flight UI futures.
//!
//! Nothing aborts a request that is already on the wire; the guard only
//! keeps a late completion from applying state to an unmounted component.
//! Components cancel their guard on cleanup and check it after every await.

use std::cell::Cell;
use std::rc::Rc;

/// Shared cancellation flag. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelGuard {
    cancelled: Rc<Cell<bool>>,
}

impl CancelGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the guard cancelled. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_active() {
        assert!(!CancelGuard::new().is_cancelled());
    }

    #[test]
    fn clones_share_the_flag() {
        let guard = CancelGuard::new();
        let handle = guard.clone();

        handle.cancel();

        assert!(guard.is_cancelled());
        assert!(handle.is_cancelled());
    }

    #[test]
    fn cancel_is_idempotent() {
        let guard = CancelGuard::new();
        guard.cancel();
        guard.cancel();
        assert!(guard.is_cancelled());
    }
}
