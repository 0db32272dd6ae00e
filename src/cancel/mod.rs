//! Entry-time cancellation
//!
//! Generation is a short blocking run, so cancellation is only observed once,
//! before any work starts. Ctrl-C sets the flag; a second Ctrl-C while
//! the flag is already set exits the process.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Exit code for a run cancelled by the user
pub const EXIT_CODE_CANCELLED: i32 = 130;

/// Shared cancellation flag
#[derive(Debug, Clone, Default)]
pub struct CancelFlag {
    cancelled: Arc<AtomicBool>,
}

impl CancelFlag {
    /// Create a flag that is not cancelled
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Check if cancellation has been requested
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Install a Ctrl-C handler that sets this flag.
    ///
    /// Must be called at most once per process.
    pub fn install_ctrlc(&self) -> Result<(), ctrlc::Error> {
        let flag = self.clone();
        ctrlc::set_handler(move || {
            if flag.is_cancelled() {
                std::process::exit(EXIT_CODE_CANCELLED);
            }
            tracing::warn!("interrupt received, cancelling");
            flag.cancel();
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initially_not_cancelled() {
        assert!(!CancelFlag::new().is_cancelled());
    }

    #[test]
    fn test_cancel_visible_through_clones() {
        let flag = CancelFlag::new();
        let other = flag.clone();
        other.cancel();
        assert!(flag.is_cancelled());
    }
}
