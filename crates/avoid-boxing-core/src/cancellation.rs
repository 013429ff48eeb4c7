//! Cooperative cancellation for analysis passes.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::{AnalysisError, AnalysisResult};

/// A shared, thread-safe cancellation flag.
///
/// Clones observe the same flag. The host sets it; loops inside the analyzer
/// poll it between items.
#[derive(Debug, Clone, Default)]
pub struct CancellationFlag {
    inner: Arc<AtomicBool>,
}

impl CancellationFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.inner.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.load(Ordering::Acquire)
    }

    /// `Err(Cancelled)` once the flag has been set.
    pub fn check(&self) -> AnalysisResult<()> {
        if self.is_cancelled() {
            Err(AnalysisError::Cancelled)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn starts_uncancelled() {
        let flag = CancellationFlag::new();
        assert!(!flag.is_cancelled());
        assert_eq!(flag.check(), Ok(()));
    }

    #[test]
    fn clones_share_state() {
        let flag = CancellationFlag::new();
        let other = flag.clone();

        thread::spawn(move || other.cancel()).join().unwrap();

        assert!(flag.is_cancelled());
        assert_eq!(flag.check(), Err(AnalysisError::Cancelled));
    }
}
