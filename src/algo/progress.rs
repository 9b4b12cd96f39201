//! Progress reporting for multi-level refinement.
//!
//! A simple callback mechanism the pipeline uses to report per-level
//! progress to callers (e.g. the CLI).

/// A progress callback that receives updates during refinement.
///
/// The callback receives:
/// - `current`: Current step (0-based)
/// - `total`: Total number of steps
/// - `message`: Description of the current operation
pub struct Progress {
    callback: Box<dyn Fn(usize, usize, &str) + Send + Sync>,
}

impl Progress {
    /// Create a new progress reporter with the given callback.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(usize, usize, &str) + Send + Sync + 'static,
    {
        Self {
            callback: Box::new(callback),
        }
    }

    /// Report progress.
    #[inline]
    pub fn report(&self, current: usize, total: usize, message: &str) {
        (self.callback)(current, total, message);
    }

    /// Create a no-op progress reporter that discards all updates.
    pub fn none() -> Self {
        Self {
            callback: Box::new(|_, _, _| {}),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_reports_are_delivered() {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = count.clone();
        let progress = Progress::new(move |current, total, _| {
            assert!(current <= total);
            seen.fetch_add(1, Ordering::Relaxed);
        });

        progress.report(0, 2, "step");
        progress.report(2, 2, "done");
        assert_eq!(count.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn test_none_is_silent() {
        Progress::none().report(1, 1, "ignored");
    }
}
