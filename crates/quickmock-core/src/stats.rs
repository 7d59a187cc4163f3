//! Request counters shared between the dispatcher and the console header.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct RequestStats {
    total: AtomicU64,
    unmatched: AtomicU64,
}

impl RequestStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one dispatched request.
    pub fn record(&self, matched: bool) {
        self.total.fetch_add(1, Ordering::Relaxed);
        if !matched {
            self.unmatched.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn total(&self) -> u64 {
        self.total.load(Ordering::Relaxed)
    }

    pub fn unmatched(&self) -> u64 {
        self.unmatched.load(Ordering::Relaxed)
    }
}
