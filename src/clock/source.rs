//! Monotonic time sources

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Process-wide reference point for [`SystemTimeSource`]
static EPOCH: Lazy<Instant> = Lazy::new(Instant::now);

/// Monotonic clock measured from an arbitrary fixed origin
pub trait TimeSource {
    fn now(&self) -> Duration;
}

/// Wall time from [`Instant`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    #[inline]
    fn now(&self) -> Duration {
        EPOCH.elapsed()
    }
}

/// Hand-driven clock; clones share the same time
#[derive(Debug, Clone, Default)]
pub struct ManualTimeSource {
    now: Arc<Mutex<Duration>>,
}

impl ManualTimeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        *self.now.lock() += by;
    }

    pub fn set(&self, to: Duration) {
        *self.now.lock() = to;
    }
}

impl TimeSource for ManualTimeSource {
    #[inline]
    fn now(&self) -> Duration {
        *self.now.lock()
    }
}
