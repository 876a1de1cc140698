//! Clock port - 時刻の抽象化
//!
//! Cooldown expiry is the only place the engine reads time, and tests need
//! to move time by hand, so the clock is a trait instead of `Utc::now()`
//! calls scattered through the code.

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};

/// Provides the current time.
///
/// # テスト容易性
/// - Production code uses [`SystemClock`].
/// - Tests use [`FixedClock`] and advance it explicitly.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time (production).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Epoch milliseconds for 2024-01-01 12:00:00 UTC.
const DEFAULT_START_MILLIS: i64 = 1_704_110_400_000;

/// Manually driven clock for tests.
///
/// Stores epoch milliseconds in an atomic so clones observe the same time
/// and `advance` needs no locking.
#[derive(Debug, Clone)]
pub struct FixedClock {
    millis: Arc<AtomicI64>,
}

impl FixedClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            millis: Arc::new(AtomicI64::new(start.timestamp_millis())),
        }
    }

    /// A fixed but arbitrary starting point (2024-01-01 12:00:00 UTC).
    pub fn default_start() -> Self {
        Self {
            millis: Arc::new(AtomicI64::new(DEFAULT_START_MILLIS)),
        }
    }

    pub fn advance(&self, duration: std::time::Duration) {
        self.millis
            .fetch_add(duration.as_millis() as i64, Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        let ms = self.millis.load(Ordering::SeqCst);
        DateTime::from_timestamp_millis(ms).unwrap_or_else(Utc::now)
    }
}
