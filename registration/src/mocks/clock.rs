//! Fixed clock for deterministic timestamps.

use chrono::{DateTime, TimeZone, Utc};
use fest_core::environment::Clock;

/// Clock that always returns the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    /// The instant returned by `now()`
    pub time: DateTime<Utc>,
}

impl FixedClock {
    /// Create a clock frozen at `time`.
    #[must_use]
    pub const fn new(time: DateTime<Utc>) -> Self {
        Self { time }
    }
}

impl Default for FixedClock {
    /// 2026-02-03 09:34:05 UTC (15:04:05 in India).
    fn default() -> Self {
        Self::new(
            Utc.with_ymd_and_hms(2026, 2, 3, 9, 34, 5)
                .single()
                .unwrap_or_default(),
        )
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.time
    }
}
