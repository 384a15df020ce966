use chrono::{DateTime, Utc};
use serde::Serialize;

/// Half-open interval `[start, end)` of UTC instants.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Period {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Period {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant < self.end
    }

    /// Length in days, rounded up to whole days. Empty or inverted periods yield 0.
    pub fn length_days(&self) -> i64 {
        let secs = (self.end - self.start).num_seconds();
        if secs <= 0 {
            return 0;
        }
        (secs + 86_399) / 86_400
    }

    /// Number of started weeks covered by the period.
    pub fn length_weeks(&self) -> i64 {
        (self.length_days() + 6) / 7
    }
}
