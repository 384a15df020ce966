use super::shift::Shift;
use chrono::NaiveDate;
use serde::Serialize;

/// Worked minutes of one local calendar day. Recomputed on demand.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DailyHours {
    pub date: NaiveDate,
    pub total_minutes: i64,
    pub shifts: Vec<Shift>,
}

impl DailyHours {
    pub fn hours(&self) -> f64 {
        self.total_minutes as f64 / 60.0
    }
}
