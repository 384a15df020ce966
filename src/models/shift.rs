use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ShiftStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl ShiftStatus {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            ShiftStatus::Scheduled => "scheduled",
            ShiftStatus::InProgress => "in_progress",
            ShiftStatus::Completed => "completed",
            ShiftStatus::Cancelled => "cancelled",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "scheduled" => Some(ShiftStatus::Scheduled),
            "in_progress" => Some(ShiftStatus::InProgress),
            "completed" => Some(ShiftStatus::Completed),
            "cancelled" => Some(ShiftStatus::Cancelled),
            _ => None,
        }
    }
}

/// A planned work interval, with the actual figures once punches exist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Shift {
    pub id: String,
    pub org_id: String,
    pub location_id: String,
    pub user_id: String,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub break_minutes: i64,
    pub status: ShiftStatus,
    pub actual_start_at: Option<DateTime<Utc>>,
    pub actual_end_at: Option<DateTime<Utc>>,
    pub actual_break_minutes: Option<i64>,
    /// Opened by a clock-in with nothing scheduled; carries no planned time.
    #[serde(default)]
    pub unplanned: bool,
}

impl Shift {
    /// Planned shift with no actual figures yet.
    pub fn planned(
        id: impl Into<String>,
        org_id: impl Into<String>,
        location_id: impl Into<String>,
        user_id: impl Into<String>,
        start_at: DateTime<Utc>,
        end_at: DateTime<Utc>,
        break_minutes: i64,
    ) -> Self {
        Self {
            id: id.into(),
            org_id: org_id.into(),
            location_id: location_id.into(),
            user_id: user_id.into(),
            start_at,
            end_at,
            break_minutes,
            status: ShiftStatus::Scheduled,
            actual_start_at: None,
            actual_end_at: None,
            actual_break_minutes: None,
            unplanned: false,
        }
    }

    /// In-progress shift opened by a clock-in at `at` with nothing scheduled.
    pub fn unplanned(
        org_id: impl Into<String>,
        location_id: impl Into<String>,
        user_id: impl Into<String>,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            status: ShiftStatus::InProgress,
            actual_start_at: Some(at),
            unplanned: true,
            ..Self::planned("", org_id, location_id, user_id, at, at, 0)
        }
    }

    /// Planned net minutes: duration minus the planned break, 0 when unplanned.
    pub fn planned_minutes(&self) -> i64 {
        if self.unplanned {
            return 0;
        }
        (self.end_at - self.start_at).num_minutes() - self.break_minutes
    }

    /// True when the shift intersects `[start, end)`.
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        self.start_at < end && self.end_at > start
    }
}
