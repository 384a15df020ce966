use super::event_kind::EventKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single punch in the append-only clock log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClockEvent {
    pub user_id: String,
    pub location_id: String,
    pub org_id: String,
    pub kind: EventKind,
    pub occurred_at: DateTime<Utc>, // ⇔ clock_events.occurred_at (TEXT, RFC 3339 UTC)
}

impl ClockEvent {
    pub fn new(
        user_id: impl Into<String>,
        location_id: impl Into<String>,
        org_id: impl Into<String>,
        kind: EventKind,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            location_id: location_id.into(),
            org_id: org_id.into(),
            kind,
            occurred_at,
        }
    }

    /// True when both events belong to the same worker at the same location.
    pub fn same_worker(&self, user_id: &str, location_id: &str) -> bool {
        self.user_id == user_id && self.location_id == location_id
    }

    pub fn occurred_at_str(&self) -> String {
        crate::core::tz::format_instant(self.occurred_at)
    }
}
