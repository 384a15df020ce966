use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a punch recorded by a worker.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    ClockIn,
    ClockOut,
    BreakStart,
    BreakEnd,
}

impl EventKind {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EventKind::ClockIn => "clock_in",
            EventKind::ClockOut => "clock_out",
            EventKind::BreakStart => "break_start",
            EventKind::BreakEnd => "break_end",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "clock_in" => Some(EventKind::ClockIn),
            "clock_out" => Some(EventKind::ClockOut),
            "break_start" => Some(EventKind::BreakStart),
            "break_end" => Some(EventKind::BreakEnd),
            _ => None,
        }
    }

    /// Lenient parser for CLI input: accepts `clock-in`, `IN`, `break_start`, ...
    pub fn from_cli_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "clock_in" | "in" => Some(EventKind::ClockIn),
            "clock_out" | "out" => Some(EventKind::ClockOut),
            "break_start" | "break" => Some(EventKind::BreakStart),
            "break_end" | "resume" => Some(EventKind::BreakEnd),
            _ => None,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_db_str())
    }
}
