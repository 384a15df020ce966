//! Punch-sequence validation and the double-tap guard.
//!
//! A worker moves `not_started → clocked_in → (on_break ⇄ clocked_in) → clocked_out`.
//! Validation never fails with an error: a rejected punch is a value the
//! caller turns into a message, and rejecting has no side effects.

use crate::models::clock_event::ClockEvent;
use crate::models::event_kind::EventKind;
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use std::fmt;

pub const DEFAULT_DOUBLE_PUNCH_SECS: i64 = 10;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PunchRejection {
    AlreadyClockedIn,
    NoActiveShift,
    MustEndBreakFirst,
    NotClockedIn,
    AlreadyOnBreak,
    NotOnBreak,
}

impl PunchRejection {
    pub fn message(&self) -> &'static str {
        match self {
            PunchRejection::AlreadyClockedIn => "already clocked in",
            PunchRejection::NoActiveShift => "no active shift",
            PunchRejection::MustEndBreakFirst => "must end break first",
            PunchRejection::NotClockedIn => "not clocked in",
            PunchRejection::AlreadyOnBreak => "already on break",
            PunchRejection::NotOnBreak => "not on break",
        }
    }
}

impl fmt::Display for PunchRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PunchValidation {
    pub valid: bool,
    pub error: Option<PunchRejection>,
}

impl PunchValidation {
    pub fn ok() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    pub fn rejected(reason: PunchRejection) -> Self {
        Self {
            valid: false,
            error: Some(reason),
        }
    }
}

/// What the caller knows about the worker right now.
#[derive(Debug, Clone, Copy, Default)]
pub struct PunchState {
    /// A shift is `in_progress` for this user/location.
    pub shift_in_progress: bool,
    /// Kind of the most recent punch of the day, if any.
    pub last_kind: Option<EventKind>,
}

pub fn validate_punch(requested: EventKind, state: PunchState) -> PunchValidation {
    let on_break = state.last_kind == Some(EventKind::BreakStart);

    let rejection = match requested {
        EventKind::ClockIn if state.shift_in_progress => Some(PunchRejection::AlreadyClockedIn),
        EventKind::ClockIn => None,
        EventKind::ClockOut if !state.shift_in_progress => Some(PunchRejection::NoActiveShift),
        EventKind::ClockOut if on_break => Some(PunchRejection::MustEndBreakFirst),
        EventKind::ClockOut => None,
        EventKind::BreakStart if !state.shift_in_progress => Some(PunchRejection::NotClockedIn),
        EventKind::BreakStart if on_break => Some(PunchRejection::AlreadyOnBreak),
        EventKind::BreakStart => None,
        EventKind::BreakEnd if !on_break => Some(PunchRejection::NotOnBreak),
        EventKind::BreakEnd => None,
    };

    match rejection {
        Some(reason) => PunchValidation::rejected(reason),
        None => PunchValidation::ok(),
    }
}

/// True when `last` is the same punch repeated within `threshold`, i.e. an
/// accidental double submission that should be swallowed.
pub fn is_double_punch(
    last: Option<&ClockEvent>,
    user_id: &str,
    location_id: &str,
    kind: EventKind,
    now: DateTime<Utc>,
    threshold: Duration,
) -> bool {
    let Some(last) = last else {
        return false;
    };
    if !last.same_worker(user_id, location_id) || last.kind != kind {
        return false;
    }
    let elapsed = now - last.occurred_at;
    elapsed >= Duration::zero() && elapsed < threshold
}
