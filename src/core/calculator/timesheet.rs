//! Period totals: regular, overtime, break, planned and variance minutes.

use crate::core::calculator::overtime::OvertimePolicy;
use crate::core::tz::Normalizer;
use crate::models::clock_event::ClockEvent;
use crate::models::event_kind::EventKind;
use crate::models::period::Period;
use crate::models::shift::{Shift, ShiftStatus};
use crate::models::timesheet::TimesheetTotals;
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::BTreeSet;

/// Gross and break minutes from the punch stream.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WorkedTime {
    pub gross_minutes: i64,
    pub break_minutes: i64,
    pub days_worked: i64,
}

impl WorkedTime {
    pub fn net_minutes(&self) -> i64 {
        self.gross_minutes - self.break_minutes
    }
}

/// Walk the punches in `period`, clipping anything still open at its end.
pub fn compute_worked_time(
    events: &[ClockEvent],
    period: &Period,
    normalizer: &Normalizer,
) -> WorkedTime {
    let mut gross = 0;
    let mut breaks = 0;
    let mut days: BTreeSet<NaiveDate> = BTreeSet::new();
    let mut open_in: Option<DateTime<Utc>> = None;
    let mut open_break: Option<DateTime<Utc>> = None;

    for ev in events.iter().filter(|e| period.contains(e.occurred_at)) {
        match ev.kind {
            EventKind::ClockIn => {
                days.insert(normalizer.local_date(ev.occurred_at));
                open_in = Some(ev.occurred_at);
            }
            EventKind::ClockOut => {
                if let Some(start) = open_in.take() {
                    gross += (ev.occurred_at - start).num_minutes();
                }
            }
            EventKind::BreakStart => open_break = Some(ev.occurred_at),
            EventKind::BreakEnd => {
                if let Some(start) = open_break.take() {
                    breaks += (ev.occurred_at - start).num_minutes();
                }
            }
        }
    }

    if let Some(start) = open_in {
        gross += (period.end - start).num_minutes();
    }
    if let Some(start) = open_break {
        breaks += (period.end - start).num_minutes();
    }

    WorkedTime {
        gross_minutes: gross,
        break_minutes: breaks,
        days_worked: days.len() as i64,
    }
}

/// Net planned minutes of every non-cancelled shift overlapping the period.
pub fn compute_planned_minutes(shifts: &[Shift], period: &Period) -> i64 {
    shifts
        .iter()
        .filter(|s| s.status != ShiftStatus::Cancelled)
        .filter(|s| s.overlaps(period.start, period.end))
        .map(Shift::planned_minutes)
        .sum()
}

pub fn calculate_timesheet(
    events: &[ClockEvent],
    shifts: &[Shift],
    period: &Period,
    normalizer: &Normalizer,
    overtime: &dyn OvertimePolicy,
) -> TimesheetTotals {
    let worked = compute_worked_time(events, period, normalizer);
    let split = overtime.compute_overtime(worked.net_minutes(), period);
    let planned = compute_planned_minutes(shifts, period);

    TimesheetTotals {
        regular_minutes: split.regular,
        overtime_minutes: split.overtime,
        break_minutes: worked.break_minutes,
        planned_minutes: planned,
        variance_minutes: split.regular + split.overtime - planned,
        days_worked: worked.days_worked,
    }
}
