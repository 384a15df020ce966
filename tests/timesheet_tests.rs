mod common;
use common::{ev, period, shift};
use shiftguard::core::calculator::overtime::{
    LinearWeeklyOvertime, OvertimePolicy, OvertimeSplit,
};
use shiftguard::core::calculator::timesheet::{calculate_timesheet, compute_worked_time};
use shiftguard::core::tz::Normalizer;
use shiftguard::models::event_kind::EventKind::*;
use shiftguard::models::period::Period;
use shiftguard::models::shift::{Shift, ShiftStatus};

/// Monday 2025-01-13, local Paris day.
fn monday() -> Period {
    period("2025-01-12T23:00:00Z", "2025-01-13T23:00:00Z")
}

#[test]
fn test_single_day_with_lunch_break() {
    // 09:00 → 17:00 local, break 12:00 → 12:30
    let events = vec![
        ev(ClockIn, "2025-01-13T08:00:00Z"),
        ev(BreakStart, "2025-01-13T11:00:00Z"),
        ev(BreakEnd, "2025-01-13T11:30:00Z"),
        ev(ClockOut, "2025-01-13T16:00:00Z"),
    ];
    let n = Normalizer::default();

    let worked = compute_worked_time(&events, &monday(), &n);
    assert_eq!(worked.gross_minutes, 480);
    assert_eq!(worked.break_minutes, 30);

    let totals = calculate_timesheet(
        &events,
        &[],
        &monday(),
        &n,
        &LinearWeeklyOvertime::default(),
    );
    assert_eq!(totals.break_minutes, 30);
    assert_eq!(totals.regular_minutes, 450);
    assert_eq!(totals.overtime_minutes, 0);
    assert_eq!(totals.days_worked, 1);
}

#[test]
fn test_worked_equals_pair_durations_minus_breaks() {
    let events = vec![
        ev(ClockIn, "2025-01-13T07:00:00Z"),
        ev(BreakStart, "2025-01-13T09:00:00Z"),
        ev(BreakEnd, "2025-01-13T09:15:00Z"),
        ev(ClockOut, "2025-01-13T10:00:00Z"),
        ev(ClockIn, "2025-01-13T14:00:00Z"),
        ev(ClockOut, "2025-01-13T18:20:00Z"),
    ];
    let totals = calculate_timesheet(
        &events,
        &[],
        &monday(),
        &Normalizer::default(),
        &LinearWeeklyOvertime::default(),
    );

    let pairs = 180 + 260;
    assert_eq!(totals.worked_minutes(), pairs - 15);
}

#[test]
fn test_overtime_above_weekly_allowance() {
    // Mon..Fri, 9h a day = 45h in a 7-day period
    let mut events = Vec::new();
    for d in 13..=17 {
        events.push(ev(ClockIn, &format!("2025-01-{d}T07:00:00Z")));
        events.push(ev(ClockOut, &format!("2025-01-{d}T16:00:00Z")));
    }
    let week = period("2025-01-12T23:00:00Z", "2025-01-19T23:00:00Z");

    let totals = calculate_timesheet(
        &events,
        &[],
        &week,
        &Normalizer::default(),
        &LinearWeeklyOvertime::default(),
    );

    assert_eq!(totals.regular_minutes, 40 * 60);
    assert_eq!(totals.overtime_minutes, 5 * 60);
    assert_eq!(totals.days_worked, 5);
}

#[test]
fn test_allowance_scales_with_started_weeks() {
    let eight_days = period("2025-01-13T00:00:00Z", "2025-01-21T00:00:00Z");
    let policy = LinearWeeklyOvertime::default();
    assert_eq!(policy.allowance_minutes(&eight_days), 2 * 40 * 60);

    let split = policy.compute_overtime(81 * 60, &eight_days);
    assert_eq!(split.regular, 80 * 60);
    assert_eq!(split.overtime, 60);
}

#[test]
fn test_open_clock_in_and_break_are_clipped_to_period_end() {
    let events = vec![
        ev(ClockIn, "2025-01-13T20:00:00Z"),
        ev(BreakStart, "2025-01-13T22:30:00Z"),
    ];
    let totals = calculate_timesheet(
        &events,
        &[],
        &monday(),
        &Normalizer::default(),
        &LinearWeeklyOvertime::default(),
    );

    assert_eq!(totals.break_minutes, 30);
    assert_eq!(totals.regular_minutes, 180 - 30);
}

#[test]
fn test_planned_minutes_and_variance() {
    let events = vec![
        ev(ClockIn, "2025-01-13T08:00:00Z"),
        ev(ClockOut, "2025-01-13T15:00:00Z"),
    ];
    let mut cancelled = shift("s3", "2025-01-13T17:00:00Z", "2025-01-13T20:00:00Z", 0);
    cancelled.status = ShiftStatus::Cancelled;
    let shifts = vec![
        shift("s1", "2025-01-13T08:00:00Z", "2025-01-13T16:00:00Z", 30),
        shift("s2", "2025-01-15T08:00:00Z", "2025-01-15T16:00:00Z", 30),
        cancelled,
    ];

    let totals = calculate_timesheet(
        &events,
        &shifts,
        &monday(),
        &Normalizer::default(),
        &LinearWeeklyOvertime::default(),
    );

    assert_eq!(totals.planned_minutes, 450);
    assert_eq!(totals.regular_minutes, 420);
    assert_eq!(totals.variance_minutes, -30);
}

#[test]
fn test_clock_out_without_clock_in_yields_zero() {
    let events = vec![ev(ClockOut, "2025-01-13T16:00:00Z")];
    let totals = calculate_timesheet(
        &events,
        &[],
        &monday(),
        &Normalizer::default(),
        &LinearWeeklyOvertime::default(),
    );
    assert_eq!(totals.worked_minutes(), 0);
    assert_eq!(totals.days_worked, 0);
}

struct DailyEightHours;

impl OvertimePolicy for DailyEightHours {
    fn compute_overtime(&self, worked_minutes: i64, period: &Period) -> OvertimeSplit {
        let allowance = 8 * 60 * period.length_days();
        let overtime = (worked_minutes - allowance).max(0);
        OvertimeSplit {
            regular: worked_minutes - overtime,
            overtime,
        }
    }
}

#[test]
fn test_custom_overtime_policy_is_pluggable() {
    let events = vec![
        ev(ClockIn, "2025-01-13T07:00:00Z"),
        ev(ClockOut, "2025-01-13T17:00:00Z"),
    ];
    let totals = calculate_timesheet(
        &events,
        &[],
        &monday(),
        &Normalizer::default(),
        &DailyEightHours,
    );
    assert_eq!(totals.regular_minutes, 480);
    assert_eq!(totals.overtime_minutes, 120);
}

#[test]
fn test_unplanned_shift_adds_no_planned_minutes() {
    let events = vec![
        ev(ClockIn, "2025-01-13T08:00:00Z"),
        ev(ClockOut, "2025-01-13T16:00:00Z"),
    ];
    let mut unplanned = Shift::unplanned(
        common::ORG,
        common::LOCATION,
        common::USER,
        common::at("2025-01-13T08:00:00Z"),
    );
    unplanned.end_at = common::at("2025-01-13T16:00:00Z");
    unplanned.status = ShiftStatus::Completed;
    assert_eq!(unplanned.planned_minutes(), 0);

    let totals = calculate_timesheet(
        &events,
        &[unplanned],
        &monday(),
        &Normalizer::default(),
        &LinearWeeklyOvertime::default(),
    );
    assert_eq!(totals.planned_minutes, 0);
    assert_eq!(totals.variance_minutes, 480);
}
