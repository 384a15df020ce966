mod common;
use common::{day, ev, period, shift};
use shiftguard::core::calculator::daily_hours::{
    OpenPunchPolicy, PunchAnomaly, aggregate_daily_hours, aggregate_with_report,
};
use shiftguard::core::tz::Normalizer;
use shiftguard::models::event_kind::EventKind::*;

#[test]
fn test_pairs_are_bucketed_per_local_day_in_order() {
    let events = vec![
        ev(ClockIn, "2025-01-13T08:00:00Z"),
        ev(ClockOut, "2025-01-13T12:00:00Z"),
        ev(ClockIn, "2025-01-13T13:00:00Z"),
        ev(ClockOut, "2025-01-13T17:30:00Z"),
        ev(ClockIn, "2025-01-14T08:00:00Z"),
        ev(ClockOut, "2025-01-14T16:00:00Z"),
    ];
    let p = period("2025-01-01T00:00:00Z", "2025-02-01T00:00:00Z");

    let days = aggregate_daily_hours(&events, &[], &p, &Normalizer::default());

    assert_eq!(days.len(), 2);
    assert_eq!(days[0].date, day("2025-01-13"));
    assert_eq!(days[0].total_minutes, 8 * 60 + 30);
    assert_eq!(days[1].date, day("2025-01-14"));
    assert_eq!(days[1].total_minutes, 8 * 60);
}

#[test]
fn test_overnight_pair_counts_on_clock_in_local_day() {
    // 22:00 → 02:00 Paris time
    let events = vec![
        ev(ClockIn, "2025-01-13T21:00:00Z"),
        ev(ClockOut, "2025-01-14T01:00:00Z"),
    ];
    let p = period("2025-01-01T00:00:00Z", "2025-02-01T00:00:00Z");

    let days = aggregate_daily_hours(&events, &[], &p, &Normalizer::default());

    assert_eq!(days.len(), 1);
    assert_eq!(days[0].date, day("2025-01-13"));
    assert_eq!(days[0].total_minutes, 240);
}

#[test]
fn test_events_outside_period_are_skipped_not_clipped() {
    let events = vec![
        ev(ClockIn, "2025-01-19T20:00:00Z"),
        ev(ClockOut, "2025-01-20T02:00:00Z"),
        ev(ClockIn, "2025-01-22T08:00:00Z"),
        ev(ClockOut, "2025-01-22T10:00:00Z"),
        ev(ClockIn, "2025-01-31T20:00:00Z"),
        ev(ClockOut, "2025-02-01T02:00:00Z"),
    ];
    let p = period("2025-01-20T00:00:00Z", "2025-02-01T00:00:00Z");

    let report = aggregate_with_report(
        &events,
        &[],
        &p,
        &Normalizer::default(),
        OpenPunchPolicy::Drop,
    );

    // Only the pair fully inside the period counts.
    assert_eq!(report.days.len(), 1);
    assert_eq!(report.days[0].date, day("2025-01-22"));
    assert_eq!(report.days[0].total_minutes, 120);
    assert!(matches!(
        report.anomalies[0],
        PunchAnomaly::OrphanClockOut { .. }
    ));
    assert!(matches!(
        report.anomalies[1],
        PunchAnomaly::UnclosedClockIn { clipped: false, .. }
    ));
}

#[test]
fn test_trailing_open_clock_in_dropped_by_default_clipped_on_request() {
    let events = vec![ev(ClockIn, "2025-01-13T20:00:00Z")];
    let p = period("2025-01-13T00:00:00Z", "2025-01-13T22:00:00Z");
    let n = Normalizer::default();

    let dropped = aggregate_with_report(&events, &[], &p, &n, OpenPunchPolicy::Drop);
    assert!(dropped.days.is_empty());
    assert_eq!(
        dropped.anomalies,
        vec![PunchAnomaly::UnclosedClockIn {
            at: common::at("2025-01-13T20:00:00Z"),
            clipped: false
        }]
    );

    let clipped = aggregate_with_report(&events, &[], &p, &n, OpenPunchPolicy::ClipToPeriodEnd);
    assert_eq!(clipped.days.len(), 1);
    assert_eq!(clipped.days[0].total_minutes, 120);
}

#[test]
fn test_orphan_clock_out_is_reported_and_ignored() {
    let events = vec![
        ev(ClockOut, "2025-01-13T08:00:00Z"),
        ev(ClockIn, "2025-01-13T09:00:00Z"),
        ev(ClockOut, "2025-01-13T10:00:00Z"),
    ];
    let p = period("2025-01-13T00:00:00Z", "2025-01-14T00:00:00Z");

    let report = aggregate_with_report(
        &events,
        &[],
        &p,
        &Normalizer::default(),
        OpenPunchPolicy::Drop,
    );

    assert_eq!(report.days[0].total_minutes, 60);
    assert_eq!(report.anomalies.len(), 1);
    assert!(matches!(
        report.anomalies[0],
        PunchAnomaly::OrphanClockOut { .. }
    ));
}

#[test]
fn test_breaks_do_not_reduce_daily_totals() {
    let events = vec![
        ev(ClockIn, "2025-01-13T08:00:00Z"),
        ev(BreakStart, "2025-01-13T11:00:00Z"),
        ev(BreakEnd, "2025-01-13T11:30:00Z"),
        ev(ClockOut, "2025-01-13T16:00:00Z"),
    ];
    let p = period("2025-01-13T00:00:00Z", "2025-01-14T00:00:00Z");

    let days = aggregate_daily_hours(&events, &[], &p, &Normalizer::default());
    assert_eq!(days[0].total_minutes, 480);
}

#[test]
fn test_shifts_attached_to_their_local_start_day() {
    let events = vec![
        ev(ClockIn, "2025-01-13T08:00:00Z"),
        ev(ClockOut, "2025-01-13T16:00:00Z"),
    ];
    let shifts = vec![
        shift("s1", "2025-01-13T08:00:00Z", "2025-01-13T16:00:00Z", 30),
        shift("s2", "2025-01-15T08:00:00Z", "2025-01-15T16:00:00Z", 30),
    ];
    let p = period("2025-01-13T00:00:00Z", "2025-01-20T00:00:00Z");

    let days = aggregate_daily_hours(&events, &shifts, &p, &Normalizer::default());

    assert_eq!(days.len(), 1);
    assert_eq!(days[0].shifts.len(), 1);
    assert_eq!(days[0].shifts[0].id, "s1");
}

#[test]
fn test_aggregation_is_idempotent() {
    let events = vec![
        ev(ClockIn, "2025-01-13T08:00:00Z"),
        ev(ClockOut, "2025-01-13T16:00:00Z"),
        ev(ClockIn, "2025-01-14T08:00:00Z"),
    ];
    let p = period("2025-01-13T00:00:00Z", "2025-01-20T00:00:00Z");
    let n = Normalizer::default();

    let first = aggregate_daily_hours(&events, &[], &p, &n);
    let second = aggregate_daily_hours(&events, &[], &p, &n);
    assert_eq!(first, second);
}
