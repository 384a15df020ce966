mod common;
use chrono::Timelike;
use common::{at, day};
use shiftguard::core::tz::{Normalizer, format_instant, parse_instant, to_local_time, to_utc};

#[test]
fn test_paris_offset_follows_daylight_saving() {
    let winter = to_local_time(at("2025-01-13T08:00:00Z"));
    assert_eq!(winter.hour(), 9);

    let summer = to_local_time(at("2025-07-14T08:00:00Z"));
    assert_eq!(summer.hour(), 10);

    assert_eq!(to_utc(summer), at("2025-07-14T08:00:00Z"));
}

#[test]
fn test_local_date_rolls_over_before_utc_midnight() {
    let n = Normalizer::default();
    // 23:30 UTC on the 13th is 00:30 on the 14th in Paris (winter)
    assert_eq!(n.local_date(at("2025-01-13T23:30:00Z")), day("2025-01-14"));
    assert_eq!(n.local_date(at("2025-01-13T22:59:00Z")), day("2025-01-13"));
}

#[test]
fn test_day_bounds_on_spring_forward_day_are_23_hours() {
    let n = Normalizer::default();
    let p = n.local_day_bounds(day("2025-03-30"), day("2025-03-30"));
    assert_eq!(p.start, at("2025-03-29T23:00:00Z"));
    assert_eq!(p.end, at("2025-03-30T22:00:00Z"));
    assert_eq!((p.end - p.start).num_hours(), 23);
}

#[test]
fn test_configurable_zone() {
    let n = Normalizer::from_name("America/New_York").expect("known zone");
    assert_eq!(n.local_date(at("2025-01-14T03:00:00Z")), day("2025-01-13"));
    assert!(Normalizer::from_name("Mars/Olympus").is_err());
}

#[test]
fn test_parse_instant_accepts_offsets_and_rejects_garbage() {
    assert_eq!(
        parse_instant("2025-01-13T09:00:00+01:00").unwrap(),
        at("2025-01-13T08:00:00Z")
    );
    assert!(parse_instant("13/01/2025 09:00").is_err());
    assert_eq!(format_instant(at("2025-01-13T08:00:00+00:00")), "2025-01-13T08:00:00Z");
}
