mod common;
use common::{LOCATION, ORG, USER, daily, day, shift};
use shiftguard::core::compliance::{Subject, evaluate, iso_week_start};
use shiftguard::core::tz::Normalizer;
use shiftguard::models::compliance::{ComplianceRule, RuleKey, Severity, ThresholdValue};

fn subject() -> Subject<'static> {
    Subject {
        org_id: ORG,
        location_id: LOCATION,
        user_id: USER,
    }
}

fn default_rules() -> Vec<ComplianceRule> {
    vec![
        ComplianceRule::new("r-rest", RuleKey::DailyRest, 11.0),
        ComplianceRule::new("r-day", RuleKey::MaxHoursPerDay, 10.0),
        ComplianceRule::new("r-week", RuleKey::MaxHoursPerWeek, 48.0),
    ]
}

#[test]
fn test_short_rest_between_shifts_warns_on_next_day() {
    // 13:00 → 22:00 local, then 08:00 local next morning: 10h rest
    let shifts = vec![
        shift("1", "2025-01-13T12:00:00Z", "2025-01-13T21:00:00Z", 0),
        shift("2", "2025-01-14T07:00:00Z", "2025-01-14T15:00:00Z", 0),
    ];
    let rules = vec![ComplianceRule::new("r-rest", RuleKey::DailyRest, 11.0)];

    let out = evaluate(&subject(), &rules, &shifts, &[], &Normalizer::default());

    assert_eq!(out.len(), 1);
    let v = &out[0];
    assert_eq!(v.rule_id, "r-rest");
    assert_eq!(v.severity, Severity::Warning);
    assert_eq!(v.violation_date, day("2025-01-14"));
    assert_eq!(v.details["rest_hours"], 10.0);
    assert_eq!(v.details["previous_shift_id"], "1");
    assert_eq!(v.details["next_shift_id"], "2");
    assert!(!v.is_silenced);
    assert_eq!(v.user_id, USER);
}

#[test]
fn test_sufficient_rest_is_clean() {
    let shifts = vec![
        shift("2", "2025-01-14T07:00:00Z", "2025-01-14T15:00:00Z", 0),
        shift("1", "2025-01-13T07:00:00Z", "2025-01-13T15:00:00Z", 0),
    ];
    let out = evaluate(
        &subject(),
        &default_rules(),
        &shifts,
        &[],
        &Normalizer::default(),
    );
    assert!(out.is_empty());
}

#[test]
fn test_daily_cap_severity() {
    let days = vec![daily("2025-01-13", 11 * 60), daily("2025-01-14", 13 * 60)];
    let rules = vec![ComplianceRule::new("r-day", RuleKey::MaxHoursPerDay, 10.0)];

    let out = evaluate(&subject(), &rules, &[], &days, &Normalizer::default());

    assert_eq!(out.len(), 2);
    assert_eq!(out[0].violation_date, day("2025-01-13"));
    assert_eq!(out[0].severity, Severity::Warning);
    assert_eq!(out[0].details["excess_hours"], 1.0);
    assert_eq!(out[1].violation_date, day("2025-01-14"));
    assert_eq!(out[1].severity, Severity::Critical);
    assert_eq!(out[1].details["worked_hours"], 13.0);
}

#[test]
fn test_exactly_at_daily_cap_is_allowed() {
    let days = vec![daily("2025-01-13", 10 * 60)];
    let out = evaluate(
        &subject(),
        &default_rules(),
        &[],
        &days,
        &Normalizer::default(),
    );
    assert!(out.is_empty());
}

#[test]
fn test_weekly_cap_dated_on_monday() {
    // Mon..Fri at 10h: no daily breach, 50h in the week
    let days: Vec<_> = (13..=17)
        .map(|d| daily(&format!("2025-01-{d}"), 10 * 60))
        .collect();

    let out = evaluate(
        &subject(),
        &default_rules(),
        &[],
        &days,
        &Normalizer::default(),
    );

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].rule_id, "r-week");
    assert_eq!(out[0].violation_date, day("2025-01-13"));
    assert_eq!(out[0].severity, Severity::Warning);
    assert_eq!(out[0].details["iso_week"], 3);
    assert_eq!(out[0].details["worked_hours"], 50.0);
}

#[test]
fn test_weekly_cap_critical_above_eight_hours_excess() {
    let rules = vec![ComplianceRule::new("r-week", RuleKey::MaxHoursPerWeek, 48.0)];
    let mut days: Vec<_> = (13..=18)
        .map(|d| daily(&format!("2025-01-{d}"), 9 * 60))
        .collect();
    days.push(daily("2025-01-19", 3 * 60));

    let out = evaluate(&subject(), &rules, &[], &days, &Normalizer::default());

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].severity, Severity::Critical);
    assert_eq!(out[0].details["excess_hours"], 9.0);
}

#[test]
fn test_weeks_are_grouped_by_iso_week() {
    assert_eq!(iso_week_start(day("2025-01-19")), day("2025-01-13"));
    assert_eq!(iso_week_start(day("2025-01-13")), day("2025-01-13"));
    assert_eq!(iso_week_start(day("2025-01-01")), day("2024-12-30"));

    // 30h Sunday + 30h next Monday fall into different weeks
    let days = vec![daily("2025-01-19", 30 * 60), daily("2025-01-20", 30 * 60)];
    let rules = vec![ComplianceRule::new("r-week", RuleKey::MaxHoursPerWeek, 48.0)];
    let out = evaluate(&subject(), &rules, &[], &days, &Normalizer::default());
    assert!(out.is_empty());
}

#[test]
fn test_inactive_and_unknown_rules_are_skipped() {
    let mut inactive = ComplianceRule::new("r-day", RuleKey::MaxHoursPerDay, 10.0);
    inactive.is_active = false;
    let unknown = ComplianceRule {
        id: "r-x".to_string(),
        rule_key: "max_consecutive_days".to_string(),
        is_active: true,
        threshold_value: ThresholdValue { hours: Some(1.0) },
    };

    let days = vec![daily("2025-01-13", 14 * 60)];
    let out = evaluate(
        &subject(),
        &[inactive, unknown],
        &[],
        &days,
        &Normalizer::default(),
    );
    assert!(out.is_empty());
}

#[test]
fn test_missing_threshold_falls_back_to_default() {
    let rule = ComplianceRule {
        id: "r-day".to_string(),
        rule_key: RuleKey::MaxHoursPerDay.as_str().to_string(),
        is_active: true,
        threshold_value: ThresholdValue { hours: None },
    };
    assert_eq!(rule.threshold_hours(), Some(10.0));

    let days = vec![daily("2025-01-13", 10 * 60 + 30)];
    let out = evaluate(&subject(), &[rule], &[], &days, &Normalizer::default());
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].details["threshold_hours"], 10.0);
}

#[test]
fn test_rules_run_in_fixed_order() {
    let shifts = vec![
        shift("1", "2025-01-13T06:00:00Z", "2025-01-13T19:00:00Z", 0),
        shift("2", "2025-01-14T04:00:00Z", "2025-01-14T17:00:00Z", 0),
    ];
    let days = vec![daily("2025-01-13", 13 * 60), daily("2025-01-14", 13 * 60)];

    // Listed backwards on purpose
    let mut rules = default_rules();
    rules.reverse();

    let out = evaluate(&subject(), &rules, &shifts, &days, &Normalizer::default());
    let ids: Vec<&str> = out.iter().map(|v| v.rule_id.as_str()).collect();
    assert_eq!(ids, vec!["r-rest", "r-day", "r-day"]);
}

#[test]
fn test_empty_input_yields_nothing() {
    let out = evaluate(
        &subject(),
        &default_rules(),
        &[],
        &[],
        &Normalizer::default(),
    );
    assert!(out.is_empty());
}
