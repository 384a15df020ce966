//! Labor-law rule evaluation over shifts and daily hours.
//!
//! Rules run in a fixed order (daily rest, daily cap, weekly cap) and each
//! emits its violations by ascending date. The same shift may trip several
//! rules; nothing is deduplicated.

use crate::core::tz::Normalizer;
use crate::models::compliance::{ComplianceRule, ComplianceViolation, RuleKey, Severity};
use crate::models::daily_hours::DailyHours;
use crate::models::shift::Shift;
use chrono::{Datelike, Days, NaiveDate};
use serde_json::json;
use std::collections::BTreeMap;
use tracing::debug;

/// Whose hours are being checked.
#[derive(Debug, Clone)]
pub struct Subject<'a> {
    pub org_id: &'a str,
    pub location_id: &'a str,
    pub user_id: &'a str,
}

/// A rule resolved to its key and effective threshold.
#[derive(Debug, Clone, Copy)]
struct ActiveRule<'r> {
    rule: &'r ComplianceRule,
    threshold_hours: f64,
}

fn active_rule(rules: &[ComplianceRule], key: RuleKey) -> Option<ActiveRule<'_>> {
    rules
        .iter()
        .filter(|r| r.is_active)
        .find(|r| r.key() == Some(key))
        .and_then(|rule| {
            Some(ActiveRule {
                rule,
                threshold_hours: rule.threshold_hours()?,
            })
        })
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn cap_severity(key: RuleKey, excess_hours: f64) -> Severity {
    match key.critical_excess_hours() {
        Some(limit) if excess_hours > limit => Severity::Critical,
        _ => Severity::Warning,
    }
}

fn violation(
    subject: &Subject<'_>,
    rule: &ComplianceRule,
    date: NaiveDate,
    severity: Severity,
    details: serde_json::Value,
) -> ComplianceViolation {
    ComplianceViolation {
        org_id: subject.org_id.to_string(),
        location_id: subject.location_id.to_string(),
        user_id: subject.user_id.to_string(),
        rule_id: rule.id.clone(),
        violation_date: date,
        severity,
        details,
        is_silenced: false,
    }
}

pub fn evaluate(
    subject: &Subject<'_>,
    rules: &[ComplianceRule],
    shifts: &[Shift],
    days: &[DailyHours],
    normalizer: &Normalizer,
) -> Vec<ComplianceViolation> {
    for rule in rules.iter().filter(|r| r.key().is_none()) {
        debug!(rule_key = %rule.rule_key, "skipping unknown compliance rule");
    }

    let mut out = Vec::new();

    if let Some(rule) = active_rule(rules, RuleKey::DailyRest) {
        out.extend(check_daily_rest(subject, rule, shifts, normalizer));
    }
    if let Some(rule) = active_rule(rules, RuleKey::MaxHoursPerDay) {
        out.extend(check_daily_cap(subject, rule, days));
    }
    if let Some(rule) = active_rule(rules, RuleKey::MaxHoursPerWeek) {
        out.extend(check_weekly_cap(subject, rule, days));
    }

    debug!(
        user = subject.user_id,
        violations = out.len(),
        "compliance evaluation done"
    );
    out
}

fn check_daily_rest(
    subject: &Subject<'_>,
    rule: ActiveRule<'_>,
    shifts: &[Shift],
    normalizer: &Normalizer,
) -> Vec<ComplianceViolation> {
    let mut sorted: Vec<&Shift> = shifts.iter().collect();
    sorted.sort_by_key(|s| s.start_at);

    let mut out = Vec::new();
    for w in sorted.windows(2) {
        let (prev, next) = (w[0], w[1]);
        let rest_hours = (next.start_at - prev.end_at).num_minutes() as f64 / 60.0;

        if rest_hours < rule.threshold_hours {
            out.push(violation(
                subject,
                rule.rule,
                normalizer.local_date(next.start_at),
                Severity::Warning,
                json!({
                    "previous_shift_id": prev.id,
                    "next_shift_id": next.id,
                    "rest_hours": round2(rest_hours),
                    "threshold_hours": rule.threshold_hours,
                }),
            ));
        }
    }

    out
}

fn check_daily_cap(
    subject: &Subject<'_>,
    rule: ActiveRule<'_>,
    days: &[DailyHours],
) -> Vec<ComplianceViolation> {
    let mut sorted: Vec<&DailyHours> = days.iter().collect();
    sorted.sort_by_key(|d| d.date);

    sorted
        .into_iter()
        .filter_map(|day| {
            let worked = day.hours();
            if worked <= rule.threshold_hours {
                return None;
            }
            let excess = worked - rule.threshold_hours;
            Some(violation(
                subject,
                rule.rule,
                day.date,
                cap_severity(RuleKey::MaxHoursPerDay, excess),
                json!({
                    "worked_hours": round2(worked),
                    "threshold_hours": rule.threshold_hours,
                    "excess_hours": round2(excess),
                }),
            ))
        })
        .collect()
}

/// Monday of the ISO week containing `date`.
pub fn iso_week_start(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_monday() as u64;
    date.checked_sub_days(Days::new(offset)).unwrap_or(date)
}

fn check_weekly_cap(
    subject: &Subject<'_>,
    rule: ActiveRule<'_>,
    days: &[DailyHours],
) -> Vec<ComplianceViolation> {
    let mut weeks: BTreeMap<NaiveDate, i64> = BTreeMap::new();
    for day in days {
        *weeks.entry(iso_week_start(day.date)).or_insert(0) += day.total_minutes;
    }

    weeks
        .into_iter()
        .filter_map(|(monday, minutes)| {
            let worked = minutes as f64 / 60.0;
            if worked <= rule.threshold_hours {
                return None;
            }
            let excess = worked - rule.threshold_hours;
            let iso = monday.iso_week();
            Some(violation(
                subject,
                rule.rule,
                monday,
                cap_severity(RuleKey::MaxHoursPerWeek, excess),
                json!({
                    "iso_year": iso.year(),
                    "iso_week": iso.week(),
                    "worked_hours": round2(worked),
                    "threshold_hours": rule.threshold_hours,
                    "excess_hours": round2(excess),
                }),
            ))
        })
        .collect()
}
