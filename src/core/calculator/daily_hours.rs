//! Per-calendar-day worked minutes from a punch stream.

use crate::core::tz::Normalizer;
use crate::models::clock_event::ClockEvent;
use crate::models::daily_hours::DailyHours;
use crate::models::event_kind::EventKind;
use crate::models::period::Period;
use crate::models::shift::Shift;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::warn;

/// What to do with a `clock_in` still open when the period ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OpenPunchPolicy {
    /// Leave it out of the daily buckets.
    #[default]
    Drop,
    /// Credit time up to the period end, like the timesheet does.
    ClipToPeriodEnd,
}

/// Inconsistencies met while walking the log. They never stop aggregation.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PunchAnomaly {
    /// `clock_out` with no open `clock_in`.
    OrphanClockOut { at: DateTime<Utc> },
    /// A second `clock_in` replaced one that was never closed.
    ReplacedClockIn {
        previous: DateTime<Utc>,
        at: DateTime<Utc>,
    },
    /// `clock_in` still open at the end of the period.
    UnclosedClockIn { at: DateTime<Utc>, clipped: bool },
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DailyHoursReport {
    pub days: Vec<DailyHours>,
    pub anomalies: Vec<PunchAnomaly>,
}

/// Aggregate worked minutes per local day, dropping trailing open punches.
pub fn aggregate_daily_hours(
    events: &[ClockEvent],
    shifts: &[Shift],
    period: &Period,
    normalizer: &Normalizer,
) -> Vec<DailyHours> {
    aggregate_with_report(events, shifts, period, normalizer, OpenPunchPolicy::Drop).days
}

pub fn aggregate_with_report(
    events: &[ClockEvent],
    shifts: &[Shift],
    period: &Period,
    normalizer: &Normalizer,
    policy: OpenPunchPolicy,
) -> DailyHoursReport {
    let mut buckets: BTreeMap<NaiveDate, i64> = BTreeMap::new();
    let mut anomalies = Vec::new();
    let mut open_in: Option<DateTime<Utc>> = None;

    for ev in events.iter().filter(|e| period.contains(e.occurred_at)) {
        match ev.kind {
            EventKind::ClockIn => {
                if let Some(previous) = open_in {
                    anomalies.push(PunchAnomaly::ReplacedClockIn {
                        previous,
                        at: ev.occurred_at,
                    });
                }
                open_in = Some(ev.occurred_at);
            }
            EventKind::ClockOut => match open_in.take() {
                Some(start) => {
                    let minutes = (ev.occurred_at - start).num_minutes();
                    *buckets.entry(normalizer.local_date(start)).or_insert(0) += minutes;
                }
                None => anomalies.push(PunchAnomaly::OrphanClockOut { at: ev.occurred_at }),
            },
            // Breaks are not subtracted from daily totals.
            EventKind::BreakStart | EventKind::BreakEnd => {}
        }
    }

    if let Some(start) = open_in {
        let clipped = policy == OpenPunchPolicy::ClipToPeriodEnd;
        if clipped {
            let minutes = (period.end - start).num_minutes();
            *buckets.entry(normalizer.local_date(start)).or_insert(0) += minutes;
        }
        anomalies.push(PunchAnomaly::UnclosedClockIn { at: start, clipped });
    }

    for anomaly in &anomalies {
        warn!(?anomaly, "inconsistent punch log");
    }

    let days = buckets
        .into_iter()
        .map(|(date, total_minutes)| DailyHours {
            date,
            total_minutes,
            shifts: shifts
                .iter()
                .filter(|s| normalizer.local_date(s.start_at) == date)
                .cloned()
                .collect(),
        })
        .collect();

    DailyHoursReport { days, anomalies }
}
