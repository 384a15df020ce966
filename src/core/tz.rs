//! Conversion between stored UTC instants and the organisation's wall clock.
//!
//! Local-day bucketing always goes through a [`Normalizer`], so the zone is a
//! value passed to every aggregation instead of a process-wide constant.

use crate::errors::{AppError, AppResult};
use crate::models::period::Period;
use chrono::offset::LocalResult;
use chrono::{DateTime, Days, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Europe::Paris;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalizer {
    tz: Tz,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEZONE)
    }
}

impl Normalizer {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// Build from an IANA name such as `Europe/Paris`.
    pub fn from_name(name: &str) -> AppResult<Self> {
        let tz: Tz = name
            .parse()
            .map_err(|_| AppError::InvalidTimezone(name.to_string()))?;
        Ok(Self::new(tz))
    }

    pub fn tz(&self) -> Tz {
        self.tz
    }

    pub fn to_local_time(&self, utc: DateTime<Utc>) -> DateTime<Tz> {
        utc.with_timezone(&self.tz)
    }

    pub fn to_utc(&self, local: DateTime<Tz>) -> DateTime<Utc> {
        local.with_timezone(&Utc)
    }

    /// Local calendar day of a UTC instant.
    pub fn local_date(&self, utc: DateTime<Utc>) -> NaiveDate {
        self.to_local_time(utc).date_naive()
    }

    /// Interpret a naive wall-clock value in the zone.
    ///
    /// Ambiguous times (autumn fall-back) resolve to the earlier instant;
    /// times inside the spring gap move forward to the first valid minute.
    pub fn resolve_local(&self, naive: NaiveDateTime) -> DateTime<Utc> {
        match self.tz.from_local_datetime(&naive) {
            LocalResult::Single(dt) => dt.with_timezone(&Utc),
            LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
            LocalResult::None => {
                let mut probe = naive;
                loop {
                    probe += chrono::Duration::minutes(1);
                    if let Some(dt) = self.tz.from_local_datetime(&probe).earliest() {
                        return dt.with_timezone(&Utc);
                    }
                }
            }
        }
    }

    /// UTC instant of local midnight starting `date`.
    pub fn start_of_day(&self, date: NaiveDate) -> DateTime<Utc> {
        self.resolve_local(date.and_time(chrono::NaiveTime::MIN))
    }

    /// `[midnight of first, midnight after last)` in UTC.
    pub fn local_day_bounds(&self, first: NaiveDate, last: NaiveDate) -> Period {
        let after_last = last.checked_add_days(Days::new(1)).unwrap_or(last);
        Period::new(self.start_of_day(first), self.start_of_day(after_last))
    }
}

/// Parse an ISO-8601 instant (`2025-03-10T08:00:00Z`, offsets allowed).
pub fn parse_instant(s: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| AppError::InvalidTimestamp(s.to_string()))
}

/// Default-zone shorthand for [`Normalizer::to_local_time`].
pub fn to_local_time(utc: DateTime<Utc>) -> DateTime<Tz> {
    Normalizer::default().to_local_time(utc)
}

/// Default-zone shorthand for [`Normalizer::to_utc`].
pub fn to_utc(local: DateTime<Tz>) -> DateTime<Utc> {
    Normalizer::default().to_utc(local)
}

/// Canonical storage/wire form: RFC 3339, whole seconds, `Z` suffix.
pub fn format_instant(utc: DateTime<Utc>) -> String {
    utc.to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
}
