//! Period expressions (`YYYY`, `YYYY-MM`, `YYYY-MM-DD`, `A:B`) → UTC periods.

use crate::core::tz::Normalizer;
use crate::errors::{AppError, AppResult};
use crate::models::period::Period;
use chrono::{Datelike, NaiveDate, Utc};

pub fn today(normalizer: &Normalizer) -> NaiveDate {
    normalizer.local_date(Utc::now())
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (ny, nm) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(ny, nm, 1)?.pred_opt()
}

/// First and last local day covered by a single period token.
pub fn bounds_of(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidPeriod(p.to_string());

    // YYYY-MM-DD
    if let Ok(d) = NaiveDate::parse_from_str(p, "%Y-%m-%d") {
        return Ok((d, d));
    }

    // YYYY-MM
    if let Ok(first) = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d") {
        let last = last_day_of_month(first.year(), first.month()).ok_or_else(invalid)?;
        return Ok((first, last));
    }

    // YYYY
    if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
    {
        let first = NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(invalid)?;
        let last = NaiveDate::from_ymd_opt(year, 12, 31).ok_or_else(invalid)?;
        return Ok((first, last));
    }

    Err(invalid())
}

/// Resolve an optional period expression; `None` means the current month.
pub fn resolve_period(expr: Option<&str>, normalizer: &Normalizer) -> AppResult<Period> {
    let (first, last) = match expr {
        None => {
            let t = today(normalizer);
            bounds_of(&t.format("%Y-%m").to_string())?
        }
        Some(p) => match p.split_once(':') {
            Some((a, b)) => {
                let (first, _) = bounds_of(a)?;
                let (_, last) = bounds_of(b)?;
                (first, last)
            }
            None => bounds_of(p)?,
        },
    };

    if last < first {
        return Err(AppError::InvalidPeriod(expr.unwrap_or_default().to_string()));
    }

    Ok(normalizer.local_day_bounds(first, last))
}
