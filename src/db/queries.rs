use crate::core::tz::format_instant;
use crate::errors::{AppError, AppResult};
use crate::models::clock_event::ClockEvent;
use crate::models::compliance::{ComplianceRule, ComplianceViolation, ThresholdValue};
use crate::models::event_kind::EventKind;
use crate::models::period::Period;
use crate::models::shift::{Shift, ShiftStatus};
use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn conversion_error(idx: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(err))
}

fn get_instant(row: &Row, col: &str) -> Result<DateTime<Utc>> {
    let raw: String = row.get(col)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| conversion_error(0, AppError::InvalidTimestamp(raw)))
}

fn get_opt_instant(row: &Row, col: &str) -> Result<Option<DateTime<Utc>>> {
    let raw: Option<String> = row.get(col)?;
    raw.map(|s| {
        DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|_| conversion_error(0, AppError::InvalidTimestamp(s)))
    })
    .transpose()
}

// ---------------------------
// Clock events
// ---------------------------

pub fn map_event_row(row: &Row) -> Result<ClockEvent> {
    let kind_str: String = row.get("kind")?;
    let kind = EventKind::from_db_str(&kind_str)
        .ok_or_else(|| conversion_error(0, AppError::InvalidEventKind(kind_str.clone())))?;

    Ok(ClockEvent {
        user_id: row.get("user_id")?,
        location_id: row.get("location_id")?,
        org_id: row.get("org_id")?,
        kind,
        occurred_at: get_instant(row, "occurred_at")?,
    })
}

pub fn insert_event(conn: &Connection, ev: &ClockEvent) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO clock_events (org_id, location_id, user_id, kind, occurred_at, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            ev.org_id,
            ev.location_id,
            ev.user_id,
            ev.kind.to_db_str(),
            ev.occurred_at_str(),
            Utc::now().to_rfc3339(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Events of one worker inside `[period.start, period.end)`, oldest first.
///
/// `occurred_at` is always stored as UTC RFC 3339, so text order is time order.
pub fn load_events(
    conn: &Connection,
    user_id: &str,
    location_id: &str,
    period: &Period,
) -> AppResult<Vec<ClockEvent>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM clock_events
         WHERE user_id = ?1 AND location_id = ?2
           AND occurred_at >= ?3 AND occurred_at < ?4
         ORDER BY occurred_at ASC, id ASC",
    )?;

    let rows = stmt.query_map(
        params![
            user_id,
            location_id,
            format_instant(period.start),
            format_instant(period.end)
        ],
        map_event_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Most recent event of a worker at or after `since`.
pub fn last_event_since(
    conn: &Connection,
    user_id: &str,
    location_id: &str,
    since: DateTime<Utc>,
) -> AppResult<Option<ClockEvent>> {
    let ev = conn
        .query_row(
            "SELECT * FROM clock_events
             WHERE user_id = ?1 AND location_id = ?2 AND occurred_at >= ?3
             ORDER BY occurred_at DESC, id DESC
             LIMIT 1",
            params![user_id, location_id, format_instant(since)],
            map_event_row,
        )
        .optional()?;
    Ok(ev)
}

// ---------------------------
// Shifts
// ---------------------------

pub fn map_shift_row(row: &Row) -> Result<Shift> {
    let status_str: String = row.get("status")?;
    let status = ShiftStatus::from_db_str(&status_str)
        .ok_or_else(|| conversion_error(0, AppError::InvalidShiftStatus(status_str.clone())))?;

    Ok(Shift {
        id: row.get::<_, i64>("id")?.to_string(),
        org_id: row.get("org_id")?,
        location_id: row.get("location_id")?,
        user_id: row.get("user_id")?,
        start_at: get_instant(row, "start_at")?,
        end_at: get_instant(row, "end_at")?,
        break_minutes: row.get("break_minutes")?,
        status,
        actual_start_at: get_opt_instant(row, "actual_start_at")?,
        actual_end_at: get_opt_instant(row, "actual_end_at")?,
        actual_break_minutes: row.get("actual_break_minutes")?,
        unplanned: row.get::<_, i32>("unplanned")? == 1,
    })
}

/// Insert a shift; the store assigns its id.
pub fn insert_shift(conn: &Connection, s: &Shift) -> AppResult<String> {
    conn.execute(
        "INSERT INTO shifts (org_id, location_id, user_id, start_at, end_at, break_minutes,
                             status, actual_start_at, actual_end_at, actual_break_minutes,
                             unplanned)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            s.org_id,
            s.location_id,
            s.user_id,
            format_instant(s.start_at),
            format_instant(s.end_at),
            s.break_minutes,
            s.status.to_db_str(),
            s.actual_start_at.map(format_instant),
            s.actual_end_at.map(format_instant),
            s.actual_break_minutes,
            if s.unplanned { 1 } else { 0 },
        ],
    )?;
    Ok(conn.last_insert_rowid().to_string())
}

/// Update end, status and actual figures of an existing shift.
pub fn update_shift_actuals(conn: &Connection, s: &Shift) -> AppResult<()> {
    let id: i64 = s
        .id
        .parse()
        .map_err(|_| AppError::Other(format!("Invalid shift id: {}", s.id)))?;
    conn.execute(
        "UPDATE shifts
         SET end_at = ?1, status = ?2, actual_start_at = ?3, actual_end_at = ?4,
             actual_break_minutes = ?5
         WHERE id = ?6",
        params![
            format_instant(s.end_at),
            s.status.to_db_str(),
            s.actual_start_at.map(format_instant),
            s.actual_end_at.map(format_instant),
            s.actual_break_minutes,
            id,
        ],
    )?;
    Ok(())
}

/// Shifts of one worker overlapping the period, ordered by start.
pub fn load_shifts(
    conn: &Connection,
    user_id: &str,
    location_id: &str,
    period: &Period,
) -> AppResult<Vec<Shift>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM shifts
         WHERE user_id = ?1 AND location_id = ?2
           AND start_at < ?4 AND end_at > ?3
         ORDER BY start_at ASC, id ASC",
    )?;

    let rows = stmt.query_map(
        params![
            user_id,
            location_id,
            format_instant(period.start),
            format_instant(period.end)
        ],
        map_shift_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn find_in_progress_shift(
    conn: &Connection,
    user_id: &str,
    location_id: &str,
) -> AppResult<Option<Shift>> {
    let s = conn
        .query_row(
            "SELECT * FROM shifts
             WHERE user_id = ?1 AND location_id = ?2 AND status = 'in_progress'
             ORDER BY start_at DESC
             LIMIT 1",
            params![user_id, location_id],
            map_shift_row,
        )
        .optional()?;
    Ok(s)
}

/// First scheduled shift of the worker starting inside `period`.
pub fn find_scheduled_shift(
    conn: &Connection,
    user_id: &str,
    location_id: &str,
    period: &Period,
) -> AppResult<Option<Shift>> {
    let s = conn
        .query_row(
            "SELECT * FROM shifts
             WHERE user_id = ?1 AND location_id = ?2 AND status = 'scheduled'
               AND start_at >= ?3 AND start_at < ?4
             ORDER BY start_at ASC
             LIMIT 1",
            params![
                user_id,
                location_id,
                format_instant(period.start),
                format_instant(period.end)
            ],
            map_shift_row,
        )
        .optional()?;
    Ok(s)
}

// ---------------------------
// Compliance
// ---------------------------

pub fn map_rule_row(row: &Row) -> Result<ComplianceRule> {
    Ok(ComplianceRule {
        id: row.get("id")?,
        rule_key: row.get("rule_key")?,
        is_active: row.get::<_, i32>("is_active")? == 1,
        threshold_value: ThresholdValue {
            hours: row.get("threshold_hours")?,
        },
    })
}

pub fn load_rules(conn: &Connection) -> AppResult<Vec<ComplianceRule>> {
    let mut stmt = conn.prepare("SELECT * FROM compliance_rules ORDER BY rule_key ASC")?;
    let rows = stmt.query_map([], map_rule_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Returns the number of rows touched (0 when the key is unknown).
pub fn set_rule_threshold(conn: &Connection, rule_key: &str, hours: f64) -> AppResult<usize> {
    Ok(conn.execute(
        "UPDATE compliance_rules SET threshold_hours = ?1 WHERE rule_key = ?2",
        params![hours, rule_key],
    )?)
}

pub fn set_rule_active(conn: &Connection, rule_key: &str, active: bool) -> AppResult<usize> {
    Ok(conn.execute(
        "UPDATE compliance_rules SET is_active = ?1 WHERE rule_key = ?2",
        params![if active { 1 } else { 0 }, rule_key],
    )?)
}

/// Persist violations, keeping existing rows (and their silenced flag) intact.
/// Returns how many new rows were written.
pub fn save_violations(conn: &Connection, violations: &[ComplianceViolation]) -> AppResult<usize> {
    let mut stmt = conn.prepare_cached(
        "INSERT OR IGNORE INTO compliance_violations
            (org_id, location_id, user_id, rule_id, violation_date, severity, details,
             is_silenced, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
    )?;

    let now = Utc::now().to_rfc3339();
    let mut written = 0;
    for v in violations {
        written += stmt.execute(params![
            v.org_id,
            v.location_id,
            v.user_id,
            v.rule_id,
            v.violation_date.format("%Y-%m-%d").to_string(),
            v.severity.to_db_str(),
            serde_json::to_string(&v.details)?,
            if v.is_silenced { 1 } else { 0 },
            now,
        ])?;
    }
    Ok(written)
}
