//! Versioned schema migrations.
//!
//! Every applied migration is recorded in the `log` table as a
//! `migration_applied` row whose target is the migration version.

use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension};
use tracing::info;

struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250301_0001_clock_events",
        description: "Created clock_events table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS clock_events (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            org_id       TEXT NOT NULL,
            location_id  TEXT NOT NULL,
            user_id      TEXT NOT NULL,
            kind         TEXT NOT NULL
                         CHECK(kind IN ('clock_in','clock_out','break_start','break_end')),
            occurred_at  TEXT NOT NULL,
            created_at   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_clock_events_worker
            ON clock_events(user_id, location_id, occurred_at);
        "#,
    },
    Migration {
        version: "20250301_0002_shifts",
        description: "Created shifts table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS shifts (
            id                    INTEGER PRIMARY KEY AUTOINCREMENT,
            org_id                TEXT NOT NULL,
            location_id           TEXT NOT NULL,
            user_id               TEXT NOT NULL,
            start_at              TEXT NOT NULL,
            end_at                TEXT NOT NULL,
            break_minutes         INTEGER NOT NULL DEFAULT 0,
            status                TEXT NOT NULL DEFAULT 'scheduled'
                                  CHECK(status IN ('scheduled','in_progress','completed','cancelled')),
            actual_start_at       TEXT,
            actual_end_at         TEXT,
            actual_break_minutes  INTEGER
        );

        CREATE INDEX IF NOT EXISTS idx_shifts_worker
            ON shifts(user_id, location_id, start_at);
        "#,
    },
    Migration {
        version: "20250301_0003_compliance",
        description: "Created compliance_rules and compliance_violations tables",
        sql: r#"
        CREATE TABLE IF NOT EXISTS compliance_rules (
            id               TEXT PRIMARY KEY,
            rule_key         TEXT NOT NULL UNIQUE,
            is_active        INTEGER NOT NULL DEFAULT 1,
            threshold_hours  REAL
        );

        CREATE TABLE IF NOT EXISTS compliance_violations (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            org_id          TEXT NOT NULL,
            location_id     TEXT NOT NULL,
            user_id         TEXT NOT NULL,
            rule_id         TEXT NOT NULL,
            violation_date  TEXT NOT NULL,
            severity        TEXT NOT NULL CHECK(severity IN ('warning','critical')),
            details         TEXT NOT NULL DEFAULT '{}',
            is_silenced     INTEGER NOT NULL DEFAULT 0,
            created_at      TEXT NOT NULL,
            UNIQUE(user_id, location_id, rule_id, violation_date)
        );
        "#,
    },
    Migration {
        version: "20250301_0004_seed_rules",
        description: "Seeded default French labor-law rules",
        sql: r#"
        INSERT OR IGNORE INTO compliance_rules (id, rule_key, is_active, threshold_hours) VALUES
            ('rule_daily_rest',     'daily_rest_11h',         1, 11),
            ('rule_max_day',        'max_hours_per_day_10h',  1, 10),
            ('rule_max_week',       'max_hours_per_week_48h', 1, 48);
        "#,
    },
    Migration {
        version: "20250315_0005_unplanned_shifts",
        description: "Added shifts.unplanned flag",
        sql: r#"
        ALTER TABLE shifts ADD COLUMN unplanned INTEGER NOT NULL DEFAULT 0;
        "#,
    },
];

/// Ensure that the `log` table exists; it also tracks applied migrations.
fn ensure_log_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
}

fn is_applied(conn: &Connection, version: &str) -> rusqlite::Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> AppResult<()> {
    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(m.sql)
        .map_err(|e| AppError::Migration(format!("{}: {e}", m.version)))?;
    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [m.version, m.description],
    )?;
    tx.commit()?;
    Ok(())
}

/// Public entry point: run all pending migrations, returns how many ran.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }
        apply(conn, m)?;
        info!(version = m.version, "migration applied");
        applied += 1;
    }
    Ok(applied)
}
