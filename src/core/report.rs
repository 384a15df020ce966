use crate::core::calculator::daily_hours::DailyHoursReport;
use crate::core::compliance::Subject;
use crate::core::logic::{Core, EngineSettings};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::clock_event::ClockEvent;
use crate::models::compliance::ComplianceViolation;
use crate::models::period::Period;
use crate::models::shift::{Shift, ShiftStatus};
use crate::models::timesheet::TimesheetTotals;

/// One worker at one location of one organisation.
#[derive(Debug, Clone)]
pub struct Worker {
    pub org_id: String,
    pub location_id: String,
    pub user_id: String,
}

impl Worker {
    pub fn subject(&self) -> Subject<'_> {
        Subject {
            org_id: &self.org_id,
            location_id: &self.location_id,
            user_id: &self.user_id,
        }
    }
}

#[derive(Debug, Default)]
pub struct WorkerData {
    pub events: Vec<ClockEvent>,
    pub shifts: Vec<Shift>,
}

/// Read-side logic behind `hours`, `timesheet`, `check` and `export`.
pub struct ReportLogic;

impl ReportLogic {
    pub fn load(pool: &mut DbPool, worker: &Worker, period: &Period) -> AppResult<WorkerData> {
        Ok(WorkerData {
            events: queries::load_events(&pool.conn, &worker.user_id, &worker.location_id, period)?,
            shifts: queries::load_shifts(&pool.conn, &worker.user_id, &worker.location_id, period)?,
        })
    }

    pub fn daily_hours(
        pool: &mut DbPool,
        settings: &EngineSettings,
        worker: &Worker,
        period: &Period,
    ) -> AppResult<DailyHoursReport> {
        let data = Self::load(pool, worker, period)?;
        Ok(Core::build_daily_report(
            settings,
            &data.events,
            &data.shifts,
            period,
        ))
    }

    pub fn timesheet(
        pool: &mut DbPool,
        settings: &EngineSettings,
        worker: &Worker,
        period: &Period,
    ) -> AppResult<TimesheetTotals> {
        let data = Self::load(pool, worker, period)?;
        Ok(Core::build_timesheet(
            settings,
            &data.events,
            &data.shifts,
            period,
        ))
    }

    /// Evaluate the stored rules; cancelled shifts do not count as worked.
    pub fn violations(
        pool: &mut DbPool,
        settings: &EngineSettings,
        worker: &Worker,
        period: &Period,
    ) -> AppResult<Vec<ComplianceViolation>> {
        let rules = queries::load_rules(&pool.conn)?;
        let mut data = Self::load(pool, worker, period)?;
        data.shifts.retain(|s| s.status != ShiftStatus::Cancelled);

        Ok(Core::check_compliance(
            settings,
            &worker.subject(),
            &rules,
            &data.events,
            &data.shifts,
            period,
        ))
    }

    /// Persist violations; returns how many were new.
    pub fn save_violations(
        pool: &mut DbPool,
        worker: &Worker,
        violations: &[ComplianceViolation],
    ) -> AppResult<usize> {
        let saved = queries::save_violations(&pool.conn, violations)?;
        ttlog(
            &pool.conn,
            "check",
            &worker.user_id,
            &format!("{} violation(s), {saved} new", violations.len()),
        )?;
        Ok(saved)
    }
}
