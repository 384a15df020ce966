use crate::core::calculator::timesheet::compute_worked_time;
use crate::core::logic::EngineSettings;
use crate::core::punch::{PunchRejection, PunchState, is_double_punch, validate_punch};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::clock_event::ClockEvent;
use crate::models::event_kind::EventKind;
use crate::models::period::Period;
use crate::models::shift::{Shift, ShiftStatus};
use chrono::{DateTime, Duration, Utc};
use rusqlite::Transaction;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct PunchRequest {
    pub org_id: String,
    pub location_id: String,
    pub user_id: String,
    pub kind: EventKind,
    pub at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PunchOutcome {
    Recorded { event_id: i64, shift_id: Option<String> },
    /// Same punch repeated within the double-tap window; nothing written.
    Ignored,
    Rejected(PunchRejection),
}

/// High-level business logic for the `punch` command.
pub struct ClockLogic;

impl ClockLogic {
    /// Validate and record one punch.
    ///
    /// Everything happens under the store's write lock, so the state read
    /// for validation cannot change before the event is written.
    pub fn punch(
        pool: &mut DbPool,
        settings: &EngineSettings,
        double_punch: Duration,
        req: &PunchRequest,
    ) -> AppResult<PunchOutcome> {
        pool.with_write_lock(|tx| Self::punch_locked(tx, settings, double_punch, req))
    }

    fn punch_locked(
        tx: &Transaction<'_>,
        settings: &EngineSettings,
        double_punch: Duration,
        req: &PunchRequest,
    ) -> AppResult<PunchOutcome> {
        let day = settings.normalizer.local_date(req.at);
        let day_start = settings.normalizer.start_of_day(day);

        // The double-tap window may straddle local midnight.
        let recent = queries::last_event_since(
            tx,
            &req.user_id,
            &req.location_id,
            req.at - double_punch,
        )?;
        if is_double_punch(
            recent.as_ref(),
            &req.user_id,
            &req.location_id,
            req.kind,
            req.at,
            double_punch,
        ) {
            debug!(user = %req.user_id, kind = %req.kind, "double punch ignored");
            return Ok(PunchOutcome::Ignored);
        }

        let last = queries::last_event_since(tx, &req.user_id, &req.location_id, day_start)?;
        let active = queries::find_in_progress_shift(tx, &req.user_id, &req.location_id)?;
        let validation = validate_punch(
            req.kind,
            PunchState {
                shift_in_progress: active.is_some(),
                last_kind: last.as_ref().map(|e| e.kind),
            },
        );
        if let Some(reason) = validation.error {
            return Ok(PunchOutcome::Rejected(reason));
        }

        let event = ClockEvent::new(
            req.user_id.clone(),
            req.location_id.clone(),
            req.org_id.clone(),
            req.kind,
            req.at,
        );
        let event_id = queries::insert_event(tx, &event)?;

        let shift_id = match req.kind {
            EventKind::ClockIn => Some(Self::start_shift(tx, settings, req)?),
            EventKind::ClockOut => match active {
                Some(shift) => Some(Self::finish_shift(tx, settings, shift, req)?),
                None => None,
            },
            EventKind::BreakStart | EventKind::BreakEnd => active.map(|s| s.id),
        };

        ttlog(
            tx,
            "punch",
            req.kind.to_db_str(),
            &format!(
                "{}@{} at {}",
                req.user_id,
                req.location_id,
                event.occurred_at_str()
            ),
        )?;
        info!(user = %req.user_id, kind = %req.kind, event_id, "punch recorded");

        Ok(PunchOutcome::Recorded { event_id, shift_id })
    }

    /// Start today's scheduled shift, or open an unplanned one.
    fn start_shift(
        tx: &Transaction<'_>,
        settings: &EngineSettings,
        req: &PunchRequest,
    ) -> AppResult<String> {
        let day = settings.normalizer.local_date(req.at);
        let today = settings.normalizer.local_day_bounds(day, day);

        if let Some(mut shift) =
            queries::find_scheduled_shift(tx, &req.user_id, &req.location_id, &today)?
        {
            shift.status = ShiftStatus::InProgress;
            shift.actual_start_at = Some(req.at);
            queries::update_shift_actuals(tx, &shift)?;
            return Ok(shift.id);
        }

        // Unplanned: no planned time; the window follows the actual one
        // so rest checks see the real end.
        let shift = Shift::unplanned(
            req.org_id.clone(),
            req.location_id.clone(),
            req.user_id.clone(),
            req.at,
        );
        queries::insert_shift(tx, &shift)
    }

    fn finish_shift(
        tx: &Transaction<'_>,
        settings: &EngineSettings,
        mut shift: Shift,
        req: &PunchRequest,
    ) -> AppResult<String> {
        let started = shift.actual_start_at.unwrap_or(shift.start_at);
        let worked_span = Period::new(started, req.at + Duration::seconds(1));
        let events = queries::load_events(tx, &req.user_id, &req.location_id, &worked_span)?;
        let worked = compute_worked_time(&events, &worked_span, &settings.normalizer);

        if shift.unplanned {
            shift.end_at = req.at;
        }
        shift.status = ShiftStatus::Completed;
        shift.actual_end_at = Some(req.at);
        shift.actual_break_minutes = Some(worked.break_minutes);
        queries::update_shift_actuals(tx, &shift)?;
        Ok(shift.id)
    }
}

/// High-level business logic for the `shift` command.
pub struct PlanLogic;

impl PlanLogic {
    pub fn plan(pool: &mut DbPool, shift: &Shift) -> AppResult<String> {
        let id = queries::insert_shift(&pool.conn, shift)?;
        ttlog(
            &pool.conn,
            "shift",
            &id,
            &format!(
                "{}@{} {} → {} (break {} min)",
                shift.user_id,
                shift.location_id,
                shift.start_at.to_rfc3339(),
                shift.end_at.to_rfc3339(),
                shift.break_minutes
            ),
        )?;
        Ok(id)
    }
}
