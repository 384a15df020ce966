use crate::cli::commands::worker_from;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::PlanLogic;
use crate::core::tz::parse_instant;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::shift::Shift;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Shift {
        worker,
        start,
        end,
        break_minutes,
    } = cmd
    {
        let start_at = parse_instant(start)?;
        let end_at = parse_instant(end)?;
        if end_at <= start_at {
            return Err(AppError::InvalidTimestamp(format!(
                "shift end {end} is not after start {start}"
            )));
        }
        if *break_minutes < 0 || *break_minutes > (end_at - start_at).num_minutes() {
            return Err(AppError::InvalidDuration(format!(
                "break of {break_minutes} min does not fit the shift"
            )));
        }

        let worker = worker_from(worker, cfg);
        let shift = Shift::planned(
            "",
            worker.org_id,
            worker.location_id,
            worker.user_id,
            start_at,
            end_at,
            *break_minutes,
        );

        let mut pool = DbPool::new(&cfg.database)?;
        let id = PlanLogic::plan(&mut pool, &shift)?;
        success(format!(
            "Shift {id} planned for {} ({} min)",
            shift.user_id,
            shift.planned_minutes()
        ));
    }
    Ok(())
}
