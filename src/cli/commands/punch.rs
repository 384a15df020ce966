use crate::cli::commands::worker_from;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::{ClockLogic, PunchOutcome, PunchRequest};
use crate::core::logic::EngineSettings;
use crate::core::tz::{format_instant, parse_instant};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::event_kind::EventKind;
use crate::ui::messages::{success, warning};
use chrono::{Duration, SubsecRound, Utc};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Punch { kind, worker, at } = cmd {
        let kind =
            EventKind::from_cli_str(kind).ok_or_else(|| AppError::InvalidEventKind(kind.clone()))?;
        let at = match at {
            Some(s) => parse_instant(s)?,
            None => Utc::now().trunc_subsecs(0),
        };

        let settings = EngineSettings::from_config(cfg)?;
        let worker = worker_from(worker, cfg);
        let req = PunchRequest {
            org_id: worker.org_id,
            location_id: worker.location_id,
            user_id: worker.user_id,
            kind,
            at,
        };

        let mut pool = DbPool::new(&cfg.database)?;
        let window = Duration::seconds(cfg.double_punch_threshold_secs);

        match ClockLogic::punch(&mut pool, &settings, window, &req)? {
            PunchOutcome::Recorded { shift_id, .. } => {
                let local = settings.normalizer.to_local_time(at);
                success(format!(
                    "{} recorded for {} at {} ({}){}",
                    kind,
                    req.user_id,
                    local.format("%Y-%m-%d %H:%M"),
                    format_instant(at),
                    shift_id.map(|id| format!(" [shift {id}]")).unwrap_or_default()
                ));
            }
            PunchOutcome::Ignored => {
                warning(format!("Duplicate {kind} ignored for {}", req.user_id));
            }
            PunchOutcome::Rejected(reason) => {
                return Err(AppError::PunchRejected(reason.to_string()));
            }
        }
    }
    Ok(())
}
