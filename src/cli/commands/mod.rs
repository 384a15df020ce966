pub mod check;
pub mod config;
pub mod export;
pub mod hours;
pub mod init;
pub mod log;
pub mod punch;
pub mod rules;
pub mod shift;
pub mod timesheet;

use crate::cli::parser::WorkerArgs;
use crate::config::Config;
use crate::core::report::Worker;

/// Resolve the worker, filling the organisation from the config.
pub(crate) fn worker_from(args: &WorkerArgs, cfg: &Config) -> Worker {
    Worker {
        org_id: args.org.clone().unwrap_or_else(|| cfg.default_org.clone()),
        location_id: args.location.clone(),
        user_id: args.user.clone(),
    }
}
