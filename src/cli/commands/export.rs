use crate::cli::commands::worker_from;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::EngineSettings;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::date::resolve_period;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        report,
        file,
        worker,
        period,
        force,
    } = cmd
    {
        let settings = EngineSettings::from_config(cfg)?;
        let period = resolve_period(period.as_deref(), &settings.normalizer)?;
        let worker = worker_from(worker, cfg);

        let mut pool = DbPool::new(&cfg.database)?;
        ExportLogic::export(
            &mut pool, &settings, &worker, &period, *report, *format, file, *force,
        )?;
    }
    Ok(())
}
