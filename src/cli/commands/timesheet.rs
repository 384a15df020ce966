use crate::cli::commands::worker_from;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::EngineSettings;
use crate::core::report::ReportLogic;
use crate::core::tz::format_instant;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{RESET, color_for_variance, colorize_optional};
use crate::utils::date::resolve_period;
use crate::utils::mins2readable;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Timesheet { worker, period } = cmd {
        let settings = EngineSettings::from_config(cfg)?;
        let period = resolve_period(period.as_deref(), &settings.normalizer)?;
        let worker = worker_from(worker, cfg);

        let mut pool = DbPool::new(&cfg.database)?;
        let totals = ReportLogic::timesheet(&mut pool, &settings, &worker, &period)?;

        header(format!("{} @ {}", worker.user_id, worker.location_id));
        println!(
            "Period:   {} → {}",
            format_instant(period.start),
            format_instant(period.end)
        );
        println!(
            "Regular:  {}",
            mins2readable(totals.regular_minutes, false, false)
        );
        println!(
            "Overtime: {}",
            colorize_optional(&mins2readable(totals.overtime_minutes, false, false))
        );
        println!(
            "Breaks:   {}",
            colorize_optional(&mins2readable(totals.break_minutes, false, false))
        );
        println!(
            "Planned:  {}",
            mins2readable(totals.planned_minutes, false, false)
        );
        println!(
            "Variance: {}{}{}",
            color_for_variance(totals.variance_minutes),
            mins2readable(totals.variance_minutes, true, false),
            RESET
        );
        println!("Days:     {}", totals.days_worked);
    }
    Ok(())
}
