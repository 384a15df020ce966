use crate::cli::commands::worker_from;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::EngineSettings;
use crate::core::report::ReportLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{header, info, success};
use crate::utils::colors::{RESET, color_for_severity};
use crate::utils::date::resolve_period;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Check {
        worker,
        period,
        save,
    } = cmd
    {
        let settings = EngineSettings::from_config(cfg)?;
        let period = resolve_period(period.as_deref(), &settings.normalizer)?;
        let worker = worker_from(worker, cfg);

        let mut pool = DbPool::new(&cfg.database)?;
        let violations = ReportLogic::violations(&mut pool, &settings, &worker, &period)?;

        header(format!("{} @ {}", worker.user_id, worker.location_id));

        if violations.is_empty() {
            success("No compliance violations.");
        } else {
            let mut table = Table::new(vec![
                Column::new("DATE", 12),
                Column::new("RULE", 16),
                Column::new("SEVERITY", 10),
                Column::new("DETAILS", 40),
            ]);
            for v in &violations {
                table.add_row(vec![
                    v.violation_date.format("%Y-%m-%d").to_string(),
                    v.rule_id.clone(),
                    format!(
                        "{}{}{}",
                        color_for_severity(v.severity),
                        v.severity.to_db_str(),
                        RESET
                    ),
                    v.details.to_string(),
                ]);
            }
            print!("{}", table.render());
            println!("{} violation(s)", violations.len());
        }

        if *save {
            let saved = ReportLogic::save_violations(&mut pool, &worker, &violations)?;
            info(format!("{saved} new violation(s) saved"));
        }
    }
    Ok(())
}
