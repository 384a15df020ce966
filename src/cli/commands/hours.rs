use crate::cli::commands::worker_from;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::daily_hours::PunchAnomaly;
use crate::core::logic::EngineSettings;
use crate::core::report::ReportLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{header, warning};
use crate::utils::date::resolve_period;
use crate::utils::mins2readable;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Hours { worker, period } = cmd {
        let settings = EngineSettings::from_config(cfg)?;
        let period = resolve_period(period.as_deref(), &settings.normalizer)?;
        let worker = worker_from(worker, cfg);

        let mut pool = DbPool::new(&cfg.database)?;
        let report = ReportLogic::daily_hours(&mut pool, &settings, &worker, &period)?;

        header(format!("{} @ {}", worker.user_id, worker.location_id));

        if report.days.is_empty() {
            println!("No worked hours in period.");
        } else {
            let mut table = Table::new(vec![
                Column::new("DATE", 12),
                Column::new("WEEKDAY", 9),
                Column::new("WORKED", 9),
                Column::new("SHIFTS", 12),
            ]);
            let mut total = 0;
            for day in &report.days {
                total += day.total_minutes;
                table.add_row(vec![
                    day.date.format("%Y-%m-%d").to_string(),
                    day.date.format("%a").to_string(),
                    mins2readable(day.total_minutes, false, false),
                    day.shifts
                        .iter()
                        .map(|s| s.id.as_str())
                        .collect::<Vec<_>>()
                        .join(","),
                ]);
            }
            print!("{}", table.render());
            println!("Total: {}", mins2readable(total, false, false));
        }

        for anomaly in &report.anomalies {
            warning(describe_anomaly(anomaly, &settings));
        }
    }
    Ok(())
}

fn describe_anomaly(anomaly: &PunchAnomaly, settings: &EngineSettings) -> String {
    let local = |t| {
        settings
            .normalizer
            .to_local_time(t)
            .format("%Y-%m-%d %H:%M")
            .to_string()
    };
    match anomaly {
        PunchAnomaly::OrphanClockOut { at } => {
            format!("clock_out at {} has no matching clock_in", local(*at))
        }
        PunchAnomaly::ReplacedClockIn { previous, at } => format!(
            "clock_in at {} was never closed before clock_in at {}",
            local(*previous),
            local(*at)
        ),
        PunchAnomaly::UnclosedClockIn { at, clipped } => format!(
            "clock_in at {} is still open at period end ({})",
            local(*at),
            if *clipped { "clipped" } else { "not counted" }
        ),
    }
}
