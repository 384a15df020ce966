use crate::core::logic::EngineSettings;
use crate::core::report::{ReportLogic, Worker};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{DailyHoursExport, TimesheetExport, ViolationExport};
use crate::export::{ExportFormat, ReportKind};
use crate::models::period::Period;
use serde::Serialize;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Compute `report` for the worker and period, then write it to `file`.
    ///
    /// An existing file is only replaced when `force` is set.
    #[allow(clippy::too_many_arguments)]
    pub fn export(
        pool: &mut DbPool,
        settings: &EngineSettings,
        worker: &Worker,
        period: &Period,
        report: ReportKind,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);
        if path.exists() && !force {
            return Err(AppError::Export(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        match report {
            ReportKind::Hours => {
                let days = ReportLogic::daily_hours(pool, settings, worker, period)?.days;
                let rows: Vec<DailyHoursExport> = days
                    .iter()
                    .map(|d| DailyHoursExport::from_day(&worker.user_id, &worker.location_id, d))
                    .collect();
                write_rows(&rows, format, path)
            }
            ReportKind::Timesheet => {
                let totals = ReportLogic::timesheet(pool, settings, worker, period)?;
                let rows = vec![TimesheetExport::new(
                    &worker.user_id,
                    &worker.location_id,
                    period,
                    &totals,
                )];
                write_rows(&rows, format, path)
            }
            ReportKind::Violations => {
                let violations = ReportLogic::violations(pool, settings, worker, period)?;
                let rows: Vec<ViolationExport> =
                    violations.iter().map(ViolationExport::from).collect();
                write_rows(&rows, format, path)
            }
        }
    }
}

fn write_rows<T: Serialize>(rows: &[T], format: ExportFormat, path: &Path) -> AppResult<()> {
    match format {
        ExportFormat::Csv => export_csv(rows, path),
        ExportFormat::Json => export_json(rows, path),
    }
}
