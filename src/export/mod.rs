pub(crate) mod json_csv;
pub mod logic;
pub(crate) mod model;

pub use logic::ExportLogic;
pub use model::{DailyHoursExport, TimesheetExport, ViolationExport};

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for exports.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Which derived report to write.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportKind {
    Hours,
    Timesheet,
    Violations,
}
