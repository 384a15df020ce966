use crate::models::compliance::ComplianceViolation;
use crate::models::daily_hours::DailyHours;
use crate::models::timesheet::TimesheetTotals;
use serde::Serialize;

/// Flat daily-hours row.
#[derive(Serialize, Clone, Debug)]
pub struct DailyHoursExport {
    pub user_id: String,
    pub location_id: String,
    pub date: String,
    pub total_minutes: i64,
    pub shift_ids: String,
}

impl DailyHoursExport {
    pub fn from_day(user_id: &str, location_id: &str, day: &DailyHours) -> Self {
        Self {
            user_id: user_id.to_string(),
            location_id: location_id.to_string(),
            date: day.date.format("%Y-%m-%d").to_string(),
            total_minutes: day.total_minutes,
            shift_ids: day
                .shifts
                .iter()
                .map(|s| s.id.as_str())
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

/// One timesheet line for a worker and period.
#[derive(Serialize, Clone, Debug)]
pub struct TimesheetExport {
    pub user_id: String,
    pub location_id: String,
    pub period_start: String,
    pub period_end: String,
    pub regular_minutes: i64,
    pub overtime_minutes: i64,
    pub break_minutes: i64,
    pub planned_minutes: i64,
    pub variance_minutes: i64,
    pub days_worked: i64,
}

impl TimesheetExport {
    pub fn new(
        user_id: &str,
        location_id: &str,
        period: &crate::models::period::Period,
        totals: &TimesheetTotals,
    ) -> Self {
        Self {
            user_id: user_id.to_string(),
            location_id: location_id.to_string(),
            period_start: crate::core::tz::format_instant(period.start),
            period_end: crate::core::tz::format_instant(period.end),
            regular_minutes: totals.regular_minutes,
            overtime_minutes: totals.overtime_minutes,
            break_minutes: totals.break_minutes,
            planned_minutes: totals.planned_minutes,
            variance_minutes: totals.variance_minutes,
            days_worked: totals.days_worked,
        }
    }
}

/// Flat violation row; `details` is kept as a JSON string for CSV.
#[derive(Serialize, Clone, Debug)]
pub struct ViolationExport {
    pub org_id: String,
    pub location_id: String,
    pub user_id: String,
    pub rule_id: String,
    pub violation_date: String,
    pub severity: String,
    pub details: String,
    pub is_silenced: bool,
}

impl From<&ComplianceViolation> for ViolationExport {
    fn from(v: &ComplianceViolation) -> Self {
        Self {
            org_id: v.org_id.clone(),
            location_id: v.location_id.clone(),
            user_id: v.user_id.clone(),
            rule_id: v.rule_id.clone(),
            violation_date: v.violation_date.format("%Y-%m-%d").to_string(),
            severity: v.severity.to_db_str().to_string(),
            details: v.details.to_string(),
            is_silenced: v.is_silenced,
        }
    }
}
