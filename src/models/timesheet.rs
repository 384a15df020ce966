use serde::Serialize;

#[derive(Debug, Default, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct TimesheetTotals {
    pub regular_minutes: i64,
    pub overtime_minutes: i64,
    pub break_minutes: i64,
    pub planned_minutes: i64,
    pub variance_minutes: i64,
    pub days_worked: i64,
}

impl TimesheetTotals {
    pub fn worked_minutes(&self) -> i64 {
        self.regular_minutes + self.overtime_minutes
    }
}
