pub mod daily_hours;
pub mod overtime;
pub mod timesheet;
