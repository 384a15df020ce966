pub mod clock_event;
pub mod compliance;
pub mod daily_hours;
pub mod event_kind;
pub mod period;
pub mod shift;
pub mod timesheet;
