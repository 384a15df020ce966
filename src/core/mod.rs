pub mod calculator;
pub mod clock;
pub mod compliance;
pub mod config;
pub mod log;
pub mod logic;
pub mod punch;
pub mod report;
pub mod rules;
pub mod tz;
