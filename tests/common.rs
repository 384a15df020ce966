#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, NaiveDate, Utc};
use shiftguard::core::tz::parse_instant;
use shiftguard::models::clock_event::ClockEvent;
use shiftguard::models::daily_hours::DailyHours;
use shiftguard::models::event_kind::EventKind;
use shiftguard::models::period::Period;
use shiftguard::models::shift::Shift;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const USER: &str = "alice";
pub const LOCATION: &str = "bistro";
pub const ORG: &str = "org-1";

pub fn sg() -> Command {
    cargo_bin_cmd!("shiftguard")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_shiftguard.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_shiftguard_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Fresh database with schema and default rules.
pub fn init_db(name: &str) -> String {
    let db_path = setup_test_db(name);
    sg().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();
    db_path
}

pub fn at(s: &str) -> DateTime<Utc> {
    parse_instant(s).expect("valid test instant")
}

pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

pub fn ev(kind: EventKind, when: &str) -> ClockEvent {
    ClockEvent::new(USER, LOCATION, ORG, kind, at(when))
}

pub fn period(start: &str, end: &str) -> Period {
    Period::new(at(start), at(end))
}

pub fn shift(id: &str, start: &str, end: &str, break_minutes: i64) -> Shift {
    Shift::planned(id, ORG, LOCATION, USER, at(start), at(end), break_minutes)
}

pub fn daily(date: &str, minutes: i64) -> DailyHours {
    DailyHours {
        date: day(date),
        total_minutes: minutes,
        shifts: Vec::new(),
    }
}
