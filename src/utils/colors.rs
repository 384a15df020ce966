/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const WHITE: &str = "\x1b[37m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Variance color:
/// \>0 → green (worked more than planned)
/// \<0 → red
/// 0 → reset
pub fn color_for_variance(value: i64) -> &'static str {
    if value > 0 {
        GREEN
    } else if value < 0 {
        RED
    } else {
        RESET
    }
}

pub fn color_for_severity(severity: crate::models::compliance::Severity) -> &'static str {
    match severity {
        crate::models::compliance::Severity::Warning => YELLOW,
        crate::models::compliance::Severity::Critical => RED,
    }
}

/// Grey out empty values (`0`, `--:--`, `00h 00m`).
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "--:--" || v == "00h 00m" || v == "0" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
