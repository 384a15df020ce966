//! Formatting utilities used for CLI and export outputs.

use regex::Regex;
use std::sync::LazyLock;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI regex"));

pub fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}

/// Terminal columns taken by `s` once color codes are removed.
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

/// Cut `s` to `width` terminal columns, ending with `...` when shortened.
pub fn truncate_visible(s: &str, width: usize) -> String {
    let plain = strip_ansi(s);
    if UnicodeWidthStr::width(plain.as_str()) <= width {
        return plain;
    }

    let budget = width.saturating_sub(3);
    let mut used = 0;
    let mut out = String::new();
    for c in plain.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

pub fn mins2readable(mins: i64, want_sign: bool, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 {
        "-"
    } else {
        ""
    };

    if short {
        // +02:25 / -01:10
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        // +02h 25m / -01h 10m
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}

/// Hours with at most two decimals, without trailing zeros (`10`, `10.5`).
pub fn hours2readable(hours: f64) -> String {
    let s = format!("{:.2}", hours);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
