//! Time utilities: duration parsing and instant formatting for the CLI.

use crate::errors::{AppError, AppResult};
use regex::Regex;
use std::sync::LazyLock;

static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:(\d+(?:\.\d+)?)\s*h)?\s*(?:(\d+)\s*m)?\s*$").expect("valid duration regex")
});

/// Parse an hour amount: `11`, `10.5`, `11h`, `8h30m`, `45m`.
pub fn parse_hours(input: &str) -> AppResult<f64> {
    let trimmed = input.trim();
    if let Ok(h) = trimmed.parse::<f64>() {
        return Ok(h);
    }

    let caps = DURATION_RE
        .captures(trimmed)
        .filter(|c| c.get(1).is_some() || c.get(2).is_some())
        .ok_or_else(|| AppError::InvalidDuration(input.to_string()))?;

    let hours = caps
        .get(1)
        .map(|m| m.as_str().parse::<f64>())
        .transpose()
        .map_err(|_| AppError::InvalidDuration(input.to_string()))?
        .unwrap_or(0.0);
    let minutes = caps
        .get(2)
        .map(|m| m.as_str().parse::<f64>())
        .transpose()
        .map_err(|_| AppError::InvalidDuration(input.to_string()))?
        .unwrap_or(0.0);

    Ok(hours + minutes / 60.0)
}
