use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Labor-law rules the evaluator knows how to apply.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RuleKey {
    #[serde(rename = "daily_rest_11h")]
    DailyRest,
    #[serde(rename = "max_hours_per_day_10h")]
    MaxHoursPerDay,
    #[serde(rename = "max_hours_per_week_48h")]
    MaxHoursPerWeek,
}

impl RuleKey {
    pub const ALL: [RuleKey; 3] = [
        RuleKey::DailyRest,
        RuleKey::MaxHoursPerDay,
        RuleKey::MaxHoursPerWeek,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKey::DailyRest => "daily_rest_11h",
            RuleKey::MaxHoursPerDay => "max_hours_per_day_10h",
            RuleKey::MaxHoursPerWeek => "max_hours_per_week_48h",
        }
    }

    pub fn from_key(s: &str) -> Option<Self> {
        match s {
            "daily_rest_11h" => Some(RuleKey::DailyRest),
            "max_hours_per_day_10h" => Some(RuleKey::MaxHoursPerDay),
            "max_hours_per_week_48h" => Some(RuleKey::MaxHoursPerWeek),
            _ => None,
        }
    }

    /// Threshold used when the rule row carries none.
    pub fn default_hours(&self) -> f64 {
        match self {
            RuleKey::DailyRest => 11.0,
            RuleKey::MaxHoursPerDay => 10.0,
            RuleKey::MaxHoursPerWeek => 48.0,
        }
    }

    /// Excess (in hours) above which a cap violation becomes critical.
    /// The rest rule only ever warns.
    pub fn critical_excess_hours(&self) -> Option<f64> {
        match self {
            RuleKey::DailyRest => None,
            RuleKey::MaxHoursPerDay => Some(2.0),
            RuleKey::MaxHoursPerWeek => Some(8.0),
        }
    }
}

impl fmt::Display for RuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ThresholdValue {
    pub hours: Option<f64>,
}

/// Configured rule, as stored by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComplianceRule {
    pub id: String,
    pub rule_key: String,
    pub is_active: bool,
    pub threshold_value: ThresholdValue,
}

impl ComplianceRule {
    pub fn new(id: impl Into<String>, key: RuleKey, hours: f64) -> Self {
        Self {
            id: id.into(),
            rule_key: key.as_str().to_string(),
            is_active: true,
            threshold_value: ThresholdValue { hours: Some(hours) },
        }
    }

    pub fn key(&self) -> Option<RuleKey> {
        RuleKey::from_key(&self.rule_key)
    }

    /// Configured threshold, falling back to the rule's default.
    pub fn threshold_hours(&self) -> Option<f64> {
        let key = self.key()?;
        Some(self.threshold_value.hours.unwrap_or_else(|| key.default_hours()))
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Critical,
}

impl Severity {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Critical => "critical",
        }
    }
}

/// A rule breach. Identity and creation time are assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComplianceViolation {
    pub org_id: String,
    pub location_id: String,
    pub user_id: String,
    pub rule_id: String,
    pub violation_date: NaiveDate,
    pub severity: Severity,
    pub details: serde_json::Value,
    pub is_silenced: bool,
}
