use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::compliance::{ComplianceRule, RuleKey};

/// High-level business logic for the `rules` command.
pub struct RulesLogic;

impl RulesLogic {
    pub fn list(pool: &mut DbPool) -> AppResult<Vec<ComplianceRule>> {
        queries::load_rules(&pool.conn)
    }

    pub fn set_threshold(pool: &mut DbPool, key: &str, hours: f64) -> AppResult<()> {
        let key = Self::known_key(key)?;
        if !hours.is_finite() || hours <= 0.0 {
            return Err(AppError::InvalidDuration(hours.to_string()));
        }
        Self::expect_row(queries::set_rule_threshold(&pool.conn, key.as_str(), hours)?, key)?;
        ttlog(&pool.conn, "rule_threshold", key.as_str(), &format!("{hours}h"))
    }

    pub fn set_active(pool: &mut DbPool, key: &str, active: bool) -> AppResult<()> {
        let key = Self::known_key(key)?;
        Self::expect_row(queries::set_rule_active(&pool.conn, key.as_str(), active)?, key)?;
        let op = if active { "rule_enable" } else { "rule_disable" };
        ttlog(&pool.conn, op, key.as_str(), "")
    }

    fn known_key(key: &str) -> AppResult<RuleKey> {
        RuleKey::from_key(key).ok_or_else(|| {
            let known: Vec<&str> = RuleKey::ALL.iter().map(RuleKey::as_str).collect();
            AppError::UnknownRule(format!("{key} (known: {})", known.join(", ")))
        })
    }

    fn expect_row(touched: usize, key: RuleKey) -> AppResult<()> {
        if touched == 0 {
            return Err(AppError::UnknownRule(format!(
                "{key} is not configured (run `init` first)"
            )));
        }
        Ok(())
    }
}
