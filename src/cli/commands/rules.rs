use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::rules::RulesLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::formatting::hours2readable;
use crate::utils::table::{Column, Table};
use crate::utils::time::parse_hours;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Rules {
        list,
        set,
        hours,
        enable,
        disable,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        if let (Some(key), Some(h)) = (set, hours) {
            let value = parse_hours(h)?;
            RulesLogic::set_threshold(&mut pool, key, value)?;
            success(format!("{key} threshold set to {}h", hours2readable(value)));
        }
        if let Some(key) = enable {
            RulesLogic::set_active(&mut pool, key, true)?;
            success(format!("{key} enabled"));
        }
        if let Some(key) = disable {
            RulesLogic::set_active(&mut pool, key, false)?;
            success(format!("{key} disabled"));
        }

        let nothing_else = set.is_none() && enable.is_none() && disable.is_none();
        if *list || nothing_else {
            let mut table = Table::new(vec![
                Column::new("ID", 18),
                Column::new("KEY", 24),
                Column::new("ACTIVE", 7),
                Column::new("THRESHOLD", 10),
            ]);
            for rule in RulesLogic::list(&mut pool)? {
                let threshold = rule
                    .threshold_hours()
                    .map(|h| format!("{}h", hours2readable(h)))
                    .unwrap_or_else(|| "--".to_string());
                table.add_row(vec![
                    rule.id.clone(),
                    rule.rule_key.clone(),
                    if rule.is_active { "yes" } else { "no" }.to_string(),
                    threshold,
                ]);
            }
            print!("{}", table.render());
        }
    }
    Ok(())
}
