use crate::config::Config;
use crate::core::logic::EngineSettings;
use crate::errors::{AppError, AppResult};
use std::fs;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(path: &str) -> AppResult<()> {
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        println!("{}", content);
        Ok(())
    }

    /// Resolve every engine setting, failing on the first invalid value.
    pub fn check(cfg: &Config) -> AppResult<EngineSettings> {
        if cfg.double_punch_threshold_secs < 0 {
            return Err(AppError::Config(format!(
                "double_punch_threshold_secs must be >= 0 (got {})",
                cfg.double_punch_threshold_secs
            )));
        }
        if cfg.weekly_standard_hours <= 0 {
            return Err(AppError::Config(format!(
                "weekly_standard_hours must be > 0 (got {})",
                cfg.weekly_standard_hours
            )));
        }
        EngineSettings::from_config(cfg)
    }

    pub fn edit(path: &str, editor: &Option<String>) -> AppResult<()> {
        let ed = editor
            .clone()
            .or_else(|| std::env::var("EDITOR").ok())
            .unwrap_or_else(|| {
                if cfg!(target_os = "windows") {
                    "notepad".into()
                } else {
                    "nano".into()
                }
            });

        Command::new(ed)
            .arg(path)
            .status()
            .map_err(|e| AppError::Config(e.to_string()))?;

        Ok(())
    }
}
