use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();
        let path_str = path.to_string_lossy().to_string();

        if *print_config {
            if path.exists() {
                ConfigLogic::print(&path_str)?;
            } else {
                warning(format!("No config file at {path_str}; defaults in use:"));
                let yaml = serde_yaml::to_string(cfg)
                    .map_err(|e| AppError::Config(format!("cannot render defaults: {e}")))?;
                println!("{yaml}");
            }
        }

        if *check {
            let settings = ConfigLogic::check(cfg)?;
            success(format!(
                "Configuration OK (timezone {}, {}h/week, double-punch window {}s)",
                settings.normalizer.tz(),
                settings.overtime.weekly_minutes / 60,
                cfg.double_punch_threshold_secs
            ));
        }

        if *edit_config {
            ConfigLogic::edit(&path_str, editor)?;
        }
    }
    Ok(())
}
