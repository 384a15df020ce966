use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_org")]
    pub default_org: String,
    #[serde(default = "default_double_punch_secs")]
    pub double_punch_threshold_secs: i64,
    #[serde(default = "default_weekly_hours")]
    pub weekly_standard_hours: i64,
    #[serde(default)]
    pub clip_open_daily_punches: bool,
}

fn default_timezone() -> String {
    "Europe/Paris".to_string()
}
fn default_org() -> String {
    "default".to_string()
}
fn default_double_punch_secs() -> i64 {
    crate::core::punch::DEFAULT_DOUBLE_PUNCH_SECS
}
fn default_weekly_hours() -> i64 {
    crate::core::calculator::overtime::DEFAULT_WEEKLY_STANDARD_HOURS
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(&Self::database_file())
    }
}

impl Config {
    fn with_database(db_path: &Path) -> Self {
        Self {
            database: db_path.to_string_lossy().to_string(),
            timezone: default_timezone(),
            default_org: default_org(),
            double_punch_threshold_secs: default_double_punch_secs(),
            weekly_standard_hours: default_weekly_hours(),
            clip_open_daily_punches: false,
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("shiftguard")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".shiftguard")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("shiftguard.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("shiftguard.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    /// Initialize configuration and database files
    pub fn init_all(db_override: Option<&str>, is_test: bool) -> io::Result<Self> {
        let dir = Self::config_dir();

        let db_path = match db_override {
            Some(name) => {
                let p = Path::new(name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => Self::database_file(),
        };

        let config = Self::with_database(&db_path);

        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = serde_yaml::to_string(&config).map_err(io::Error::other)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(config)
    }
}
