use crate::errors::{AppError, AppResult};
use crate::models::{IconType, Priority};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_EXPORT_FILE: &str = "pc-death-red-death.json";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default)]
    pub default_priority: Priority,
    #[serde(default)]
    pub default_icon: IconType,
    #[serde(default = "default_export_file")]
    pub export_file: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_export_file() -> String {
    DEFAULT_EXPORT_FILE.to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file().to_string_lossy().to_string())
    }
}

impl Config {
    fn with_database(database: String) -> Self {
        Self {
            database,
            default_priority: Priority::default(),
            default_icon: IconType::default(),
            export_file: default_export_file(),
            separator_char: default_separator_char(),
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("pcdeath")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".pcdeath")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("pcdeath.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("pcdeath.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        let mut cfg: Config = serde_yaml::from_str(&content)?;
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        Ok(cfg)
    }

    /// Resolve the database path: an explicit path is used as given (with
    /// `~/` expanded), otherwise the default file in the config directory.
    pub fn resolve_db_path(custom_name: Option<&str>) -> PathBuf {
        match custom_name {
            Some(name) => expand_tilde(name),
            None => Self::database_file(),
        }
    }

    /// Initialize configuration and database files.
    ///
    /// In test mode the config file is left untouched.
    pub fn init_all(custom_name: Option<&str>, is_test: bool) -> AppResult<Config> {
        let db_path = Self::resolve_db_path(custom_name);
        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let config = Config::with_database(db_path.to_string_lossy().to_string());

        if !is_test {
            fs::create_dir_all(Self::config_dir())?;
            let yaml = serde_yaml::to_string(&config)?;
            fs::write(Self::config_file(), yaml)?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        Ok(config)
    }
}
