use crate::core::metrics::DEFAULT_BREAK_ALLOWANCE_SECS;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_break_allowance")]
    pub break_allowance_secs: u64,
    #[serde(default = "default_true")]
    pub deduct_exceeded_break: bool,
    #[serde(default = "default_performance_marker")]
    pub performance_marker: String,
    #[serde(default = "default_status_marker")]
    pub status_marker: String,
    #[serde(default = "default_export_format")]
    pub default_export_format: String,
}

fn default_break_allowance() -> u64 {
    DEFAULT_BREAK_ALLOWANCE_SECS
}
fn default_true() -> bool {
    true
}
fn default_performance_marker() -> String {
    "Agent Performance Summary".to_string()
}
fn default_status_marker() -> String {
    "Agent Status Summary".to_string()
}
fn default_export_format() -> String {
    "csv".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file())
    }
}

impl Config {
    fn with_database(db_path: PathBuf) -> Self {
        Self {
            database: db_path.to_string_lossy().to_string(),
            break_allowance_secs: default_break_allowance(),
            deduct_exceeded_break: true,
            performance_marker: default_performance_marker(),
            status_marker: default_status_marker(),
            default_export_format: default_export_format(),
        }
    }

    /// Return the standard configuration directory (`~/.rtaboard`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rtaboard")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtaboard.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rtaboard.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();

        // DB name: user provided (absolute or relative to the config dir) or default
        let db_path = match custom_name {
            Some(name) if Path::new(&name).is_absolute() => PathBuf::from(name),
            Some(name) => dir.join(name),
            None => Self::database_file(),
        };

        let config = Self::with_database(db_path.clone());

        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = config.to_yaml()?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(config)
    }
}
