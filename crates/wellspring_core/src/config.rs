//! Configuration system for Wellspring
//!
//! Settings live in a TOML file. Every section has defaults, so an empty or
//! missing file is a valid configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    Result,
    cycle::{DEFAULT_CYCLE_LENGTH, MAX_CYCLE_LENGTH, MIN_CYCLE_LENGTH},
    error::ConfigError,
    hydration::HydrationSettings,
    quotes::{self, Quote},
    store::JsonFileStore,
};

/// Environment variable that overrides `data.path`.
pub const DATA_PATH_ENV: &str = "WELLSPRING_DATA_PATH";

/// Resolve a path relative to a base directory
/// If the path is absolute, return it as-is
/// If the path is relative, resolve it relative to the base directory
fn resolve_path(base_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

/// Top-level configuration for Wellspring
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WellspringConfig {
    /// Where tracked records are stored
    #[serde(default)]
    pub data: DataConfig,

    /// Glass size and water targets
    #[serde(default)]
    pub hydration: HydrationSettings,

    /// Cycle tracking defaults
    #[serde(default)]
    pub cycle: CycleConfig,

    /// Replacement quote list; the built-in list is used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quotes: Option<Vec<Quote>>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    /// JSON data file
    #[serde(default = "JsonFileStore::default_path")]
    pub path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: JsonFileStore::default_path(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleConfig {
    /// Length used when the user records a start without a length
    #[serde(default = "default_cycle_length")]
    pub default_length_days: i64,
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            default_length_days: default_cycle_length(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when RUST_LOG is unset, e.g. "info" or
    /// "wellspring_core=debug"
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_cycle_length() -> i64 {
    DEFAULT_CYCLE_LENGTH
}

fn default_log_level() -> String {
    "info".to_string()
}

impl WellspringConfig {
    /// The configured quote list, or the built-in one.
    pub fn quote_list(&self) -> &[Quote] {
        match &self.quotes {
            Some(list) => list,
            None => quotes::builtin_quotes(),
        }
    }

    pub fn store(&self) -> JsonFileStore {
        JsonFileStore::new(self.data.path.clone())
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) {
        if let Ok(path) = std::env::var(DATA_PATH_ENV) {
            if !path.is_empty() {
                debug!("Overriding data path from {}: {}", DATA_PATH_ENV, path);
                self.data.path = PathBuf::from(path);
            }
        }
    }

    /// Check values that would make the calculators meaningless
    pub fn validate(&self, config_path: &Path) -> Result<()> {
        let fail = |field: &str, expected: &str, message: String| {
            crate::CoreError::config_error(
                config_path.display().to_string(),
                field,
                expected,
                ConfigError::Validation(message),
            )
        };

        if self.hydration.glass_size_ml == 0 {
            return Err(fail(
                "hydration.glass_size_ml",
                "a positive number of millilitres",
                "glass size must be positive".to_string(),
            ));
        }

        if !self.hydration.default_target_ml.is_finite() || self.hydration.default_target_ml <= 0.0
        {
            return Err(fail(
                "hydration.default_target_ml",
                "a positive number of millilitres",
                format!(
                    "default target must be positive, got {}",
                    self.hydration.default_target_ml
                ),
            ));
        }

        if !(MIN_CYCLE_LENGTH..=MAX_CYCLE_LENGTH).contains(&self.cycle.default_length_days) {
            return Err(fail(
                "cycle.default_length_days",
                "a length between 21 and 35 days",
                format!(
                    "default cycle length {} is out of range",
                    self.cycle.default_length_days
                ),
            ));
        }

        if matches!(&self.quotes, Some(list) if list.is_empty()) {
            return Err(fail(
                "quotes",
                "at least one quote, or no quotes section",
                "quote list is empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<WellspringConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::CoreError::config_error(
            path.display().to_string(),
            "file",
            "readable TOML file",
            ConfigError::Io(e.to_string()),
        )
    })?;

    let mut config: WellspringConfig = toml::from_str(&content).map_err(|e| {
        crate::CoreError::config_error(
            path.display().to_string(),
            "content",
            "valid TOML configuration",
            ConfigError::TomlParse(e.to_string()),
        )
    })?;

    // Resolve the data file relative to the config file's directory
    let base_dir = path.parent().unwrap_or(Path::new("."));
    config.data.path = resolve_path(base_dir, &config.data.path);

    config.apply_env_overrides();
    config.validate(path)?;

    Ok(config)
}

/// Save configuration to a TOML file
pub fn save_config(config: &WellspringConfig, path: &Path) -> Result<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                crate::CoreError::config_error(
                    parent.display().to_string(),
                    "directory",
                    "writable directory",
                    ConfigError::Io(e.to_string()),
                )
            })?;
        }
    }

    let content = toml::to_string_pretty(config).map_err(|e| {
        crate::CoreError::config_error(
            path.display().to_string(),
            "serialization",
            "serializable config structure",
            ConfigError::TomlSerialize(e.to_string()),
        )
    })?;

    std::fs::write(path, content).map_err(|e| {
        crate::CoreError::config_error(
            path.display().to_string(),
            "file",
            "writable file location",
            ConfigError::Io(e.to_string()),
        )
    })?;

    Ok(())
}

/// Standard config file locations
pub fn config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // Project-specific config
    paths.push(PathBuf::from("wellspring.toml"));

    // User config directory
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("wellspring").join("config.toml"));
    }

    // Home directory fallback
    if let Some(home_dir) = dirs::home_dir() {
        paths.push(home_dir.join(".wellspring").join("config.toml"));
    }

    paths
}

/// Load configuration from standard locations
pub fn load_config_from_standard_locations() -> Result<WellspringConfig> {
    for path in config_paths() {
        if path.exists() {
            return load_config(&path);
        }
    }

    // No config found, return default
    let mut config = WellspringConfig::default();
    config.apply_env_overrides();
    Ok(config)
}
