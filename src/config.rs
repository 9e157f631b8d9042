//! Top-level application configuration.
//!
//! Configuration is stored in `.snackq/config.yaml` and includes:
//! - Which store backend holds the tickets
//! - How often wait times are refreshed
//! - Logging level and log file

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SnackError};
use crate::paths::{config_path, format_relative_path, resolve_in_root};

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Ticket store settings
    #[serde(default)]
    pub store: StoreConfig,

    /// Seconds between wait-time refreshes (default: 60)
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_secs: u64,

    /// Logging settings
    #[serde(default, skip_serializing_if = "LogConfig::is_default")]
    pub log: LogConfig,
}

fn default_refresh_interval() -> u64 {
    60
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            refresh_interval_secs: default_refresh_interval(),
            log: LogConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    File,
    /// Process-local; nothing survives exit.
    Memory,
}

/// Ticket store configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,

    /// Tickets file, relative to the snackq root unless absolute
    #[serde(default = "default_store_path")]
    pub path: PathBuf,

    /// Watch the tickets file for changes from other processes (default: true)
    #[serde(default = "default_watch")]
    pub watch: bool,
}

fn default_store_path() -> PathBuf {
    PathBuf::from("tickets.json")
}

fn default_watch() -> bool {
    true
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            path: default_store_path(),
            watch: default_watch(),
        }
    }
}

impl StoreConfig {
    pub fn resolved_path(&self) -> PathBuf {
        resolve_in_root(&self.path)
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default filter directive; `SNACKQ_LOG` takes precedence
    #[serde(default = "default_log_level")]
    pub level: String,

    /// File the TUI logs to, relative to the snackq root unless absolute
    #[serde(default = "default_log_file")]
    pub file: PathBuf,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("snackq.log")
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

impl LogConfig {
    /// Check if this config has default values
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn resolved_file(&self) -> PathBuf {
        resolve_in_root(&self.file)
    }
}

impl Config {
    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        let path = config_path();
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            SnackError::Io(std::io::Error::new(
                e.kind(),
                format!(
                    "Failed to read config at {}: {}",
                    format_relative_path(&path),
                    e
                ),
            ))
        })?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.refresh_interval_secs == 0 {
            return Err(SnackError::Config(
                "refresh_interval_secs must be at least 1".to_string(),
            ));
        }
        if self.store.path.as_os_str().is_empty() {
            return Err(SnackError::Config("store.path must not be empty".to_string()));
        }
        Ok(())
    }

    /// Get the wait-time refresh interval
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.store.backend, StoreBackend::File);
        assert_eq!(config.store.path, PathBuf::from("tickets.json"));
        assert!(config.store.watch);
        assert_eq!(config.refresh_interval(), Duration::from_secs(60));
        assert!(config.log.is_default());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = r#"
store:
  backend: memory
"#;
        let config: Config = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.store.backend, StoreBackend::Memory);
        assert!(config.store.watch);
        assert_eq!(config.refresh_interval_secs, 60);
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn test_unknown_backend_rejected() {
        let yaml = "store:\n  backend: firestore\n";
        assert!(serde_yaml_ng::from_str::<Config>(yaml).is_err());
    }

    #[test]
    fn test_zero_refresh_interval_invalid() {
        let config = Config {
            refresh_interval_secs: 0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(SnackError::Config(_))));
    }

    #[test]
    fn test_default_log_section_not_serialized() {
        let yaml = serde_yaml_ng::to_string(&Config::default()).unwrap();
        assert!(!yaml.contains("log:"));
    }

    #[test]
    #[serial]
    fn test_load_from_root() {
        let dir = TempDir::new().unwrap();
        // SAFETY: serialized with other env-mutating tests
        unsafe { std::env::set_var("SNACKQ_ROOT", dir.path()) };

        assert_eq!(Config::load().unwrap(), Config::default());

        fs::write(
            dir.path().join("config.yaml"),
            "refresh_interval_secs: 15\nstore:\n  watch: false\n",
        )
        .unwrap();
        let loaded = Config::load().unwrap();
        assert_eq!(loaded.refresh_interval(), Duration::from_secs(15));
        assert!(!loaded.store.watch);
        assert_eq!(
            loaded.store.resolved_path(),
            dir.path().join("tickets.json")
        );

        fs::write(dir.path().join("config.yaml"), "refresh_interval_secs: 0\n").unwrap();
        assert!(matches!(Config::load(), Err(SnackError::Config(_))));

        // SAFETY: serialized with other env-mutating tests
        unsafe { std::env::remove_var("SNACKQ_ROOT") };
    }
}
