//! Application configuration.
//!
//! Values come from an optional TOML file (`eshop.toml` in the working
//! directory unless `--config` names another) and are then overridden by
//! command-line flags.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "eshop.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Document store configuration.
    #[serde(default)]
    pub store: StoreConfig,

    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,
}

impl AppConfig {
    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values serde cannot express as types.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            self.store.buffer_size > 0,
            "store.buffer_size must be at least 1"
        );
        Ok(())
    }

    /// Loads `explicit` if given, else [`DEFAULT_CONFIG_FILE`] if it exists,
    /// else the defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.exists() {
                    Self::load(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Applies command-line overrides on top of the file values.
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(dir) = overrides.data_dir {
            self.store.data_dir = Some(dir);
        }
        if overrides.in_memory {
            self.store.data_dir = None;
        }
        if let Some(filter) = overrides.log {
            self.log.filter = filter;
        }
        self
    }
}

/// Flag values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub data_dir: Option<PathBuf>,
    pub in_memory: bool,
    pub log: Option<String>,
}

/// Document store configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory holding `products.json` and `orders.json`.
    /// `None` keeps both collections in memory only.
    #[serde(default = "default_data_dir")]
    pub data_dir: Option<PathBuf>,

    /// Request channel capacity per collection.
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,
}

fn default_data_dir() -> Option<PathBuf> {
    Some(PathBuf::from(".eshop"))
}

fn default_buffer_size() -> usize {
    32
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            buffer_size: default_buffer_size(),
        }
    }
}

impl StoreConfig {
    pub fn in_memory() -> Self {
        Self {
            data_dir: None,
            ..Self::default()
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default `tracing` filter; `RUST_LOG` wins when set.
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "warn".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::parse("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.store.data_dir, Some(PathBuf::from(".eshop")));
        assert_eq!(config.store.buffer_size, 32);
        assert_eq!(config.log.filter, "warn");
    }

    #[test]
    fn test_parse_partial_file() {
        let config = AppConfig::parse(
            r#"
[store]
data_dir = "/var/lib/eshop"

[log]
filter = "eshop=debug"
"#,
        )
        .unwrap();
        assert_eq!(config.store.data_dir, Some(PathBuf::from("/var/lib/eshop")));
        assert_eq!(config.store.buffer_size, 32);
        assert_eq!(config.log.filter, "eshop=debug");
    }

    #[test]
    fn test_parse_rejects_wrong_types() {
        assert!(AppConfig::parse("[store]\nbuffer_size = \"many\"").is_err());
    }

    #[test]
    fn test_zero_buffer_size_is_rejected() {
        let err = AppConfig::parse("[store]\nbuffer_size = 0").unwrap_err();
        assert!(err.to_string().contains("store.buffer_size"));
        assert!(AppConfig::parse("[store]\nbuffer_size = 1").is_ok());
    }

    #[test]
    fn test_flags_override_file() {
        let config = AppConfig::default().with_overrides(Overrides {
            data_dir: Some(PathBuf::from("data")),
            in_memory: false,
            log: Some("info".into()),
        });
        assert_eq!(config.store.data_dir, Some(PathBuf::from("data")));
        assert_eq!(config.log.filter, "info");

        let config = config.with_overrides(Overrides {
            in_memory: true,
            ..Overrides::default()
        });
        assert_eq!(config.store.data_dir, None);
        assert_eq!(config.log.filter, "info");
    }

    #[test]
    fn test_load_missing_file_names_path() {
        let err = AppConfig::load(Path::new("/nonexistent/eshop.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/eshop.toml"));
    }
}
