//! Configuration module for folio
//!
//! Manages application configuration: gallery branding, page size, and the
//! portfolio data file. Configuration is stored in the user's config
//! directory.

mod setup;

pub use setup::first_time_setup;

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default number of items per gallery page
pub const DEFAULT_PAGE_SIZE: usize = 12;

fn default_brand_name() -> String {
    "folio".to_string()
}

const fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FolioConfig {
    /// Name shown in the gallery header
    #[serde(default = "default_brand_name")]
    pub brand_name: String,

    /// Items per page; must be at least 1
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Path to the portfolio data file (JSON array of items)
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            brand_name: default_brand_name(),
            page_size: DEFAULT_PAGE_SIZE,
            data_file: None,
            quiet: false,
        }
    }
}

impl FolioConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        let folio_config_dir = config_dir.join("folio");
        Ok(folio_config_dir.join("config.toml"))
    }

    /// Load configuration from file, creating default if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or
    /// created, or if its values fail validation.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save()?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(config_path).format(FileFormat::Toml))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be
    /// written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(&config_path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Validate field constraints
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `page_size` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::Message(
                "page_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration, running first-time setup if config doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if loading or creating the configuration fails.
    pub fn load_or_setup() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load()
        } else {
            first_time_setup()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FolioConfig::default();
        assert_eq!(config.brand_name, "folio");
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert!(config.data_file.is_none());
        assert!(!config.quiet);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let config = FolioConfig {
            page_size: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = FolioConfig {
            brand_name: "Jane Doe".to_string(),
            page_size: 9,
            data_file: Some(PathBuf::from("/tmp/portfolio.json")),
            quiet: true,
        };

        let toml_string = toml::to_string_pretty(&config).unwrap();
        let parsed: FolioConfig = toml::from_str(&toml_string).unwrap();

        assert_eq!(parsed.brand_name, "Jane Doe");
        assert_eq!(parsed.page_size, 9);
        assert_eq!(parsed.data_file, config.data_file);
        assert!(parsed.quiet);
    }

    #[test]
    fn test_sparse_toml_uses_defaults() {
        let parsed: FolioConfig = toml::from_str("brand_name = \"Studio\"").unwrap();
        assert_eq!(parsed.brand_name, "Studio");
        assert_eq!(parsed.page_size, DEFAULT_PAGE_SIZE);
        assert!(parsed.data_file.is_none());
    }

    #[test]
    fn test_parse_from_file_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "page_size = 6\nquiet = true\n").unwrap();

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()
            .unwrap();
        let config: FolioConfig = settings.try_deserialize().unwrap();

        assert_eq!(config.page_size, 6);
        assert!(config.quiet);
        assert!(config.validate().is_ok());
    }
}
