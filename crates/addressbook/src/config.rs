//! Configuration management for addressbook.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name under the platform config dir.
const APP_DIR_NAME: &str = "addressbook";

/// Default contact file, relative to the working directory.
pub const DEFAULT_CONTACTS_FILE: &str = "address_book.bin";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `ADDRESSBOOK_`)
/// 2. TOML config file at `~/.config/addressbook/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Storage configuration.
    pub storage: StorageConfig,
}

/// Storage-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the contact file.
    /// Defaults to `address_book.bin` in the working directory.
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration with an optional custom config path.
    ///
    /// A config file that does not exist contributes nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("ADDRESSBOOK_").split("_"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate one specific configuration file.
    ///
    /// Unlike [`Config::load_from`], the file must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable or invalid.
    pub fn check_file(config_path: &Path) -> Result<Self> {
        if !config_path.is_file() {
            return Err(Error::ConfigValidation {
                message: format!("configuration file {} not found", config_path.display()),
            });
        }
        Self::load_from(Some(config_path.to_path_buf()))
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(APP_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Replace the contact file path, e.g. from a command-line flag.
    #[must_use]
    pub fn with_contacts_path(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.storage.path = path;
        }
        self
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self
            .storage
            .path
            .as_deref()
            .is_some_and(|p| p.as_os_str().is_empty())
        {
            return Err(Error::ConfigValidation {
                message: "storage.path must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Get the contact file path, resolving the default if not set.
    #[must_use]
    pub fn contacts_path(&self) -> PathBuf {
        self.storage
            .path
            .clone()
            .unwrap_or_else(|| Path::new(DEFAULT_CONTACTS_FILE).to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.storage.path.is_none());
    }

    #[test]
    fn test_contacts_path_default() {
        let config = Config::default();
        assert_eq!(config.contacts_path(), PathBuf::from("address_book.bin"));
    }

    #[test]
    fn test_contacts_path_custom() {
        let mut config = Config::default();
        config.storage.path = Some(PathBuf::from("/custom/contacts.bin"));

        assert_eq!(config.contacts_path(), PathBuf::from("/custom/contacts.bin"));
    }

    #[test]
    fn test_with_contacts_path_overrides() {
        let mut config = Config::default();
        config.storage.path = Some(PathBuf::from("from_file.bin"));

        let config = config.with_contacts_path(Some(PathBuf::from("from_flag.bin")));
        assert_eq!(config.contacts_path(), PathBuf::from("from_flag.bin"));
    }

    #[test]
    fn test_with_contacts_path_none_keeps_existing() {
        let mut config = Config::default();
        config.storage.path = Some(PathBuf::from("from_file.bin"));

        let config = config.with_contacts_path(None);
        assert_eq!(config.contacts_path(), PathBuf::from("from_file.bin"));
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_empty_path() {
        let mut config = Config::default();
        config.storage.path = Some(PathBuf::new());

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("storage.path"));
    }

    #[test]
    fn test_default_config_path() {
        let path = Config::default_config_path();
        assert!(path.to_string_lossy().contains("addressbook"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        let result = Config::load_from(Some(PathBuf::from("/nonexistent/config.toml")));
        assert!(result.is_ok());
    }

    #[test]
    fn test_load_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        std::fs::write(&config_path, "[storage]\npath = \"/data/book.bin\"\n").unwrap();

        let config = Config::load_from(Some(config_path)).unwrap();
        assert_eq!(config.contacts_path(), PathBuf::from("/data/book.bin"));
    }

    #[test]
    fn test_load_rejects_empty_path_in_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        std::fs::write(&config_path, "[storage]\npath = \"\"\n").unwrap();

        let result = Config::load_from(Some(config_path));
        assert!(matches!(result, Err(Error::ConfigValidation { .. })));
    }

    #[test]
    fn test_load_toml_top_level_table_is_storage_section() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        std::fs::write(&config_path, "[storage]\npath = \"relative/book.bin\"\n").unwrap();

        let config = Config::load_from(Some(config_path)).unwrap();
        assert_eq!(
            config.storage.path,
            Some(PathBuf::from("relative/book.bin"))
        );
    }

    #[test]
    fn test_check_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::check_file(&dir.path().join("absent.toml"));

        let err = result.unwrap_err().to_string();
        assert!(err.contains("not found"));
    }

    #[test]
    fn test_check_file_valid() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        std::fs::write(&config_path, "[storage]\npath = \"book.bin\"\n").unwrap();

        let config = Config::check_file(&config_path).unwrap();
        assert_eq!(config.contacts_path(), PathBuf::from("book.bin"));
    }

    #[test]
    fn test_check_file_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        std::fs::write(&config_path, "[storage\npath = 3\n").unwrap();

        let result = Config::check_file(&config_path);
        assert!(matches!(result, Err(Error::ConfigLoad(_))));
    }

    #[test]
    fn test_storage_config_serialize() {
        let storage = StorageConfig {
            path: Some(PathBuf::from("book.bin")),
        };
        let json = serde_json::to_string(&storage).unwrap();
        assert!(json.contains("book.bin"));
    }
}
