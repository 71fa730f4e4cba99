//! Configuration management for layoutfix.
//!
//! This crate provides configuration loading and saving in TOML format
//! under the XDG config directory.

mod settings;
mod xdg;

pub use settings::{Config, GeneralSettings, LoggingSettings};
pub use xdg::{get_cache_dir, get_config_dir};

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Default values as constants
pub mod defaults {
    use layoutfix_keyboard::Language;

    pub const LANG_FROM: Language = Language::Eng;
    pub const LANG_TO: Language = Language::Ukr;
    pub const MIN_LOG_LEVEL: &str = "info";
    pub const LOG_FILE_NAME: &str = "layoutfix.log";
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// On first run, creates config file with default values.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load configuration from `path`.
    ///
    /// A missing file is created with default values. Missing keys are
    /// filled with defaults and the file is rewritten in normalized form.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let original_content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = Self::validate_content(&original_content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;

        // Serialize back to get normalized content
        let normalized_content = toml::to_string_pretty(&config)?;
        if original_content != normalized_content {
            config.save_to(path)?;
        }

        Ok(config)
    }

    /// Save configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    /// Get path to config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(get_config_dir()?.join("config.toml"))
    }

    /// Log file path: the configured one, or the cache directory default.
    pub fn log_file_path(&self) -> Result<PathBuf> {
        match &self.logging.file_path {
            Some(path) => Ok(PathBuf::from(path)),
            None => Ok(get_cache_dir()?.join(defaults::LOG_FILE_NAME)),
        }
    }

    /// Validate config content.
    pub fn validate_content(content: &str) -> Result<Config> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("{}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use layoutfix_keyboard::Language;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.general.lang_from, Language::Eng);
        assert_eq!(config.general.lang_to, Language::Ukr);
        assert!(!config.general.copy_to_clipboard);
        assert_eq!(config.logging.min_level, "info");
        assert_eq!(config.logging.file_path, None);
    }

    #[test]
    fn test_partial_content_uses_defaults() {
        let config = Config::validate_content("[general]\nlang_to = \"rus\"\n").unwrap();
        assert_eq!(config.general.lang_from, Language::Eng);
        assert_eq!(config.general.lang_to, Language::Rus);
        assert_eq!(config.logging, LoggingSettings::default());
    }

    #[test]
    fn test_unknown_language_is_rejected() {
        assert!(Config::validate_content("[general]\nlang_from = \"deu\"\n").is_err());
    }

    #[test]
    fn test_first_load_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.exists());

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("lang_from = \"eng\""));
        assert!(written.contains("lang_to = \"ukr\""));
    }

    #[test]
    fn test_load_normalizes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[general]\nlang_from = \"ukr\"\nlang_to = \"eng\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.general.lang_from, Language::Ukr);
        assert_eq!(config.general.lang_to, Language::Eng);

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("[logging]"));
        assert!(written.contains("min_level = \"info\""));
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.general.lang_from = Language::Rus;
        config.general.copy_to_clipboard = true;
        config.logging.file_path = Some("/tmp/layoutfix-test.log".to_string());
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_log_file_path_override() {
        let mut config = Config::default();
        config.logging.file_path = Some("/tmp/custom.log".to_string());
        assert_eq!(config.log_file_path().unwrap(), PathBuf::from("/tmp/custom.log"));
    }
}
