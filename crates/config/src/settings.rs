//! Configuration structures for layoutfix settings.

use layoutfix_keyboard::Language;
use serde::{Deserialize, Serialize};

use crate::defaults;

/// Application configuration with nested sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub general: GeneralSettings,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// General settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralSettings {
    /// Layout the text was typed in (eng, ukr, rus)
    #[serde(default = "default_lang_from")]
    pub lang_from: Language,

    /// Layout the text was meant for (eng, ukr, rus)
    #[serde(default = "default_lang_to")]
    pub lang_to: Language,

    /// Copy the result to the clipboard instead of printing it
    #[serde(default)]
    pub copy_to_clipboard: bool,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log file path (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,

    /// Minimum log level (debug, info, warn, error)
    #[serde(default = "default_min_level")]
    pub min_level: String,
}

// Default value functions for serde
fn default_lang_from() -> Language {
    defaults::LANG_FROM
}

fn default_lang_to() -> Language {
    defaults::LANG_TO
}

fn default_min_level() -> String {
    defaults::MIN_LOG_LEVEL.to_string()
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            lang_from: default_lang_from(),
            lang_to: default_lang_to(),
            copy_to_clipboard: false,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file_path: None,
            min_level: default_min_level(),
        }
    }
}
