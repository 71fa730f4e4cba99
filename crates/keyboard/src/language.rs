//! Supported keyboard layouts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// Language tag selecting one keyboard layout.
///
/// New layouts are added here and in the registry; the transform itself
/// does not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// US QWERTY
    Eng,
    /// Ukrainian ЙЦУКЕН (Enhanced)
    Ukr,
    /// Russian ЙЦУКЕН
    Rus,
}

impl Language {
    /// All supported languages in display order.
    pub const ALL: [Language; 3] = [Language::Eng, Language::Ukr, Language::Rus];

    /// Short tag used on the command line and in the config file.
    pub fn tag(self) -> &'static str {
        match self {
            Language::Eng => "eng",
            Language::Ukr => "ukr",
            Language::Rus => "rus",
        }
    }

    /// Human readable name.
    pub fn name(self) -> &'static str {
        match self {
            Language::Eng => "English",
            Language::Ukr => "Ukrainian",
            Language::Rus => "Russian",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Language::Eng => "🇬🇧",
            Language::Ukr => "🇺🇦",
            Language::Rus => "🇷🇺",
        }
    }

    /// Flag and name, e.g. "🇬🇧 English".
    pub fn label(self) -> String {
        format!("{} {}", self.flag(), self.name())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Language::ALL
            .into_iter()
            .find(|lang| lang.tag().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ConfigurationError::UnknownLanguage(s.to_string()))
    }
}
