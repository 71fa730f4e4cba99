//! XDG Base Directory support for layoutfix.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "layoutfix";

/// Get the configuration directory following XDG conventions.
///
/// Returns `$XDG_CONFIG_HOME/layoutfix` or `~/.config/layoutfix`.
pub fn get_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|p| p.join(APP_NAME))
        .context("Failed to determine config directory")
}

/// Get the cache directory following XDG conventions.
///
/// Holds the log file. Returns `$XDG_CACHE_HOME/layoutfix` or
/// `~/.cache/layoutfix`.
pub fn get_cache_dir() -> Result<PathBuf> {
    dirs::cache_dir()
        .map(|p| p.join(APP_NAME))
        .context("Failed to determine cache directory")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_dir() {
        if let Ok(dir) = get_config_dir() {
            assert!(dir.ends_with("layoutfix"));
        }
    }

    #[test]
    fn test_config_and_cache_are_different() {
        if let (Ok(config), Ok(cache)) = (get_config_dir(), get_cache_dir()) {
            assert_ne!(config, cache);
        }
    }
}
