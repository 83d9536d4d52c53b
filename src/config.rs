//! Optional on-disk configuration.
//!
//! Settings live in a small TOML file and only supply defaults; command
//! line flags always win. A missing file is not an error, the built-in
//! defaults apply.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::matcher::MatchMode;

/// Longest physical-line prefix kept for matching, in bytes.
pub const DEFAULT_MAX_LINE_LEN: usize = 1024;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub matcher: MatcherConfig,
    #[serde(default)]
    pub scan: ScanDefaults,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MatcherConfig {
    /// Mode used when no mode flag is given on the command line.
    #[serde(default)]
    pub default_mode: MatchMode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanDefaults {
    /// Line truncation cap in bytes; 0 disables truncation.
    #[serde(default = "default_max_line_len")]
    pub max_line_len: usize,
}

impl Default for ScanDefaults {
    fn default() -> Self {
        Self {
            max_line_len: DEFAULT_MAX_LINE_LEN,
        }
    }
}

fn default_max_line_len() -> usize {
    DEFAULT_MAX_LINE_LEN
}

impl Config {
    /// Load the first config file found, or defaults when none exists.
    pub fn load() -> Result<Self> {
        match find_config_path() {
            Some(path) => {
                let raw = fs::read_to_string(&path)
                    .with_context(|| format!("failed to read config file {}", path.display()))?;
                let config: Config = toml::from_str(&raw)
                    .with_context(|| format!("failed to parse config file {}", path.display()))?;
                log::debug!("loaded config from {}", path.display());
                Ok(config)
            }
            None => Ok(Config::default()),
        }
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        toml::from_str(raw).context("failed to parse config")
    }
}

/// Search order: XDG config dir, then a home dotfile, then the working
/// directory.
pub fn find_config_path() -> Option<PathBuf> {
    if let Some(dir) = dirs::config_dir() {
        let path = dir.join("patgrep").join("config.toml");
        if path.exists() {
            return Some(path);
        }
    }
    if let Some(home) = dirs::home_dir() {
        let path = home.join(".patgrep.toml");
        if path.exists() {
            return Some(path);
        }
    }
    let local = PathBuf::from(".patgrep.toml");
    if local.exists() {
        return Some(local);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.matcher.default_mode, MatchMode::Substring);
        assert_eq!(config.scan.max_line_len, DEFAULT_MAX_LINE_LEN);
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.matcher.default_mode, MatchMode::Substring);
        assert_eq!(config.scan.max_line_len, DEFAULT_MAX_LINE_LEN);
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = Config::from_toml("[scan]\nmax_line_len = 64\n").unwrap();
        assert_eq!(config.scan.max_line_len, 64);
        assert_eq!(config.matcher.default_mode, MatchMode::Substring);
    }

    #[test]
    fn test_mode_names_parse() {
        let config = Config::from_toml("[matcher]\ndefault_mode = \"wildcard\"\n").unwrap();
        assert_eq!(config.matcher.default_mode, MatchMode::Wildcard);
        let config = Config::from_toml("[matcher]\ndefault_mode = \"anchored\"\n").unwrap();
        assert_eq!(config.matcher.default_mode, MatchMode::Anchored);
    }

    #[test]
    fn test_bad_mode_is_rejected() {
        assert!(Config::from_toml("[matcher]\ndefault_mode = \"regex\"\n").is_err());
    }

    #[test]
    fn test_roundtrip() {
        let mut config = Config::default();
        config.matcher.default_mode = MatchMode::Anchored;
        config.scan.max_line_len = 0;
        let raw = toml::to_string(&config).unwrap();
        let back = Config::from_toml(&raw).unwrap();
        assert_eq!(back.matcher.default_mode, MatchMode::Anchored);
        assert_eq!(back.scan.max_line_len, 0);
    }
}
