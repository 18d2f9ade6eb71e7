//! Configuration handling for the contact book
//!
//! Configuration is read from the path given with `--config`, otherwise
//! from `config.toml` in the platform config directory
//! (e.g. `~/.config/contact-book/config.toml`). A missing file means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::DEFAULT_WINDOW_DAYS;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Settings for the upcoming birthday report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BirthdayConfig {
    /// Days to look ahead, counting today as day 0
    pub window_days: u32,
}

impl Default for BirthdayConfig {
    fn default() -> Self {
        Self {
            window_days: DEFAULT_WINDOW_DAYS,
        }
    }
}

/// Texts shown by the interactive session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SessionConfig {
    pub greeting: String,
    pub prompt: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            greeting: "Welcome to the assistant bot!".to_string(),
            prompt: "Enter a command: ".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub birthdays: BirthdayConfig,
    pub session: SessionConfig,
}

/// Upper bound for the birthday window; anything longer wraps past a year
const MAX_WINDOW_DAYS: u32 = 365;

impl Config {
    /// Loads configuration from `path`, or from the default location
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Returns the default config file path
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "contact-book", "contact-book")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    fn load_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.birthdays.window_days > MAX_WINDOW_DAYS {
            return Err(ConfigError::Invalid(format!(
                "birthdays.window_days must be at most {}, got {}",
                MAX_WINDOW_DAYS, self.birthdays.window_days
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.birthdays.window_days, 7);
        assert_eq!(config.session.greeting, "Welcome to the assistant bot!");
        assert_eq!(config.session.prompt, "Enter a command: ");
    }

    #[test]
    fn parse_partial_config() {
        let toml = r#"
[birthdays]
window_days = 14
"#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.birthdays.window_days, 14);
        assert_eq!(config.session, SessionConfig::default());
    }

    #[test]
    fn load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[session]\ngreeting = \"Hi\"\nprompt = \"> \"\n",
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.session.greeting, "Hi");
        assert_eq!(config.session.prompt, "> ");
        assert_eq!(config.birthdays, BirthdayConfig::default());
    }

    #[test]
    fn load_rejects_bad_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[birthdays\nwindow_days = ").unwrap();

        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn load_rejects_oversized_window() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[birthdays]\nwindow_days = 400\n").unwrap();

        let err = Config::load(Some(&path)).unwrap_err();
        assert!(format!("{:#}", err).contains("window_days"));
    }

    #[test]
    fn load_missing_explicit_file_fails() {
        let dir = TempDir::new().unwrap();
        assert!(Config::load(Some(&dir.path().join("nope.toml"))).is_err());
    }
}
