//! # Configuration
//!
//! Settings for the `detective-quest` binary, read from a TOML file.
//!
//! - [`GameConfig`] - which case to load and whether to show the intro banner
//! - [`LoggingConfig`] - log level and optional log file
//!
//! ## Usage
//!
//! ```rust,no_run
//! use detective_quest::config::Config;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::load_or_default("config.toml")?;
//!     println!("Case file: {:?}", config.game.case_file);
//!     Ok(())
//! }
//! ```
//!
//! ## File format
//!
//! ```toml
//! [game]
//! case_file = "cases/mansion.json"
//! show_intro = true
//!
//! [logging]
//! level = "warn"
//! file = "detective-quest.log"
//! ```
//!
//! Precedence: CLI args > config file > defaults.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// JSON case file; the built-in mansion is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_file: Option<String>,
    #[serde(default = "default_show_intro")]
    pub show_intro: bool,
}

fn default_show_intro() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            case_file: None,
            show_intro: default_show_intro(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// One of error, warn, info, debug, trace. Unknown values fall back to warn.
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level
            .parse::<log::LevelFilter>()
            .unwrap_or(log::LevelFilter::Warn)
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;

        Ok(config)
    }

    /// Load the file if it exists, otherwise use defaults. A file that exists
    /// but does not parse is still an error.
    pub fn load_or_default(path: &str) -> Result<Self> {
        if Path::new(path).exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Create a default configuration file
    pub fn create_default(path: &str) -> Result<()> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }
}
