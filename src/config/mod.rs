//! Configuration Module
//!
//! Process settings only (logging, UI refresh). Wizard answers are never
//! read from or written to configuration.

use crate::error::MoltbotError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Terminal UI configuration
    #[serde(default)]
    pub ui: UiConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level used in debug mode (default: "debug")
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "debug".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Terminal UI configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw interval in milliseconds (default: 250)
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl UiConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl Config {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. Default values
    /// 2. System config: ~/.config/moltbot/config.toml
    /// 3. Local config: ./moltbot.toml
    /// 4. Environment variables
    ///
    /// Runs before logging is up, so it reports through errors only. See
    /// [`Config::sources`] for what was read.
    pub fn load() -> Result<Self> {
        let mut config = Self::default();
        for path in Self::sources() {
            config = Self::from_file(&path)?;
        }
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Config files that exist, lowest priority first
    pub fn sources() -> Vec<PathBuf> {
        Self::system_config_path()
            .into_iter()
            .chain(std::iter::once(Self::local_config_path()))
            .filter(|path| path.exists())
            .collect()
    }

    /// Load configuration from a specific file path, then apply env overrides
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            anyhow::bail!("Config file not found: {:?}", path);
        }
        let mut config = Self::from_file(path)?;
        config.apply_env_overrides()?;

        Ok(config)
    }

    /// Get the system config path: ~/.config/moltbot/config.toml
    pub fn system_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("moltbot").join("config.toml"))
    }

    /// Get the local config path: ./moltbot.toml
    fn local_config_path() -> PathBuf {
        PathBuf::from("./moltbot.toml")
    }

    /// Parse a TOML file. Missing sections fall back to defaults.
    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        toml::from_str(&contents).with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    fn apply_env_overrides(&mut self) -> crate::error::Result<()> {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    /// Apply `MOLTBOT_*` overrides from the given lookup
    fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> crate::error::Result<()> {
        if let Some(level) = lookup("MOLTBOT_LOG_LEVEL") {
            self.logging.level = level;
        }

        if let Some(tick) = lookup("MOLTBOT_TICK_RATE_MS") {
            self.ui.tick_rate_ms = tick.trim().parse().map_err(|_| {
                MoltbotError::Config(format!("Invalid MOLTBOT_TICK_RATE_MS: {}", tick))
            })?;
        }

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> crate::error::Result<()> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(MoltbotError::Config(format!(
                "Invalid log level: {}. Must be one of: {:?}",
                self.logging.level, valid_levels
            )));
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(MoltbotError::Config(
                "ui.tick_rate_ms must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        fs::write(path, toml_string)
            .with_context(|| format!("Failed to write config file: {:?}", path))?;

        tracing::info!("Configuration saved to: {:?}", path);
        Ok(())
    }
}
