//! Configuration management for Datekit
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    APP_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_DATE_TEMPLATE, DEFAULT_TIME_TEMPLATE, LOCAL_CONFIG_FILE,
    LOG_LEVELS, TEMPLATE_TOKENS,
};
use crate::utils::datetime;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Template used when no `--template` is given
    pub template: String,
    /// Template for the time part of datetimes
    pub time_template: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to file
    pub enabled: bool,
    /// Minimum level written to the log file
    pub level: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            template: DEFAULT_DATE_TEMPLATE.to_string(),
            time_template: DEFAULT_TIME_TEMPLATE.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// The configured level as a `log` filter
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        self.level
            .parse()
            .with_context(|| format!("Invalid log level '{}'", self.level))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Candidate config locations, highest precedence first
    fn config_candidates() -> Vec<PathBuf> {
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        let xdg = dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME));
        std::iter::once(local).chain(xdg).collect()
    }

    /// First existing config file, if any
    fn find_config_file() -> Option<PathBuf> {
        let found = Self::config_candidates().into_iter().find(|path| path.exists());
        log::debug!("config file: {:?}", found);
        found
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        Self::validate_template("template", &self.display.template)?;
        Self::validate_template("time_template", &self.display.time_template)?;

        if !LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            anyhow::bail!(
                "Invalid log level '{}'. Expected one of: {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            );
        }

        Ok(())
    }

    fn validate_template(name: &str, template: &str) -> Result<()> {
        if template.is_empty() {
            anyhow::bail!("{} cannot be empty", name);
        }
        if !TEMPLATE_TOKENS.iter().any(|token| template.contains(token)) {
            anyhow::bail!(
                "{} '{}' contains none of the tokens {}",
                name,
                template,
                TEMPLATE_TOKENS.join(", ")
            );
        }
        Ok(())
    }

    /// Write a default configuration file, returning the path written
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# Datekit Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format(datetime::ISO_DATE_FORMAT)
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        log::info!("wrote default configuration to {}", path.as_ref().display());
        Ok(path.as_ref().to_path_buf())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(APP_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join(CONFIG_FILE_NAME))
    }
}
