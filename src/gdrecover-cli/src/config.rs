//! Configuration management for gdrecover CLI

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Exported project root
    pub root: Option<PathBuf>,
    /// Directory holding decompiled sources
    pub staging: Option<PathBuf>,
    /// Destination for `collect`
    pub output: Option<PathBuf>,
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("gdrecover");

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration from file, or default if it doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            debug!("No config at {}, using defaults", config_path.display());
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        toml::from_str(&contents).context("Failed to parse config file")
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory at {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, contents)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        Ok(())
    }

    /// Project root from the argument, falling back to the configured default
    pub fn resolve_root(&self, arg: Option<PathBuf>) -> Result<PathBuf> {
        arg.or_else(|| self.root.clone()).context(
            "Project root is required (pass it or run `gdrecover configure --root <DIR>`)",
        )
    }

    pub fn resolve_staging(&self, arg: Option<PathBuf>) -> Result<PathBuf> {
        arg.or_else(|| self.staging.clone()).context(
            "Staging directory is required (use --staging or run `gdrecover configure --staging <DIR>`)",
        )
    }

    pub fn resolve_output(&self, arg: Option<PathBuf>) -> Result<PathBuf> {
        arg.or_else(|| self.output.clone()).context(
            "Output directory is required (use --output or run `gdrecover configure --output <DIR>`)",
        )
    }
}
