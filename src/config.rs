use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use tracing::debug;

pub const CONFIG_FILE_NAME: &str = ".channel-streams.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Output format (table, json)
    pub format: Option<String>,

    /// Channel file used when none is given on the command line
    pub channel: Option<PathBuf>,

    /// Manifest file used when none is given on the command line
    pub manifest: Option<PathBuf>,

    /// Exit with an error when misaligned artifacts are found
    pub fail_on_misaligned: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: Some("table".to_string()),
            channel: None,
            manifest: None,
            fail_on_misaligned: Some(true),
        }
    }
}

/// Load configuration from `.channel-streams.toml` in the current directory
pub fn load_config() -> Result<Config> {
    let config_path = std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(CONFIG_FILE_NAME);

    load_config_from(&config_path)
}

pub fn load_config_from(config_path: &Path) -> Result<Config> {
    if !config_path.exists() {
        debug!(path = %config_path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    let content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

    if let Some(format) = config.format.as_deref() {
        if format != "table" && format != "json" {
            anyhow::bail!("Unsupported format '{}' in {} (expected table or json)", format, config_path.display());
        }
    }

    Ok(config)
}
