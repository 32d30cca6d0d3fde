use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::logic::gesture::{COMMENT_THRESHOLD_DP, FAVORITE_THRESHOLD_DP};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3001/";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub vim_mode: bool,
    /// Command that receives share messages on stdin (e.g. "wl-copy")
    #[serde(default)]
    pub clipboard_command: Option<String>,
    #[serde(default = "default_connectivity_poll_secs")]
    pub connectivity_poll_secs: u64,
    #[serde(default)]
    pub gesture: GestureConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GestureConfig {
    #[serde(default = "default_favorite_threshold")]
    pub favorite_threshold: f64,
    #[serde(default = "default_comment_threshold")]
    pub comment_threshold: f64,
    /// Width of one terminal column in dp
    #[serde(default = "default_cell_width_dp")]
    pub cell_width_dp: f64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_connectivity_poll_secs() -> u64 {
    5
}

fn default_favorite_threshold() -> f64 {
    FAVORITE_THRESHOLD_DP
}

fn default_comment_threshold() -> f64 {
    COMMENT_THRESHOLD_DP
}

fn default_cell_width_dp() -> f64 {
    crate::handlers::mouse::DEFAULT_CELL_WIDTH_DP
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            favorite_threshold: default_favorite_threshold(),
            comment_threshold: default_comment_threshold(),
            cell_width_dp: default_cell_width_dp(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            vim_mode: false,
            clipboard_command: None,
            connectivity_poll_secs: default_connectivity_poll_secs(),
            gesture: GestureConfig::default(),
        }
    }
}

impl Config {
    pub fn from_yaml(text: &str) -> Result<Self> {
        serde_yaml::from_str(text).context("Invalid config file")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_yaml(&text)
    }

    /// Load from the located config file, or defaults when there is none
    pub fn load(cli_path: Option<String>) -> Result<Self> {
        match get_config_path(cli_path)? {
            Some(path) => {
                log::info!("Loading config from: {}", path.display());
                Self::from_file(&path)
            }
            None => {
                log::info!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }
}

/// Determine the config file path with fallback logic
///
/// An explicit path must exist. Otherwise the platform config dir
/// (`camptui/config.yaml`) is tried, then `./config.yaml`, and `None`
/// means no file is present.
pub fn get_config_path(cli_path: Option<String>) -> Result<Option<PathBuf>> {
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(Some(p));
        }
        anyhow::bail!("Config file not found at specified path: {}", path);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("camptui").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}
