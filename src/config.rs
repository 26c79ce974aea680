use std::env;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::TaskdeckError;

pub const DEFAULT_PAGE_SIZE: usize = 10;

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Web-app endpoint serving the task spreadsheet.
    pub api_url: String,
    /// Currently selected sheet (partition), if the endpoint has any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheet: Option<String>,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Config {
    pub fn new(api_url: impl Into<String>, page_size: usize) -> Self {
        Self {
            api_url: api_url.into(),
            sheet: None,
            page_size,
        }
    }
}

/// Config directory: $TASKDECK_CONFIG_DIR when set (tests rely on this),
/// else the platform config dir.
pub fn config_dir() -> Result<PathBuf, TaskdeckError> {
    if let Ok(dir) = env::var("TASKDECK_CONFIG_DIR") {
        return Ok(PathBuf::from(dir));
    }
    dirs::config_dir()
        .map(|d| d.join("taskdeck"))
        .ok_or_else(|| TaskdeckError::config("Could not determine a config directory"))
}

pub fn config_path() -> Result<PathBuf, TaskdeckError> {
    Ok(config_dir()?.join("config.json"))
}

/// Load the config file. Returns a NotConfigured error if it does not exist.
pub fn load() -> Result<Config, TaskdeckError> {
    let path = config_path()?;
    if !path.exists() {
        return Err(TaskdeckError::not_configured());
    }
    let raw = fs::read_to_string(&path).map_err(|e| TaskdeckError::config(e.to_string()))?;
    let config: Config = serde_json::from_str(&raw)
        .map_err(|e| TaskdeckError::config(format!("Invalid config file: {e}")))?;
    if config.page_size == 0 {
        return Err(TaskdeckError::config("page_size must be at least 1"));
    }
    Ok(config)
}

pub fn save(config: &Config) -> Result<PathBuf, TaskdeckError> {
    let path = config_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| TaskdeckError::config(e.to_string()))?;
    }
    let raw = serde_json::to_string_pretty(config)
        .map_err(|e| TaskdeckError::config(e.to_string()))?;
    fs::write(&path, raw).map_err(|e| TaskdeckError::config(e.to_string()))?;
    Ok(path)
}
