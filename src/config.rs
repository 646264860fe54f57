//! Configuration loading for gtasks-mcp
//!
//! Configuration is loaded from:
//! 1. Environment variables GTASKS_API_URL / GTASKS_ACCESS_TOKEN
//! 2. Environment variable GTASKS_CONFIG_PATH
//! 3. ~/.config/gtasks-mcp.toml
//! 4. Default values

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Tasks backend configuration
    #[serde(default)]
    pub backend: BackendConfig,
}

/// Remote tasks API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the tasks API
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// OAuth access token (already acquired; this server does not refresh it)
    #[serde(default)]
    pub access_token: Option<String>,
}

fn default_base_url() -> String {
    "https://tasks.googleapis.com/tasks/v1".to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            access_token: None,
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_path();

        let mut config = if let Some(path) = config_path {
            if path.exists() {
                tracing::info!("Loading config from: {}", path.display());
                let content = std::fs::read_to_string(&path)?;
                toml::from_str(&content)?
            } else {
                tracing::info!("Config file not found, using defaults");
                Self::default()
            }
        } else {
            tracing::info!("No config path specified, using defaults");
            Self::default()
        };

        // Environment overrides (highest priority)
        if let Ok(url) = std::env::var("GTASKS_API_URL") {
            config.backend.base_url = url;
        }
        if let Ok(token) = std::env::var("GTASKS_ACCESS_TOKEN") {
            config.backend.access_token = Some(token);
        }

        Ok(config)
    }

    /// Find the configuration file path
    fn find_config_path() -> Option<PathBuf> {
        // 1. Check environment variable
        if let Ok(path) = std::env::var("GTASKS_CONFIG_PATH") {
            return Some(PathBuf::from(path));
        }

        // 2. Check ~/.config/gtasks-mcp.toml
        if let Ok(home) = std::env::var("HOME") {
            let path = PathBuf::from(home).join(".config").join("gtasks-mcp.toml");
            return Some(path);
        }

        None
    }
}
