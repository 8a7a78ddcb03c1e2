//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Default auth API address
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Base URL of the auth API
    pub api_base_url: Option<String>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "auth-tui", "auth-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Resolve the API base URL: the AUTH_API_URL environment variable wins
    /// over the config file, then the compiled-in default.
    pub fn resolve_base_url(&self) -> String {
        resolve_base_url_from(env::var("AUTH_API_URL").ok(), self.api_base_url.clone())
    }
}

fn resolve_base_url_from(env_value: Option<String>, file_value: Option<String>) -> String {
    env_value
        .or(file_value)
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}
