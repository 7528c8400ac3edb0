//! Client configuration

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};

/// Default limit the leaderboard endpoint applies when none is given
pub const DEFAULT_LEADERBOARD_LIMIT: u32 = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the commons API, no trailing slash
    pub base_url: String,
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub default_leaderboard_limit: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:4321".to_string(),
            timeout_secs: 30,
            connect_timeout_secs: 10,
            default_leaderboard_limit: DEFAULT_LEADERBOARD_LIMIT,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Parse a TOML config; missing fields fall back to defaults
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: ClientConfig =
            toml::from_str(contents).map_err(|e| ClientError::Config(e.to_string()))?;
        if config.base_url.is_empty() {
            return Err(ClientError::Config("base_url must be set".to_string()));
        }
        Ok(config)
    }
}
