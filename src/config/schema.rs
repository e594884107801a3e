//! Configuration schema for Lexido
//!
//! Configuration is stored at `~/.lexido/config.toml` and is optional.

use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Host probing settings
    pub probe: ProbeConfig,
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// General application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log format: "text" or "json"
    pub log_format: LogFormat,
}

/// Which host facts go into the suggestion context
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Include installed package managers
    pub package_managers: bool,

    /// hostnamectl fields to include, by their display label
    pub system_fields: Vec<String>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            package_managers: true,
            system_fields: vec!["Operating System".to_string()],
        }
    }
}
