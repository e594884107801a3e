//! Configuration and state path resolution for Lexido

pub mod schema;

pub use schema::Config;

use crate::error::{LexidoError, LexidoResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable that replaces `~/.lexido` as the state directory
pub const HOME_ENV: &str = "LEXIDO_HOME";

const STATE_DIR: &str = ".lexido";
const CONVERSATION_FILE: &str = "lexido_conversation_cache.txt";
const KEYRING_FILE: &str = "keyring.json";
const CONFIG_FILE: &str = "config.toml";

/// Resolved locations of everything Lexido keeps on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatePaths {
    base_dir: PathBuf,
}

impl StatePaths {
    /// Use an explicit base directory
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Resolve the base directory for the current user
    ///
    /// `LEXIDO_HOME` wins when set and non-empty; otherwise `~/.lexido`.
    pub fn resolve() -> LexidoResult<Self> {
        if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            debug!("Using {} from {}", PathBuf::from(&dir).display(), HOME_ENV);
            return Ok(Self::new(dir));
        }

        let home = dirs::home_dir().ok_or(LexidoError::HomeNotFound)?;
        Ok(Self::new(home.join(STATE_DIR)))
    }

    /// The per-user state directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Conversation cache file
    pub fn conversation_file(&self) -> PathBuf {
        self.base_dir.join(CONVERSATION_FILE)
    }

    /// Credential keyring file
    pub fn keyring_file(&self) -> PathBuf {
        self.base_dir.join(KEYRING_FILE)
    }

    /// Optional configuration file
    pub fn config_file(&self) -> PathBuf {
        self.base_dir.join(CONFIG_FILE)
    }
}

/// Configuration manager
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Config manager reading `config.toml` from the state directory
    pub fn new(paths: &StatePaths) -> Self {
        Self {
            config_path: paths.config_file(),
        }
    }

    /// Create a config manager with a custom path
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Load configuration, falling back to defaults if the file is absent
    pub fn load(&self) -> LexidoResult<Config> {
        if !self.config_path.exists() {
            debug!("Config file not found, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&self.config_path).map_err(|e| {
            LexidoError::io(
                format!("reading config from {}", self.config_path.display()),
                e,
            )
        })?;

        toml::from_str(&content).map_err(|e| LexidoError::ConfigInvalid {
            path: self.config_path.clone(),
            reason: e.to_string(),
        })
    }

    /// Get the config file path
    pub fn path(&self) -> &Path {
        &self.config_path
    }
}
