//! Error types for Lexido
//!
//! All modules use `LexidoResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Lexido operations
pub type LexidoResult<T> = Result<T, LexidoError>;

/// Broad failure category, used by callers that only care about the class
/// of failure (e.g. a missing credential starts the setup flow).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Filesystem access, permissions, path resolution
    Io,
    /// External process could not be spawned or exited non-zero
    Execution,
    /// Requested field or document is absent
    NotFound,
    /// Stored document failed to parse
    Malformed,
}

/// All errors that can occur in Lexido
#[derive(Error, Debug)]
pub enum LexidoError {
    // Path resolution
    #[error("Could not determine home directory. Set LEXIDO_HOME to choose a state directory.")]
    HomeNotFound,

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    // Keyring errors
    #[error("Keyring not found at {0}")]
    KeyringNotFound(PathBuf),

    #[error("Keyring at {path} is malformed: {source}")]
    KeyringMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Credential not found: {0}")]
    CredentialNotFound(String),

    // Probe errors
    #[error("System field not found: {0}")]
    FieldNotFound(String),

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Process errors
    #[error("Command failed: {command}")]
    CommandFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command exited with {code}: {command}, stderr: {stderr}")]
    CommandExecution {
        command: String,
        code: i32,
        stderr: String,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    User(String),
}

impl LexidoError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a command failed error
    pub fn command_failed(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::CommandFailed {
            command: command.into(),
            source,
        }
    }

    /// Create a command execution error
    pub fn command_exec(command: impl Into<String>, code: i32, stderr: impl Into<String>) -> Self {
        Self::CommandExecution {
            command: command.into(),
            code,
            stderr: stderr.into(),
        }
    }

    /// Failure category
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::HomeNotFound
            | Self::ConfigInvalid { .. }
            | Self::Io { .. }
            | Self::User(_) => ErrorKind::Io,
            Self::CommandFailed { .. } | Self::CommandExecution { .. } => ErrorKind::Execution,
            Self::KeyringNotFound(_) | Self::CredentialNotFound(_) | Self::FieldNotFound(_) => {
                ErrorKind::NotFound
            }
            Self::KeyringMalformed { .. } | Self::Json(_) => ErrorKind::Malformed,
        }
    }

    /// True when a credential lookup came back empty, whether the field or
    /// the whole keyring is missing
    pub fn is_missing_credential(&self) -> bool {
        matches!(self, Self::KeyringNotFound(_) | Self::CredentialNotFound(_))
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::KeyringNotFound(_) | Self::CredentialNotFound(_) => {
                Some("Run: lexido --set-key <KEY>")
            }
            Self::KeyringMalformed { .. } => {
                Some("Fix or delete the keyring file, then run: lexido --set-key <KEY>")
            }
            Self::HomeNotFound => Some("Export LEXIDO_HOME=/path/to/state"),
            _ => None,
        }
    }
}
