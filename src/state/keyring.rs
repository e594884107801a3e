//! Credential keyring persisted as a flat JSON object
//!
//! The whole document is loaded, one field is changed and the whole document
//! is written back. Updates from concurrent processes can be lost.

use crate::error::{LexidoError, LexidoResult};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
use std::path::{Path, PathBuf};
use tracing::debug;

type Entries = BTreeMap<String, String>;

/// Field → value credential store
#[derive(Debug, Clone)]
pub struct Keyring {
    path: PathBuf,
}

impl Keyring {
    /// Keyring backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Set `field` to `value`, keeping every other field
    ///
    /// A missing document is created; a malformed one is left untouched and
    /// reported.
    pub fn set(&self, field: &str, value: &str) -> LexidoResult<()> {
        let mut entries = self.read()?.unwrap_or_default();
        entries.insert(field.to_string(), value.to_string());
        self.write(&entries)?;

        debug!("Stored credential field {}", field);
        Ok(())
    }

    /// Look up `field`
    pub fn get(&self, field: &str) -> LexidoResult<String> {
        let mut entries = self
            .read()?
            .ok_or_else(|| LexidoError::KeyringNotFound(self.path.clone()))?;

        entries
            .remove(field)
            .ok_or_else(|| LexidoError::CredentialNotFound(field.to_string()))
    }

    /// Names of stored fields, sorted; empty when no keyring exists yet
    pub fn fields(&self) -> LexidoResult<Vec<String>> {
        Ok(self
            .read()?
            .map(|entries| entries.into_keys().collect())
            .unwrap_or_default())
    }

    /// Backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> LexidoResult<Option<Entries>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(LexidoError::io(
                    format!("reading keyring {}", self.path.display()),
                    e,
                ))
            }
        };

        // An empty file counts as an empty keyring
        if content.trim().is_empty() {
            return Ok(Some(Entries::new()));
        }

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| LexidoError::KeyringMalformed {
                path: self.path.clone(),
                source,
            })
    }

    fn write(&self, entries: &Entries) -> LexidoResult<()> {
        let mut content = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut content, formatter);
        entries.serialize(&mut serializer)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(0o600)
            .open(&self.path)
            .map_err(|e| LexidoError::io(format!("opening keyring {}", self.path.display()), e))?;

        // The open mode only applies on creation; tighten an existing file
        // before any secret reaches it
        file.set_permissions(fs::Permissions::from_mode(0o600))
            .map_err(|e| LexidoError::io("setting keyring permissions", e))?;
        file.write_all(&content)
            .map_err(|e| LexidoError::io(format!("writing keyring {}", self.path.display()), e))?;

        Ok(())
    }
}
