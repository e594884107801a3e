//! Local persistent state: conversation cache, credential keyring and piped
//! input capture
//!
//! Everything lives under one per-user directory, resolved once into
//! [`StatePaths`] and handed to [`StateStore::new`].

pub mod conversation;
pub mod input;
pub mod keyring;

pub use conversation::ConversationCache;
pub use input::InputMode;
pub use keyring::Keyring;

use crate::config::StatePaths;
use crate::error::{LexidoError, LexidoResult};
use std::fs;
use std::os::unix::fs::DirBuilderExt;
use std::path::Path;
use tracing::debug;

/// Keyring field holding the generation backend key
pub const API_KEY_FIELD: &str = "api_key";

/// Owner of the state directory and its files
#[derive(Debug, Clone)]
pub struct StateStore {
    paths: StatePaths,
    conversation: ConversationCache,
    keyring: Keyring,
}

impl StateStore {
    /// Create a store rooted at `paths`
    pub fn new(paths: StatePaths) -> Self {
        let conversation = ConversationCache::new(paths.conversation_file());
        let keyring = Keyring::new(paths.keyring_file());
        Self {
            paths,
            conversation,
            keyring,
        }
    }

    /// Resolved locations
    pub fn paths(&self) -> &StatePaths {
        &self.paths
    }

    /// Replace the cached conversation
    pub fn save_conversation(&self, text: &str) -> LexidoResult<()> {
        self.ensure_base_dir()?;
        self.conversation.save(text)
    }

    /// Cached conversation, empty on first run
    pub fn load_conversation(&self) -> LexidoResult<String> {
        self.ensure_base_dir()?;
        self.conversation.load()
    }

    /// Drop the cached conversation
    pub fn clear_conversation(&self) -> LexidoResult<()> {
        self.conversation.clear()
    }

    /// Piped standard input, or `None` when stdin is not redirected
    pub fn capture_piped_input(&self) -> LexidoResult<Option<String>> {
        input::capture_stdin()
    }

    /// Store a credential field, creating the keyring if needed
    pub fn set_credential(&self, field: &str, value: &str) -> LexidoResult<()> {
        self.ensure_base_dir()?;
        self.keyring.set(field, value)
    }

    /// Read a credential field
    pub fn get_credential(&self, field: &str) -> LexidoResult<String> {
        self.keyring.get(field)
    }

    /// Names of stored credential fields
    pub fn credential_fields(&self) -> LexidoResult<Vec<String>> {
        self.keyring.fields()
    }

    fn ensure_base_dir(&self) -> LexidoResult<()> {
        ensure_private_dir(self.paths.base_dir())
    }
}

/// Create `dir` with owner-only permissions unless it already exists
fn ensure_private_dir(dir: &Path) -> LexidoResult<()> {
    if dir.is_dir() {
        return Ok(());
    }

    let mut builder = fs::DirBuilder::new();
    builder.recursive(true).mode(0o700);

    builder
        .create(dir)
        .map_err(|e| LexidoError::io(format!("creating directory {}", dir.display()), e))?;

    debug!("Created state directory {}", dir.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    fn test_store() -> (StateStore, TempDir) {
        let temp = TempDir::new().unwrap();
        let store = StateStore::new(StatePaths::new(temp.path().join(".lexido")));
        (store, temp)
    }

    #[test]
    fn first_run_load_is_empty() {
        let (store, _temp) = test_store();

        assert_eq!(store.load_conversation().unwrap(), "");
        assert!(store.paths().base_dir().is_dir());
    }

    #[test]
    fn save_twice_then_load() {
        let (store, _temp) = test_store();
        let text = "user: list files\nassistant: ls -la\n\u{00e9}";

        store.save_conversation(text).unwrap();
        store.save_conversation(text).unwrap();

        assert_eq!(store.load_conversation().unwrap(), text);
    }

    #[test]
    fn credentials_round_trip() {
        let (store, _temp) = test_store();

        store.set_credential(API_KEY_FIELD, "abc123").unwrap();
        store.set_credential("model", "x").unwrap();

        assert_eq!(store.get_credential(API_KEY_FIELD).unwrap(), "abc123");
        assert_eq!(store.get_credential("model").unwrap(), "x");
        assert!(store.paths().keyring_file().exists());
    }

    #[test]
    fn get_before_any_set_is_keyring_not_found() {
        let (store, _temp) = test_store();

        let err = store.get_credential(API_KEY_FIELD).unwrap_err();
        assert!(matches!(err, LexidoError::KeyringNotFound(_)));
        assert!(err.is_missing_credential());
        assert!(store.credential_fields().unwrap().is_empty());
    }

    #[test]
    fn base_dir_is_owner_only() {
        let (store, _temp) = test_store();
        store.save_conversation("hi").unwrap();

        let mode = fs::metadata(store.paths().base_dir())
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o700);
    }

    #[test]
    fn ensure_dir_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("a").join("b");

        ensure_private_dir(&dir).unwrap();
        ensure_private_dir(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn base_dir_blocked_by_file() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join(".lexido");
        fs::write(&blocker, "not a dir").unwrap();

        let store = StateStore::new(StatePaths::new(blocker));
        let err = store.save_conversation("hi").unwrap_err();
        assert!(matches!(err, LexidoError::Io { .. }));
    }
}
