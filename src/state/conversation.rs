//! Single-slot conversation cache

use crate::error::{LexidoError, LexidoResult};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Conversation text persisted between invocations
///
/// Every save replaces the previous content. Concurrent writers race and the
/// last one wins.
#[derive(Debug, Clone)]
pub struct ConversationCache {
    path: PathBuf,
}

impl ConversationCache {
    /// Cache backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Overwrite the cache with `text`
    pub fn save(&self, text: &str) -> LexidoResult<()> {
        fs::write(&self.path, text).map_err(|e| {
            LexidoError::io(format!("writing conversation cache {}", self.path.display()), e)
        })?;

        debug!("Cached {} bytes of conversation", text.len());
        Ok(())
    }

    /// Read the cached conversation, or empty text if nothing was saved yet
    pub fn load(&self) -> LexidoResult<String> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No conversation cached at {}", self.path.display());
                Ok(String::new())
            }
            Err(e) => Err(LexidoError::io(
                format!("reading conversation cache {}", self.path.display()),
                e,
            )),
        }
    }

    /// Forget the cached conversation
    pub fn clear(&self) -> LexidoResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(LexidoError::io(
                format!("removing conversation cache {}", self.path.display()),
                e,
            )),
        }
    }

    /// Backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_cache() -> (ConversationCache, TempDir) {
        let temp = TempDir::new().unwrap();
        let cache = ConversationCache::new(temp.path().join("conversation.txt"));
        (cache, temp)
    }

    #[test]
    fn load_before_save_is_empty() {
        let (cache, _temp) = test_cache();
        assert_eq!(cache.load().unwrap(), "");
    }

    #[test]
    fn save_overwrites_wholesale() {
        let (cache, _temp) = test_cache();

        cache.save("first conversation, rather long").unwrap();
        cache.save("second").unwrap();

        assert_eq!(cache.load().unwrap(), "second");
    }

    #[test]
    fn clear_missing_is_ok() {
        let (cache, _temp) = test_cache();
        cache.clear().unwrap();

        cache.save("x").unwrap();
        cache.clear().unwrap();
        assert!(!cache.path().exists());
        assert_eq!(cache.load().unwrap(), "");
    }

    #[test]
    fn load_directory_is_io_error() {
        let temp = TempDir::new().unwrap();
        let cache = ConversationCache::new(temp.path().to_path_buf());

        let err = cache.load().unwrap_err();
        assert!(matches!(err, LexidoError::Io { .. }));
    }
}
