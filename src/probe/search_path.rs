//! Executable lookup on the search path

use std::env;
use std::ffi::OsStr;
use std::path::PathBuf;

/// Where executables are looked up
///
/// The default follows the process `PATH`. An explicit directory list
/// replaces it, which keeps lookups away from the real host in tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    dirs: Option<Vec<PathBuf>>,
}

impl SearchPath {
    /// Search only `dirs`, in order
    pub fn new(dirs: Vec<PathBuf>) -> Self {
        Self { dirs: Some(dirs) }
    }

    /// Follow the process `PATH`
    pub fn from_env() -> Self {
        Self::default()
    }

    /// Split a `PATH`-style list, skipping empty entries
    pub fn parse(path: &OsStr) -> Self {
        Self::new(
            env::split_paths(path)
                .filter(|dir| !dir.as_os_str().is_empty())
                .collect(),
        )
    }

    /// Explicit directories, or `None` when following `PATH`
    pub fn dirs(&self) -> Option<&[PathBuf]> {
        self.dirs.as_deref()
    }

    /// First executable called `name`
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        if name.is_empty() {
            return None;
        }

        match &self.dirs {
            None => which::which(name).ok(),
            Some(dirs) => {
                let joined = env::join_paths(dirs).ok()?;
                let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("/"));
                which::which_in(name, Some(joined), cwd).ok()
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }
}
