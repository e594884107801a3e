//! Operating system family

/// OS family as reported by `uname -s`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    MacOs,
    Linux,
    /// Some other Unix (FreeBSD, ...)
    Other,
    /// Detection failed
    Unknown,
}

impl OsFamily {
    /// Classify the output of `uname -s`
    pub fn from_uname(kernel: &str) -> Self {
        let kernel = kernel.trim().to_lowercase();
        if kernel.is_empty() {
            OsFamily::Unknown
        } else if kernel.contains("darwin") {
            OsFamily::MacOs
        } else if kernel.contains("linux") {
            OsFamily::Linux
        } else {
            OsFamily::Other
        }
    }

    /// Get a human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            OsFamily::MacOs => "macOS",
            OsFamily::Linux => "Linux",
            OsFamily::Other => "Other",
            OsFamily::Unknown => "Unknown",
        }
    }
}
