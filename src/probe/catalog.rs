//! Known package managers and the platforms where a hit is misleading

use super::os::OsFamily;

/// One catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageManager {
    /// Executable name looked up on the search path
    pub name: &'static str,
    /// Where this manager is usually found
    pub hint: &'static str,
    /// Platforms where the executable exists but is not this package manager
    pub excluded_on: &'static [OsFamily],
}

impl PackageManager {
    pub const fn new(name: &'static str, hint: &'static str) -> Self {
        Self {
            name,
            hint,
            excluded_on: &[],
        }
    }

    pub const fn excluded_on(self, platforms: &'static [OsFamily]) -> Self {
        Self {
            excluded_on: platforms,
            ..self
        }
    }

    /// Whether the entry should be probed at all on `os`
    pub fn applies_to(&self, os: OsFamily) -> bool {
        !self.excluded_on.contains(&os)
    }
}

/// Default catalog, in preference order
///
/// macOS ships `/usr/bin/apt`, a Java tool unrelated to Debian's apt.
pub const DEFAULT_PACKAGE_MANAGERS: &[PackageManager] = &[
    PackageManager::new("apt", "Debian, Ubuntu").excluded_on(&[OsFamily::MacOs]),
    PackageManager::new("dnf", "Fedora"),
    PackageManager::new("yum", "Older Fedora, CentOS"),
    PackageManager::new("pacman", "Arch Linux"),
    PackageManager::new("brew", "macOS"),
    PackageManager::new("port", "macOS (MacPorts)"),
    PackageManager::new("zypper", "openSUSE"),
    PackageManager::new("emerge", "Gentoo"),
    PackageManager::new("xbps-install", "Void Linux"),
    PackageManager::new("apk", "Alpine Linux"),
    PackageManager::new("nix", "NixOS or multi-distro Nix"),
    PackageManager::new("snap", "Snap packages"),
    PackageManager::new("flatpak", "Flatpak"),
    PackageManager::new("yay", "AUR helper for Arch Linux"),
    PackageManager::new("paru", "AUR helper for Arch Linux"),
];

/// Ordered package manager table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<PackageManager>,
}

impl Catalog {
    pub fn new(entries: Vec<PackageManager>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[PackageManager] {
        &self.entries
    }

    /// Entries worth probing on `os`, in catalog order
    pub fn candidates(&self, os: OsFamily) -> impl Iterator<Item = &PackageManager> + '_ {
        self.entries.iter().filter(move |pm| pm.applies_to(os))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(DEFAULT_PACKAGE_MANAGERS.to_vec())
    }
}
