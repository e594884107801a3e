//! Host environment probing
//!
//! Detects the OS family, which package managers are installed and selected
//! host properties, so suggestions can be tailored to the machine. Every
//! external call goes through a [`CommandRunner`].

pub mod catalog;
pub mod command;
pub mod os;
pub mod search_path;
pub mod sysinfo;

pub use catalog::{Catalog, PackageManager};
pub use command::{CommandRunner, SystemRunner};
pub use os::OsFamily;
pub use search_path::SearchPath;
pub use sysinfo::{FieldParser, LabelParser};

use crate::error::{LexidoError, LexidoResult};
use tracing::{debug, warn};

/// Discovers facts about the host
pub struct EnvironmentProbe<R: CommandRunner = SystemRunner> {
    runner: R,
    catalog: Catalog,
    search_path: SearchPath,
    parser: Box<dyn FieldParser>,
}

impl EnvironmentProbe<SystemRunner> {
    /// Probe the real system using `PATH` and the default catalog
    pub fn new() -> Self {
        Self::with_runner(SystemRunner)
    }
}

impl Default for EnvironmentProbe<SystemRunner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CommandRunner> EnvironmentProbe<R> {
    /// Probe that executes commands through `runner`
    pub fn with_runner(runner: R) -> Self {
        Self {
            runner,
            catalog: Catalog::default(),
            search_path: SearchPath::from_env(),
            parser: Box::new(LabelParser),
        }
    }

    /// Replace the package manager catalog
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Replace the executable search path
    pub fn with_search_path(mut self, search_path: SearchPath) -> Self {
        self.search_path = search_path;
        self
    }

    /// Replace the text fallback used by [`Self::extract_system_field`]
    pub fn with_parser(mut self, parser: impl FieldParser + 'static) -> Self {
        self.parser = Box::new(parser);
        self
    }

    /// Run a command and return its trimmed standard output
    pub fn run_command(&self, program: &str, args: &[&str]) -> LexidoResult<String> {
        self.runner.run(program, args)
    }

    /// Whether `name` resolves to an executable on the search path
    pub fn is_executable_available(&self, name: &str) -> bool {
        self.search_path.contains(name)
    }

    /// OS family from `uname -s`
    ///
    /// Only used to filter the catalog, so a failure is logged and reported
    /// as [`OsFamily::Unknown`] instead of being returned.
    pub fn detect_os(&self) -> OsFamily {
        match self.runner.run("uname", &["-s"]) {
            Ok(kernel) => OsFamily::from_uname(&kernel),
            Err(e) => {
                warn!("Could not detect operating system: {}", e);
                OsFamily::Unknown
            }
        }
    }

    /// Installed package managers, in catalog order
    pub fn detect_installed_package_managers(&self) -> Vec<String> {
        let os = self.detect_os();
        self.installed_package_managers_for(os)
    }

    /// Installed package managers on a known OS family, in catalog order
    pub fn installed_package_managers_for(&self, os: OsFamily) -> Vec<String> {
        let installed: Vec<String> = self
            .catalog
            .candidates(os)
            .filter(|pm| self.is_executable_available(pm.name))
            .map(|pm| pm.name.to_string())
            .collect();

        debug!("Package managers on {}: {:?}", os.name(), installed);
        installed
    }

    /// Value of a `hostnamectl` property such as `"Operating System"`
    pub fn extract_system_field(&self, field: &str) -> LexidoResult<String> {
        match self
            .runner
            .run(sysinfo::SYSTEM_INFO_COMMAND, sysinfo::SYSTEM_INFO_JSON_ARGS)
        {
            Ok(json) => {
                if let Some(value) = sysinfo::structured_field(&json, field) {
                    return Ok(value);
                }
                debug!("{} not in structured host info, parsing text", field);
            }
            Err(e) => debug!("Structured host info unavailable: {}", e),
        }

        let output = self.runner.run(sysinfo::SYSTEM_INFO_COMMAND, &[])?;
        self.parser
            .parse(&output, field)
            .ok_or_else(|| LexidoError::FieldNotFound(field.to_string()))
    }
}
