//! Host context and request assembly
//!
//! Turns probe results into the text that tells the generation backend what
//! machine it is writing commands for, and stitches together the request
//! from prior conversation, piped input and the prompt.

use crate::config::schema::ProbeConfig;
use crate::probe::{CommandRunner, EnvironmentProbe, OsFamily};
use tracing::debug;

/// What the assistant knows about the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostContext {
    pub os: OsFamily,
    pub package_managers: Vec<String>,
    /// `(label, value)` pairs from host info, in configured order
    pub fields: Vec<(String, String)>,
}

impl HostContext {
    /// Probe the host according to `config`
    ///
    /// Fields that cannot be read are left out; the context is advisory.
    pub fn gather<R: CommandRunner>(probe: &EnvironmentProbe<R>, config: &ProbeConfig) -> Self {
        let os = probe.detect_os();

        let package_managers = if config.package_managers {
            probe.installed_package_managers_for(os)
        } else {
            Vec::new()
        };

        let fields = config
            .system_fields
            .iter()
            .filter_map(|label| match probe.extract_system_field(label) {
                Ok(value) => Some((label.clone(), value)),
                Err(e) => {
                    debug!("Leaving {} out of host context: {}", label, e);
                    None
                }
            })
            .collect();

        Self {
            os,
            package_managers,
            fields,
        }
    }

    /// Multi-line description, each line newline-terminated
    pub fn render(&self) -> String {
        let mut out = format!("System: {}\n", self.os.name());
        for (label, value) in &self.fields {
            out.push_str(&format!("{}: {}\n", label, value));
        }
        if !self.package_managers.is_empty() {
            out.push_str(&format!(
                "Package managers: {}\n",
                self.package_managers.join(", ")
            ));
        }
        out
    }
}

/// Full request text for one turn
///
/// A fresh conversation starts with the host context; a continued one starts
/// with the cached history, which already carries it, and `host` is ignored.
pub fn compose_request(
    history: &str,
    host: Option<&HostContext>,
    piped: Option<&str>,
    prompt: &str,
) -> String {
    let mut request = if history.trim().is_empty() {
        host.map(HostContext::render).unwrap_or_default()
    } else {
        let mut history = history.to_string();
        if !history.ends_with('\n') {
            history.push('\n');
        }
        history
    };

    if let Some(input) = piped.filter(|input| !input.trim().is_empty()) {
        request.push_str("\nPiped input:\n");
        request.push_str(input);
        if !input.ends_with('\n') {
            request.push('\n');
        }
    }

    if !prompt.trim().is_empty() {
        request.push_str("\nUser: ");
        request.push_str(prompt.trim());
        request.push('\n');
    }

    request
}
