//! Env command - show what Lexido detects about the host

use crate::config::Config;
use crate::context::HostContext;
use crate::error::LexidoResult;
use crate::probe::{CommandRunner, EnvironmentProbe};
use crate::state::{StateStore, API_KEY_FIELD};
use crate::ui::{self, UiContext};

/// Execute `--env`
pub fn execute<R: CommandRunner>(
    store: &StateStore,
    probe: &EnvironmentProbe<R>,
    config: &Config,
) -> LexidoResult<()> {
    let ctx = UiContext::detect();
    ui::intro(&ctx, "Lexido Environment");

    let host = HostContext::gather(probe, &config.probe);

    ui::section(&ctx, "Host");
    ui::key_value(&ctx, "System", host.os.name());
    for (label, value) in &host.fields {
        ui::key_value(&ctx, label, value);
    }
    if config.probe.package_managers {
        if host.package_managers.is_empty() {
            ui::key_value_status(&ctx, "Package managers", "none found", false);
        } else {
            ui::key_value_status(
                &ctx,
                "Package managers",
                &host.package_managers.join(", "),
                true,
            );
        }
    }

    ui::section(&ctx, "State");
    ui::key_value(
        &ctx,
        "Directory",
        &store.paths().base_dir().display().to_string(),
    );
    match store.credential_fields() {
        Ok(fields) if fields.iter().any(|f| f == API_KEY_FIELD) => {
            ui::key_value_status(&ctx, "API key", "configured", true)
        }
        Ok(_) => {
            ui::key_value_status(&ctx, "API key", "missing", false);
            ui::remark(&ctx, "Run: lexido --set-key <KEY>");
        }
        Err(e) => ui::key_value_status(&ctx, "API key", &e.to_string(), false),
    }

    ui::outro_success(&ctx, "Done");
    Ok(())
}
