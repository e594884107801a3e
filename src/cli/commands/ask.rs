//! Ask command - turn a prompt into a request for the suggestion backend

use crate::cli::Cli;
use crate::config::Config;
use crate::context::{compose_request, HostContext};
use crate::error::{LexidoError, LexidoResult};
use crate::probe::{CommandRunner, EnvironmentProbe};
use crate::state::{StateStore, API_KEY_FIELD};
use crate::ui::{self, UiContext};
use clap::CommandFactory;
use tracing::{debug, info};

/// Execute a prompt
///
/// The assembled request replaces the cached conversation so that `-c` can
/// pick it up next time, and is written to stdout.
pub fn execute<R: CommandRunner>(
    cli: &Cli,
    store: &StateStore,
    probe: &EnvironmentProbe<R>,
    config: &Config,
) -> LexidoResult<()> {
    let piped = store.capture_piped_input()?;
    let prompt = cli.prompt_text();

    let nothing_piped = piped.as_deref().map_or(true, |input| input.trim().is_empty());
    if prompt.trim().is_empty() && nothing_piped {
        Cli::command()
            .print_help()
            .map_err(|e| LexidoError::io("printing help", e))?;
        return Ok(());
    }

    ensure_api_key(store, &UiContext::detect())?;

    let history = if cli.continue_conversation {
        store.load_conversation()?
    } else {
        store.clear_conversation()?;
        String::new()
    };
    debug!("Continuing from {} bytes of history", history.len());

    let request = build_request(&history, probe, config, piped.as_deref(), &prompt);

    store.save_conversation(&request)?;
    info!("Saved conversation to {}", store.paths().conversation_file().display());

    print!("{}", request);
    Ok(())
}

/// Assemble one turn, probing the host only for a fresh conversation
fn build_request<R: CommandRunner>(
    history: &str,
    probe: &EnvironmentProbe<R>,
    config: &Config,
    piped: Option<&str>,
    prompt: &str,
) -> String {
    let host = history
        .trim()
        .is_empty()
        .then(|| HostContext::gather(probe, &config.probe));
    compose_request(history, host.as_ref(), piped, prompt)
}

/// Make sure an API key is stored, asking for one on a terminal
fn ensure_api_key(store: &StateStore, ctx: &UiContext) -> LexidoResult<()> {
    let err = match store.get_credential(API_KEY_FIELD) {
        Ok(_) => return Ok(()),
        Err(e) if e.is_missing_credential() => e,
        Err(e) => return Err(e),
    };

    match ui::secret(ctx, "Enter your API key")? {
        Some(key) => store.set_credential(API_KEY_FIELD, &key),
        None => Err(err),
    }
}
