//! Lexido - terminal assistant
//!
//! CLI entry point that dispatches on flags.

use clap::Parser;
use console::style;
use lexido::cli::{commands, Cli};
use lexido::config::schema::LogFormat;
use lexido::config::{ConfigManager, StatePaths};
use lexido::error::LexidoResult;
use lexido::probe::EnvironmentProbe;
use lexido::state::StateStore;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> LexidoResult<()> {
    let cli = Cli::parse();

    let paths = StatePaths::resolve()?;
    let config_manager = match cli.config {
        Some(ref path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(&paths),
    };
    let config = config_manager.load()?;

    init_logging(cli.verbose, config.general.log_format);
    debug!("State directory: {}", paths.base_dir().display());
    debug!("Config: {}", config_manager.path().display());

    let store = StateStore::new(paths);

    if let Some(ref key) = cli.set_key {
        return commands::key(&store, key);
    }

    let probe = EnvironmentProbe::new();
    if cli.env {
        return commands::env(&store, &probe, &config);
    }

    commands::ask(&cli, &store, &probe, &config)
}

/// Logging goes to stderr: 0 = warn, 1 = info, 2+ = debug
fn init_logging(verbose: u8, format: LogFormat) {
    let filter = match verbose {
        0 => EnvFilter::new("lexido=warn"),
        1 => EnvFilter::new("lexido=info"),
        _ => EnvFilter::new("lexido=debug"),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
