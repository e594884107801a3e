//! External command execution

use crate::error::{LexidoError, LexidoResult};
use std::process::{Command, Stdio};
use tracing::debug;

/// Runs an external program and returns its trimmed standard output
///
/// Spawn failures and non-zero exits are errors. There are no retries and no
/// timeout: a hung command hangs the caller.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> LexidoResult<String>;
}

/// Runner backed by `std::process::Command`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> LexidoResult<String> {
        let command = display_command(program, args);
        debug!("Executing: {}", command);

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| LexidoError::command_failed(&command, e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(LexidoError::command_exec(
                command,
                output.status.code().unwrap_or(-1),
                stderr.trim(),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

/// `program arg1 arg2`, for logs and error messages
pub fn display_command(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}
