//! Interactive prompts with non-interactive fallback

use super::context::UiContext;
use crate::error::{LexidoError, LexidoResult};

/// Ask for a secret without echoing it
///
/// Returns `None` without prompting when the session is not interactive.
pub fn secret(ctx: &UiContext, message: &str) -> LexidoResult<Option<String>> {
    if !ctx.is_interactive() {
        return Ok(None);
    }

    let value: String = cliclack::password(message)
        .mask('*')
        .validate(|input: &String| {
            if input.trim().is_empty() {
                Err("Value cannot be empty")
            } else {
                Ok(())
            }
        })
        .interact()
        .map_err(|e| LexidoError::User(format!("Prompt failed: {}", e)))?;

    Ok(Some(value.trim().to_string()))
}
