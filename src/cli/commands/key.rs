//! Key command - store the API key

use crate::error::{LexidoError, LexidoResult};
use crate::state::{StateStore, API_KEY_FIELD};
use crate::ui::{self, UiContext};

/// Execute `--set-key`
pub fn execute(store: &StateStore, key: &str) -> LexidoResult<()> {
    let key = key.trim();
    if key.is_empty() {
        return Err(LexidoError::User("API key cannot be empty".to_string()));
    }

    store.set_credential(API_KEY_FIELD, key)?;

    let ctx = UiContext::detect();
    ui::step_ok_detail(
        &ctx,
        "API key saved",
        &store.paths().keyring_file().display().to_string(),
    );
    Ok(())
}
