//! Terminal output and prompts
//!
//! Uses `cliclack` for framed output and the credential prompt, with plain
//! output when not attached to an interactive terminal.

mod context;
mod output;
mod prompts;

pub use context::UiContext;
pub use output::{
    intro, key_value, key_value_status, outro_success, remark, section, step_ok_detail,
};
pub use prompts::secret;
