//! UI context for detecting interactive vs CI environments

use std::io::IsTerminal;

/// UI context that determines output behavior
#[derive(Debug, Clone)]
pub struct UiContext {
    /// Whether running in an interactive terminal
    interactive: bool,
}

impl UiContext {
    /// Detect the current environment
    pub fn detect() -> Self {
        let interactive = Self::detect_interactive();
        Self { interactive }
    }

    /// Create a non-interactive context (for testing or explicit CI mode)
    pub fn non_interactive() -> Self {
        Self { interactive: false }
    }

    /// Check if we're in an interactive terminal
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Check if we should use fancy output (cliclack framing, colors)
    pub fn use_fancy_output(&self) -> bool {
        self.interactive
    }

    /// Detect if running in an interactive environment
    fn detect_interactive() -> bool {
        interactive_env(
            std::io::stdout().is_terminal(),
            std::io::stdin().is_terminal(),
            std::env::var_os("CI").is_some(),
        )
    }
}

/// Prompts need a terminal on both ends and no CI runner
fn interactive_env(stdout_tty: bool, stdin_tty: bool, ci: bool) -> bool {
    // Piped input occupies stdin, so prompts cannot read from it
    stdout_tty && stdin_tty && !ci
}
