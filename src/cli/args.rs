//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Lexido - terminal assistant
///
/// Suggests shell commands for the machine it runs on. Pipe output in to
/// ask about it, and use -c to follow up on the previous answer.
#[derive(Parser, Debug)]
#[command(name = "lexido")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Examples:\n  \
    lexido \"install teamspeak via docker\"\n  \
    lexido -c \"add more details or follow-up\"\n  \
    ls | lexido \"what should I do with these files?\"\n\n\
    Note: Lexido's outputs may not always be factual. User discretion is advised.")]
pub struct Cli {
    /// What you want to do, in plain language
    #[arg(value_name = "PROMPT")]
    pub prompt: Vec<String>,

    /// Continue with the previous prompt or add more details to it
    #[arg(short = 'c', long = "continue")]
    pub continue_conversation: bool,

    /// Store the API key used for suggestions
    #[arg(long, value_name = "KEY", conflicts_with_all = ["prompt", "env"])]
    pub set_key: Option<String>,

    /// Show what Lexido detects about this machine
    #[arg(long, conflicts_with = "prompt")]
    pub env: bool,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(long, env = "LEXIDO_CONFIG")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Prompt words joined into one string
    pub fn prompt_text(&self) -> String {
        self.prompt.join(" ")
    }
}
