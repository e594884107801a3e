//! Lexido - terminal assistant support layer
//!
//! Keeps conversation state and the API key between invocations, captures
//! piped input, and probes the host so command suggestions fit the machine.

pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod probe;
pub mod state;
pub mod ui;

pub use error::{LexidoError, LexidoResult};
