//! CLI command implementations

pub mod ask;
pub mod env;
pub mod key;

pub use ask::execute as ask;
pub use env::execute as env;
pub use key::execute as key;
