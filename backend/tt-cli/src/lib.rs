//! tt-cli library
//!
//! Command definitions and the runner behind the `taxtrack` binary.

pub mod app;
pub mod cli;
pub mod commands;
pub mod document_commands;
pub mod error;
pub mod logger;

#[cfg(test)]
mod tests;

pub use app::App;
pub use cli::Cli;
pub use commands::Commands;
pub use document_commands::DocumentCommands;
pub use error::{CliError, Result as CliResult};
