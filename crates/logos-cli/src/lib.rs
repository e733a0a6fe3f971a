//! Logos CLI library.
//!
//! This library provides the core functionality for the `logos` command-line
//! interface, including settings, command execution, and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Settings;
pub use error::{CliError, Result};
pub use output::Formatter;
