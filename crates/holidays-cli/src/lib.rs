//! Command-line interface for the holidays API.
//!
//! This crate provides the `holidays` binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod secret;

pub use cli::Cli;
pub use error::{CliError, CliResult};
