//! Keyphrase command-line front end
//!
//! Argument parsing, config loading and subcommand handlers live here so
//! the binary stays a thin shell and the handlers can be tested directly.

pub mod cli;
pub mod commands;
pub mod config;

pub use cli::{Cli, CodecArgs, Commands};
pub use config::{Config, ConfigError};
