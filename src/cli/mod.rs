//! CLI module for materials
//!
//! Provides command-line interface for:
//! - init-db: Create the materials table
//! - serve: Run the HTTP API
//! - client: Run the interactive form client

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{client, init_db, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
