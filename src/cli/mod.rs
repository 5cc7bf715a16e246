//! CLI module for the bookshelf service
//!
//! Provides the `serve` command: load config, boot the HTTP server, block
//! until it exits.

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{load_config, serve};
pub use errors::{CliError, CliResult};

/// Parse arguments and dispatch to the requested command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Command::Serve { config, port } => serve(&config, port),
    }
}
