//! CLI argument definitions using clap
//!
//! Commands:
//! - bookshelf serve [--config <path>] [--port <port>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Bookshelf - a minimal in-memory book CRUD API
#[derive(Parser, Debug)]
#[command(name = "bookshelf")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the bookshelf HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./bookshelf.json")]
        config: PathBuf,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::parse_from(["bookshelf", "serve"]);
        match cli.command {
            Command::Serve { config, port } => {
                assert_eq!(config, PathBuf::from("./bookshelf.json"));
                assert!(port.is_none());
            }
        }
    }

    #[test]
    fn test_serve_port_override() {
        let cli = Cli::parse_from(["bookshelf", "serve", "--port", "9000"]);
        match cli.command {
            Command::Serve { port, .. } => assert_eq!(port, Some(9000)),
        }
    }
}
