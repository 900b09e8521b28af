//! CLI argument definitions using clap
//!
//! Commands:
//! - materials init-db [--config <path>]
//! - materials serve [--config <path>] [--port <n>] [--memory]
//! - materials client [--config <path>] [--api-url <url>] [--offline-fallback]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// materials - inventory API and form client
#[derive(Parser, Debug)]
#[command(name = "materials")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the materials table if it does not exist
    InitDb {
        /// Path to configuration file (default: ./materials.toml if present)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Start the HTTP API server
    Serve {
        /// Path to configuration file (default: ./materials.toml if present)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port to bind, overriding the configuration
        #[arg(long)]
        port: Option<u16>,

        /// Keep materials in memory instead of PostgreSQL
        #[arg(long)]
        memory: bool,
    },

    /// Run the interactive form client
    Client {
        /// Path to configuration file (default: ./materials.toml if present)
        #[arg(long)]
        config: Option<PathBuf>,

        /// API base URL, overriding the configuration
        #[arg(long)]
        api_url: Option<String>,

        /// Show placeholder data when the API is unreachable
        #[arg(long)]
        offline_fallback: bool,
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
    fn test_parse_serve() {
        let cli = Cli::try_parse_from(["materials", "serve", "--port", "8080", "--memory"]).unwrap();
        match cli.command {
            Command::Serve {
                config,
                port,
                memory,
            } => {
                assert!(config.is_none());
                assert_eq!(port, Some(8080));
                assert!(memory);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_client() {
        let cli = Cli::try_parse_from([
            "materials",
            "client",
            "--api-url",
            "http://localhost:9000",
            "--offline-fallback",
        ])
        .unwrap();
        match cli.command {
            Command::Client {
                api_url,
                offline_fallback,
                ..
            } => {
                assert_eq!(api_url.as_deref(), Some("http://localhost:9000"));
                assert!(offline_fallback);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_init_db() {
        let cli = Cli::try_parse_from(["materials", "init-db", "--config", "a.toml"]).unwrap();
        assert!(matches!(cli.command, Command::InitDb { config: Some(_) }));
    }
}
