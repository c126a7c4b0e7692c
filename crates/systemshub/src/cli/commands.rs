//! CLI command definitions.

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// `serve` arguments.
#[derive(Debug, Args)]
pub struct ServeCommand {
    /// Address to listen on, overriding `server.bind`
    #[arg(short, long, value_name = "ADDR")]
    pub bind: Option<String>,
}

/// `list` arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Only show systems carrying this tag
    #[arg(short, long)]
    pub tag: Option<String>,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// `show` arguments.
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Key of the system to show
    pub key: String,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// `unlock` arguments.
#[derive(Debug, Args)]
pub struct UnlockCommand {
    /// Key of the system to unlock
    pub key: String,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_command_debug() {
        let cmd = ConfigCommand::Show { json: false };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Show"));
    }

    #[test]
    fn test_serve_command_debug() {
        let cmd = ServeCommand {
            bind: Some("0.0.0.0:8080".to_string()),
        };
        assert!(format!("{cmd:?}").contains("0.0.0.0:8080"));
    }
}
