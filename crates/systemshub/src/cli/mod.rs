//! Command-line interface for the `syshub` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::logging::Verbosity;

pub use commands::{ConfigCommand, ListCommand, ServeCommand, ShowCommand, UnlockCommand};

/// syshub - Serve and browse a catalogue of game systems
///
/// Runs the read-only catalogue API, or inspects the catalogue and its
/// unlock countdowns from the terminal.
#[derive(Debug, Parser)]
#[command(name = "syshub")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP API until interrupted
    Serve(ServeCommand),

    /// List the catalogue
    List(ListCommand),

    /// Show one system's detail view
    Show(ShowCommand),

    /// Count down a system's unlock and print its repository link
    Unlock(UnlockCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.verbose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn cli_with(verbose: u8, quiet: bool) -> Cli {
        Cli {
            config: None,
            verbose,
            quiet,
            command: Command::List(ListCommand {
                tag: None,
                json: false,
            }),
        }
    }

    #[test]
    fn test_cli_name() {
        assert_eq!(Cli::command().get_name(), "syshub");
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity() {
        assert_eq!(cli_with(0, true).verbosity(), Verbosity::Quiet);
        assert_eq!(cli_with(0, false).verbosity(), Verbosity::Normal);
        assert_eq!(cli_with(1, false).verbosity(), Verbosity::Verbose);
        assert_eq!(cli_with(2, false).verbosity(), Verbosity::Trace);
    }

    #[test]
    fn test_parse_serve() {
        let cli = Cli::try_parse_from(["syshub", "serve"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Serve(ServeCommand { bind: None })
        ));

        let cli = Cli::try_parse_from(["syshub", "serve", "--bind", "0.0.0.0:80"]).unwrap();
        match cli.command {
            Command::Serve(cmd) => assert_eq!(cmd.bind.as_deref(), Some("0.0.0.0:80")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_list_with_tag() {
        let cli = Cli::try_parse_from(["syshub", "list", "--tag", "npc", "--json"]).unwrap();
        match cli.command {
            Command::List(cmd) => {
                assert_eq!(cmd.tag.as_deref(), Some("npc"));
                assert!(cmd.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_show_requires_key() {
        assert!(Cli::try_parse_from(["syshub", "show"]).is_err());
        let cli = Cli::try_parse_from(["syshub", "show", "combat-system"]).unwrap();
        assert!(matches!(cli.command, Command::Show(ShowCommand { ref key, .. }) if key == "combat-system"));
    }

    #[test]
    fn test_parse_unlock() {
        let cli = Cli::try_parse_from(["syshub", "unlock", "wave-system"]).unwrap();
        assert!(matches!(cli.command, Command::Unlock(_)));
    }

    #[test]
    fn test_parse_config_validate() {
        let cli =
            Cli::try_parse_from(["syshub", "config", "validate", "--file", "/tmp/x.toml"]).unwrap();
        match cli.command {
            Command::Config(ConfigCommand::Validate { file }) => {
                assert_eq!(file, Some(PathBuf::from("/tmp/x.toml")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["syshub", "list", "-vv", "-c", "/custom/config.toml"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_parse_with_quiet() {
        let cli = Cli::try_parse_from(["syshub", "-q", "list"]).unwrap();
        assert!(cli.quiet);
    }
}
