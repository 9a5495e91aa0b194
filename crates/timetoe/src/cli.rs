//! Command-line interface for timetoe.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::DEFAULT_CONFIG_PATH;
use crate::replay::OutputFormat;
use crate::view::MoveOrder;

/// Timetoe - tic-tac-toe with a time-travel move history
#[derive(Parser, Debug)]
#[command(name = "timetoe")]
#[command(about = "Tic-tac-toe with a time-travel move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML settings file (defaults apply if it is missing)
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Initial order of the move list (overrides the settings file)
        #[arg(long, value_enum)]
        order: Option<MoveOrder>,
    },

    /// Play a list of moves without a UI and print the result
    Replay {
        /// Cells to play, X first: indices 0-8 or labels, e.g. "0,4,8" or "center"
        #[arg(short, long, default_value = "")]
        moves: String,

        /// History step to view after playing
        #[arg(short, long)]
        jump: Option<usize>,

        /// Order of the printed move list (overrides the settings file)
        #[arg(long, value_enum)]
        order: Option<MoveOrder>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play { order: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_play() {
        let cli = Cli::parse_from(["timetoe"]);
        assert_eq!(cli.command.unwrap_or_default(), Command::Play { order: None });
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_PATH));
    }

    #[test]
    fn test_replay_arguments() {
        let cli = Cli::parse_from([
            "timetoe", "replay", "--moves", "0,4,8", "--jump", "2", "--order", "desc", "--format",
            "json",
        ]);
        assert_eq!(
            cli.command,
            Some(Command::Replay {
                moves: "0,4,8".to_string(),
                jump: Some(2),
                order: Some(MoveOrder::Descending),
                format: OutputFormat::Json,
            })
        );
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::parse_from(["timetoe", "play", "--config", "alt.toml"]);
        assert_eq!(cli.config, PathBuf::from("alt.toml"));
    }

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
