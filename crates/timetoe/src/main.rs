//! Timetoe - terminal tic-tac-toe with a time-travel move history.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use timetoe::{Cli, Command, ReplayRequest, Settings, logging, parse_moves, run_replay, tui};
use tracing::{debug, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(&cli.config)
        .with_context(|| format!("Failed to load settings from {}", cli.config.display()))?;

    match cli.command.unwrap_or_default() {
        Command::Play { order } => run_play(settings, order),
        Command::Replay {
            moves,
            jump,
            order,
            format,
        } => {
            logging::init_stderr(&settings);
            let request = ReplayRequest {
                moves: parse_moves(&moves)?,
                jump,
                order: order.unwrap_or(*settings.move_order()),
                format,
            };
            debug!(?request, "Running replay");
            println!("{}", run_replay(&request)?);
            Ok(())
        }
    }
}

/// Run the terminal UI
#[instrument(skip(settings))]
fn run_play(settings: Settings, order: Option<timetoe::MoveOrder>) -> Result<()> {
    let settings = match order {
        Some(order) => settings.with_move_order(order),
        None => settings,
    };
    logging::init_file(&settings)?;
    tui::run(&settings)
}
