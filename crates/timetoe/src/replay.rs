//! Headless replay: play a move list, optionally jump, print the result.

use anyhow::{Context, Result};
use timetoe_rules::{GameState, Position};
use tracing::{info, instrument};

use crate::error::MoveParseError;
use crate::view::{MoveOrder, history_entries};

/// Output format of the replay command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Board, status line and move list.
    #[default]
    Text,
    /// The serialized game state.
    Json,
}

/// Everything the replay command needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayRequest {
    /// Moves to play, X first.
    pub moves: Vec<Position>,
    /// Step to view after playing, if not the last.
    pub jump: Option<usize>,
    /// Move list order (text output only).
    pub order: MoveOrder,
    /// Output format.
    pub format: OutputFormat,
}

/// Parses a comma- or whitespace-separated list of cell indices or labels.
///
/// Empty input is an empty game.
#[instrument]
pub fn parse_moves(input: &str) -> Result<Vec<Position>, MoveParseError> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            Position::from_label_or_number(token).ok_or_else(|| {
                MoveParseError::new(token, "expected a cell index 0-8 or a label like \"center\"")
            })
        })
        .collect()
}

/// Plays the request and renders the result.
///
/// # Errors
///
/// Fails if a move is rejected or the jump target is not in the history.
#[instrument(skip(request), fields(moves = request.moves.len(), jump = ?request.jump))]
pub fn run(request: &ReplayRequest) -> Result<String> {
    let mut game = GameState::replay(request.moves.iter().copied())
        .context("Replay stopped at an illegal move")?;

    if let Some(step) = request.jump {
        game = game
            .jump_to(step)
            .with_context(|| format!("Cannot jump to step {step}"))?;
    }
    info!(step = game.step(), status = %game.status(), "Replay finished");

    match request.format {
        OutputFormat::Text => Ok(render_text(&game, request.order)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&game).context("Failed to serialize game state")
        }
    }
}

fn render_text(game: &GameState, order: MoveOrder) -> String {
    let mut out = format!("{}\n\n{}\n\n", game.board(), game.status());
    for entry in history_entries(game, order) {
        let marker = if entry.is_current { '>' } else { ' ' };
        out.push_str(&format!("{marker} {entry}\n"));
    }
    out
}
