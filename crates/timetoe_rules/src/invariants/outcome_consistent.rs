//! Outcome consistency invariant: the stored outcome matches the board.

use super::Invariant;
use crate::{GameState, Outcome};

/// Invariant: the outcome equals a fresh evaluation of the current board.
///
/// This is what keeps the highlight and the draw flag honest across jumps:
/// neither may survive a move to a step whose board does not justify it.
pub struct OutcomeConsistentInvariant;

impl Invariant<GameState> for OutcomeConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        game.history
            .get(game.step)
            .is_some_and(|record| Outcome::evaluate(&record.board) == game.outcome)
    }

    fn description() -> &'static str {
        "Outcome matches the board at the current step"
    }
}
