//! Step bounds invariant: the current step indexes a recorded move.

use super::Invariant;
use crate::GameState;

/// Invariant: history is never empty and the step points into it.
pub struct StepInBoundsInvariant;

impl Invariant<GameState> for StepInBoundsInvariant {
    fn holds(game: &GameState) -> bool {
        !game.history.is_empty() && game.step < game.history.len()
    }

    fn description() -> &'static str {
        "Current step is within the recorded history"
    }
}
