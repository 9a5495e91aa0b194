//! First-class invariants for the time-travel game state.
//!
//! Invariants are logical properties that must hold for every [`GameState`]
//! the state machine hands out. Transitions check them with `debug_assert!`
//! and tests can check them independently.
//!
//! [`GameState`]: crate::GameState

pub mod alternating_history;
pub mod outcome_consistent;
pub mod step_in_bounds;

pub use alternating_history::AlternatingHistoryInvariant;
pub use outcome_consistent::OutcomeConsistentInvariant;
pub use step_in_bounds::StepInBoundsInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

impl std::error::Error for InvariantViolation {}

/// A set of invariants checked together.
///
/// Implemented for 2- and 3-tuples of [`Invariant`]s. Every member is
/// checked, so the error lists all violations rather than the first.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check_one<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        into_result(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        check_one::<S, I3>(state, &mut violations);
        into_result(violations)
    }
}

/// Every invariant of [`GameState`](crate::GameState).
pub type GameInvariants = (
    StepInBoundsInvariant,
    AlternatingHistoryInvariant,
    OutcomeConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameState, Position};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(GameInvariants::check_all(&GameState::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves_and_jumps() {
        let game = GameState::replay([Position::TopLeft, Position::Center, Position::TopRight])
            .expect("valid replay");
        assert!(GameInvariants::check_all(&game).is_ok());

        let rewound = game.jump_to(1).expect("step 1 exists");
        assert!(GameInvariants::check_all(&rewound).is_ok());
    }

    #[test]
    fn test_two_invariants_as_set() {
        type Pair = (StepInBoundsInvariant, AlternatingHistoryInvariant);
        assert!(Pair::check_all(&GameState::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut game = GameState::replay([Position::Center]).expect("valid replay");
        game.step = 5;

        let violations = GameInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].description, StepInBoundsInvariant::description());
        assert_eq!(
            violations[1].description,
            OutcomeConsistentInvariant::description()
        );
    }
}
