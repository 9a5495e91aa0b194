//! Tic-tac-toe rules and a time-travel game state machine.
//!
//! # Architecture
//!
//! - **Types**: [`Player`], [`Square`], [`Board`] and [`Position`]
//! - **Rules**: pure winner and draw evaluation over a board snapshot
//! - **Game**: [`GameState`], an immutable value holding the full move
//!   history and a pointer to the step being viewed
//! - **Invariants**: checkable properties every [`GameState`] upholds
//!
//! # Example
//!
//! ```
//! use timetoe_rules::{GameState, Player, Position};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let game = GameState::new()
//!     .apply_move(Position::TopLeft)?
//!     .apply_move(Position::TopCenter)?
//!     .apply_move(Position::Center)?
//!     .apply_move(Position::MiddleLeft)?
//!     .apply_move(Position::BottomRight)?;
//!
//! assert_eq!(game.winner(), Some(Player::X));
//!
//! let rewound = game.jump_to(2)?;
//! assert_eq!(rewound.winner(), None);
//! assert_eq!(rewound.history().len(), 6);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use game::{GameState, JumpError, MoveError, MoveRecord, Outcome, ReplayError, Status};
pub use invariants::{GameInvariants, Invariant, InvariantSet, InvariantViolation};
pub use position::{Coordinates, Position};
pub use rules::{Win, check_winner, is_draw, is_full};
pub use types::{Board, Player, Square};
