//! Time-travel game state machine.
//!
//! A [`GameState`] is an immutable value. Playing a move or jumping to a
//! recorded step never edits the receiver; it returns the next state, which
//! the owner swaps in wholesale. Whose turn it is, the winning line and the
//! draw flag are all recomputed from the snapshot at the current step, so a
//! jump back into the past leaves no stale outcome behind.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::invariants::{GameInvariants, InvariantSet};
use crate::position::{Coordinates, Position};
use crate::rules::{Win, check_winner, is_draw};
use crate::types::{Board, Player, Square};

/// One entry in the move history: the board after a move, and the move.
///
/// The first record of every game is a synthetic start record holding the
/// empty board and no position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct MoveRecord {
    /// Board snapshot after this move.
    pub(crate) board: Board,
    /// Cell played, or `None` for the start record.
    pub(crate) position: Option<Position>,
}

impl MoveRecord {
    /// The synthetic record every history begins with.
    pub fn start() -> Self {
        Self {
            board: Board::new(),
            position: None,
        }
    }

    /// Returns true for the synthetic start record.
    pub fn is_start(&self) -> bool {
        self.position.is_none()
    }

    /// 1-based (column, row) of the cell played, if any.
    pub fn coordinates(&self) -> Option<Coordinates> {
        self.position.map(Position::coordinates)
    }
}

/// Result of evaluating the board at the current step.
///
/// A won board and a drawn board are distinct variants, so the highlight
/// and the draw flag can never both be set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line is complete and empty squares remain.
    InProgress,
    /// A line is complete.
    Won(Win),
    /// The board is full and no line is complete.
    Drawn,
}

impl Outcome {
    /// Evaluates a board, checking for a winner before declaring a draw.
    #[instrument]
    pub fn evaluate(board: &Board) -> Self {
        if let Some(win) = check_winner(board) {
            Outcome::Won(win)
        } else if is_draw(board) {
            Outcome::Drawn
        } else {
            Outcome::InProgress
        }
    }
}

/// The one-line status shown above the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Status {
    /// Game continues.
    #[display("Next player: {_0}")]
    NextPlayer(Player),
    /// Game won.
    #[display("Winner: {_0}")]
    Winner(Player),
    /// Board full with no winner.
    #[display("The match is a tie")]
    Tie,
}

/// Why a move was not applied.
///
/// Interactive front ends treat both variants as silent no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The board at the current step already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// The square at the position is already occupied.
    #[display("Square {_0} is already occupied")]
    SquareOccupied(Position),
}

impl std::error::Error for MoveError {}

/// Jump target outside the recorded history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum JumpError {
    /// Step is not an index into the history.
    #[display("Step {step} is out of range (history has {len} entries)")]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Current history length.
        len: usize,
    },
}

impl std::error::Error for JumpError {}

/// A move in a replayed sequence was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("Move #{} rejected: {}", index + 1, source)]
pub struct ReplayError {
    /// 0-based index of the rejected move in the input sequence.
    pub index: usize,
    /// Why it was rejected.
    pub source: MoveError,
}

impl std::error::Error for ReplayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Complete game state: the move history and the step being viewed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub(crate) history: Vec<MoveRecord>,
    pub(crate) step: usize,
    pub(crate) outcome: Outcome,
}

impl GameState {
    /// Creates a new game: only the start record, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![MoveRecord::start()],
            step: 0,
            outcome: Outcome::InProgress,
        }
    }

    /// Builds a game by playing `positions` in order from a new game.
    ///
    /// # Errors
    ///
    /// Stops at the first rejected move and reports its index.
    #[instrument(skip(positions))]
    pub fn replay(positions: impl IntoIterator<Item = Position>) -> Result<Self, ReplayError> {
        positions
            .into_iter()
            .enumerate()
            .try_fold(Self::new(), |game, (index, pos)| {
                game.apply_move(pos)
                    .map_err(|source| ReplayError { index, source })
            })
    }

    /// Plays the current player's mark at `position`.
    ///
    /// Any history past the current step is discarded before the new record
    /// is appended, and the new record becomes the current step.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the current board already has a winner
    /// - [`MoveError::SquareOccupied`] if `position` is taken
    ///
    /// `self` is unchanged in either case.
    #[instrument(skip(self), fields(step = self.step, player = %self.to_move()))]
    pub fn apply_move(&self, position: Position) -> Result<Self, MoveError> {
        let board = self.board();

        if check_winner(&board).is_some() {
            debug!("Move ignored, game already won");
            return Err(MoveError::GameOver);
        }
        if !board.is_empty(position) {
            debug!(?position, "Move ignored, square occupied");
            return Err(MoveError::SquareOccupied(position));
        }

        let mut history = self.history[..=self.step].to_vec();
        history.push(MoveRecord {
            board: board.with(position, Square::Occupied(self.to_move())),
            position: Some(position),
        });
        let step = history.len() - 1;

        let next = Self::settle(history, step);
        debug!(step, outcome = ?next.outcome, "Move applied");
        Ok(next)
    }

    /// Views the game as it was after `step` moves.
    ///
    /// History is kept, so jumping forward again is always possible until a
    /// new move is played from an earlier step.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError::StepOutOfRange`] if `step` is not in the history.
    #[instrument(skip(self), fields(from = self.step))]
    pub fn jump_to(&self, step: usize) -> Result<Self, JumpError> {
        if step >= self.history.len() {
            return Err(JumpError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }
        Ok(Self::settle(self.history.clone(), step))
    }

    fn settle(history: Vec<MoveRecord>, step: usize) -> Self {
        let outcome = Outcome::evaluate(&history[step].board);
        let state = Self {
            history,
            step,
            outcome,
        };
        debug_assert!(
            GameInvariants::check_all(&state).is_ok(),
            "invariant violated: {:?}",
            GameInvariants::check_all(&state)
        );
        state
    }

    /// The recorded history, start record first.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Index of the step being viewed.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Index of the most recent record.
    pub fn latest_step(&self) -> usize {
        self.history.len() - 1
    }

    /// The record at the current step.
    pub fn current(&self) -> &MoveRecord {
        &self.history[self.step]
    }

    /// The board at the current step.
    pub fn board(&self) -> Board {
        self.current().board
    }

    /// Player to move next: X on even steps, O on odd.
    pub fn to_move(&self) -> Player {
        if self.step % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Returns true when X moves next.
    pub fn x_is_next(&self) -> bool {
        self.to_move() == Player::X
    }

    /// Outcome of the board at the current step.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Winner at the current step.
    pub fn winner(&self) -> Option<Player> {
        match self.outcome {
            Outcome::Won(win) => Some(win.player),
            _ => None,
        }
    }

    /// Winning cells to highlight at the current step.
    pub fn highlight(&self) -> Option<[Position; 3]> {
        match self.outcome {
            Outcome::Won(win) => Some(win.line),
            _ => None,
        }
    }

    /// Returns true if the current board is a draw.
    pub fn is_draw(&self) -> bool {
        self.outcome == Outcome::Drawn
    }

    /// Status line for the current step.
    pub fn status(&self) -> Status {
        match self.outcome {
            Outcome::Won(win) => Status::Winner(win.player),
            Outcome::Drawn => Status::Tie,
            Outcome::InProgress => Status::NextPlayer(self.to_move()),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::is_full;
    use Position::*;

    fn play(positions: &[Position]) -> GameState {
        GameState::replay(positions.iter().copied()).expect("valid replay")
    }

    #[test]
    fn test_new_game() {
        let game = GameState::new();
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.step(), 0);
        assert!(game.current().is_start());
        assert!(game.x_is_next());
        assert_eq!(game.status(), Status::NextPlayer(Player::X));
    }

    #[test]
    fn test_apply_move_records_snapshot_and_coordinates() {
        let game = GameState::new().apply_move(MiddleRight).expect("empty board");

        assert_eq!(game.step(), 1);
        assert_eq!(game.to_move(), Player::O);
        assert_eq!(game.board().get(MiddleRight), Square::Occupied(Player::X));
        assert_eq!(
            game.current().coordinates(),
            Some(Coordinates { column: 3, row: 2 })
        );
        // The start record keeps its own empty board.
        assert_eq!(game.history()[0].board(), &Board::new());
    }

    #[test]
    fn test_receiver_unchanged_by_apply_move() {
        let before = play(&[Center]);
        let snapshot = before.clone();
        let _after = before.apply_move(TopLeft).expect("free square");
        assert_eq!(before, snapshot);
    }

    #[test]
    fn test_occupied_square_rejected() {
        let game = play(&[Center]);
        assert_eq!(
            game.apply_move(Center),
            Err(MoveError::SquareOccupied(Center))
        );
    }

    #[test]
    fn test_move_after_win_rejected() {
        let game = play(&[TopLeft, MiddleLeft, TopCenter, Center, TopRight]);
        assert_eq!(game.winner(), Some(Player::X));
        assert_eq!(game.apply_move(BottomLeft), Err(MoveError::GameOver));
    }

    #[test]
    fn test_move_after_rewind_truncates_future() {
        let game = play(&[TopLeft, Center, BottomRight, TopRight]);
        let rewound = game.jump_to(1).expect("step 1 exists");
        let branched = rewound.apply_move(BottomLeft).expect("square free at step 1");

        assert_eq!(branched.history().len(), 3);
        assert_eq!(branched.step(), 2);
        assert_eq!(branched.to_move(), Player::X);
        assert_eq!(branched.board().get(BottomLeft), Square::Occupied(Player::O));
        assert!(branched.board().is_empty(BottomRight));
        assert_eq!(branched.current().position(), &Some(BottomLeft));
    }

    #[test]
    fn test_jump_out_of_range() {
        let game = play(&[Center]);
        assert_eq!(
            game.jump_to(2),
            Err(JumpError::StepOutOfRange { step: 2, len: 2 })
        );
    }

    #[test]
    fn test_ninth_move_win_is_not_draw() {
        // X O X / O X O / O X X, X completes the main diagonal on move 9.
        let game = play(&[
            TopLeft,
            TopCenter,
            TopRight,
            MiddleLeft,
            Center,
            MiddleRight,
            BottomCenter,
            BottomLeft,
            BottomRight,
        ]);
        assert!(is_full(&game.board()));
        assert_eq!(game.winner(), Some(Player::X));
        assert!(!game.is_draw());
        assert_eq!(game.highlight(), Some([TopLeft, Center, BottomRight]));
    }

    #[test]
    fn test_replay_reports_rejected_index() {
        let err = GameState::replay([Center, TopLeft, Center]).unwrap_err();
        assert_eq!(err.index, 2);
        assert_eq!(err.source, MoveError::SquareOccupied(Center));
        assert_eq!(err.to_string(), "Move #3 rejected: Square Center is already occupied");
    }

    #[test]
    fn test_latest_step_survives_jump() {
        let game = play(&[Center, TopLeft, BottomRight]);
        assert_eq!(game.latest_step(), 3);

        let rewound = game.jump_to(1).expect("step 1 exists");
        assert_eq!(rewound.step(), 1);
        assert_eq!(rewound.latest_step(), 3);

        let branched = rewound.apply_move(TopRight).expect("square free at step 1");
        assert_eq!(branched.latest_step(), 2);
    }

    #[test]
    fn test_evaluate_full_boards() {
        let x = Square::Occupied(Player::X);
        let o = Square::Occupied(Player::O);

        // X O X / X O O / O X X
        let drawn = [
            (TopLeft, x),
            (TopCenter, o),
            (TopRight, x),
            (MiddleLeft, x),
            (Center, o),
            (MiddleRight, o),
            (BottomLeft, o),
            (BottomCenter, x),
            (BottomRight, x),
        ]
        .into_iter()
        .fold(Board::new(), |board, (pos, sq)| board.with(pos, sq));
        assert_eq!(Outcome::evaluate(&drawn), Outcome::Drawn);

        // X O X / X O O / X X X: the bottom row is checked before the left column.
        let won = drawn.with(BottomLeft, x);
        assert!(is_full(&won));
        assert_eq!(
            Outcome::evaluate(&won),
            Outcome::Won(Win {
                player: Player::X,
                line: [BottomLeft, BottomCenter, BottomRight],
            })
        );
    }

    #[test]
    fn test_status_display() {
        assert_eq!(Status::NextPlayer(Player::O).to_string(), "Next player: O");
        assert_eq!(Status::Winner(Player::X).to_string(), "Winner: X");
        assert_eq!(Status::Tie.to_string(), "The match is a tie");
    }
}
