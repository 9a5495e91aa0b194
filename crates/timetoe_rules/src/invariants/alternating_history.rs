//! Alternating history invariant: each record adds one mark, X first.

use super::Invariant;
use crate::{GameState, MoveRecord, Player, Square, check_winner};

/// Invariant: the history is a legal game, one mark at a time.
///
/// - Record 0 is the start record with an empty board.
/// - Record N is record N-1 plus the mover's mark at the recorded
///   position, which was empty. X makes odd moves, O even ones.
/// - No record follows a board that already has a winner.
///
/// Together these imply the board at step N has exactly N marks.
pub struct AlternatingHistoryInvariant;

impl Invariant<GameState> for AlternatingHistoryInvariant {
    fn holds(game: &GameState) -> bool {
        match game.history.first() {
            Some(first) if *first == MoveRecord::start() => {}
            _ => return false,
        }

        game.history.windows(2).enumerate().all(|(i, pair)| {
            let (prev, next) = (&pair[0], &pair[1]);
            let Some(pos) = next.position else {
                return false;
            };
            let mover = Player::for_move(i + 1);

            check_winner(&prev.board).is_none()
                && prev.board.is_empty(pos)
                && next.board == prev.board.with(pos, Square::Occupied(mover))
        })
    }

    fn description() -> &'static str {
        "Each move adds one mark to an empty square, alternating X, O, X, ..."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Position};

    #[test]
    fn test_empty_game_holds() {
        assert!(AlternatingHistoryInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_full_drawn_game_holds() {
        let game = GameState::replay([
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::TopCenter,
            Position::BottomCenter,
            Position::MiddleLeft,
            Position::MiddleRight,
            Position::BottomRight,
            Position::BottomLeft,
        ])
        .expect("valid replay");

        assert!(game.is_draw());
        assert!(AlternatingHistoryInvariant::holds(&game));
        for (n, record) in game.history().iter().enumerate() {
            assert_eq!(record.board().occupied(), n);
        }
    }

    #[test]
    fn test_extra_mark_violates() {
        let mut game = GameState::replay([Position::Center]).expect("valid replay");
        game.history[1]
            .board
            .set(Position::TopLeft, Square::Occupied(Player::O));
        assert!(!AlternatingHistoryInvariant::holds(&game));
    }

    #[test]
    fn test_wrong_mover_violates() {
        let mut game = GameState::replay([Position::Center]).expect("valid replay");
        game.history[1].board = Board::new().with(Position::Center, Square::Occupied(Player::O));
        assert!(!AlternatingHistoryInvariant::holds(&game));
    }

    #[test]
    fn test_non_empty_start_violates() {
        let mut game = GameState::new();
        game.history[0].board.set(Position::Center, Square::Occupied(Player::X));
        assert!(!AlternatingHistoryInvariant::holds(&game));
    }
}
