//! Presentation model shared by the TUI and the replay command.
//!
//! Nothing here changes game state. The move list is built from the
//! history and ordered on the way out.

use serde::{Deserialize, Serialize};
use timetoe_rules::{GameState, MoveRecord};
use tracing::instrument;

/// Display order of the move list.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum MoveOrder {
    /// Game start first.
    #[default]
    #[value(alias = "asc")]
    Ascending,
    /// Latest move first.
    #[value(alias = "desc")]
    Descending,
}

impl MoveOrder {
    /// Toggles between ascending and descending.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Label of the toggle button, naming the order it switches to.
    pub fn button_label(self) -> &'static str {
        match self {
            Self::Ascending => "Order Descending",
            Self::Descending => "Order Ascending",
        }
    }

    /// Sorts entries by step in this order.
    ///
    /// The sort is stable and works on a copy, so the history itself is
    /// never reordered.
    pub fn arrange(self, mut entries: Vec<HistoryEntry>) -> Vec<HistoryEntry> {
        match self {
            Self::Ascending => entries.sort_by_key(|e| e.step),
            Self::Descending => entries.sort_by_key(|e| std::cmp::Reverse(e.step)),
        }
        entries
    }
}

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    /// History index this row jumps to.
    pub step: usize,
    /// "Go to game start" or "Go to move #N".
    pub label: String,
    /// "(column, row)" of the move, or the "(col, row)" legend for the start.
    pub coordinates: String,
    /// Whether this is the step currently on the board.
    pub is_current: bool,
}

impl HistoryEntry {
    fn from_record(step: usize, record: &MoveRecord, current: usize) -> Self {
        let label = if step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{step}")
        };
        let coordinates = record
            .coordinates()
            .map_or_else(|| "(col, row)".to_string(), |c| c.to_string());

        Self {
            step,
            label,
            coordinates,
            is_current: step == current,
        }
    }
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.label, self.coordinates)
    }
}

/// Builds the move list for `game`, arranged in `order`.
#[instrument(skip(game), fields(len = game.history().len()))]
pub fn history_entries(game: &GameState, order: MoveOrder) -> Vec<HistoryEntry> {
    let entries = game
        .history()
        .iter()
        .enumerate()
        .map(|(step, record)| HistoryEntry::from_record(step, record, game.step()))
        .collect();
    order.arrange(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use timetoe_rules::Position;

    fn game() -> GameState {
        GameState::replay([Position::Center, Position::TopLeft, Position::MiddleRight])
            .expect("valid replay")
    }

    #[test]
    fn test_ascending_entries() {
        let entries = history_entries(&game(), MoveOrder::Ascending);
        let rendered: Vec<String> = entries.iter().map(ToString::to_string).collect();

        assert_eq!(
            rendered,
            [
                "Go to game start (col, row)",
                "Go to move #1 (2, 2)",
                "Go to move #2 (1, 1)",
                "Go to move #3 (3, 2)",
            ]
        );
        assert!(entries[3].is_current);
        assert!(!entries[0].is_current);
    }

    #[test]
    fn test_descending_puts_start_last() {
        let entries = history_entries(&game(), MoveOrder::Descending);
        let steps: Vec<usize> = entries.iter().map(|e| e.step).collect();
        assert_eq!(steps, [3, 2, 1, 0]);
    }

    #[test]
    fn test_current_marker_follows_jump() {
        let rewound = game().jump_to(1).expect("step 1 exists");
        let entries = history_entries(&rewound, MoveOrder::Ascending);
        let current: Vec<usize> = entries
            .iter()
            .filter(|e| e.is_current)
            .map(|e| e.step)
            .collect();
        assert_eq!(current, [1]);
    }

    #[test]
    fn test_toggle_and_labels() {
        assert_eq!(MoveOrder::Ascending.toggle(), MoveOrder::Descending);
        assert_eq!(MoveOrder::Descending.toggle(), MoveOrder::Ascending);
        assert_eq!(MoveOrder::Ascending.button_label(), "Order Descending");
        assert_eq!(MoveOrder::Descending.button_label(), "Order Ascending");
    }

    #[test]
    fn test_ordering_leaves_history_alone() {
        let game = game();
        let before = game.history().to_vec();
        let _ = history_entries(&game, MoveOrder::Descending);
        assert_eq!(game.history(), before.as_slice());
    }
}
