//! The append-only move log.
//!
//! History is the only fact the engine stores. It is kept most-recent-first:
//! appending places the new move at the head. Values are persistent, so
//! appending never disturbs a history some other caller still holds.

use super::action::{Move, MoveError};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Ordered log of moves, most recent first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Move>", into = "Vec<Move>")]
pub struct History {
    moves: Vec<Move>,
}

impl History {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a history by appending `moves` in the order given (oldest first).
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::DuplicateMove`] if two moves claim the same cell.
    #[instrument(skip(moves))]
    pub fn from_chronological(
        moves: impl IntoIterator<Item = Move>,
    ) -> Result<Self, MoveError> {
        moves
            .into_iter()
            .try_fold(Self::new(), |history, mv| history.append(mv))
    }

    /// Returns a new history with `mv` at the head.
    ///
    /// `self` is left untouched, so a rejected append changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::DuplicateMove`] if a recorded move already claims
    /// the same cell.
    #[instrument(skip(self), fields(len = self.len()))]
    pub fn append(&self, mv: Move) -> Result<Self, MoveError> {
        if self.contains_cell(mv.row(), mv.col()) {
            debug!(row = mv.row(), col = mv.col(), "Rejecting duplicate cell");
            return Err(MoveError::DuplicateMove {
                row: mv.row(),
                col: mv.col(),
            });
        }

        let mut moves = Vec::with_capacity(self.moves.len() + 1);
        moves.push(mv);
        moves.extend_from_slice(&self.moves);
        Ok(Self { moves })
    }

    /// Returns the empty history a restarted game begins with.
    pub fn reset(&self) -> Self {
        Self::new()
    }

    /// Number of recorded moves.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns true if no move has been recorded.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// The most recently appended move.
    pub fn latest(&self) -> Option<&Move> {
        self.moves.first()
    }

    /// Moves from newest to oldest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Move> + ExactSizeIterator {
        self.moves.iter()
    }

    /// Moves from oldest to newest.
    pub fn chronological(&self) -> impl DoubleEndedIterator<Item = &Move> + ExactSizeIterator {
        self.moves.iter().rev()
    }

    /// Returns true if some recorded move claims `(row, col)`.
    pub fn contains_cell(&self, row: usize, col: usize) -> bool {
        self.moves.iter().any(|m| m.row() == row && m.col() == col)
    }
}

impl TryFrom<Vec<Move>> for History {
    type Error = MoveError;

    /// Rebuilds a history from its most-recent-first form, re-checking cells.
    fn try_from(newest_first: Vec<Move>) -> Result<Self, Self::Error> {
        Self::from_chronological(newest_first.into_iter().rev())
    }
}

impl From<History> for Vec<Move> {
    fn from(history: History) -> Self {
        history.moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Symbol;

    fn mv(row: usize, col: usize, player: Symbol) -> Move {
        Move::new(row, col, player).unwrap()
    }

    #[test]
    fn test_append_prepends() {
        let history = History::new()
            .append(mv(0, 0, Symbol::X))
            .and_then(|h| h.append(mv(1, 1, Symbol::O)))
            .unwrap();

        assert_eq!(history.len(), 2);
        assert_eq!(history.latest(), Some(&mv(1, 1, Symbol::O)));
        let oldest: Vec<_> = history.chronological().copied().collect();
        assert_eq!(oldest, vec![mv(0, 0, Symbol::X), mv(1, 1, Symbol::O)]);
    }

    #[test]
    fn test_append_is_persistent() {
        let before = History::new().append(mv(0, 0, Symbol::X)).unwrap();
        let after = before.append(mv(2, 2, Symbol::O)).unwrap();

        assert_eq!(before.len(), 1);
        assert_eq!(after.len(), 2);
    }

    #[test]
    fn test_duplicate_cell_rejected() {
        let history = History::new().append(mv(1, 2, Symbol::X)).unwrap();
        let result = history.append(mv(1, 2, Symbol::O));

        assert_eq!(result, Err(MoveError::DuplicateMove { row: 1, col: 2 }));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_reset_empties() {
        let history = History::new().append(mv(0, 1, Symbol::X)).unwrap();
        assert!(history.reset().is_empty());
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_json_is_newest_first() {
        let history =
            History::from_chronological([mv(0, 0, Symbol::X), mv(2, 1, Symbol::O)]).unwrap();
        let json = serde_json::to_string(&history).unwrap();
        assert_eq!(
            json,
            r#"[{"row":2,"col":1,"player":"O"},{"row":0,"col":0,"player":"X"}]"#
        );

        let back: History = serde_json::from_str(&json).unwrap();
        assert_eq!(back, history);
    }

    #[test]
    fn test_json_duplicate_rejected() {
        let json = r#"[{"row":0,"col":0,"player":"O"},{"row":0,"col":0,"player":"X"}]"#;
        assert!(serde_json::from_str::<History>(json).is_err());
    }
}
