//! Moves and the errors raised when submitting them.
//!
//! A move is a domain event: once constructed it is known to target a cell
//! on the board, and it never changes.

use super::types::{SIZE, Symbol};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A single cell claim: `player` marks `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMove")]
pub struct Move {
    row: usize,
    col: usize,
    player: Symbol,
}

impl Move {
    /// Creates a move, rejecting coordinates outside the board.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidCoordinate`] if `row` or `col` is not in `0..=2`.
    #[instrument]
    pub fn new(row: usize, col: usize, player: Symbol) -> Result<Self, MoveError> {
        check_coordinate(row, col)?;
        Ok(Self { row, col, player })
    }

    /// Row of the claimed cell.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column of the claimed cell.
    pub fn col(&self) -> usize {
        self.col
    }

    /// The player making this move.
    pub fn player(&self) -> Symbol {
        self.player
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} selected {}, {}", self.player, self.row, self.col)
    }
}

/// Wire shape of a move before its coordinate is checked.
#[derive(Deserialize)]
struct RawMove {
    row: usize,
    col: usize,
    player: Symbol,
}

impl TryFrom<RawMove> for Move {
    type Error = MoveError;

    fn try_from(raw: RawMove) -> Result<Self, Self::Error> {
        Move::new(raw.row, raw.col, raw.player)
    }
}

/// Rejects a coordinate that falls outside the board.
pub(crate) fn check_coordinate(row: usize, col: usize) -> Result<(), MoveError> {
    if row >= SIZE || col >= SIZE {
        Err(MoveError::InvalidCoordinate { row, col })
    } else {
        Ok(())
    }
}

/// Error that can occur when submitting a move.
///
/// Every variant is a local rejection: the history the move was offered to
/// is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Row or column outside `0..=2`.
    #[display("Coordinate ({row}, {col}) is outside the board")]
    InvalidCoordinate {
        /// Offending row.
        row: usize,
        /// Offending column.
        col: usize,
    },

    /// The target cell already holds a symbol.
    #[display("Cell ({row}, {col}) is already occupied")]
    OccupiedCell {
        /// Row of the occupied cell.
        row: usize,
        /// Column of the occupied cell.
        col: usize,
    },

    /// The history already records a move on this cell.
    #[display("History already contains a move at ({row}, {col})")]
    DuplicateMove {
        /// Row of the duplicated cell.
        row: usize,
        /// Column of the duplicated cell.
        col: usize,
    },

    /// A winner or a draw has already been determined.
    #[display("Game is already over")]
    GameOver,

    /// An invariant was violated after applying the move.
    #[display("Invariant violation: {_0}")]
    InvariantViolation(#[error(not(source))] String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_board_cells() {
        let mv = Move::new(2, 0, Symbol::O).expect("corner is on the board");
        assert_eq!((mv.row(), mv.col(), mv.player()), (2, 0, Symbol::O));
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(
            Move::new(3, 1, Symbol::X),
            Err(MoveError::InvalidCoordinate { row: 3, col: 1 })
        );
        assert_eq!(
            Move::new(0, 7, Symbol::X),
            Err(MoveError::InvalidCoordinate { row: 0, col: 7 })
        );
    }

    #[test]
    fn test_display_is_a_log_line() {
        let mv = Move::new(0, 2, Symbol::X).unwrap();
        assert_eq!(mv.to_string(), "X selected 0, 2");
    }

    #[test]
    fn test_deserialize_checks_coordinate() {
        let ok: Move = serde_json::from_str(r#"{"row":1,"col":1,"player":"O"}"#).unwrap();
        assert_eq!(ok, Move::new(1, 1, Symbol::O).unwrap());

        let bad = serde_json::from_str::<Move>(r#"{"row":5,"col":1,"player":"O"}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MoveError::OccupiedCell { row: 1, col: 2 }.to_string(),
            "Cell (1, 2) is already occupied"
        );
        assert_eq!(MoveError::GameOver.to_string(), "Game is already over");
    }
}
