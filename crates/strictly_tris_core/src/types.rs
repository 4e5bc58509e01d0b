//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Side length of the board.
pub const SIZE: usize = 3;

/// Number of cells on the board.
pub const CELLS: usize = SIZE * SIZE;

/// Player marker.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Symbol {
    /// Player X (always moves first).
    X,
    /// Player O.
    O,
}

impl Symbol {
    /// The symbol that opens every game.
    pub const FIRST: Symbol = Symbol::X;

    /// Returns the opponent symbol.
    pub fn opponent(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has claimed the cell.
    #[default]
    Empty,
    /// Cell claimed by a player.
    Taken(Symbol),
}

impl Cell {
    /// Returns the symbol in this cell, if any.
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Cell::Empty => None,
            Cell::Taken(symbol) => Some(symbol),
        }
    }

    /// Returns true if nobody has claimed the cell.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Snapshot of the 3x3 grid.
///
/// Boards are only ever produced by [`crate::derive_board`]; there is no
/// public way to write a cell. Boards serialize for display but never
/// deserialize; load a [`crate::History`] and derive the board instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

/// The shared all-empty template. Derivations copy it, never mutate it.
pub(crate) const EMPTY_GRID: [[Cell; SIZE]; SIZE] = [[Cell::Empty; SIZE]; SIZE];

impl Board {
    /// Creates an empty board.
    pub fn empty() -> Self {
        Self { cells: EMPTY_GRID }
    }

    pub(crate) fn from_cells(cells: [[Cell; SIZE]; SIZE]) -> Self {
        Self { cells }
    }

    /// Returns the cell at `(row, col)`, or `None` if out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Returns the rows of the board, top to bottom.
    pub fn rows(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// Number of claimed cells.
    pub fn occupied(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    /// Returns true if every cell is claimed.
    pub fn is_full(&self) -> bool {
        self.occupied() == CELLS
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}
