//! Win detection logic for tic-tac-toe.

use super::super::registry::PlayerRegistry;
use super::super::types::{Board, Cell, SIZE, Symbol};
use serde::Serialize;
use tracing::{debug, instrument};

/// One of the eight three-cell lines that win the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Combination {
    cells: [(usize, usize); SIZE],
}

impl Combination {
    const fn new(cells: [(usize, usize); SIZE]) -> Self {
        Self { cells }
    }

    /// The `(row, col)` coordinates of the line.
    pub fn cells(&self) -> &[(usize, usize); SIZE] {
        &self.cells
    }

    /// Returns the symbol owning all three cells, if one does.
    fn owner(&self, board: &Board) -> Option<Symbol> {
        let [a, b, c] = self.cells.map(|(row, col)| board.get(row, col));
        match a {
            Some(Cell::Taken(symbol)) if a == b && a == c => Some(symbol),
            _ => None,
        }
    }
}

/// Winning lines in scan priority order.
pub const COMBINATIONS: [Combination; 8] = [
    // Rows
    Combination::new([(0, 0), (0, 1), (0, 2)]),
    Combination::new([(1, 0), (1, 1), (1, 2)]),
    Combination::new([(2, 0), (2, 1), (2, 2)]),
    // Columns
    Combination::new([(0, 0), (1, 0), (2, 0)]),
    Combination::new([(0, 1), (1, 1), (2, 1)]),
    Combination::new([(0, 2), (1, 2), (2, 2)]),
    // Diagonals
    Combination::new([(0, 0), (1, 1), (2, 2)]),
    Combination::new([(0, 2), (1, 1), (2, 0)]),
];

/// Returns the first completed line in [`COMBINATIONS`] order and its owner.
///
/// A well-formed game never completes two lines for different players, but
/// the fixed order keeps the answer deterministic for any board.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Symbol, Combination)> {
    COMBINATIONS
        .iter()
        .find_map(|line| line.owner(board).map(|symbol| (symbol, *line)))
}

/// Returns the display name of the winner, if any line is complete.
#[instrument(skip(board, registry))]
pub fn derive_winner(board: &Board, registry: &PlayerRegistry) -> Option<String> {
    let (symbol, line) = winning_line(board)?;
    debug!(%symbol, cells = ?line.cells(), "Winning line found");
    Some(registry.name(symbol).to_string())
}
