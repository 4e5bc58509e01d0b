//! Board reducer: history to grid.

use super::super::types::{Board, Cell, EMPTY_GRID};
use super::super::History;
use tracing::instrument;

/// Replays `history` oldest to newest onto a fresh empty grid.
#[instrument(skip(history), fields(len = history.len()))]
pub fn derive_board(history: &History) -> Board {
    let mut cells = EMPTY_GRID;
    for mv in history.chronological() {
        cells[mv.row()][mv.col()] = Cell::Taken(mv.player());
    }
    Board::from_cells(cells)
}
