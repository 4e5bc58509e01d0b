//! Draw detection logic for tic-tac-toe.

use super::super::History;
use super::super::types::CELLS;
use tracing::instrument;

/// A game is drawn when all nine moves are in and nobody has won.
#[instrument(skip(history), fields(len = history.len()))]
pub fn is_draw(history: &History, has_winner: bool) -> bool {
    history.len() == CELLS && !has_winner
}
