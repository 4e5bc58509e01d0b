//! Board/history agreement: the derived grid reflects every move exactly once.

use super::super::rules::derive_board;
use super::super::types::Cell;
use super::super::History;
use super::Invariant;
use tracing::warn;

/// Invariant: the derived board has exactly `len(history)` claimed cells,
/// each holding the player recorded for it.
pub struct BoardMatchesHistoryInvariant;

impl Invariant<History> for BoardMatchesHistoryInvariant {
    fn holds(history: &History) -> bool {
        let board = derive_board(history);

        let filled = board.occupied();
        if filled != history.len() {
            warn!(filled, history_len = history.len(), "Board and history disagree");
            return false;
        }

        history
            .iter()
            .all(|mv| board.get(mv.row(), mv.col()) == Some(Cell::Taken(mv.player())))
    }

    fn description() -> &'static str {
        "Board holds exactly the moves recorded in history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Symbol};

    #[test]
    fn test_holds_for_replayed_history() {
        let history = History::from_chronological(
            [(0, 1, Symbol::X), (1, 0, Symbol::O), (2, 2, Symbol::X)]
                .map(|(r, c, p)| Move::new(r, c, p).unwrap()),
        )
        .unwrap();
        assert!(BoardMatchesHistoryInvariant::holds(&history));
    }
}
