//! Unique cells invariant: one move per cell.

use super::super::History;
use super::Invariant;
use std::collections::HashSet;

/// Invariant: no two recorded moves claim the same cell.
pub struct UniqueCellsInvariant;

impl Invariant<History> for UniqueCellsInvariant {
    fn holds(history: &History) -> bool {
        let mut seen = HashSet::with_capacity(history.len());
        history.iter().all(|mv| seen.insert((mv.row(), mv.col())))
    }

    fn description() -> &'static str {
        "Each cell is claimed by at most one move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Symbol};

    #[test]
    fn test_holds_for_appended_history() {
        let history = History::new()
            .append(Move::new(0, 0, Symbol::X).unwrap())
            .and_then(|h| h.append(Move::new(2, 2, Symbol::O).unwrap()))
            .unwrap();
        assert!(UniqueCellsInvariant::holds(&history));
    }
}
