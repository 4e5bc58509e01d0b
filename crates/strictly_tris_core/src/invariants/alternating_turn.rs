//! Alternating turn invariant: X, O, X, O, ...

use super::super::{History, Symbol};
use super::Invariant;

/// Invariant: the oldest move is X's and no player moves twice in a row.
pub struct AlternatingTurnInvariant;

impl Invariant<History> for AlternatingTurnInvariant {
    fn holds(history: &History) -> bool {
        let mut expected = Symbol::FIRST;
        for mv in history.chronological() {
            if mv.player() != expected {
                return false;
            }
            expected = expected.opponent();
        }
        true
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
