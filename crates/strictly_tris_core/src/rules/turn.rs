//! Turn deriver: whose move is it.

use super::super::types::Symbol;
use super::super::History;
use tracing::instrument;

/// Returns the symbol to move next.
///
/// X opens; after that the turn passes to the opponent of whoever made the
/// most recent move. Only the given history is consulted, so a caller holding
/// a just-built history gets the right answer before publishing it.
#[instrument(skip(history), fields(len = history.len()))]
pub fn derive_active_player(history: &History) -> Symbol {
    history
        .latest()
        .map_or(Symbol::FIRST, |last| last.player().opponent())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Move;

    #[test]
    fn test_x_opens() {
        assert_eq!(derive_active_player(&History::new()), Symbol::X);
    }

    #[test]
    fn test_turn_follows_latest_move() {
        let one = History::new().append(Move::new(0, 0, Symbol::X).unwrap()).unwrap();
        assert_eq!(derive_active_player(&one), Symbol::O);

        let two = one.append(Move::new(1, 1, Symbol::O).unwrap()).unwrap();
        assert_eq!(derive_active_player(&two), Symbol::X);

        // The older snapshot still answers for itself.
        assert_eq!(derive_active_player(&one), Symbol::O);
    }
}
