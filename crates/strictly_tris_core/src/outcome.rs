//! Outcome evaluator: the composed view of a game at one point in time.

use super::History;
use super::registry::PlayerRegistry;
use super::rules::{derive_active_player, derive_board, derive_winner, is_draw};
use super::types::{Board, Symbol};
use serde::Serialize;
use tracing::{debug, instrument};

/// Everything a renderer needs, derived from history and names.
///
/// Outcomes are never stored; ask for a fresh one after every change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    board: Board,
    active_player: Symbol,
    winner: Option<String>,
    is_draw: bool,
}

impl Outcome {
    /// The board snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Symbol to move next.
    pub fn active_player(&self) -> Symbol {
        self.active_player
    }

    /// Display name of the winner, if any.
    pub fn winner(&self) -> Option<&str> {
        self.winner.as_deref()
    }

    /// True when the board is full and nobody won.
    pub fn is_draw(&self) -> bool {
        self.is_draw
    }

    /// True once a winner exists or the game is drawn.
    pub fn is_over(&self) -> bool {
        self.winner.is_some() || self.is_draw
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.winner, self.is_draw) {
            (Some(name), _) => write!(f, "{name} won!"),
            (None, true) => write!(f, "It's a Draw!"),
            (None, false) => write!(f, "{} to move", self.active_player),
        }
    }
}

/// Derives the outcome of `history` with names taken from `registry`.
#[instrument(skip(history, registry), fields(len = history.len()))]
pub fn evaluate(history: &History, registry: &PlayerRegistry) -> Outcome {
    let board = derive_board(history);
    let active_player = derive_active_player(history);
    let winner = derive_winner(&board, registry);
    let is_draw = is_draw(history, winner.is_some());

    debug!(%active_player, ?winner, is_draw, "Outcome evaluated");
    Outcome {
        board,
        active_player,
        winner,
        is_draw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Move;

    #[test]
    fn test_empty_history() {
        let outcome = evaluate(&History::new(), &PlayerRegistry::default());
        assert_eq!(outcome.active_player(), Symbol::X);
        assert_eq!(outcome.board(), &Board::empty());
        assert_eq!(outcome.winner(), None);
        assert!(!outcome.is_draw());
        assert!(!outcome.is_over());
        assert_eq!(outcome.to_string(), "X to move");
    }

    #[test]
    fn test_serializes_for_renderers() {
        let history = History::new().append(Move::new(0, 2, Symbol::X).unwrap()).unwrap();
        let json = serde_json::to_value(evaluate(&history, &PlayerRegistry::default())).unwrap();

        assert_eq!(json["active_player"], "O");
        assert_eq!(json["winner"], serde_json::Value::Null);
        assert_eq!(json["is_draw"], false);
        assert_eq!(json["board"]["cells"][0][2], serde_json::json!({ "Taken": "X" }));
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let history = History::from_chronological([
            Move::new(1, 1, Symbol::X).unwrap(),
            Move::new(0, 0, Symbol::O).unwrap(),
        ])
        .unwrap();
        let registry = PlayerRegistry::default();

        assert_eq!(evaluate(&history, &registry), evaluate(&history, &registry));
    }

    #[test]
    fn test_winner_uses_current_names() {
        let history = History::from_chronological(
            [
                (0, 0, Symbol::X),
                (1, 0, Symbol::O),
                (0, 1, Symbol::X),
                (1, 1, Symbol::O),
                (0, 2, Symbol::X),
            ]
            .map(|(r, c, p)| Move::new(r, c, p).unwrap()),
        )
        .unwrap();

        let registry = PlayerRegistry::default().rename(Symbol::X, "Bob");
        let outcome = evaluate(&history, &registry);
        assert_eq!(outcome.winner(), Some("Bob"));
        assert!(outcome.is_over());
        assert_eq!(outcome.to_string(), "Bob won!");
    }
}
