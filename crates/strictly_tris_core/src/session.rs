//! The in-process boundary the presentation layer talks to.
//!
//! A session owns the current history and the player names. Submissions are
//! checked against the outcome derived from the current history and are
//! all-or-nothing: a rejected move leaves the session exactly as it was.

use super::action::{Move, MoveError, check_coordinate};
#[cfg(debug_assertions)]
use super::invariants::{HistoryInvariants, InvariantSet};
use super::outcome::{Outcome, evaluate};
use super::registry::PlayerRegistry;
use super::rules::derive_active_player;
use super::types::Symbol;
use super::History;
use tracing::{info, instrument, warn};

/// One game in progress plus the names of its players.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameSession {
    history: History,
    registry: PlayerRegistry,
}

impl GameSession {
    /// Creates a session with default player names.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session with the given player names.
    #[instrument(skip(registry))]
    pub fn with_registry(registry: PlayerRegistry) -> Self {
        Self {
            history: History::new(),
            registry,
        }
    }

    /// Claims `(row, col)` for the player whose turn it is.
    ///
    /// Returns the outcome after the move.
    ///
    /// # Errors
    ///
    /// - [`MoveError::InvalidCoordinate`] if the cell is off the board.
    /// - [`MoveError::GameOver`] if a winner or draw already stands.
    /// - [`MoveError::OccupiedCell`] if the cell is taken.
    /// - [`MoveError::InvariantViolation`] if the new history breaks an
    ///   invariant (debug builds only).
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn submit_move(&mut self, row: usize, col: usize) -> Result<Outcome, MoveError> {
        check_coordinate(row, col)?;

        let current = self.query_outcome();
        if current.is_over() {
            warn!("Move submitted after game over");
            return Err(MoveError::GameOver);
        }
        if current.board().get(row, col).is_some_and(|cell| !cell.is_empty()) {
            warn!("Move submitted on occupied cell");
            return Err(MoveError::OccupiedCell { row, col });
        }

        let player = derive_active_player(&self.history);
        let next = self.history.append(Move::new(row, col, player)?)?;

        #[cfg(debug_assertions)]
        HistoryInvariants::check_all(&next).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(descriptions)
        })?;

        self.history = next;
        info!(%player, row, col, "Move accepted");
        Ok(self.query_outcome())
    }

    /// Derives the current outcome.
    pub fn query_outcome(&self) -> Outcome {
        evaluate(&self.history, &self.registry)
    }

    /// Changes the display name of `symbol`. The game itself is unaffected.
    pub fn rename_display_name(&mut self, symbol: Symbol, new_name: impl Into<String>) {
        self.registry = self.registry.rename(symbol, new_name);
    }

    /// Replaces the whole registry, e.g. after a name edit is committed.
    pub fn set_registry(&mut self, registry: PlayerRegistry) {
        self.registry = registry;
    }

    /// Clears the history. Player names are kept.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.history = self.history.reset();
    }

    /// The current history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The current player names.
    pub fn registry(&self) -> &PlayerRegistry {
        &self.registry
    }

    /// Human-readable move log, most recent first.
    pub fn log(&self) -> Vec<String> {
        self.history.iter().map(ToString::to_string).collect()
    }
}
