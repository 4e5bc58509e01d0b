//! Strictly Tris core - history-driven tic-tac-toe
//!
//! The move history is the only state this crate stores. Board, turn,
//! winner and draw status are pure derivations of it, recomputed on every
//! read, so they can never drift apart.
//!
//! # Architecture
//!
//! - **History**: persistent, most-recent-first log of [`Move`]s
//! - **Rules**: board reducer, turn deriver, win and draw detection
//! - **Outcome**: the composed view returned by [`evaluate`]
//! - **Registry**: display names, independent of the game
//! - **Session**: the submit / query / rename / restart boundary
//!
//! # Example
//!
//! ```
//! use strictly_tris_core::{GameSession, Symbol};
//!
//! let mut session = GameSession::new();
//! session.rename_display_name(Symbol::X, "Alice");
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)] {
//!     session.submit_move(row, col)?;
//! }
//! assert_eq!(session.query_outcome().winner(), Some("Alice"));
//! # Ok::<(), strictly_tris_core::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod editor;
mod history;
pub mod invariants;
mod outcome;
mod registry;
pub mod rules;
mod session;
mod types;

pub use action::{Move, MoveError};
pub use editor::{Editing, NameEditor, Viewing};
pub use history::History;
pub use outcome::{Outcome, evaluate};
pub use registry::{DEFAULT_O_NAME, DEFAULT_X_NAME, PlayerRegistry};
pub use rules::{
    COMBINATIONS, Combination, derive_active_player, derive_board, derive_winner, is_draw,
    winning_line,
};
pub use session::GameSession;
pub use types::{Board, CELLS, Cell, SIZE, Symbol};
