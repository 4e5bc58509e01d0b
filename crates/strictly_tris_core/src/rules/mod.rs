//! Game rules for tic-tac-toe.
//!
//! Pure functions that derive everything the game shows from the move
//! history. Nothing here keeps state between calls.

pub mod board;
pub mod draw;
pub mod turn;
pub mod win;

pub use board::derive_board;
pub use draw::is_draw;
pub use turn::derive_active_player;
pub use win::{COMBINATIONS, Combination, derive_winner, winning_line};
