//! Display names for the two symbols.
//!
//! The registry lives beside the history but has its own lifecycle: a
//! restart clears the moves and keeps the names.

use super::types::Symbol;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Name shown for X until it is renamed.
pub const DEFAULT_X_NAME: &str = "Player 1";

/// Name shown for O until it is renamed.
pub const DEFAULT_O_NAME: &str = "Player 2";

/// Mapping from symbol to display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerRegistry {
    x: String,
    o: String,
}

impl PlayerRegistry {
    /// Creates a registry with explicit names.
    pub fn with_names(x: impl Into<String>, o: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            o: o.into(),
        }
    }

    /// Display name for `symbol`.
    pub fn name(&self, symbol: Symbol) -> &str {
        match symbol {
            Symbol::X => &self.x,
            Symbol::O => &self.o,
        }
    }

    /// Returns a copy with `symbol` renamed. Any string is accepted.
    #[instrument(skip(self, new_name))]
    pub fn rename(&self, symbol: Symbol, new_name: impl Into<String>) -> Self {
        let new_name = new_name.into();
        info!(%symbol, from = self.name(symbol), to = %new_name, "Renaming player");
        let mut next = self.clone();
        match symbol {
            Symbol::X => next.x = new_name,
            Symbol::O => next.o = new_name,
        }
        next
    }
}

impl Default for PlayerRegistry {
    fn default() -> Self {
        Self::with_names(DEFAULT_X_NAME, DEFAULT_O_NAME)
    }
}
