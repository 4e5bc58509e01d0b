//! Replaying a saved history file.

use derive_more::{Display, Error, From};
use std::path::Path;
use strictly_tris_core::{History, Outcome, PlayerRegistry, evaluate};
use tracing::{info, instrument};

/// Failure to load a history file.
#[derive(Debug, Display, Error, From)]
pub enum ReplayError {
    /// The file could not be read.
    #[display("Failed to read history file: {_0}")]
    Io(std::io::Error),
    /// The file is not a valid history (bad JSON, off-board or repeated cell).
    #[display("Invalid history file: {_0}")]
    Json(serde_json::Error),
}

/// Reads a most-recent-first JSON array of moves.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load_history(path: impl AsRef<Path>) -> Result<History, ReplayError> {
    let content = std::fs::read_to_string(path.as_ref())?;
    let history: History = serde_json::from_str(&content)?;
    info!(moves = history.len(), "History loaded");
    Ok(history)
}

/// Loads `path` and evaluates it with the given names.
pub fn replay_file(
    path: impl AsRef<Path>,
    registry: &PlayerRegistry,
) -> Result<(History, Outcome), ReplayError> {
    let history = load_history(path)?;
    let outcome = evaluate(&history, registry);
    Ok((history, outcome))
}
