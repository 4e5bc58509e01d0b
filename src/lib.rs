//! Strictly Tris - terminal front-end
//!
//! Thin plumbing around [`strictly_tris_core`]: configuration loading,
//! text rendering, the interactive loop and history replay. All game
//! logic lives in the core crate.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod logging;
pub mod render;
mod replay;
mod terminal;

pub use cli::{Cli, Command};
pub use config::{ConfigError, PlayerNames, TrisConfig};
pub use logging::{LogFilter, LoggingError};
pub use replay::{ReplayError, load_history, replay_file};
pub use terminal::{Command as LineCommand, CommandError, run};
