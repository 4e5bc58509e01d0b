//! Line-oriented game loop.
//!
//! Reads one command per line, applies it to a [`GameSession`] and prints
//! the resulting screen. Rejected moves are reported and the loop carries on.

use crate::render;
use derive_more::{Display, Error};
use std::io::{BufRead, Write};
use std::str::FromStr;
use strictly_tris_core::{GameSession, NameEditor, Symbol};
use tracing::{debug, info, instrument, warn};

const HELP: &str = "\
Commands:
  <row> <col>          claim a cell, e.g. `1 2`
  rename <X|O> <name>  change a display name
  log                  show the moves so far, newest first
  restart              clear the board (names are kept)
  help                 show this text
  quit                 leave
";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Claim a cell for the player to move.
    Move {
        /// Target row.
        row: usize,
        /// Target column.
        col: usize,
    },
    /// Change a player's display name.
    Rename {
        /// Whose name.
        symbol: Symbol,
        /// New name; may be empty.
        name: String,
    },
    /// Print the move log.
    Log,
    /// Start a new game.
    Restart,
    /// Print the command list.
    Help,
    /// End the loop.
    Quit,
}

/// Input that does not parse as a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognised command: {input} (type `help`)")]
pub struct CommandError {
    /// The offending line.
    pub input: String,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let err = || CommandError {
            input: line.trim().to_string(),
        };
        let line = line.trim();
        let (head, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        match head.to_ascii_lowercase().as_str() {
            "log" if rest.is_empty() => Ok(Command::Log),
            "restart" if rest.is_empty() => Ok(Command::Restart),
            "help" | "?" if rest.is_empty() => Ok(Command::Help),
            "quit" | "exit" if rest.is_empty() => Ok(Command::Quit),
            "rename" => {
                let (symbol, name) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                let symbol = Symbol::from_str(symbol).map_err(|_| err())?;
                Ok(Command::Rename {
                    symbol,
                    name: name.trim().to_string(),
                })
            }
            _ => {
                let mut parts = line.split(|c: char| c.is_whitespace() || c == ',');
                let mut next = || parts.find(|p| !p.is_empty()).map(str::parse::<usize>);
                match (next(), next(), next()) {
                    (Some(Ok(row)), Some(Ok(col)), None) => Ok(Command::Move { row, col }),
                    _ => Err(err()),
                }
            }
        }
    }
}

/// Runs the loop until `quit` or end of input.
#[instrument(skip_all)]
pub fn run<R: BufRead, W: Write>(
    session: &mut GameSession,
    input: R,
    mut output: W,
) -> std::io::Result<()> {
    write!(output, "{}", render::screen(&session.query_outcome(), session.registry()))?;
    write!(output, "Type `help` for commands.\n> ")?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            write!(output, "> ")?;
            output.flush()?;
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                debug!(error = %e, "Bad input");
                write!(output, "{e}\n> ")?;
                output.flush()?;
                continue;
            }
        };

        debug!(?command, "Command received");
        match command {
            Command::Quit => {
                info!("Leaving game loop");
                break;
            }
            Command::Help => write!(output, "{HELP}")?,
            Command::Log => {
                let log = session.log();
                if log.is_empty() {
                    writeln!(output, "No moves yet.")?;
                }
                for entry in log {
                    writeln!(output, "{entry}")?;
                }
            }
            Command::Restart => {
                session.restart();
                write!(output, "{}", render::screen(&session.query_outcome(), session.registry()))?;
            }
            Command::Rename { symbol, name } => {
                let mut editor = NameEditor::new(symbol).begin_edit(session.registry());
                editor.set_text(name);
                let (_, registry) = editor.commit(session.registry());
                session.set_registry(registry);
                write!(output, "{}", render::screen(&session.query_outcome(), session.registry()))?;
            }
            Command::Move { row, col } => match session.submit_move(row, col) {
                Ok(outcome) => write!(output, "{}", render::screen(&outcome, session.registry()))?,
                Err(e) => {
                    warn!(error = %e, row, col, "Move rejected");
                    writeln!(output, "Move rejected: {e}")?;
                }
            },
        }
        write!(output, "> ")?;
        output.flush()?;
    }

    writeln!(output)?;
    Ok(())
}
