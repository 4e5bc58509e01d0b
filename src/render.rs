//! Plain-text rendering of an outcome.

use strictly_tris_core::{Board, Cell, Outcome, PlayerRegistry, Symbol};
use strum::IntoEnumIterator;

/// Draws the grid with row and column indices.
///
/// ```text
///    0 1 2
/// 0  X|O|
///   -+-+-
/// 1   |X|
/// ```
pub fn board(board: &Board) -> String {
    let mut out = String::from("   0 1 2\n");
    for (idx, row) in board.rows().iter().enumerate() {
        if idx > 0 {
            out.push_str("   -+-+-\n");
        }
        let cells: Vec<String> = row
            .iter()
            .map(|cell| match cell {
                Cell::Empty => " ".to_string(),
                Cell::Taken(symbol) => symbol.to_string(),
            })
            .collect();
        out.push_str(&format!("{idx}  {}\n", cells.join("|")));
    }
    out
}

/// Lists both players, marking the one to move while the game runs.
pub fn players(outcome: &Outcome, registry: &PlayerRegistry) -> String {
    Symbol::iter()
        .map(|symbol| {
            let marker = if !outcome.is_over() && outcome.active_player() == symbol {
                '>'
            } else {
                ' '
            };
            format!("{marker} {} ({symbol})\n", registry.name(symbol))
        })
        .collect()
}

/// Banner shown once the game has ended.
pub fn game_over(outcome: &Outcome) -> Option<String> {
    if !outcome.is_over() {
        return None;
    }
    Some(format!("Game Over! {outcome}\nType `restart` for a rematch.\n"))
}

/// Full screen: players, board and, if finished, the banner.
pub fn screen(outcome: &Outcome, registry: &PlayerRegistry) -> String {
    let mut out = players(outcome, registry);
    out.push('\n');
    out.push_str(&board(outcome.board()));
    if let Some(banner) = game_over(outcome) {
        out.push('\n');
        out.push_str(&banner);
    }
    out
}
