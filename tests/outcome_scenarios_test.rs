//! End-to-end scenarios for outcome derivation.

use strictly_tris_core::{
    Board, Cell, GameSession, History, Move, PlayerRegistry, Symbol, derive_active_player,
    derive_board, evaluate,
};

fn history(moves: &[(usize, usize, Symbol)]) -> History {
    History::from_chronological(moves.iter().map(|&(r, c, p)| Move::new(r, c, p).unwrap()))
        .expect("Valid history")
}

#[test]
fn test_row_win_names_x() {
    let h = history(&[
        (0, 0, Symbol::X),
        (1, 1, Symbol::O),
        (0, 1, Symbol::X),
        (1, 0, Symbol::O),
        (0, 2, Symbol::X),
    ]);

    let outcome = evaluate(&h, &PlayerRegistry::default());
    assert_eq!(outcome.winner(), Some("Player 1"));
    assert!(!outcome.is_draw());
    assert!(outcome.is_over());
}

#[test]
fn test_full_board_without_line_is_draw() {
    // X O X / X O O / O X X
    let h = history(&[
        (0, 0, Symbol::X),
        (0, 1, Symbol::O),
        (0, 2, Symbol::X),
        (1, 1, Symbol::O),
        (1, 0, Symbol::X),
        (1, 2, Symbol::O),
        (2, 1, Symbol::X),
        (2, 0, Symbol::O),
        (2, 2, Symbol::X),
    ]);

    let outcome = evaluate(&h, &PlayerRegistry::default());
    assert_eq!(outcome.winner(), None);
    assert!(outcome.is_draw());
    assert!(outcome.board().is_full());
}

#[test]
fn test_win_on_ninth_move_is_not_draw() {
    // X completes the main diagonal with the last free cell.
    let h = history(&[
        (0, 0, Symbol::X),
        (0, 1, Symbol::O),
        (0, 2, Symbol::X),
        (1, 0, Symbol::O),
        (1, 1, Symbol::X),
        (1, 2, Symbol::O),
        (2, 1, Symbol::X),
        (2, 0, Symbol::O),
        (2, 2, Symbol::X),
    ]);

    let outcome = evaluate(&h, &PlayerRegistry::default());
    assert_eq!(outcome.winner(), Some("Player 1"));
    assert!(!outcome.is_draw());
}

#[test]
fn test_empty_history_outcome() {
    let outcome = evaluate(&History::new(), &PlayerRegistry::default());
    assert_eq!(outcome.active_player(), Symbol::X);
    assert_eq!(outcome.board(), &Board::empty());
    assert_eq!(outcome.winner(), None);
    assert!(!outcome.is_draw());
}

#[test]
fn test_renamed_o_wins_by_name() {
    let mut session = GameSession::new();
    session.rename_display_name(Symbol::O, "Alice");

    // O takes the middle column.
    for (row, col) in [(0, 0), (0, 1), (2, 2), (1, 1), (0, 2), (2, 1)] {
        session.submit_move(row, col).expect("Legal move");
    }

    assert_eq!(session.query_outcome().winner(), Some("Alice"));
}

#[test]
fn test_rename_after_win_changes_reported_name() {
    let mut session = GameSession::new();
    for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
        session.submit_move(row, col).expect("Legal move");
    }
    session.rename_display_name(Symbol::X, "Eve");

    assert_eq!(session.query_outcome().winner(), Some("Eve"));
}

#[test]
fn test_restart_resets_board_keeps_names() {
    let mut session = GameSession::with_registry(PlayerRegistry::with_names("Ann", "Ben"));
    session.rename_display_name(Symbol::O, "Bea");
    session.submit_move(1, 1).unwrap();
    session.submit_move(0, 0).unwrap();

    session.restart();

    assert!(session.history().is_empty());
    let outcome = session.query_outcome();
    assert!(outcome.board().rows().iter().flatten().all(|c| *c == Cell::Empty));
    assert_eq!(session.registry().name(Symbol::X), "Ann");
    assert_eq!(session.registry().name(Symbol::O), "Bea");
}

#[test]
fn test_provisional_history_derives_its_own_turn() {
    let published = history(&[(1, 1, Symbol::X)]);
    let provisional = published.append(Move::new(0, 0, Symbol::O).unwrap()).unwrap();

    assert_eq!(derive_active_player(&published), Symbol::O);
    assert_eq!(derive_active_player(&provisional), Symbol::X);
    assert_eq!(derive_board(&published).occupied(), 1);
    assert_eq!(derive_board(&provisional).occupied(), 2);
}
