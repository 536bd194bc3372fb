//! End-to-end scenarios across board, ledger, and selection protocol.

use motion_core::{Color, Piece, PieceKind, Square};
use motion_engine::{Board, GameSession, Selection, TapOutcome};

fn sq(text: &str) -> Square {
    Square::from_notation(text).unwrap()
}

/// Drives one two-tap move through the session and asserts it applied.
fn play(session: &mut GameSession, from: &str, to: &str) {
    let mut selection = Selection::Idle;
    assert_eq!(
        session.tap(&mut selection, sq(from)),
        TapOutcome::Selected(sq(from))
    );
    assert_eq!(
        session.tap(&mut selection, sq(to)),
        TapOutcome::Moved {
            from: sq(from),
            to: sq(to)
        }
    );
}

#[test]
fn opening_pawn_moves_and_their_log() {
    let mut session = GameSession::new();

    play(&mut session, "2e", "4e");
    assert_eq!(session.board().piece_at(sq("2e")), None);
    assert_eq!(
        session.board().piece_at(sq("4e")),
        Some(Piece::new(PieceKind::Pawn, Color::White))
    );
    assert_eq!(session.ledger().log(), ["w: (2e, 4e)"]);
    assert_eq!(session.ledger().turn(), Color::Black);

    play(&mut session, "7e", "5e");
    assert_eq!(session.ledger().log(), ["w: (2e, 4e)", "b: (7e, 5e)"]);
    assert_eq!(session.ledger().turn(), Color::White);
}

#[test]
fn turn_alternates_over_a_longer_sequence() {
    let mut session = GameSession::new();
    let moves = [
        ("2e", "4e"),
        ("7e", "5e"),
        ("1g", "3f"),
        ("8b", "6c"),
        ("1f", "4c"),
    ];
    for (k, (from, to)) in moves.into_iter().enumerate() {
        assert_eq!(
            session.ledger().turn(),
            if k % 2 == 0 { Color::White } else { Color::Black }
        );
        play(&mut session, from, to);
    }
    assert_eq!(session.ledger().len(), 5);
    assert_eq!(session.ledger().turn(), Color::Black);
}

#[test]
fn knight_geometry_from_the_starting_position() {
    let session = GameSession::new();
    let knight = Piece::new(PieceKind::Knight, Color::White);
    // both L-shaped hops out of b1 are legal
    assert!(session.board().is_legal_move(knight, sq("1b"), sq("3c")));
    assert!(session.board().is_legal_move(knight, sq("1b"), sq("3a")));
    // a straight three-square push is not
    assert!(!session.board().is_legal_move(knight, sq("1b"), sq("4b")));
}

#[test]
fn kingside_castle_blocked_then_played() {
    let mut session = GameSession::new();
    let mut selection = Selection::Idle;

    // bishop and knight still stand on 1f/1g
    session.tap(&mut selection, sq("1e"));
    assert_eq!(
        session.tap(&mut selection, sq("1g")),
        TapOutcome::Rejected {
            from: sq("1e"),
            to: sq("1g")
        }
    );
    assert!(session.ledger().is_empty());

    // clear the two squares and castle
    let mut board = Board::new();
    board.remove(sq("1f"));
    board.remove(sq("1g"));
    let mut session = GameSession::from_board(board);
    session.tap(&mut selection, sq("1e"));
    assert_eq!(
        session.tap(&mut selection, sq("1g")),
        TapOutcome::Moved {
            from: sq("1e"),
            to: sq("1g")
        }
    );
    assert_eq!(
        session.board().piece_at(sq("1g")),
        Some(Piece::new(PieceKind::King, Color::White))
    );
    assert_eq!(
        session.board().piece_at(sq("1f")),
        Some(Piece::new(PieceKind::Rook, Color::White))
    );
    assert_eq!(session.board().piece_at(sq("1h")), None);
    assert_eq!(session.ledger().log(), ["w: (1e, 1g)"]);
}

#[test]
fn undo_restores_the_initial_layout() {
    let mut session = GameSession::new();
    play(&mut session, "2e", "4e");
    assert_eq!(session.ledger().len(), 1);

    session.undo().expect("one move to undo");
    assert_eq!(session.ledger().len(), 0);
    assert_eq!(session.board(), &Board::new());
}

#[test]
fn undo_restores_a_captured_piece() {
    let mut session = GameSession::new();
    play(&mut session, "2e", "4e");
    play(&mut session, "7d", "5d");
    let before = session.board().clone();

    // exd5
    play(&mut session, "4e", "5d");
    let record = session.undo().expect("capture to undo");
    assert_eq!(
        record.captured,
        Some(Piece::new(PieceKind::Pawn, Color::Black))
    );
    assert_eq!(session.board(), &before);
    assert_eq!(session.ledger().len(), 2);
}

#[test]
fn undoing_castle_leaves_rook_castled() {
    // undo restores the king but not the castled rook
    let mut board = Board::new();
    board.remove(sq("1f"));
    board.remove(sq("1g"));
    let mut session = GameSession::from_board(board);
    play(&mut session, "1e", "1g");

    session.undo().expect("castle to undo");
    assert_eq!(
        session.board().piece_at(sq("1e")),
        Some(Piece::new(PieceKind::King, Color::White))
    );
    assert_eq!(session.board().piece_at(sq("1g")), None);
    // the rook stays on 1f; 1h stays empty
    assert_eq!(
        session.board().piece_at(sq("1f")),
        Some(Piece::new(PieceKind::Rook, Color::White))
    );
    assert_eq!(session.board().piece_at(sq("1h")), None);
}

#[test]
fn castling_accepts_a_returned_rook() {
    // no moved-flag is tracked: a rook that leaves h1 and comes back
    // still enables castling
    let mut board = Board::new();
    board.remove(sq("1f"));
    board.remove(sq("1g"));
    let rook = Piece::new(PieceKind::Rook, Color::White);
    let mut session = GameSession::from_board(board);
    play(&mut session, "1h", "1g");
    play(&mut session, "1g", "1h");

    assert!(session
        .board()
        .is_legal_move(Piece::new(PieceKind::King, Color::White), sq("1e"), sq("1g")));
    assert_eq!(session.board().piece_at(sq("1h")), Some(rook));
}

#[test]
fn same_square_selection_cancels_before_the_oracle() {
    let mut session = GameSession::new();
    let mut selection = Selection::Idle;
    session.tap(&mut selection, sq("1e"));
    // a zero-length king "move" would be geometrically fine; the protocol
    // cancels instead
    assert_eq!(
        session.tap(&mut selection, sq("1e")),
        TapOutcome::Cancelled(sq("1e"))
    );
    assert_eq!(session.board(), &Board::new());
    assert!(session.ledger().is_empty());
}

#[test]
fn score_sheet_window_and_transcript() {
    let mut session = GameSession::new();
    play(&mut session, "2e", "4e");
    play(&mut session, "7e", "5e");
    play(&mut session, "1g", "3f");

    assert_eq!(
        session.ledger().recent(2),
        ["b: (7e, 5e)", "w: (1g, 3f)"]
    );
    assert_eq!(session.ledger().recent(14).len(), 3);
    assert_eq!(
        session.ledger().transcript(),
        "w: (2e, 4e)\nb: (7e, 5e)\nw: (1g, 3f)"
    );
}

#[test]
fn rejected_attempts_leave_no_trace() {
    let mut session = GameSession::new();
    let mut selection = Selection::Idle;

    // bishop through its own pawn
    session.tap(&mut selection, sq("1c"));
    assert_eq!(
        session.tap(&mut selection, sq("3e")),
        TapOutcome::Rejected {
            from: sq("1c"),
            to: sq("3e")
        }
    );
    // queen onto its own pawn
    session.tap(&mut selection, sq("1d"));
    assert_eq!(
        session.tap(&mut selection, sq("2d")),
        TapOutcome::Rejected {
            from: sq("1d"),
            to: sq("2d")
        }
    );

    assert_eq!(session.board(), &Board::new());
    assert!(session.ledger().is_empty());
    assert_eq!(session.ledger().turn(), Color::White);
}
