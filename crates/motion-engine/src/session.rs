//! The tap-driven move selection protocol.
//!
//! A presentation layer feeds square taps into [`GameSession::tap`] one at
//! a time and renders whatever [`TapOutcome`] comes back. The session owns
//! the board and the ledger and keeps them in sync; the in-flight
//! [`Selection`] belongs to the caller and is passed in per call.

use crate::{Board, MoveLedger, MoveRecord};
use motion_core::{Piece, Square};

/// Caller-owned selection state.
///
/// The piece is snapshotted when its square is first picked and is the
/// piece the legality oracle will be asked about on the second tap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Selection {
    /// Nothing picked.
    #[default]
    Idle,
    /// One square picked.
    Picked { square: Square, piece: Piece },
}

/// What a single tap did.
///
/// `Rejected` carries the squares a presentation layer may want to flash;
/// the attempt itself is neither retried nor recorded. Timing of any such
/// highlight is entirely the caller's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// Tapped an empty square with nothing picked; nothing happened.
    Ignored,
    /// Picked an occupied square.
    Selected(Square),
    /// Tapped the picked square again; the selection was cleared.
    Cancelled(Square),
    /// A legal move was applied and recorded.
    Moved { from: Square, to: Square },
    /// The attempted move was illegal; nothing changed.
    Rejected { from: Square, to: Square },
}

/// One logical game: a board and its move ledger, mutated only through
/// [`tap`](GameSession::tap) and [`undo`](GameSession::undo).
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    ledger: MoveLedger,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Creates a session at the standard starting position with an empty
    /// ledger.
    pub fn new() -> Self {
        GameSession {
            board: Board::new(),
            ledger: MoveLedger::new(),
        }
    }

    /// Creates a session over a prepared board with an empty ledger.
    pub fn from_board(board: Board) -> Self {
        GameSession {
            board,
            ledger: MoveLedger::new(),
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move ledger.
    pub fn ledger(&self) -> &MoveLedger {
        &self.ledger
    }

    /// Advances the selection state machine by one tap.
    ///
    /// Every tap from `Picked` lands back in `Idle`, whatever the outcome.
    /// Tapping the picked square again cancels without consulting the
    /// legality oracle or touching the board. On a legal second tap the
    /// record color is read from the ledger *before* the append, the board
    /// mutates, and the ledger grows by one entry; on an illegal one
    /// nothing mutates at all.
    pub fn tap(&mut self, selection: &mut Selection, square: Square) -> TapOutcome {
        match *selection {
            Selection::Idle => match self.board.piece_at(square) {
                Some(piece) => {
                    *selection = Selection::Picked { square, piece };
                    TapOutcome::Selected(square)
                }
                None => TapOutcome::Ignored,
            },
            Selection::Picked { square: from, piece } => {
                *selection = Selection::Idle;
                if from == square {
                    return TapOutcome::Cancelled(square);
                }
                if self.board.is_legal_move(piece, from, square) {
                    let color = self.ledger.turn();
                    let captured = self.board.apply_move(piece, from, square);
                    self.ledger.record(MoveRecord {
                        color,
                        piece,
                        from,
                        to: square,
                        captured,
                    });
                    TapOutcome::Moved { from, to: square }
                } else {
                    TapOutcome::Rejected { from, to: square }
                }
            }
        }
    }

    /// Undoes the most recent move, if any, and returns its record.
    ///
    /// Pops the ledger and reverses the board mutation together. Returns
    /// `None` when there is nothing to undo.
    pub fn undo(&mut self) -> Option<MoveRecord> {
        let record = self.ledger.undo_last()?;
        self.board.undo_move(&record);
        Some(record)
    }
}
