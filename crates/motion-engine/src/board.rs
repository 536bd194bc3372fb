//! Board occupancy and the per-piece legality oracle.

use crate::MoveRecord;
use motion_core::{Color, File, Piece, PieceKind, Rank, Square};
use std::fmt;

/// Returns the (rank, file) deltas from `from` to `to`.
#[inline]
fn deltas(from: Square, to: Square) -> (i8, i8) {
    let dr = to.rank().index() as i8 - from.rank().index() as i8;
    let df = to.file().index() as i8 - from.file().index() as i8;
    (dr, df)
}

/// Returns the square `dr` ranks and `df` files away, if still on the board.
fn offset(square: Square, dr: i8, df: i8) -> Option<Square> {
    let rank = square.rank().index() as i8 + dr;
    let file = square.file().index() as i8 + df;
    if !(0..8).contains(&rank) || !(0..8).contains(&file) {
        return None;
    }
    Some(Square::new(
        File::from_index(file as u8)?,
        Rank::from_index(rank as u8)?,
    ))
}

fn knight_move_valid(from: Square, to: Square) -> bool {
    let (dr, df) = deltas(from, to);
    (dr.abs() == 2 && df.abs() == 1) || (dr.abs() == 1 && df.abs() == 2)
}

/// The 8x8 board: a dense square-indexed occupancy map.
///
/// `None` is the empty-square sentinel, so at most one piece per square
/// holds structurally. The board never validates piece counts or king
/// presence; it only answers occupancy and legality queries and applies
/// pre-validated mutations.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

/// Back-rank piece order, file a through h.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    /// Creates a board with the standard starting layout: white pieces on
    /// ranks 1-2, black on ranks 7-8.
    pub fn new() -> Self {
        let mut board = Self::empty();
        for (file, kind) in File::ALL.into_iter().zip(BACK_RANK) {
            board.place(Square::new(file, Rank::R1), Piece::new(kind, Color::White));
            board.place(
                Square::new(file, Rank::R2),
                Piece::new(PieceKind::Pawn, Color::White),
            );
            board.place(
                Square::new(file, Rank::R7),
                Piece::new(PieceKind::Pawn, Color::Black),
            );
            board.place(Square::new(file, Rank::R8), Piece::new(kind, Color::Black));
        }
        board
    }

    /// Creates a board with no pieces on it.
    pub fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    /// Returns the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.index() as usize]
    }

    /// Puts a piece on a square, replacing any previous occupant.
    #[inline]
    pub fn place(&mut self, square: Square, piece: Piece) {
        self.squares[square.index() as usize] = Some(piece);
    }

    /// Removes and returns the piece on a square.
    #[inline]
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.index() as usize].take()
    }

    /// The central legality oracle.
    ///
    /// A destination occupied by a same-color piece vetoes the move before
    /// any kind-specific rule runs. The per-kind rules check piece-shape
    /// geometry and path occupancy only: check and self-check are never
    /// evaluated, and a from == to selection is the caller's job to reject
    /// before asking.
    pub fn is_legal_move(&self, piece: Piece, from: Square, to: Square) -> bool {
        if let Some(target) = self.piece_at(to) {
            if target.color == piece.color {
                return false;
            }
        }
        match piece.kind {
            PieceKind::Pawn => self.pawn_move_valid(piece.color, from, to),
            PieceKind::Knight => knight_move_valid(from, to),
            PieceKind::Bishop => self.bishop_move_valid(from, to),
            PieceKind::Rook => self.rook_move_valid(from, to),
            PieceKind::Queen => self.rook_move_valid(from, to) || self.bishop_move_valid(from, to),
            PieceKind::King => self.king_move_valid(piece.color, from, to),
        }
    }

    fn pawn_move_valid(&self, color: Color, from: Square, to: Square) -> bool {
        let (dr, df) = deltas(from, to);
        let dir = color.pawn_direction();
        // single advance onto an empty square
        if dr == dir && df == 0 && self.piece_at(to).is_none() {
            return true;
        }
        // double advance from the pawn's home rank, both squares empty
        if from.rank() == color.pawn_rank() && dr == 2 * dir && df == 0 {
            if let Some(step) = offset(from, dir, 0) {
                if self.piece_at(step).is_none() && self.piece_at(to).is_none() {
                    return true;
                }
            }
        }
        // diagonal capture only; a diagonal step onto an empty square is
        // illegal and there is no en passant
        dr == dir && df.abs() == 1 && self.piece_at(to).is_some()
    }

    fn rook_move_valid(&self, from: Square, to: Square) -> bool {
        let (dr, df) = deltas(from, to);
        if dr != 0 && df != 0 {
            return false;
        }
        self.path_clear(from, to, dr.signum(), df.signum())
    }

    fn bishop_move_valid(&self, from: Square, to: Square) -> bool {
        let (dr, df) = deltas(from, to);
        if dr.abs() != df.abs() {
            return false;
        }
        self.path_clear(from, to, dr.signum(), df.signum())
    }

    /// Walks from `from` toward `to` one step at a time and requires every
    /// square strictly between them to be empty. Destination occupancy is
    /// not this function's concern.
    fn path_clear(&self, from: Square, to: Square, step_rank: i8, step_file: i8) -> bool {
        let mut square = from;
        loop {
            square = match offset(square, step_rank, step_file) {
                Some(next) => next,
                // aligned inputs always reach `to` first; stepping off the
                // board means from == to
                None => return true,
            };
            if square == to {
                return true;
            }
            if self.piece_at(square).is_some() {
                return false;
            }
        }
    }

    fn king_move_valid(&self, color: Color, from: Square, to: Square) -> bool {
        let (dr, df) = deltas(from, to);
        // normal king step; the degenerate zero-move also passes here
        if dr.abs() <= 1 && df.abs() <= 1 {
            return true;
        }
        // castling
        if dr == 0 && df.abs() == 2 {
            return self.castle_path_open(color, from, to);
        }
        false
    }

    /// Occupancy-only castling check: the king must stand on its home
    /// square, the home-rank squares toward the corner must be empty, and
    /// a rook of the king's color must stand on the corner.
    ///
    /// No moved-flag is tracked, so a rook (or king) that left home and
    /// came back still satisfies this. Known limitation, kept as-is.
    fn castle_path_open(&self, color: Color, from: Square, to: Square) -> bool {
        let home = color.home_rank();
        if from != Square::new(File::E, home) {
            return false;
        }
        let kingside = to.file().index() > from.file().index();
        let (between, corner): (&[File], File) = if kingside {
            (&[File::F, File::G], File::H)
        } else {
            (&[File::D, File::C, File::B], File::A)
        };
        if between
            .iter()
            .any(|&file| self.piece_at(Square::new(file, home)).is_some())
        {
            return false;
        }
        self.piece_at(Square::new(corner, home)) == Some(Piece::new(PieceKind::Rook, color))
    }

    /// Applies an already-validated move and returns the captured piece.
    ///
    /// Legality is the caller's precondition; nothing is re-checked here.
    /// The returned capture is whatever stood on `to` before the write,
    /// never the rook a castle relocates. A castling king move (king
    /// displaced two files from its home square) also moves the matching
    /// rook: h-file rook to the king's left on the kingside, a-file rook
    /// to the king's right on the queenside.
    pub fn apply_move(&mut self, piece: Piece, from: Square, to: Square) -> Option<Piece> {
        let captured = self.remove(to);
        self.remove(from);
        self.place(to, piece);

        if is_castle(piece, from, to) {
            let home = piece.color.home_rank();
            if to.file() == File::G {
                if let Some(rook) = self.remove(Square::new(File::H, home)) {
                    self.place(Square::new(File::F, home), rook);
                }
            } else if to.file() == File::C {
                if let Some(rook) = self.remove(Square::new(File::A, home)) {
                    self.place(Square::new(File::D, home), rook);
                }
            }
        }
        captured
    }

    /// Reverses `record`: the moved piece returns to its origin and the
    /// captured piece (or emptiness) returns to the destination.
    ///
    /// A castled rook is left where castling put it; only the king comes
    /// back. Known asymmetry, kept as-is.
    pub fn undo_move(&mut self, record: &MoveRecord) {
        self.place(record.from, record.piece);
        match record.captured {
            Some(captured) => self.place(record.to, captured),
            None => {
                self.remove(record.to);
            }
        }
    }
}

/// A king displaced two files along its home rank, starting from its home
/// square, is a castle.
fn is_castle(piece: Piece, from: Square, to: Square) -> bool {
    piece.kind == PieceKind::King
        && from == Square::new(File::E, piece.color.home_rank())
        && to.rank() == from.rank()
        && (to.file().index() as i8 - from.file().index() as i8).abs() == 2
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\n{}\n)", self)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &rank in Rank::ALL.iter().rev() {
            write!(f, "{} ", rank)?;
            for file in File::ALL {
                match self.piece_at(Square::new(file, rank)) {
                    Some(piece) => write!(f, " {}", piece)?,
                    None => write!(f, " ·")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
