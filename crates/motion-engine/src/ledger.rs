//! Move history and its derived display log.

use motion_core::{Color, Piece, Square};

/// The reversible description of one applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    /// Who moved.
    pub color: Color,
    /// The piece that moved.
    pub piece: Piece,
    /// Where it came from.
    pub from: Square,
    /// Where it went.
    pub to: Square,
    /// The occupant of `to` immediately before the move, if any. Never the
    /// rook a castle relocates.
    pub captured: Option<Piece>,
}

/// Ordered move history plus the parallel human-readable log.
///
/// The record and log sequences grow and shrink together, one entry per
/// applied move, and always have the same length. The ledger's length
/// parity is the single source of truth for whose turn it is; there is no
/// separate turn flag.
#[derive(Debug, Clone, Default)]
pub struct MoveLedger {
    records: Vec<MoveRecord>,
    log: Vec<String>,
}

impl MoveLedger {
    /// Creates an empty ledger. White moves first.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record together with its display line, e.g. `"w: (2e, 4e)"`.
    pub fn record(&mut self, record: MoveRecord) {
        self.log.push(format!(
            "{}: ({}, {})",
            record.color.letter(),
            record.from,
            record.to
        ));
        self.records.push(record);
    }

    /// Pops the most recent record and its display line together.
    ///
    /// Returns `None` when there is nothing to undo; an empty ledger is
    /// not an error.
    pub fn undo_last(&mut self) -> Option<MoveRecord> {
        let record = self.records.pop()?;
        self.log.pop();
        Some(record)
    }

    /// The color to move: White on even ledger length, Black on odd.
    pub fn turn(&self) -> Color {
        if self.records.len() % 2 == 0 {
            Color::White
        } else {
            Color::Black
        }
    }

    /// The last `n` display lines in original order, or all of them when
    /// the log is shorter. The score-sheet window.
    pub fn recent(&self, n: usize) -> &[String] {
        &self.log[self.log.len().saturating_sub(n)..]
    }

    /// All display lines in move order.
    pub fn log(&self) -> &[String] {
        &self.log
    }

    /// All move records in move order.
    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    /// Number of applied moves.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no moves have been applied.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The newline-joined log, exactly as an exporter writes it out.
    pub fn transcript(&self) -> String {
        self.log.join("\n")
    }
}
