//! Rank-first square notation.
//!
//! The canonical text form of a square is exactly two characters: an ASCII
//! rank digit '1'-'8' followed by a lowercase file letter 'a'-'h', e.g.
//! `"2e"` for rank 2, file e. Nothing else parses.

use crate::{File, Rank, Square};
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when parsing square notation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("invalid coordinate {0:?}: expected a rank digit 1-8 followed by a file letter a-h")]
    InvalidCoordinate(String),
}

impl Square {
    /// Parses a square from its canonical two-character form (e.g. "2e").
    ///
    /// The notation is case-sensitive: `"2E"` is rejected.
    pub fn from_notation(text: &str) -> Result<Self, NotationError> {
        let bytes = text.as_bytes();
        if bytes.len() != 2 {
            return Err(NotationError::InvalidCoordinate(text.to_string()));
        }
        let rank = Rank::from_char(bytes[0] as char);
        let file = File::from_char(bytes[1] as char);
        match (rank, file) {
            (Some(rank), Some(file)) => Ok(Square::new(file, rank)),
            _ => Err(NotationError::InvalidCoordinate(text.to_string())),
        }
    }

    /// Returns the canonical two-character form of this square.
    ///
    /// Exact inverse of [`Square::from_notation`] for every square.
    pub fn to_notation(self) -> String {
        self.to_string()
    }
}

impl FromStr for Square {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_notation(s)
    }
}
