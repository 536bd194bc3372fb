//! Chess game state engine: board occupancy, per-piece move legality, and
//! a tap-driven move ledger with single-step undo.
//!
//! This crate provides:
//! - [`Board`] - square-indexed occupancy plus the legality oracle,
//!   move application (including castling rook relocation), and undo
//! - [`MoveLedger`] and [`MoveRecord`] - the ordered move history with its
//!   parallel display log (`"w: (2e, 4e)"` lines)
//! - [`GameSession`], [`Selection`], and [`TapOutcome`] - the caller-facing
//!   selection state machine, one call per tap
//!
//! The engine is a pure in-process data model: no I/O, no clocks, no
//! threads. Legality covers piece geometry, path occupancy, and castling
//! by occupancy; check detection, en passant, and promotion are out of
//! scope. Illegal attempts and empty-ledger undos are ordinary outcomes,
//! never errors.
//!
//! # Example
//!
//! ```
//! use motion_core::Square;
//! use motion_engine::{GameSession, Selection, TapOutcome};
//!
//! let mut session = GameSession::new();
//! let mut selection = Selection::Idle;
//!
//! session.tap(&mut selection, Square::from_notation("2e").unwrap());
//! let outcome = session.tap(&mut selection, Square::from_notation("4e").unwrap());
//!
//! assert!(matches!(outcome, TapOutcome::Moved { .. }));
//! assert_eq!(session.ledger().log(), ["w: (2e, 4e)"]);
//! ```

mod board;
mod ledger;
mod session;

pub use board::Board;
pub use ledger::{MoveLedger, MoveRecord};
pub use session::{GameSession, Selection, TapOutcome};
