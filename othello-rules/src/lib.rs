//! `othello-rules` is a small, checked rules engine for Othello.
//!
//! The crate is organized from the leaves up:
//!
//!  - [`Color`], [`Piece`] and [`Cell`] describe what sits on a single square.
//!  - [`Position`] addresses a square, and [`PositionList`] is a compact set of
//!    squares that iterates in row-major order.
//!  - [`Board`] owns the 8x8 grid and implements the rules: move validation,
//!    flip resolution, move enumeration and game-over detection.
//!
//! Turn order, scoring and move selection are left to the caller.

pub mod bitboard;
pub mod test_utils;

mod board;
mod error;
mod piece;
mod position;
mod utils;

pub use board::*;
pub use error::*;
pub use piece::*;
pub use position::*;

/// The number of spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on an Othello board.
pub const NUM_SPACES: usize = 64;
