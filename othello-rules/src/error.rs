//! Error types.

use crate::{Color, Position};
use derive_more::{Display, Error};

/// Errors raised by [`Board`](crate::Board) operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// A square outside the 8x8 grid was addressed. Always a caller bug.
    #[display(fmt = "invalid position {}", position)]
    InvalidPosition { position: Position },

    /// The square is occupied, or placing there captures nothing.
    #[display(fmt = "invalid move: {} cannot play {}", color, position)]
    InvalidMove { position: Position, color: Color },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "invalid position string")]
pub struct ParsePositionError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "invalid color string")]
pub struct ParseColorError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    #[display(fmt = "expected 64 squares, found {}", found)]
    WrongLength { found: usize },

    #[display(fmt = "unexpected character {:?} in board string", character)]
    InvalidCharacter { character: char },
}
