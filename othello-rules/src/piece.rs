//! The contents of a single square: [`Color`], [`Piece`] and [`Cell`].

use crate::error::ParseColorError;
use std::fmt;

/// One of the two players, and the color of their discs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Default for Color {
    /// Gets the color that moves first (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Color {
    type Output = Self;

    /// Gets the other color.
    fn not(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => f.write_str("black"),
            Color::White => f.write_str("white"),
        }
    }
}

/// Parse "black" / "white" (any case), or the disc symbols "X" / "O".
impl std::str::FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "black" | "x" => Ok(Color::Black),
            "white" | "o" => Ok(Color::White),
            _ => Err(ParseColorError),
        }
    }
}

/// A disc on the board. Owned by the [`Cell`] holding it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    color: Color,
}

impl Piece {
    pub const fn new(color: Color) -> Self {
        Self { color }
    }

    #[inline]
    pub fn color(self) -> Color {
        self.color
    }

    /// Turn the disc over.
    #[inline]
    pub fn flip(&mut self) {
        self.color = !self.color;
    }

    /// The character used to draw this disc.
    pub fn symbol(self) -> char {
        match self.color {
            Color::Black => 'X',
            Color::White => 'O',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The state of one square on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(Piece),
}

impl Default for Cell {
    fn default() -> Self {
        Self::Empty
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        Self::Occupied(Piece::new(color))
    }
}

impl Cell {
    #[inline]
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The disc on this square, if any.
    #[inline]
    pub fn piece(self) -> Option<Piece> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(piece) => Some(piece),
        }
    }

    /// The color of the disc on this square, if any.
    #[inline]
    pub fn color(self) -> Option<Color> {
        self.piece().map(Piece::color)
    }

    /// Turn over the disc on this square. Empty squares are left alone.
    #[inline]
    pub fn flip(&mut self) {
        if let Cell::Occupied(piece) = self {
            piece.flip();
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(piece) => piece.symbol(),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
