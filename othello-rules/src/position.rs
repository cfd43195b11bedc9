//! Code for addressing squares: [`Position`], [`Direction`] and [`PositionList`].

use crate::bitboard::Bitboard;
use crate::error::{BoardError, ParsePositionError};
use crate::EDGE_LENGTH;
use derive_more::{From, Into};
use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter, Write};
use std::iter::FromIterator;

/// A (row, col) coordinate pair. Row 0 is the top of the board, col 0 the left.
///
/// Any pair of coordinates can be represented; only those with both
/// components in `0..8` address a square (see [`Position::is_valid`]).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Whether both coordinates lie on the board.
    #[inline]
    pub fn is_valid(self) -> bool {
        (0..EDGE_LENGTH as i8).contains(&self.row) && (0..EDGE_LENGTH as i8).contains(&self.col)
    }

    /// Convert from a row-major square index (0 is A1, 63 is H8).
    #[inline]
    pub fn from_index(index: u8) -> Self {
        assert!((index as usize) < EDGE_LENGTH * EDGE_LENGTH);
        let edge = EDGE_LENGTH as u8;
        Self::new((index / edge) as i8, (index % edge) as i8)
    }

    /// Convert into a row-major square index, or None if off the board.
    #[inline]
    pub fn to_index(self) -> Option<u8> {
        if self.is_valid() {
            Some((self.row as u8) * EDGE_LENGTH as u8 + self.col as u8)
        } else {
            None
        }
    }

    /// The neighbouring position one step in `dir`. May be off the board.
    #[inline]
    pub fn step(self, dir: Direction) -> Self {
        let (d_row, d_col) = dir.offset();
        Self::new(
            self.row.saturating_add(d_row),
            self.col.saturating_add(d_col),
        )
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..(EDGE_LENGTH * EDGE_LENGTH) as u8).map(Position::from_index)
    }
}

impl From<(i8, i8)> for Position {
    fn from((row, col): (i8, i8)) -> Self {
        Self::new(row, col)
    }
}

/// Convert wide coordinates into a square on the board. Coordinates outside
/// the `i8` range are saturated into it for the error, which stays off the board.
impl TryFrom<(i32, i32)> for Position {
    type Error = BoardError;

    fn try_from((row, col): (i32, i32)) -> Result<Self, Self::Error> {
        let narrow = |x: i32| x.clamp(i8::MIN as i32, i8::MAX as i32) as i8;
        let position = Self::new(narrow(row), narrow(col));
        if position.is_valid() {
            Ok(position)
        } else {
            Err(BoardError::InvalidPosition { position })
        }
    }
}

/// Convert this [`Position`] into string notation ("A4").
/// Positions off the board are written as raw coordinates.
impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            return write!(f, "({}, {})", self.row, self.col);
        }

        let col_str = "ABCDEFGH".chars().nth(self.col as usize).ok_or(fmt::Error)?;
        let row_str = "12345678".chars().nth(self.row as usize).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        f.write_char(row_str)
    }
}

/// Build a [`Position`] from 1-indexed string notation ("A4").
impl std::str::FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let col_str = chars.next().ok_or(ParsePositionError)?.to_ascii_uppercase();
        let col = "ABCDEFGH".find(col_str).ok_or(ParsePositionError)? as i8;
        let row = chars
            .next()
            .ok_or(ParsePositionError)?
            .to_digit(10)
            .ok_or(ParsePositionError)? as i8;

        if !(1..=8).contains(&row) || chars.next().is_some() {
            return Err(ParsePositionError);
        }

        Ok(Self::new(row - 1, col))
    }
}

/// One of the eight compass directions a capture can run in.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
    North,
    NorthEast,
}

impl Direction {
    /// Every direction, in the order captures are resolved.
    pub const ALL: [Direction; 8] = [
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
        Direction::North,
        Direction::NorthEast,
    ];

    /// The unit step as (row delta, col delta).
    pub const fn offset(self) -> (i8, i8) {
        match self {
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
        }
    }
}

/// A set of squares, which can be iterated in row-major order to retrieve them.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord, From, Into)]
pub struct PositionList(Bitboard);

impl PositionList {
    /// Add `pos` to the list. Positions off the board are ignored.
    pub fn insert(&mut self, pos: Position) {
        if let Some(index) = pos.to_index() {
            self.0 |= Bitboard::from_index(index);
        }
    }

    /// Returns whether `pos` is in this list.
    pub fn contains(self, pos: Position) -> bool {
        match pos.to_index() {
            Some(index) => !(Bitboard::from_index(index) & self.0).is_empty(),
            None => false,
        }
    }

    /// Returns whether the list has no squares left.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Position> for PositionList {
    fn from_iter<T: IntoIterator<Item = Position>>(iter: T) -> Self {
        let mut list = Self::default();
        for pos in iter {
            list.insert(pos);
        }
        list
    }
}

impl ExactSizeIterator for PositionList {
    fn len(&self) -> usize {
        self.0.count_occupied() as usize
    }
}

impl Iterator for PositionList {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        let index = self.0.first_index()?;
        self.0 ^= Bitboard::from_index(index);
        Some(Position::from_index(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl Display for PositionList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let string = self
            .into_iter()
            .map(|pos| pos.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        f.write_fmt(format_args!("[{}]", string))
    }
}
