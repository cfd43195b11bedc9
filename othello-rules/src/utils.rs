//! Shared formatting helpers.

use crate::EDGE_LENGTH;
use std::fmt::{self, Display, Formatter};

/// Write 64 squares, given in row-major order, as a labelled grid.
/// Fails if `squares` does not yield exactly 64 items.
pub fn format_grid<I, T>(squares: I, f: &mut Formatter) -> fmt::Result
where
    I: IntoIterator<Item = T>,
    T: Display,
{
    let mut squares = squares.into_iter();
    write!(f, "   A B C D E F G H")?;

    for row in 0..EDGE_LENGTH {
        write!(f, "\n {} ", row + 1)?;
        for _ in 0..EDGE_LENGTH {
            write!(f, "{} ", squares.next().ok_or(fmt::Error)?)?;
        }
    }

    match squares.next() {
        None => Ok(()),
        Some(_) => Err(fmt::Error),
    }
}
