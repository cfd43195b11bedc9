//! The 8x8 board and the rules that act on it.
//!
//! A [`Board`] owns one [`Cell`] per square. After construction the only way
//! to change it is [`Board::place_piece`], which either applies a whole move
//! (placement plus every flip) or returns an error and leaves the board as it
//! was.

use crate::bitboard::{Bitboard, BLACK_START, WHITE_START};
use crate::error::{BoardError, ParseBoardError};
use crate::piece::{Cell, Color};
use crate::position::{Direction, Position, PositionList};
use crate::{utils, EDGE_LENGTH, NUM_SPACES};
use log::{debug, trace};
use std::fmt;

/// How the discs captured by a move are collected.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum CaptureRule {
    /// Standard Othello: every direction that sandwiches opponent discs flips them.
    AllDirections,
    /// Only the first capturing direction (in [`Direction::ALL`] order) flips.
    /// Legality is unchanged; fewer discs may turn over.
    FirstDirection,
}

impl Default for CaptureRule {
    fn default() -> Self {
        Self::AllDirections
    }
}

/// What a capture walk does when its first step lands on a disc of the mover.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum RunStart {
    /// Leading discs of the mover's color are passed over, and the run of
    /// opponent discs may begin behind them.
    SkipOwn,
    /// The run of opponent discs must begin next to the placed disc, as in
    /// tournament Othello.
    Adjacent,
}

impl Default for RunStart {
    fn default() -> Self {
        Self::SkipOwn
    }
}

/// The rule set a [`Board`] resolves captures with.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Rules {
    pub capture: CaptureRule,
    pub run_start: RunStart,
}

impl Rules {
    /// Tournament Othello.
    pub const STANDARD: Self = Self {
        capture: CaptureRule::AllDirections,
        run_start: RunStart::Adjacent,
    };

    /// The legacy engine: first capturing direction only, leading own discs skipped.
    pub const LEGACY: Self = Self {
        capture: CaptureRule::FirstDirection,
        run_start: RunStart::SkipOwn,
    };
}

impl From<CaptureRule> for Rules {
    fn from(capture: CaptureRule) -> Self {
        Self {
            capture,
            ..Self::default()
        }
    }
}

/// The complete state of the 8x8 grid.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Board {
    grid: [[Cell; EDGE_LENGTH]; EDGE_LENGTH],
    rules: Rules,
}

impl Default for Board {
    /// The starting position under the default rules.
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The starting position: D5 and E4 black, D4 and E5 white.
    pub fn new() -> Self {
        Self::with_rules(Rules::default())
    }

    /// The starting position, resolving captures with `rules`.
    pub fn with_rules(rules: impl Into<Rules>) -> Self {
        Self::from_bitboards(BLACK_START, WHITE_START, rules.into())
    }

    /// Fill the grid from one mask per color. A square set in both masks is black.
    fn from_bitboards(black: Bitboard, white: Bitboard, rules: Rules) -> Self {
        debug_assert!((black & white).is_empty());

        let mut grid = [[Cell::Empty; EDGE_LENGTH]; EDGE_LENGTH];
        let squares = black.into_iter().zip(white.into_iter());
        for (index, (is_black, is_white)) in squares.enumerate() {
            let cell = &mut grid[index / EDGE_LENGTH][index % EDGE_LENGTH];
            if is_black {
                *cell = Cell::from(Color::Black);
            } else if is_white {
                *cell = Cell::from(Color::White);
            }
        }

        Self { grid, rules }
    }

    /// Parse a board diagram (see the [`FromStr`](std::str::FromStr) impl)
    /// that resolves captures with `rules`.
    pub fn parse_with_rules(s: &str, rules: impl Into<Rules>) -> Result<Self, ParseBoardError> {
        let mut black = Bitboard::default();
        let mut white = Bitboard::default();
        let mut found = 0;

        for ch in s.chars().filter(|ch| !ch.is_whitespace()) {
            if found < NUM_SPACES {
                let square = Bitboard::from_index(found as u8);
                match ch {
                    'X' | 'x' | '#' | '*' => black |= square,
                    'O' | 'o' => white |= square,
                    '.' | '-' => (),
                    character => return Err(ParseBoardError::InvalidCharacter { character }),
                }
            }
            found += 1;
        }

        if found != NUM_SPACES {
            return Err(ParseBoardError::WrongLength { found });
        }

        Ok(Self::from_bitboards(black, white, rules.into()))
    }

    #[inline]
    pub fn rules(&self) -> Rules {
        self.rules
    }

    /// Whether `pos` addresses one of the 64 squares.
    #[inline]
    pub fn is_valid_pos(&self, pos: Position) -> bool {
        pos.is_valid()
    }

    /// The cell at `pos`, or [`Cell::Empty`] if nothing is there.
    pub fn get_piece(&self, pos: Position) -> Result<Cell, BoardError> {
        self.cell(pos)
            .ok_or(BoardError::InvalidPosition { position: pos })
    }

    /// Whether a disc sits at `pos`.
    pub fn is_occupied(&self, pos: Position) -> Result<bool, BoardError> {
        Ok(!self.get_piece(pos)?.is_empty())
    }

    /// Whether a disc of `color` sits at `pos`. Empty squares belong to nobody.
    pub fn is_mine(&self, pos: Position, color: Color) -> Result<bool, BoardError> {
        Ok(self.get_piece(pos)?.color() == Some(color))
    }

    /// Check that `pos` is empty and that `color` playing there captures
    /// something. Returns the discs that would flip, nearest first within
    /// each direction, or None if the move is illegal.
    pub fn valid_move(
        &self,
        pos: Position,
        color: Color,
    ) -> Result<Option<Vec<Position>>, BoardError> {
        if self.is_occupied(pos)? {
            return Ok(None);
        }

        let mut captures = Vec::new();
        for &dir in Direction::ALL.iter() {
            if let Some(run) = self.positions_to_flip(pos, color, dir) {
                trace!("{} at {} captures {} toward {:?}", color, pos, run.len(), dir);
                captures.extend(run);
                if self.rules.capture == CaptureRule::FirstDirection {
                    break;
                }
            }
        }

        if captures.is_empty() {
            Ok(None)
        } else {
            Ok(Some(captures))
        }
    }

    /// Place a disc of `color` at `pos` and flip every captured disc.
    /// Returns the flipped positions. On error the board is unchanged.
    pub fn place_piece(
        &mut self,
        pos: Position,
        color: Color,
    ) -> Result<Vec<Position>, BoardError> {
        let captures = match self.valid_move(pos, color)? {
            Some(captures) => captures,
            None => {
                debug!("rejected {} at {}", color, pos);
                return Err(BoardError::InvalidMove {
                    position: pos,
                    color,
                });
            }
        };

        // Every position here was read during validation, so it is on the board.
        *self.cell_mut(pos) = Cell::from(color);
        for &captured in &captures {
            self.cell_mut(captured).flip();
        }

        debug!("{} plays {}, flipping {}", color, pos, captures.len());
        Ok(captures)
    }

    /// Every square `color` can legally play, in row-major order.
    pub fn valid_moves(&self, color: Color) -> PositionList {
        Position::all()
            .filter(|&pos| matches!(self.valid_move(pos, color), Ok(Some(_))))
            .collect()
    }

    /// Whether `color` has any legal move.
    pub fn has_move(&self, color: Color) -> bool {
        !self.valid_moves(color).is_empty()
    }

    /// Whether neither color can move.
    pub fn is_over(&self) -> bool {
        !self.has_move(Color::White) && !self.has_move(Color::Black)
    }

    /// Every square with its cell, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        Position::all().map(move |pos| (pos, self.grid[pos.row as usize][pos.col as usize]))
    }

    /// Count the discs of `color`.
    pub fn count(&self, color: Color) -> usize {
        self.cells()
            .filter(|(_, cell)| cell.color() == Some(color))
            .count()
    }

    /// Every square holding a disc of either color.
    pub fn occupied(&self) -> PositionList {
        self.cells()
            .filter(|(_, cell)| !cell.is_empty())
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Count the squares holding a disc of either color.
    pub fn count_occupied(&self) -> usize {
        self.occupied().len()
    }

    /// Count the empty squares.
    pub fn count_empty(&self) -> usize {
        Bitboard::from(self.occupied()).count_empty() as usize
    }

    fn cell(&self, pos: Position) -> Option<Cell> {
        if pos.is_valid() {
            Some(self.grid[pos.row as usize][pos.col as usize])
        } else {
            None
        }
    }

    /// `pos` must be on the board.
    fn cell_mut(&mut self, pos: Position) -> &mut Cell {
        &mut self.grid[pos.row as usize][pos.col as usize]
    }

    /// Walk from `pos` toward `dir`, collecting opponent discs until one of
    /// `color` closes the run. None if the walk hits the edge, starts on an
    /// empty square, or meets an empty square before the run closes.
    /// Leading discs of `color` end the walk only under [`RunStart::Adjacent`].
    fn positions_to_flip(
        &self,
        pos: Position,
        color: Color,
        dir: Direction,
    ) -> Option<Vec<Position>> {
        let mut run = Vec::new();
        let mut current = pos;

        for _ in 1..EDGE_LENGTH {
            current = current.step(dir);
            match self.cell(current)? {
                Cell::Empty => return None,
                Cell::Occupied(piece) if piece.color() == color => {
                    if !run.is_empty() {
                        return Some(run);
                    }
                    if self.rules.run_start == RunStart::Adjacent {
                        return None;
                    }
                }
                Cell::Occupied(_) => run.push(current),
            }
        }

        None
    }
}

/// Parse 64 squares in row-major order. `X`, `x`, `#` and `*` are black,
/// `O` and `o` are white, `.` and `-` are empty; whitespace is ignored.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with_rules(s, Rules::default())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(self.grid.iter().flatten(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: i8, col: i8) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn starting_cells() {
        let board = Board::new();
        assert_eq!(board.get_piece(pos(3, 4)), Ok(Cell::from(Color::Black)));
        assert_eq!(board.get_piece(pos(4, 3)), Ok(Cell::from(Color::Black)));
        assert_eq!(board.get_piece(pos(3, 3)), Ok(Cell::from(Color::White)));
        assert_eq!(board.get_piece(pos(4, 4)), Ok(Cell::from(Color::White)));
        assert_eq!(board.get_piece(pos(0, 0)), Ok(Cell::Empty));
        assert_eq!(board.rules(), Rules::default());
        assert_eq!(board.rules().capture, CaptureRule::AllDirections);
        assert_eq!(board.rules().run_start, RunStart::SkipOwn);
    }

    #[test]
    fn get_piece_out_of_range() {
        let board = Board::new();
        for &bad in &[pos(-1, 0), pos(0, -1), pos(8, 0), pos(0, 8), pos(100, 100)] {
            assert_eq!(
                board.get_piece(bad),
                Err(BoardError::InvalidPosition { position: bad })
            );
            assert!(board.is_occupied(bad).is_err());
            assert!(board.is_mine(bad, Color::Black).is_err());
            assert!(!board.is_valid_pos(bad));
        }
    }

    #[test]
    fn is_mine() {
        let board = Board::new();
        assert_eq!(board.is_mine(pos(3, 4), Color::Black), Ok(true));
        assert_eq!(board.is_mine(pos(3, 4), Color::White), Ok(false));
        assert_eq!(board.is_mine(pos(0, 0), Color::White), Ok(false));
    }

    #[test]
    fn flip_path_single_direction() {
        let board = Board::new();
        assert_eq!(
            board.positions_to_flip(pos(2, 3), Color::Black, Direction::South),
            Some(vec![pos(3, 3)])
        );
        assert_eq!(
            board.positions_to_flip(pos(2, 3), Color::Black, Direction::East),
            None
        );
    }

    #[test]
    fn flip_path_full_length_run() {
        let board: Board = "
            . O O O O O O X
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
        "
        .parse()
        .unwrap();

        let expected: Vec<Position> = (1..7).map(|col| pos(0, col)).collect();
        assert_eq!(
            board.positions_to_flip(pos(0, 0), Color::Black, Direction::East),
            Some(expected)
        );
    }

    #[test]
    fn flip_path_stops_at_edge_and_gap() {
        let board: Board = "
            . O O O O O O O
            . O . X . . . .
            . X O X . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
        "
        .parse()
        .unwrap();

        // Runs off the edge without closing.
        assert_eq!(
            board.positions_to_flip(pos(0, 0), Color::Black, Direction::East),
            None
        );
        // Hits an empty square before closing.
        assert_eq!(
            board.positions_to_flip(pos(1, 0), Color::Black, Direction::East),
            None
        );
        // Leading own disc is passed over, the run behind it closes.
        assert_eq!(
            board.positions_to_flip(pos(2, 0), Color::Black, Direction::East),
            Some(vec![pos(2, 2)])
        );
    }

    #[test]
    fn flip_path_leading_own_discs() {
        let diagram = "
            . X O X . . . .
            . X X O O X . .
            . X X . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
        ";
        let skip: Board = diagram.parse().unwrap();
        let adjacent = Board::parse_with_rules(diagram, Rules::STANDARD).unwrap();

        assert_eq!(
            skip.positions_to_flip(pos(0, 0), Color::Black, Direction::East),
            Some(vec![pos(0, 2)])
        );
        assert_eq!(
            skip.positions_to_flip(pos(1, 0), Color::Black, Direction::East),
            Some(vec![pos(1, 3), pos(1, 4)])
        );
        // Only own discs, then empty: nothing to close.
        assert_eq!(
            skip.positions_to_flip(pos(2, 0), Color::Black, Direction::East),
            None
        );

        for row in 0..3 {
            assert_eq!(
                adjacent.positions_to_flip(pos(row, 0), Color::Black, Direction::East),
                None
            );
        }
    }

    #[test]
    fn place_piece_is_atomic_on_error() {
        let mut board = Board::new();
        let before = board;
        assert!(board.place_piece(pos(0, 0), Color::Black).is_err());
        assert!(board.place_piece(pos(3, 3), Color::Black).is_err());
        assert!(board.place_piece(pos(8, 3), Color::Black).is_err());
        assert_eq!(board, before);
    }

    #[test]
    fn counts() {
        let mut board = Board::new();
        assert_eq!(board.count(Color::Black), 2);
        assert_eq!(board.count(Color::White), 2);
        assert_eq!(board.count_occupied(), 4);
        assert_eq!(board.count_empty(), 60);
        assert_eq!(
            board.occupied().collect::<Vec<_>>(),
            vec![pos(3, 3), pos(3, 4), pos(4, 3), pos(4, 4)]
        );

        board.place_piece(pos(2, 3), Color::Black).unwrap();
        assert_eq!(board.count(Color::Black), 4);
        assert_eq!(board.count(Color::White), 1);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            "X O".parse::<Board>(),
            Err(ParseBoardError::WrongLength { found: 2 })
        );
        assert_eq!(
            "?".repeat(64).parse::<Board>(),
            Err(ParseBoardError::InvalidCharacter { character: '?' })
        );
        assert_eq!(
            ".".repeat(65).parse::<Board>(),
            Err(ParseBoardError::WrongLength { found: 65 })
        );
    }

    #[test]
    fn parse_starting_board() {
        let board: Board = "
            - - - - - - - -
            - - - - - - - -
            - - - - - - - -
            - - - O X - - -
            - - - X O - - -
            - - - - - - - -
            - - - - - - - -
            - - - - - - - -
        "
        .parse()
        .unwrap();
        assert_eq!(board, Board::new());

        let compact: String = board.cells().map(|(_, cell)| cell.symbol()).collect();
        let legacy = Board::parse_with_rules(&compact, Rules::LEGACY).unwrap();
        assert_eq!(legacy, Board::with_rules(Rules::LEGACY));
        assert_ne!(legacy, board);
    }

    #[test]
    fn display() {
        let expected = "   A B C D E F G H\
                        \n 1 . . . . . . . . \
                        \n 2 . . . . . . . . \
                        \n 3 . . . . . . . . \
                        \n 4 . . . O X . . . \
                        \n 5 . . . X O . . . \
                        \n 6 . . . . . . . . \
                        \n 7 . . . . . . . . \
                        \n 8 . . . . . . . . ";
        assert_eq!(Board::new().to_string(), expected);
    }
}
