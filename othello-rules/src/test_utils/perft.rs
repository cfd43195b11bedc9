//! "Perft" performance test: count the number of leaves at a given depth.
//! Useful for checking move generation against known counts.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::{Board, BoardError, Color, Rules};

/// Count leaves `depth` plies below the starting position under tournament rules.
pub fn run_perft(depth: u64) -> Result<u64, BoardError> {
    run_perft_with_rules(Rules::STANDARD, depth)
}

/// Count leaves `depth` plies below the starting position under `rules`.
pub fn run_perft_with_rules(rules: Rules, depth: u64) -> Result<u64, BoardError> {
    leaves_below(&Board::with_rules(rules), Color::default(), depth, false)
}

fn leaves_below(
    board: &Board,
    color: Color,
    depth: u64,
    passed: bool,
) -> Result<u64, BoardError> {
    // Leaf node for this depth
    if depth == 0 {
        return Ok(1);
    }

    let all_moves = board.valid_moves(color);
    if all_moves.is_empty() {
        // Both players passed: game is over
        if passed {
            return Ok(1);
        }

        return leaves_below(board, !color, depth - 1, true);
    }

    all_moves
        .map(|pos| {
            let mut child = *board;
            child.place_piece(pos, color)?;
            leaves_below(&child, !color, depth - 1, false)
        })
        .sum()
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(1), Ok(4));
}

#[test]
fn perft_02() {
    assert_eq!(run_perft(2), Ok(12));
}

#[test]
fn perft_legacy_opening() {
    // The first two plies never capture along two lines or past an own disc.
    assert_eq!(run_perft_with_rules(Rules::LEGACY, 1), Ok(4));
    assert_eq!(run_perft_with_rules(Rules::LEGACY, 2), Ok(12));
}
