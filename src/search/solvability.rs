//! Parity test deciding whether one board can be turned into another.
//!
//! Moving the blank sideways does not change the order of the other tiles.
//! Moving it up or down makes one tile jump over N-1 others, changing the
//! number of inversions by N-1 while the blank changes rows. Hence the parity
//! of the inversion count is invariant on boards of odd side, and the parity
//! of the inversion count plus the blank's row is invariant on boards of even
//! side. Two boards with the same invariant are reachable from one another.

use crate::search::{board::BLANK, Board};

/// Number of pairs of non-blank tiles that appear in decreasing order.
pub fn count_inversions(board: &Board) -> usize {
    let tiles: Vec<_> = board
        .tiles()
        .iter()
        .copied()
        .filter(|&tile| tile != BLANK)
        .collect();
    tiles
        .iter()
        .enumerate()
        .map(|(i, &tile)| tiles[i + 1..].iter().filter(|&&later| later < tile).count())
        .sum()
}

/// The quantity whose parity no legal move changes.
fn parity(board: &Board) -> usize {
    let inversions = count_inversions(board);
    if board.side() % 2 == 1 {
        inversions % 2
    } else {
        let (blank_row, _) = board.row_col(board.blank_index());
        (inversions + blank_row) % 2
    }
}

/// Whether `goal` can be reached from `initial`. Both boards must have the
/// same side.
pub fn is_solvable(initial: &Board, goal: &Board) -> bool {
    debug_assert_eq!(initial.side(), goal.side());
    parity(initial) == parity(goal)
}
