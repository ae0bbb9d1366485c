//! Generation of solvable instances by random walks of the blank.

use crate::search::{moves::successors, Board, Direction};
use rand::{seq::SliceRandom, Rng};

/// Moves the blank `moves` times from `board` in uniformly random legal
/// directions, never immediately undoing the previous move unless it is the
/// only legal one. The result is at most `moves` moves away from `board`.
pub fn random_walk<R: Rng + ?Sized>(board: &Board, moves: usize, rng: &mut R) -> Board {
    let mut current = board.clone();
    let mut last: Option<Direction> = None;
    for _ in 0..moves {
        let mut candidates = successors(&current);
        if candidates.len() > 1 {
            if let Some(last) = last {
                candidates.retain(|(direction, _)| *direction != last.opposite());
            }
        }
        match candidates.choose(rng) {
            Some((direction, next)) => {
                last = Some(*direction);
                current = next.clone();
            }
            None => break,
        }
    }
    current
}
