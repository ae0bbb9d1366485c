use crate::search::{scramble::random_walk, Board, HeuristicName, Tile};
use rand::{rngs::StdRng, SeedableRng};

/// A 3x3 instance whose goal has the blank in the top-left corner.
pub const REFERENCE_INITIAL: [Tile; 9] = [7, 2, 4, 5, 0, 6, 8, 3, 1];
pub const REFERENCE_GOAL: [Tile; 9] = [0, 1, 2, 3, 4, 5, 6, 7, 8];

/// Solved by moving the blank right once.
pub const ONE_MOVE_INITIAL: [Tile; 9] = [1, 2, 3, 4, 5, 6, 7, 0, 8];
pub const ONE_MOVE_GOAL: [Tile; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 0];

pub const ALL_HEURISTICS: [HeuristicName; 3] = [
    HeuristicName::Manhattan,
    HeuristicName::Euclidean,
    HeuristicName::MisplacedTiles,
];

pub fn board(tiles: &[Tile]) -> Board {
    Board::new(tiles.to_vec()).unwrap()
}

pub fn random_scramble(goal: &Board, moves: usize, seed: u64) -> Board {
    random_walk(goal, moves, &mut StdRng::seed_from_u64(seed))
}
