mod euclidean;
mod heuristic;
mod manhattan;
mod misplaced_tiles;
#[cfg(test)]
mod zero_heuristic;

pub use euclidean::EuclideanDistance;
pub use heuristic::{Heuristic, HeuristicName, HeuristicValue};
pub use manhattan::ManhattanDistance;
pub use misplaced_tiles::MisplacedTiles;

#[cfg(test)]
pub use zero_heuristic::ZeroHeuristic;
