use crate::search::heuristics::heuristic::{for_each_displacement, positions_by_tile};
use crate::search::{Board, Heuristic, HeuristicValue};

/// Sum over all tiles of the grid distance between a tile's position and its
/// goal position. Tiles are located by label on both boards.
#[derive(Debug, Clone)]
pub struct ManhattanDistance {
    goal_positions: Vec<usize>,
}

impl ManhattanDistance {
    pub fn new(goal: &Board) -> Self {
        Self {
            goal_positions: positions_by_tile(goal),
        }
    }
}

impl Heuristic for ManhattanDistance {
    fn evaluate(&mut self, state: &Board) -> HeuristicValue {
        let mut distance = 0;
        for_each_displacement(state, &self.goal_positions, |rows, cols| {
            distance += rows + cols;
        });
        (distance as f64).into()
    }
}
