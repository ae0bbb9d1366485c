use crate::search::{board::BLANK, Board, Heuristic, HeuristicValue};

/// Number of tiles, other than the blank, that are not in their goal position.
#[derive(Debug, Clone)]
pub struct MisplacedTiles {
    goal: Board,
}

impl MisplacedTiles {
    pub fn new(goal: &Board) -> Self {
        Self { goal: goal.clone() }
    }
}

impl Heuristic for MisplacedTiles {
    fn evaluate(&mut self, state: &Board) -> HeuristicValue {
        let misplaced = state
            .tiles()
            .iter()
            .zip(self.goal.tiles())
            .filter(|&(&tile, &goal_tile)| tile != BLANK && tile != goal_tile)
            .count();
        (misplaced as f64).into()
    }
}
