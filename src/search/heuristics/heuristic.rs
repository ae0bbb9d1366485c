use crate::search::heuristics::{EuclideanDistance, ManhattanDistance, MisplacedTiles};
use crate::search::{board::BLANK, Board};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

pub type HeuristicValue = OrderedFloat<f64>;

/// A heuristic estimates the number of moves needed to turn a board into the
/// goal board it was created for.
pub trait Heuristic: Debug {
    /// Evaluate the given state with respect to the goal.
    fn evaluate(&mut self, state: &Board) -> HeuristicValue;

    /// Evaluate a batch of states with respect to the goal. The default
    /// implementation simply calls `evaluate` for each state sequentially.
    /// This method should be overridden if a more efficient implementation is
    /// possible.
    fn evaluate_batch(&mut self, states: &[Board]) -> Vec<HeuristicValue> {
        states.iter().map(|state| self.evaluate(state)).collect()
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum HeuristicName {
    #[default]
    #[clap(help = "Sum of the Manhattan distances of every tile to its goal position.")]
    Manhattan,
    #[clap(help = "Sum of the straight-line distances of every tile to its goal position.")]
    Euclidean,
    #[clap(help = "Number of tiles, other than the blank, not in their goal position.")]
    MisplacedTiles,
}

impl HeuristicName {
    pub fn create(&self, goal: &Board) -> Box<dyn Heuristic> {
        match self {
            HeuristicName::Manhattan => Box::new(ManhattanDistance::new(goal)),
            HeuristicName::Euclidean => Box::new(EuclideanDistance::new(goal)),
            HeuristicName::MisplacedTiles => Box::new(MisplacedTiles::new(goal)),
        }
    }
}

/// Maps every tile label to its position on `board`.
pub(super) fn positions_by_tile(board: &Board) -> Vec<usize> {
    let mut positions = vec![0; board.len()];
    for (position, &tile) in board.tiles().iter().enumerate() {
        positions[tile as usize] = position;
    }
    positions
}

/// Calls `f` with the (row, col) offset between the position of every
/// non-blank tile on `state` and its goal position.
pub(super) fn for_each_displacement(
    state: &Board,
    goal_positions: &[usize],
    mut f: impl FnMut(usize, usize),
) {
    for (position, &tile) in state.tiles().iter().enumerate() {
        if tile == BLANK {
            continue;
        }
        let (row, col) = state.row_col(position);
        let (goal_row, goal_col) = state.row_col(goal_positions[tile as usize]);
        f(row.abs_diff(goal_row), col.abs_diff(goal_col));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::scramble::random_walk;
    use crate::test_utils::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn goal_is_zero() {
        for side in 1..=4 {
            let goal = Board::goal(side).unwrap();
            for name in ALL_HEURISTICS {
                let mut heuristic = name.create(&goal);
                assert_eq!(heuristic.evaluate(&goal).into_inner(), 0.0, "{:?}", name);
            }
        }
        let goal = board(&REFERENCE_GOAL);
        for name in ALL_HEURISTICS {
            assert_eq!(name.create(&goal).evaluate(&goal).into_inner(), 0.0);
        }
    }

    #[test]
    fn admissible_on_short_scrambles() {
        let mut rng = StdRng::seed_from_u64(2024);
        let goal = board(&REFERENCE_GOAL);
        for name in ALL_HEURISTICS {
            let mut heuristic = name.create(&goal);
            for moves in 0..=12 {
                for _ in 0..20 {
                    let state = random_walk(&goal, moves, &mut rng);
                    let h = heuristic.evaluate(&state);
                    assert!(
                        h.into_inner() <= moves as f64,
                        "{:?} gave {} for a board {} moves away:\n{}",
                        name,
                        h,
                        moves,
                        state
                    );
                }
            }
        }
    }

    #[test]
    fn batch_matches_single() {
        let goal = board(&REFERENCE_GOAL);
        let states = vec![board(&REFERENCE_INITIAL), goal.clone()];
        for name in ALL_HEURISTICS {
            let mut heuristic = name.create(&goal);
            let batch = heuristic.evaluate_batch(&states);
            let single: Vec<_> = states.iter().map(|s| heuristic.evaluate(s)).collect();
            assert_eq!(batch, single);
        }
    }

    #[test]
    fn ordering_between_heuristics() {
        // Euclidean <= Manhattan for every board, and misplaced tiles never
        // exceeds Manhattan either.
        let goal = board(&REFERENCE_GOAL);
        let state = board(&REFERENCE_INITIAL);
        let manhattan = HeuristicName::Manhattan.create(&goal).evaluate(&state);
        let euclidean = HeuristicName::Euclidean.create(&goal).evaluate(&state);
        let misplaced = HeuristicName::MisplacedTiles.create(&goal).evaluate(&state);
        assert!(euclidean <= manhattan);
        assert!(misplaced <= manhattan);
    }
}
