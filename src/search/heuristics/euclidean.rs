use crate::search::heuristics::heuristic::{for_each_displacement, positions_by_tile};
use crate::search::{Board, Heuristic, HeuristicValue};

/// Sum over all tiles of the straight-line distance between a tile's position
/// and its goal position. Never larger than [`super::ManhattanDistance`].
#[derive(Debug, Clone)]
pub struct EuclideanDistance {
    goal_positions: Vec<usize>,
}

impl EuclideanDistance {
    pub fn new(goal: &Board) -> Self {
        Self {
            goal_positions: positions_by_tile(goal),
        }
    }
}

impl Heuristic for EuclideanDistance {
    fn evaluate(&mut self, state: &Board) -> HeuristicValue {
        let mut distance = 0.;
        for_each_displacement(state, &self.goal_positions, |rows, cols| {
            distance += ((rows * rows + cols * cols) as f64).sqrt();
        });
        distance.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn reference_board() {
        let goal = board(&REFERENCE_GOAL);
        let mut heuristic = EuclideanDistance::new(&goal);
        // Offsets (2,1) three times, (1,1) twice, (0,2) twice and (0,1).
        let expected = 3. * 5f64.sqrt() + 2. * 2f64.sqrt() + 2. * 2. + 1.;
        let value = heuristic.evaluate(&board(&REFERENCE_INITIAL)).into_inner();
        assert_approx_eq!(value, expected, 1e-9);
    }

    #[test]
    fn straight_moves_match_grid_distance() {
        let goal = board(&[1, 2, 3, 4, 5, 6, 7, 8, 0]);
        let mut heuristic = EuclideanDistance::new(&goal);
        assert_approx_eq!(
            heuristic
                .evaluate(&board(&[1, 2, 3, 4, 5, 0, 7, 8, 6]))
                .into_inner(),
            1.0,
            1e-12
        );
    }
}
