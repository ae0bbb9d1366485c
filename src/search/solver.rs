//! Entry point turning raw tile sequences into a solved path.

use crate::search::{
    board::BoardError,
    config::SolverConfig,
    search_engines::{AStar, SearchOutcome, SearchResult},
    Board, HeuristicName, Plan, Tile,
};
use serde::Serialize;
use std::fmt;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardRole {
    Initial,
    Goal,
}

impl fmt::Display for BoardRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardRole::Initial => write!(f, "initial"),
            BoardRole::Goal => write!(f, "goal"),
        }
    }
}

#[derive(Debug, Error)]
pub enum SolveError {
    #[error("invalid {role} state: {source}")]
    InvalidState {
        role: BoardRole,
        #[source]
        source: BoardError,
    },
    #[error("the goal is not reachable from the initial state")]
    Unsolvable,
    #[error("search stopped before reaching the goal: {0:?}")]
    Exhausted(SearchResult),
}

/// A solved instance. `path` runs from the initial board to `final_state`,
/// and `plan` holds the moves between consecutive boards of `path`.
#[derive(Debug, Clone, Serialize)]
pub struct Solution {
    pub final_state: Board,
    pub elapsed: Duration,
    pub path: Vec<Board>,
    pub plan: Plan,
    pub expanded_nodes: usize,
    pub generated_nodes: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Validates both tile sequences and solves the instance. The reported
    /// elapsed time covers the whole call, validation included.
    pub fn solve(&self, initial: &[Tile], goal: &[Tile]) -> Result<Solution, SolveError> {
        let start = Instant::now();
        let initial = Board::new(initial.to_vec()).map_err(|source| SolveError::InvalidState {
            role: BoardRole::Initial,
            source,
        })?;
        let goal = Board::new(goal.to_vec()).map_err(|source| SolveError::InvalidState {
            role: BoardRole::Goal,
            source,
        })?;
        self.solve_since(start, initial, &goal)
    }

    pub fn solve_boards(&self, initial: Board, goal: &Board) -> Result<Solution, SolveError> {
        self.solve_since(Instant::now(), initial, goal)
    }

    fn solve_since(
        &self,
        start: Instant,
        initial: Board,
        goal: &Board,
    ) -> Result<Solution, SolveError> {
        let outcome = self.search(initial, goal)?;

        match outcome.result() {
            SearchResult::Success(goal_id) => {
                let search_space = outcome.search_space();
                let path = search_space.reconstruct_path(goal_id);
                let plan = search_space.extract_plan(goal_id);
                let elapsed = start.elapsed();
                info!(plan_length = plan.len(), ?elapsed, "solved");
                Ok(Solution {
                    final_state: search_space.get_state(goal_id).clone(),
                    elapsed,
                    path,
                    plan,
                    expanded_nodes: outcome.statistics().expanded_nodes(),
                    generated_nodes: outcome.statistics().generated_nodes(),
                })
            }
            SearchResult::ProvablyUnsolvable => Err(SolveError::Unsolvable),
            result => Err(SolveError::Exhausted(result)),
        }
    }

    /// Runs A* and returns the raw outcome, keeping the node table and
    /// expansion order for inspection.
    pub fn search(&self, initial: Board, goal: &Board) -> Result<SearchOutcome, SolveError> {
        initial
            .check_same_side(goal)
            .map_err(|source| SolveError::InvalidState {
                role: BoardRole::Goal,
                source,
            })?;
        info!(heuristic = ?self.config.heuristic, side = initial.side());
        let mut engine = AStar::new(self.config.heuristic.create(goal))
            .with_limits(self.config.limits())
            .with_solvability_check(self.config.check_solvability);
        Ok(engine.search(initial, goal))
    }
}

/// Solves `initial` into `goal` with the given heuristic and default limits.
pub fn solve(
    initial: &[Tile],
    goal: &[Tile],
    heuristic: HeuristicName,
) -> Result<Solution, SolveError> {
    Solver::new(SolverConfig::default().with_heuristic(heuristic)).solve(initial, goal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{validate::validate_path, Direction};
    use crate::test_utils::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    /// Collects formatted log output in memory.
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn rejects_invalid_states() {
        let result = solve(&[1, 2, 3], &REFERENCE_GOAL, HeuristicName::Manhattan);
        assert!(matches!(
            result,
            Err(SolveError::InvalidState {
                role: BoardRole::Initial,
                source: BoardError::NotSquare { len: 3 }
            })
        ));

        let result = solve(&REFERENCE_INITIAL, &[0, 1, 1, 3], HeuristicName::Manhattan);
        assert!(matches!(
            result,
            Err(SolveError::InvalidState {
                role: BoardRole::Goal,
                source: BoardError::Duplicate { tile: 1 }
            })
        ));
    }

    #[test]
    fn rejects_side_mismatch() {
        let result = solve(&REFERENCE_INITIAL, &[0, 1, 2, 3], HeuristicName::Manhattan);
        assert!(matches!(
            result,
            Err(SolveError::InvalidState {
                source: BoardError::SideMismatch {
                    expected: 3,
                    found: 2
                },
                ..
            })
        ));
    }

    #[test]
    fn goal_equal_to_initial() {
        for name in ALL_HEURISTICS {
            let solution = solve(&REFERENCE_GOAL, &REFERENCE_GOAL, name).unwrap();
            assert_eq!(solution.final_state, board(&REFERENCE_GOAL));
            assert_eq!(solution.path, vec![board(&REFERENCE_GOAL)]);
            assert!(solution.plan.is_empty());
            assert_eq!(solution.expanded_nodes, 0);
        }
    }

    #[test]
    fn one_move_solution() {
        let solution = solve(
            &ONE_MOVE_INITIAL,
            &ONE_MOVE_GOAL,
            HeuristicName::MisplacedTiles,
        )
        .unwrap();
        assert_eq!(solution.plan.steps(), &[Direction::Right]);
        assert_eq!(solution.expanded_nodes, 1);
        assert_eq!(solution.generated_nodes, 3);
    }

    #[test]
    fn path_round_trip() {
        let initial = board(&REFERENCE_INITIAL);
        let goal = board(&REFERENCE_GOAL);
        for name in ALL_HEURISTICS {
            let solution = solve(&REFERENCE_INITIAL, &REFERENCE_GOAL, name).unwrap();
            assert_eq!(solution.final_state, goal);
            assert_eq!(validate_path(&solution.path, &initial, &goal), Ok(()));
            assert_eq!(solution.plan.len() + 1, solution.path.len());
        }
    }

    #[test]
    fn unsolvable_is_reported() {
        let unsolvable = [2, 1, 3, 4, 5, 6, 7, 8, 0];
        assert!(matches!(
            solve(&unsolvable, &ONE_MOVE_GOAL, HeuristicName::Manhattan),
            Err(SolveError::Unsolvable)
        ));

        let config = SolverConfig {
            check_solvability: false,
            ..Default::default()
        };
        assert!(matches!(
            Solver::new(config).solve(&[2, 1, 3, 0], &[1, 2, 3, 0]),
            Err(SolveError::Unsolvable)
        ));
    }

    #[test]
    fn limits_are_reported() {
        let config = SolverConfig {
            max_expansions: Some(3),
            ..Default::default()
        };
        assert!(matches!(
            Solver::new(config).solve(&REFERENCE_INITIAL, &REFERENCE_GOAL),
            Err(SolveError::Exhausted(SearchResult::ExpansionLimitExceeded))
        ));
    }

    #[test]
    fn elapsed_covers_the_call() {
        let start = Instant::now();
        let solution =
            solve(&REFERENCE_INITIAL, &REFERENCE_GOAL, HeuristicName::Manhattan).unwrap();
        assert!(solution.elapsed <= start.elapsed());

        let start = Instant::now();
        let solution = Solver::default()
            .solve_boards(board(&ONE_MOVE_INITIAL), &board(&ONE_MOVE_GOAL))
            .unwrap();
        assert!(solution.elapsed <= start.elapsed());
    }

    #[test]
    fn search_start_is_logged_once() {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            solve(&ONE_MOVE_INITIAL, &ONE_MOVE_GOAL, HeuristicName::Manhattan).unwrap();
        });
        let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        assert_eq!(output.matches("starting search").count(), 1, "{}", output);
    }

    #[test]
    fn search_rejects_side_mismatch() {
        let result = Solver::default().search(board(&REFERENCE_INITIAL), &board(&[1, 2, 3, 0]));
        assert!(matches!(
            result,
            Err(SolveError::InvalidState {
                role: BoardRole::Goal,
                source: BoardError::SideMismatch {
                    expected: 3,
                    found: 2
                }
            })
        ));
    }

    #[test]
    fn solution_serialises_to_json() {
        let solution = solve(&ONE_MOVE_INITIAL, &ONE_MOVE_GOAL, HeuristicName::Manhattan).unwrap();
        let json = serde_json::to_value(&solution).unwrap();
        assert_eq!(json["final_state"], serde_json::json!(ONE_MOVE_GOAL));
        assert_eq!(json["plan"]["steps"], serde_json::json!(["right"]));
        assert_eq!(json["path"].as_array().map(Vec::len), Some(2));
    }
}
