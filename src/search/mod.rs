pub mod board;
mod board_packer;
pub mod config;
mod frontier;
pub mod heuristics;
pub mod moves;
mod plan;
pub mod scramble;
mod search_engines;
mod search_node;
mod search_space;
pub mod solvability;
mod solver;
pub mod validate;
mod verbosity;

pub use board::{Board, BoardError, Tile, BLANK};
pub use board_packer::{BoardPacker, PackedBoard};
pub use config::{ConfigError, SolverConfig};
pub use frontier::Frontier;
pub use heuristics::{Heuristic, HeuristicName, HeuristicValue};
pub use moves::Direction;
pub use plan::{Plan, PlanError};
pub use search_engines::{
    SearchLimits, SearchOutcome, SearchResult, SearchStatistics, TerminationCondition,
};
pub use search_node::{NodeId, SearchNode, SearchNodeStatus, NO_NODE};
pub use search_space::SearchSpace;
pub use solver::{solve, BoardRole, Solution, SolveError, Solver};
pub use validate::ValidationError;
pub use verbosity::Verbosity;
