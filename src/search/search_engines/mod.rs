mod astar;
mod search_engine;
mod search_statistics;
mod termination_condition;

pub(crate) use astar::AStar;
pub use search_engine::{SearchOutcome, SearchResult};
pub use search_statistics::SearchStatistics;
pub use termination_condition::{SearchLimits, TerminationCondition};
