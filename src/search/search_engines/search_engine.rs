use crate::search::{NodeId, SearchSpace, SearchStatistics};
use strum_macros::EnumIs;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIs)]
pub enum SearchResult {
    /// The search reached the goal, stored at the given node
    Success(NodeId),
    /// The goal cannot be reached, either by the parity check or because
    /// every reachable state was generated
    ProvablyUnsolvable,
    /// The search expanded as many nodes as it was allowed to
    ExpansionLimitExceeded,
    /// The search ran out of time
    TimeLimitExceeded,
    /// The search ran out of memory
    MemoryLimitExceeded,
}

/// Everything a finished search leaves behind. The search space is kept so
/// that callers can reconstruct paths or inspect the generated nodes.
#[derive(Debug)]
pub struct SearchOutcome {
    pub(crate) result: SearchResult,
    pub(crate) statistics: SearchStatistics,
    pub(crate) search_space: SearchSpace,
    pub(crate) expansion_order: Vec<NodeId>,
}

impl SearchOutcome {
    pub fn result(&self) -> SearchResult {
        self.result
    }

    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    pub fn search_space(&self) -> &SearchSpace {
        &self.search_space
    }

    /// The nodes in the order they were expanded.
    pub fn expansion_order(&self) -> &[NodeId] {
        &self.expansion_order
    }
}
