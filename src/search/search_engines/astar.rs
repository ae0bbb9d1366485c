//! This module implements the A* search algorithm over sliding-tile boards.

use crate::search::{
    moves::successors,
    search_engines::{
        SearchLimits, SearchOutcome, SearchResult, SearchStatistics, TerminationCondition,
    },
    solvability::is_solvable,
    Board, Frontier, Heuristic, HeuristicValue, SearchSpace,
};
use tracing::{debug, info, trace};

/// A* search. Nodes are expanded in order of increasing f-value, ties going
/// to the node generated first. Every generated state is recorded and never
/// generated again, and the search stops as soon as the goal is generated.
///
/// Callers outside the crate go through [`crate::search::Solver`], which
/// rejects boards of different sides before searching.
#[derive(Debug)]
pub(crate) struct AStar {
    heuristic: Box<dyn Heuristic>,
    limits: SearchLimits,
    check_solvability: bool,
}

impl AStar {
    pub fn new(heuristic: Box<dyn Heuristic>) -> Self {
        Self {
            heuristic,
            limits: SearchLimits::default(),
            check_solvability: true,
        }
    }

    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Whether to run the parity check before searching. Without it, an
    /// unsolvable instance is only detected once every reachable state has
    /// been generated.
    pub fn with_solvability_check(mut self, check_solvability: bool) -> Self {
        self.check_solvability = check_solvability;
        self
    }

    /// Searches for `goal` starting from `initial`. Both boards must have the
    /// same side, and the heuristic must have been built for `goal`.
    pub fn search(&mut self, initial: Board, goal: &Board) -> SearchOutcome {
        debug_assert_eq!(initial.side(), goal.side());
        let mut statistics = SearchStatistics::new();

        if initial.is_goal(goal) {
            info!("initial state is the goal");
            let search_space = SearchSpace::new(initial, HeuristicValue::from(0.));
            let root_id = search_space.get_root_node().get_node_id();
            statistics.increment_generated_nodes(1);
            statistics.finalise_search();
            return SearchOutcome {
                result: SearchResult::Success(root_id),
                statistics,
                search_space,
                expansion_order: vec![],
            };
        }

        let root_h = self.heuristic.evaluate(&initial);
        statistics.increment_evaluated_nodes(1);
        let solvable = !self.check_solvability || is_solvable(&initial, goal);
        let mut search_space = SearchSpace::new(initial, root_h);
        statistics.increment_generated_nodes(1);

        if !solvable {
            info!("parity check failed, the goal is unreachable");
            statistics.finalise_search();
            return SearchOutcome {
                result: SearchResult::ProvablyUnsolvable,
                statistics,
                search_space,
                expansion_order: vec![],
            };
        }

        let mut termination_condition = TerminationCondition::new(self.limits);
        let mut frontier = Frontier::new();
        let mut expansion_order = vec![];
        let root_node = search_space.get_root_node();
        frontier.push(root_node.get_node_id(), root_node.get_f());
        info!(initial_heuristic_value = root_h.into_inner());

        let result = loop {
            if let Some(result) =
                termination_condition.should_terminate(statistics.expanded_nodes())
            {
                info!(?result, "search limit reached");
                break result;
            }
            let Some(node_id) = frontier.pop() else {
                info!("frontier exhausted, the goal is unreachable");
                break SearchResult::ProvablyUnsolvable;
            };

            let node = search_space.get_node_mut(node_id);
            node.close();
            let child_g = node.get_g() + 1;
            let h_value = node.get_h();
            trace!(node = node_id.id(), f = node.get_f().into_inner(), "expanding");
            statistics.increment_expanded_nodes();
            statistics.register_heuristic_value(h_value);
            expansion_order.push(node_id);

            let mut new_directions = Vec::new();
            let mut new_states = Vec::new();
            for (direction, successor) in successors(search_space.get_state(node_id)) {
                if search_space.contains(&successor) {
                    statistics.increment_duplicate_nodes(1);
                } else {
                    new_directions.push(direction);
                    new_states.push(successor);
                }
            }

            let h_values = self.heuristic.evaluate_batch(&new_states);
            statistics.increment_evaluated_nodes(new_states.len());

            let mut goal_id = None;
            for ((direction, successor), h_value) in new_directions
                .into_iter()
                .zip(new_states)
                .zip(h_values)
            {
                let is_goal = successor.is_goal(goal);
                let child_id = search_space.append(successor, node_id, direction, child_g, h_value);
                statistics.increment_generated_nodes(1);
                frontier.push(child_id, search_space.get_node(child_id).get_f());
                if is_goal {
                    goal_id = Some(child_id);
                    break;
                }
            }

            if let Some(goal_id) = goal_id {
                debug!(goal_node = goal_id.id(), g = child_g, "goal generated");
                break SearchResult::Success(goal_id);
            }
            termination_condition.log_if_needed();
        };

        termination_condition.finalise();
        statistics.finalise_search();
        SearchOutcome {
            result,
            statistics,
            search_space,
            expansion_order,
        }
    }
}
