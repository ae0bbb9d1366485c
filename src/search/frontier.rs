//! The open list of the A* search.

use crate::search::{HeuristicValue, NodeId};
use priority_queue::PriorityQueue;
use std::cmp::Reverse;

/// Pending nodes ordered by f-value. Nodes with equal f-values come out in
/// the order they were created, i.e. by ascending [`NodeId`], which makes the
/// order of expansions, and hence the solution found, reproducible.
#[derive(Debug)]
pub struct Frontier {
    queue: PriorityQueue<NodeId, Reverse<(HeuristicValue, NodeId)>>,
}

impl Default for Frontier {
    fn default() -> Self {
        Self::new()
    }
}

impl Frontier {
    pub fn new() -> Self {
        Self {
            queue: PriorityQueue::new(),
        }
    }

    /// Adds `node_id` with the given f-value. A node is pushed at most once.
    pub fn push(&mut self, node_id: NodeId, f: HeuristicValue) {
        let previous = self.queue.push(node_id, Reverse((f, node_id)));
        debug_assert!(previous.is_none(), "Node pushed to the frontier twice");
    }

    /// Removes and returns the node with the smallest f-value, breaking ties
    /// by the smallest node id.
    pub fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop().map(|(node_id, _)| node_id)
    }

    /// The node [`Frontier::pop`] would return, without removing it.
    pub fn peek(&self) -> Option<(NodeId, HeuristicValue)> {
        self.queue
            .peek()
            .map(|(&node_id, Reverse((f, _)))| (node_id, *f))
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
