use crate::search::{Direction, HeuristicValue};

/// Identifier of a node in a [`crate::search::SearchSpace`]. Identifiers are
/// handed out in insertion order, starting from 0 for the root, so comparing
/// them compares insertion times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(id: usize) -> Self {
        Self(id)
    }

    #[inline(always)]
    pub fn id(&self) -> usize {
        self.0
    }
}

/// Parent of the root node.
pub const NO_NODE: NodeId = NodeId(usize::MAX);

/// The status of a search node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchNodeStatus {
    /// Node is in the open list
    Open,
    /// Node has been expanded
    Closed,
}

/// A [`SearchNode`] is a node in the search space. It contains information
/// about the state specific to the search, such as heuristic cost and parent
/// node. The state itself is stored separately by the search space.
#[derive(Debug, Clone)]
pub struct SearchNode {
    /// Unique identifier of the node
    node_id: NodeId,
    /// Status of the node
    status: SearchNodeStatus,
    /// G-value of the node, i.e. the number of moves from the root.
    g: usize,
    /// H-value of the node, i.e. the heuristic estimate of the number of moves
    /// to the goal. Fixed when the node is created.
    h: HeuristicValue,
    /// Move that led to this node, `None` for the root
    direction: Option<Direction>,
    /// Parent node
    parent_id: NodeId,
}

impl SearchNode {
    /// Create the root node of a search space.
    pub fn new_root(node_id: NodeId, h: HeuristicValue) -> Self {
        Self {
            node_id,
            status: SearchNodeStatus::Open,
            g: 0,
            h,
            direction: None,
            parent_id: NO_NODE,
        }
    }

    /// Create a node reached from `parent_id` by moving the blank in
    /// `direction`.
    pub fn new_with_parent(
        node_id: NodeId,
        parent_id: NodeId,
        direction: Direction,
        g: usize,
        h: HeuristicValue,
    ) -> Self {
        Self {
            node_id,
            status: SearchNodeStatus::Open,
            g,
            h,
            direction: Some(direction),
            parent_id,
        }
    }

    pub fn close(&mut self) {
        debug_assert_eq!(
            self.status,
            SearchNodeStatus::Open,
            "Node must be open to close it"
        );
        self.status = SearchNodeStatus::Closed;
    }

    pub fn get_status(&self) -> SearchNodeStatus {
        self.status
    }

    pub fn get_node_id(&self) -> NodeId {
        self.node_id
    }

    pub fn get_g(&self) -> usize {
        self.g
    }

    pub fn get_h(&self) -> HeuristicValue {
        self.h
    }

    /// F-value of the node, the sum of the g- and h-values.
    pub fn get_f(&self) -> HeuristicValue {
        self.h + self.g as f64
    }

    pub fn get_parent_id(&self) -> NodeId {
        self.parent_id
    }

    pub fn get_direction(&self) -> Option<Direction> {
        self.direction
    }
}
