use crate::search::{
    board_packer::{BoardPacker, PackedBoard},
    Board, Direction, HeuristicValue, NodeId, Plan, SearchNode, NO_NODE,
};
use segvec::{Linear, SegVec};
use std::collections::HashMap;

/// A [`SearchSpace`] is the append-only table of every node generated during
/// one search. It doubles as the duplicate detection store: a board is
/// registered under its packed encoding when its node is appended, and is
/// never appended again.
#[derive(Debug)]
pub struct SearchSpace {
    root_node_id: NodeId,
    nodes: SegVec<SearchNode, Linear>,
    states: SegVec<Board, Linear>,
    registered_states: HashMap<PackedBoard, NodeId>,
    packer: BoardPacker,
}

impl SearchSpace {
    /// Creates a search space holding only the root node for
    /// `initial_state`.
    pub fn new(initial_state: Board, h: HeuristicValue) -> Self {
        let packer = BoardPacker::new(initial_state.side());
        let mut space = Self {
            root_node_id: NodeId::new(0),
            nodes: SegVec::new(),
            states: SegVec::new(),
            registered_states: HashMap::new(),
            packer,
        };
        let root_node = SearchNode::new_root(space.next_node_id(), h);
        space.insert(root_node, initial_state);
        space
    }

    fn next_node_id(&self) -> NodeId {
        NodeId::new(self.nodes.len())
    }

    fn insert(&mut self, node: SearchNode, state: Board) -> NodeId {
        let node_id = node.get_node_id();
        debug_assert_eq!(node_id, self.next_node_id());
        let previous = self
            .registered_states
            .insert(self.packer.pack(&state), node_id);
        debug_assert!(previous.is_none(), "State registered twice");
        self.nodes.push(node);
        self.states.push(state);
        node_id
    }

    /// Appends a new node for `state`, reached from `parent_id` by moving the
    /// blank in `direction`. The caller must have checked that `state` is not
    /// already in the search space.
    pub fn append(
        &mut self,
        state: Board,
        parent_id: NodeId,
        direction: Direction,
        g: usize,
        h: HeuristicValue,
    ) -> NodeId {
        let node = SearchNode::new_with_parent(self.next_node_id(), parent_id, direction, g, h);
        self.insert(node, state)
    }

    /// Whether any node, expanded or not, holds `state`.
    pub fn contains(&self, state: &Board) -> bool {
        self.registered_states
            .contains_key(&self.packer.pack(state))
    }

    /// The node holding `state`, if there is one.
    pub fn find(&self, state: &Board) -> Option<NodeId> {
        self.registered_states.get(&self.packer.pack(state)).copied()
    }

    /// The boards from the root to `node_id`, both included.
    pub fn reconstruct_path(&self, node_id: NodeId) -> Vec<Board> {
        let mut path = vec![];
        let mut current_id = node_id;
        while NO_NODE != current_id {
            path.push(self.get_state(current_id).clone());
            current_id = self.get_node(current_id).get_parent_id();
        }
        path.reverse();
        path
    }

    /// The moves leading from the root to `node_id`.
    pub fn extract_plan(&self, node_id: NodeId) -> Plan {
        let mut steps = vec![];
        let mut current_node = self.get_node(node_id);
        while NO_NODE != current_node.get_parent_id() {
            if let Some(direction) = current_node.get_direction() {
                steps.push(direction);
            }
            current_node = self.get_node(current_node.get_parent_id());
        }
        steps.reverse();
        Plan::new(steps)
    }

    #[inline(always)]
    pub fn get_root_node(&self) -> &SearchNode {
        self.get_node(self.root_node_id)
    }

    #[inline(always)]
    pub fn get_node(&self, node_id: NodeId) -> &SearchNode {
        self.nodes.get(node_id.id()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_node_mut(&mut self, node_id: NodeId) -> &mut SearchNode {
        self.nodes.get_mut(node_id.id()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_state(&self, node_id: NodeId) -> &Board {
        self.states.get(node_id.id()).expect("Invalid node id")
    }

    /// All stored boards, in insertion order.
    pub fn states(&self) -> impl Iterator<Item = &Board> + '_ {
        (0..self.states.len()).map(|i| self.get_state(NodeId::new(i)))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchNodeStatus;
    use crate::test_utils::*;

    fn h(value: f64) -> HeuristicValue {
        value.into()
    }

    #[test]
    fn root_is_registered() {
        let initial = board(&REFERENCE_INITIAL);
        let space = SearchSpace::new(initial.clone(), h(18.));
        assert_eq!(space.len(), 1);
        assert!(space.contains(&initial));
        assert!(!space.contains(&board(&REFERENCE_GOAL)));

        let root = space.get_root_node();
        assert_eq!(root.get_node_id(), NodeId::new(0));
        assert_eq!(root.get_parent_id(), NO_NODE);
        assert_eq!(root.get_g(), 0);
        assert_eq!(root.get_status(), SearchNodeStatus::Open);
        assert_eq!(space.find(&initial), Some(NodeId::new(0)));
    }

    #[test]
    fn append_assigns_sequential_ids() {
        let initial = board(&REFERENCE_INITIAL);
        let mut space = SearchSpace::new(initial.clone(), h(0.));
        let root_id = space.get_root_node().get_node_id();

        let left = initial.apply(Direction::Left).unwrap();
        let right = initial.apply(Direction::Right).unwrap();
        let left_id = space.append(left.clone(), root_id, Direction::Left, 1, h(0.));
        let right_id = space.append(right.clone(), root_id, Direction::Right, 1, h(0.));

        assert_eq!(left_id, NodeId::new(1));
        assert_eq!(right_id, NodeId::new(2));
        assert!(left_id < right_id);
        assert!(space.contains(&left));
        assert!(space.contains(&right));
        assert_eq!(space.get_state(right_id), &right);
        assert_eq!(space.get_node(left_id).get_parent_id(), root_id);
        assert_eq!(space.states().count(), 3);
    }

    #[test]
    fn reconstruct_path_and_plan() {
        let initial = board(&REFERENCE_INITIAL);
        let mut space = SearchSpace::new(initial.clone(), h(0.));
        let root_id = space.get_root_node().get_node_id();

        let first = initial.apply(Direction::Up).unwrap();
        let second = first.apply(Direction::Left).unwrap();
        let first_id = space.append(first.clone(), root_id, Direction::Up, 1, h(0.));
        let second_id = space.append(second.clone(), first_id, Direction::Left, 2, h(0.));

        assert_eq!(
            space.reconstruct_path(second_id),
            vec![initial.clone(), first, second]
        );
        assert_eq!(space.reconstruct_path(root_id), vec![initial]);
        assert_eq!(
            space.extract_plan(second_id).steps(),
            &[Direction::Up, Direction::Left]
        );
        assert!(space.extract_plan(root_id).is_empty());
    }

    #[test]
    fn f_value_is_g_plus_h() {
        let initial = board(&REFERENCE_INITIAL);
        let mut space = SearchSpace::new(initial.clone(), h(3.5));
        let root_id = space.get_root_node().get_node_id();
        let child = initial.apply(Direction::Down).unwrap();
        let child_id = space.append(child, root_id, Direction::Down, 1, h(2.));
        assert_eq!(space.get_root_node().get_f(), h(3.5));
        assert_eq!(space.get_node(child_id).get_f(), h(3.));
    }
}
