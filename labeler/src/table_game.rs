use std::cell::RefCell;
use std::collections::HashMap;

use engine::{GameModel, GamePosition, ModelError, Role};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const MAX_ROLE: Role = Role(0);
pub const MIN_ROLE: Role = Role(1);

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct NodeId(pub u32);

impl GamePosition for NodeId {
    type Feature = u32;

    fn contents(&self) -> Vec<u32> {
        vec![self.0]
    }
}

/// Adjacency-table game with a seeded sampler, built per test.
pub struct TableGame {
    edges: HashMap<u32, Vec<(&'static str, u32)>>,
    goals: HashMap<u32, (i32, i32)>,
    rng: RefCell<StdRng>,
}

impl TableGame {
    pub fn new(seed: u64) -> Self {
        TableGame {
            edges: HashMap::new(),
            goals: HashMap::new(),
            rng: RefCell::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn edge(mut self, from: u32, mv: &'static str, to: u32) -> Self {
        self.edges.entry(from).or_default().push((mv, to));
        self
    }

    pub fn terminal(mut self, node: u32, max_goal: i32, min_goal: i32) -> Self {
        self.goals.insert(node, (max_goal, min_goal));
        self
    }
}

impl GameModel for TableGame {
    type Position = NodeId;
    type Move = &'static str;

    fn roles(&self) -> [Role; 2] {
        [MAX_ROLE, MIN_ROLE]
    }

    fn is_terminal(&self, position: &NodeId) -> bool {
        self.goals.contains_key(&position.0)
    }

    fn next_positions(
        &self,
        position: &NodeId,
        _role: Role,
    ) -> Result<Vec<(&'static str, NodeId)>, ModelError> {
        let edges = self
            .edges
            .get(&position.0)
            .ok_or_else(|| ModelError::Transition(format!("node {} has no edges", position.0)))?;

        Ok(edges.iter().map(|&(mv, to)| (mv, NodeId(to))).collect())
    }

    fn goal(&self, position: &NodeId, role: Role) -> Result<i32, ModelError> {
        let &(max_goal, min_goal) = self.goals.get(&position.0).ok_or(ModelError::Goal {
            role,
            reason: format!("node {} is not terminal", position.0),
        })?;

        if role == MAX_ROLE {
            Ok(max_goal)
        } else {
            Ok(min_goal)
        }
    }

    fn random_next_position(&self, position: &NodeId) -> Result<NodeId, ModelError> {
        let successors = self.next_positions(position, MAX_ROLE)?;
        if successors.is_empty() {
            return Err(ModelError::Transition(format!(
                "node {} has no successors",
                position.0
            )));
        }

        let index = self.rng.borrow_mut().gen_range(0..successors.len());
        Ok(successors[index].1)
    }
}
