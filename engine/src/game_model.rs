use std::fmt::Debug;

use thiserror::Error;

use crate::position::{GamePosition, Role};

/// A rules/transition lookup failed. Signals malformed rules, not a
/// transient fault; propagated, never retried.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("no legal moves defined for role {role:?}: {reason}")]
    Move { role: Role, reason: String },

    #[error("undefined transition: {0}")]
    Transition(String),

    #[error("goal undefined for role {role:?}: {reason}")]
    Goal { role: Role, reason: String },
}

/// The external rules/transition capability consumed by the search and
/// rollout components. Assumed total on a well-formed non-terminal position.
pub trait GameModel {
    type Position: GamePosition;
    type Move: Clone + Eq + Debug;

    /// The two competing roles, in declaration order.
    fn roles(&self) -> [Role; 2];

    fn is_terminal(&self, position: &Self::Position) -> bool;

    /// Ordered mapping of the legal moves for `role` to their successor
    /// positions. Enumeration order is stable and drives tie-breaking.
    fn next_positions(
        &self,
        position: &Self::Position,
        role: Role,
    ) -> Result<Vec<(Self::Move, Self::Position)>, ModelError>;

    /// Per-role integer utility, defined only at terminal positions.
    fn goal(&self, position: &Self::Position, role: Role) -> Result<i32, ModelError>;

    /// Sample one successor of a non-terminal position.
    fn random_next_position(
        &self,
        position: &Self::Position,
    ) -> Result<Self::Position, ModelError>;
}
