use crate::position::{GamePosition, Role};

/// An immutable wrapper around a raw position plus the turn index and the
/// role in control of it. Created once per transition and never mutated.
#[derive(Clone, Debug)]
pub struct StateNode<P> {
    position: P,
    turn_number: usize,
    controlling_role: Role,
}

impl<P: GamePosition> StateNode<P> {
    pub fn new(position: P, turn_number: usize, controlling_role: Role) -> Self {
        StateNode {
            position,
            turn_number,
            controlling_role,
        }
    }

    /// Wrap a successor position: control passes to `next_role` and the
    /// turn index advances.
    pub fn child(&self, position: P, next_role: Role) -> Self {
        StateNode {
            position,
            turn_number: self.turn_number + 1,
            controlling_role: next_role,
        }
    }

    pub fn position(&self) -> &P {
        &self.position
    }

    pub fn turn_number(&self) -> usize {
        self.turn_number
    }

    pub fn controlling_role(&self) -> Role {
        self.controlling_role
    }
}
