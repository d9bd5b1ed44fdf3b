use classifier::{ClassificationError, StateClassifier};
use engine::{GameModel, GamePosition, HeuristicValue, ModelError, Role, StateNode};

pub const MAX_ROLE: Role = Role(0);
pub const MIN_ROLE: Role = Role(1);

/// Counter walk on `0..=100`. Either role may increment, decrement, or stay.
/// The game ends at the bounds: 100 is a win for the maximizing role, 0 a
/// win for the minimizing role.
pub struct CountingGame;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct CountingPosition {
    pub count: i32,
}

impl CountingPosition {
    pub fn new(count: i32) -> Self {
        CountingPosition { count }
    }
}

impl GamePosition for CountingPosition {
    type Feature = i32;

    fn contents(&self) -> Vec<i32> {
        vec![self.count]
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CountingMove {
    Increment,
    Decrement,
    Stay,
}

impl GameModel for CountingGame {
    type Position = CountingPosition;
    type Move = CountingMove;

    fn roles(&self) -> [Role; 2] {
        [MAX_ROLE, MIN_ROLE]
    }

    fn is_terminal(&self, position: &CountingPosition) -> bool {
        position.count <= 0 || position.count >= 100
    }

    fn next_positions(
        &self,
        position: &CountingPosition,
        _role: Role,
    ) -> Result<Vec<(CountingMove, CountingPosition)>, ModelError> {
        Ok(vec![
            (
                CountingMove::Increment,
                CountingPosition::new(position.count + 1),
            ),
            (
                CountingMove::Decrement,
                CountingPosition::new(position.count - 1),
            ),
            (CountingMove::Stay, *position),
        ])
    }

    fn goal(&self, position: &CountingPosition, role: Role) -> Result<i32, ModelError> {
        if !self.is_terminal(position) {
            return Err(ModelError::Goal {
                role,
                reason: format!("count {} is not terminal", position.count),
            });
        }

        let max_won = position.count >= 100;
        match role {
            r if r == MAX_ROLE => Ok(if max_won { 100 } else { 0 }),
            r if r == MIN_ROLE => Ok(if max_won { 0 } else { 100 }),
            r => Err(ModelError::Goal {
                role: r,
                reason: "unknown role".to_string(),
            }),
        }
    }

    fn random_next_position(
        &self,
        position: &CountingPosition,
    ) -> Result<CountingPosition, ModelError> {
        let (_, position) = self
            .next_positions(position, MAX_ROLE)?
            .into_iter()
            .next()
            .ok_or_else(|| ModelError::Transition("no successors".to_string()))?;
        Ok(position)
    }
}

/// Estimates a counting position by its count.
pub struct CountClassifier;

impl StateClassifier for CountClassifier {
    type Position = CountingPosition;

    fn classify(
        &self,
        state: &StateNode<CountingPosition>,
    ) -> Result<HeuristicValue, ClassificationError> {
        Ok(state.position().count as f64)
    }
}
