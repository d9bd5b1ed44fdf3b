use engine::{GamePosition, HeuristicValue, StateNode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassificationError {
    #[error("classifier invoked before training completed")]
    Untrained,

    #[error("values {left} and {right} cannot be totally ordered")]
    IncomparableValues { left: f64, right: f64 },

    #[error("classification failed: {0}")]
    Failed(String),
}

/// The heuristic evaluator boundary. Training happens elsewhere; the search
/// core only calls `classify`, and an untrained evaluator is an error state.
pub trait StateClassifier {
    type Position: GamePosition;

    fn classify(
        &self,
        state: &StateNode<Self::Position>,
    ) -> Result<HeuristicValue, ClassificationError>;
}

/// Total order over heuristic values for callers outside the hot search
/// loop. The search loop itself compares raw scalars directly.
pub fn is_better_value(v1: HeuristicValue, v2: HeuristicValue) -> Result<bool, ClassificationError> {
    if v1.is_nan() || v2.is_nan() {
        return Err(ClassificationError::IncomparableValues {
            left: v1,
            right: v2,
        });
    }

    Ok(v1 > v2)
}
