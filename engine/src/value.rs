use crate::game_model::{GameModel, ModelError};

/// A totally ordered scalar position value. Exact terminal outcomes and
/// heuristic estimates share this scale; see [`TERMINAL_SCALE`].
pub type HeuristicValue = f64;

/// Exact terminal scores are goal differences scaled by this factor, so any
/// exact outcome outranks any heuristic estimate of matching sign when the
/// two are compared within one search.
pub const TERMINAL_SCALE: f64 = 10_000.0;

/// `goal(max) - goal(min)` for a terminal position.
pub fn goal_difference<E: GameModel>(
    model: &E,
    position: &E::Position,
) -> Result<f64, ModelError> {
    let [max_role, min_role] = model.roles();
    let diff = model.goal(position, max_role)? - model.goal(position, min_role)?;
    Ok(diff as f64)
}

/// The exact search value of a terminal position.
pub fn terminal_value<E: GameModel>(
    model: &E,
    position: &E::Position,
) -> Result<HeuristicValue, ModelError> {
    Ok(goal_difference(model, position)? * TERMINAL_SCALE)
}
