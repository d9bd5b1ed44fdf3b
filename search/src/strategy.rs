use engine::{GamePosition, StateNode};

use crate::error::SearchError;

/// A depth-limited move-selection strategy for the root state's controlling
/// role.
pub trait AdversarialSearch {
    type Position: GamePosition;
    type Move;

    /// Select the best move for the root's controlling role.
    ///
    /// `Ok(None)` means the abort signal fired before a conclusion was
    /// reached; the caller must fall back to a previously completed result.
    fn best_move(
        &mut self,
        root: &StateNode<Self::Position>,
    ) -> Result<Option<Self::Move>, SearchError>;

    /// Not safe against a concurrently executing search call.
    fn set_depth(&mut self, depth: usize);

    /// Drop memoized results between independent decision episodes.
    fn clear_cache(&mut self);
}
