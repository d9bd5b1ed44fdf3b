use engine::HeuristicValue;

/// `depth_solved` sentinel: the value is an exact terminal outcome and
/// satisfies a query at any depth.
pub const DEPTH_TERMINAL: i32 = -1;

/// `depth_solved` sentinel: the value is a heuristic-cutoff estimate and
/// satisfies only depth-0 queries.
pub const DEPTH_HEURISTIC: i32 = 0;

/// One memoized search result. `lower == upper` for exact values; they
/// diverge only when alpha-beta pruning leaves a one-sided bound.
#[derive(Clone, Debug)]
pub struct SearchEntry<M> {
    pub lower: HeuristicValue,
    pub upper: HeuristicValue,
    pub best_move: Option<M>,
    pub depth_solved: i32,
}

impl<M> SearchEntry<M> {
    pub fn terminal(value: HeuristicValue) -> Self {
        SearchEntry {
            lower: value,
            upper: value,
            best_move: None,
            depth_solved: DEPTH_TERMINAL,
        }
    }

    pub fn heuristic(value: HeuristicValue) -> Self {
        SearchEntry {
            lower: value,
            upper: value,
            best_move: None,
            depth_solved: DEPTH_HEURISTIC,
        }
    }

    pub fn exact(value: HeuristicValue, best_move: M, depth_solved: i32) -> Self {
        SearchEntry {
            lower: value,
            upper: value,
            best_move: Some(best_move),
            depth_solved,
        }
    }

    pub fn bounded(
        lower: HeuristicValue,
        upper: HeuristicValue,
        best_move: Option<M>,
        depth_solved: i32,
    ) -> Self {
        SearchEntry {
            lower,
            upper,
            best_move,
            depth_solved,
        }
    }

    /// The exact value of an entry whose bounds coincide.
    pub fn value(&self) -> HeuristicValue {
        self.lower
    }

    /// Whether this entry may be served for a query at `depth`. A shallower
    /// stored result is a miss and must be recomputed and overwritten.
    pub fn satisfies(&self, depth: i32) -> bool {
        self.depth_solved == DEPTH_TERMINAL || self.depth_solved >= depth
    }
}
