use std::cmp::Ordering;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::sync::Arc;
use std::time::Instant;

use classifier::{ClassificationError, StateClassifier};
use engine::{terminal_value, GameModel, Role, StateNode};

use crate::cache::SearchCache;
use crate::entry::SearchEntry;
use crate::error::{SearchError, Unwind};
use crate::minmax::DEFAULT_SEARCH_DEPTH;
use crate::reporter::{SearchObserver, SearchReporter};
use crate::strategy::AdversarialSearch;

/// Injected comparison function ordering sibling states before expansion.
/// The maximizing side expands the greatest-first, the minimizing side the
/// least-first.
pub type SortFn<'a, P> =
    Box<dyn Fn(&StateNode<P>, &StateNode<P>) -> Result<Ordering, ClassificationError> + 'a>;

/// Depth-limited alpha-beta search. Memoizes by position with a depth-aware
/// hit rule: an entry solved shallower than the requested depth is a miss,
/// recomputed, and overwritten.
pub struct AlphaBeta<'a, E, C>
where
    E: GameModel,
    C: StateClassifier<Position = E::Position>,
{
    model: &'a E,
    max_role: Role,
    min_role: Role,
    classifier: &'a C,
    search_depth: usize,
    cache: SearchCache<E::Position, E::Move>,
    reporter: SearchReporter<E::Move>,
    ordering: SortFn<'a, E::Position>,
    abort: Arc<AtomicBool>,
}

impl<'a, E, C> AlphaBeta<'a, E, C>
where
    E: GameModel,
    C: StateClassifier<Position = E::Position>,
{
    pub fn new(model: &'a E, max_role: Role, classifier: &'a C) -> Self {
        let [first, second] = model.roles();
        let min_role = if first == max_role { second } else { first };

        // Default move ordering: the classifier's own estimate.
        let ordering: SortFn<'a, E::Position> = Box::new(move |left, right| {
            let left = classifier.classify(left)?;
            let right = classifier.classify(right)?;
            Ok(left.partial_cmp(&right).unwrap_or(Ordering::Equal))
        });

        AlphaBeta {
            model,
            max_role,
            min_role,
            classifier,
            search_depth: DEFAULT_SEARCH_DEPTH,
            cache: SearchCache::new(),
            reporter: SearchReporter::new(),
            ordering,
            abort: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn with_ordering(mut self, ordering: SortFn<'a, E::Position>) -> Self {
        self.ordering = ordering;
        self
    }

    /// Handle polled at every state-expansion boundary; storing `true`
    /// makes the running call unwind and report no result.
    pub fn abort_signal(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.abort)
    }

    pub fn add_observer(&mut self, observer: Box<dyn SearchObserver<E::Move>>) {
        self.reporter.add_observer(observer);
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }

    fn alphabeta(
        &mut self,
        state: &StateNode<E::Position>,
        alpha: f64,
        beta: f64,
        depth: i32,
    ) -> Result<SearchEntry<E::Move>, Unwind> {
        if self.abort.load(AtomicOrdering::Relaxed) {
            return Err(Unwind::Cancelled);
        }

        self.reporter.explore_node();

        if let Some(entry) = self.cache.get_solved(state.position(), depth) {
            let entry = entry.clone();
            self.reporter.cache_hit();
            return Ok(entry);
        }

        let entry = if self.model.is_terminal(state.position()) {
            self.reporter.visit_terminal();
            SearchEntry::terminal(terminal_value(self.model, state.position())?)
        } else if depth <= 0 {
            SearchEntry::heuristic(self.classifier.classify(state)?)
        } else if state.controlling_role() == self.max_role {
            self.max_move(state, alpha, beta, depth)?
        } else if state.controlling_role() == self.min_role {
            self.min_move(state, alpha, beta, depth)?
        } else {
            return Err(SearchError::RoleMismatch(state.controlling_role()).into());
        };

        self.cache.put(state.position().clone(), entry.clone());
        Ok(entry)
    }

    fn max_move(
        &mut self,
        state: &StateNode<E::Position>,
        mut alpha: f64,
        beta: f64,
        depth: i32,
    ) -> Result<SearchEntry<E::Move>, Unwind> {
        let children = self.ordered_children(state, true)?;
        self.reporter.expand_node(children.len());

        let mut best: Option<SearchEntry<E::Move>> = None;
        for (mv, child) in children {
            let entry = self.alphabeta(&child, alpha, beta, depth - 1)?;

            let better = match &best {
                None => true,
                Some(best) => entry.lower > best.lower,
            };
            if better {
                best = Some(SearchEntry::bounded(
                    entry.lower,
                    entry.upper,
                    Some(mv),
                    depth,
                ));
            }

            if entry.lower > alpha {
                alpha = entry.lower;
            }
            if alpha >= beta {
                // Remaining siblings pruned: the recorded value is only a
                // lower bound.
                if let Some(best) = &mut best {
                    best.upper = f64::INFINITY;
                }
                break;
            }
        }

        best.ok_or_else(|| SearchError::Inconclusive.into())
    }

    fn min_move(
        &mut self,
        state: &StateNode<E::Position>,
        alpha: f64,
        mut beta: f64,
        depth: i32,
    ) -> Result<SearchEntry<E::Move>, Unwind> {
        let children = self.ordered_children(state, false)?;
        self.reporter.expand_node(children.len());

        let mut best: Option<SearchEntry<E::Move>> = None;
        for (mv, child) in children {
            let entry = self.alphabeta(&child, alpha, beta, depth - 1)?;

            let better = match &best {
                None => true,
                Some(best) => entry.upper < best.upper,
            };
            if better {
                best = Some(SearchEntry::bounded(
                    entry.lower,
                    entry.upper,
                    Some(mv),
                    depth,
                ));
            }

            if entry.upper < beta {
                beta = entry.upper;
            }
            if alpha >= beta {
                // Remaining siblings pruned: the recorded value is only an
                // upper bound.
                if let Some(best) = &mut best {
                    best.lower = f64::NEG_INFINITY;
                }
                break;
            }
        }

        best.ok_or_else(|| SearchError::Inconclusive.into())
    }

    fn ordered_children(
        &self,
        state: &StateNode<E::Position>,
        maximizing: bool,
    ) -> Result<Vec<(E::Move, StateNode<E::Position>)>, Unwind> {
        let (role, next_role) = if maximizing {
            (self.max_role, self.min_role)
        } else {
            (self.min_role, self.max_role)
        };

        let mut children: Vec<_> = self
            .model
            .next_positions(state.position(), role)?
            .into_iter()
            .map(|(mv, position)| (mv, state.child(position, next_role)))
            .collect();

        let ordering = &self.ordering;
        let mut sort_error = None;
        children.sort_by(|left, right| match ordering(&left.1, &right.1) {
            Ok(cmp) if maximizing => cmp.reverse(),
            Ok(cmp) => cmp,
            Err(err) => {
                sort_error.get_or_insert(err);
                Ordering::Equal
            }
        });

        if let Some(err) = sort_error {
            return Err(err.into());
        }

        Ok(children)
    }
}

impl<'a, E, C> AdversarialSearch for AlphaBeta<'a, E, C>
where
    E: GameModel,
    C: StateClassifier<Position = E::Position>,
{
    type Position = E::Position;
    type Move = E::Move;

    fn best_move(
        &mut self,
        root: &StateNode<Self::Position>,
    ) -> Result<Option<Self::Move>, SearchError> {
        let started = Instant::now();

        match self.alphabeta(
            root,
            f64::NEG_INFINITY,
            f64::INFINITY,
            self.search_depth as i32,
        ) {
            Ok(entry) => {
                let chosen = entry.best_move.ok_or(SearchError::Inconclusive)?;
                self.reporter.report_and_reset(
                    chosen.clone(),
                    self.cache.len(),
                    self.search_depth,
                    started.elapsed(),
                );
                Ok(Some(chosen))
            }
            Err(Unwind::Cancelled) => Ok(None),
            Err(Unwind::Failed(err)) => Err(err),
        }
    }

    fn set_depth(&mut self, depth: usize) {
        self.search_depth = depth;
    }

    fn clear_cache(&mut self) {
        self.cache.clear();
    }
}
