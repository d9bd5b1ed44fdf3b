use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use classifier::StateClassifier;
use engine::{terminal_value, GameModel, Role, StateNode};

use crate::cache::{CacheLookup, SearchCache};
use crate::entry::SearchEntry;
use crate::error::{SearchError, Unwind};
use crate::reporter::{SearchObserver, SearchReporter};
use crate::strategy::AdversarialSearch;

pub const DEFAULT_SEARCH_DEPTH: usize = 2;

/// Full-width depth-limited minmax, memoized by position only (not depth).
///
/// Before a position is expanded the cache records an in-progress sentinel;
/// a path that re-enters a position whose sentinel is still pending returns
/// no conclusion instead of recursing, which bounds the recursion at the
/// cost of potentially suboptimal play through such an edge. The parent
/// scores a no-conclusion edge with the classifier's estimate, so a move
/// into an in-progress position remains selectable on heuristic merit.
pub struct MinMax<'a, E, C>
where
    E: GameModel,
    C: StateClassifier<Position = E::Position>,
{
    model: &'a E,
    classifier: &'a C,
    max_role: Role,
    min_role: Role,
    search_depth: usize,
    cache: SearchCache<E::Position, E::Move>,
    reporter: SearchReporter<E::Move>,
    abort: Arc<AtomicBool>,
}

impl<'a, E, C> MinMax<'a, E, C>
where
    E: GameModel,
    C: StateClassifier<Position = E::Position>,
{
    pub fn new(model: &'a E, max_role: Role, classifier: &'a C) -> Self {
        let [first, second] = model.roles();
        let min_role = if first == max_role { second } else { first };

        MinMax {
            model,
            classifier,
            max_role,
            min_role,
            search_depth: DEFAULT_SEARCH_DEPTH,
            cache: SearchCache::new(),
            reporter: SearchReporter::new(),
            abort: Arc::new(AtomicBool::new(false)),
        }
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

    fn minmax_value(
        &mut self,
        state: &StateNode<E::Position>,
        depth: i32,
    ) -> Result<Option<SearchEntry<E::Move>>, Unwind> {
        if self.abort.load(Ordering::Relaxed) {
            return Err(Unwind::Cancelled);
        }

        self.reporter.explore_node();

        match self.cache.lookup(state.position()) {
            CacheLookup::Hit(entry) => {
                let entry = entry.clone();
                self.reporter.cache_hit();
                return Ok(Some(entry));
            }
            CacheLookup::Pending => return Ok(None),
            CacheLookup::Miss => {}
        }

        if self.model.is_terminal(state.position()) {
            self.reporter.visit_terminal();
            let value = terminal_value(self.model, state.position())?;
            let entry = SearchEntry::terminal(value);
            self.cache.put(state.position().clone(), entry.clone());
            return Ok(Some(entry));
        }

        if depth <= 0 {
            let entry = SearchEntry::heuristic(self.classifier.classify(state)?);
            self.cache.put(state.position().clone(), entry.clone());
            return Ok(Some(entry));
        }

        let controlling = state.controlling_role();
        let maximizing = if controlling == self.max_role {
            true
        } else if controlling == self.min_role {
            false
        } else {
            return Err(SearchError::RoleMismatch(controlling).into());
        };

        self.cache.mark_pending(state.position().clone());

        match self.extremal_move(state, depth, maximizing) {
            Ok(entry) => {
                self.cache.put(state.position().clone(), entry.clone());
                Ok(Some(entry))
            }
            Err(unwind) => {
                // Never leave an in-progress marker behind on unwind.
                self.cache.remove(state.position());
                Err(unwind)
            }
        }
    }

    fn extremal_move(
        &mut self,
        state: &StateNode<E::Position>,
        depth: i32,
        maximizing: bool,
    ) -> Result<SearchEntry<E::Move>, Unwind> {
        let (role, next_role) = if maximizing {
            (self.max_role, self.min_role)
        } else {
            (self.min_role, self.max_role)
        };

        let children = self.model.next_positions(state.position(), role)?;
        self.reporter.expand_node(children.len());

        let mut best: Option<(f64, E::Move)> = None;
        for (mv, position) in children {
            let child = state.child(position, next_role);

            let value = match self.minmax_value(&child, depth - 1)? {
                Some(entry) => entry.value(),
                // The edge re-entered an in-progress ancestor and yielded no
                // conclusion; substitute the heuristic estimate so the
                // search stays bounded.
                None => self.classifier.classify(&child)?,
            };

            let better = match &best {
                None => true,
                Some((best_value, _)) => {
                    if maximizing {
                        value > *best_value
                    } else {
                        value < *best_value
                    }
                }
            };

            if better {
                best = Some((value, mv));
            }
        }

        let (value, best_move) = best.ok_or(SearchError::Inconclusive)?;
        Ok(SearchEntry::exact(value, best_move, depth))
    }
}

impl<'a, E, C> AdversarialSearch for MinMax<'a, E, C>
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

        match self.minmax_value(root, self.search_depth as i32) {
            Ok(Some(entry)) => {
                let chosen = entry.best_move.ok_or(SearchError::Inconclusive)?;
                self.reporter.report_and_reset(
                    chosen.clone(),
                    self.cache.len(),
                    self.search_depth,
                    started.elapsed(),
                );
                Ok(Some(chosen))
            }
            Ok(None) => Err(SearchError::Inconclusive),
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
