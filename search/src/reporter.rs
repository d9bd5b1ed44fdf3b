use std::fmt::Debug;
use std::time::Duration;

use log::{debug, info};

/// One structured record per top-level `best_move` call, pushed to every
/// registered observer. Push-only; no acknowledgment expected.
#[derive(Clone, Debug)]
pub struct SearchReport<M> {
    pub chosen_move: M,
    pub explored_nodes: usize,
    pub expanded_nodes: usize,
    pub cache_size: usize,
    pub depth: usize,
    pub average_branching_factor: f64,
    pub duration: Duration,
}

pub trait SearchObserver<M> {
    fn on_search_complete(&self, report: &SearchReport<M>);
}

/// Bridges search reports onto the `log` facade.
pub struct LogObserver;

impl<M: Debug> SearchObserver<M> for LogObserver {
    fn on_search_complete(&self, report: &SearchReport<M>) {
        info!(
            "Move: {:?}, Explored: {}, Expanded: {}, Cache: {}, Depth: {}, ABF: {:.2}, Elapsed: {}ms",
            report.chosen_move,
            report.explored_nodes,
            report.expanded_nodes,
            report.cache_size,
            report.depth,
            report.average_branching_factor,
            report.duration.as_millis()
        );
    }
}

/// Accumulates per-call counters and emits one report per completed call.
pub struct SearchReporter<M> {
    observers: Vec<Box<dyn SearchObserver<M>>>,
    explored_nodes: usize,
    expanded_nodes: usize,
    expanded_children: usize,
    cache_hits: usize,
    terminal_visits: usize,
}

impl<M: Clone> SearchReporter<M> {
    pub fn new() -> Self {
        SearchReporter {
            observers: Vec::new(),
            explored_nodes: 0,
            expanded_nodes: 0,
            expanded_children: 0,
            cache_hits: 0,
            terminal_visits: 0,
        }
    }

    pub fn add_observer(&mut self, observer: Box<dyn SearchObserver<M>>) {
        self.observers.push(observer);
    }

    pub fn explore_node(&mut self) {
        self.explored_nodes += 1;
    }

    pub fn expand_node(&mut self, children: usize) {
        self.expanded_nodes += 1;
        self.expanded_children += children;
    }

    pub fn cache_hit(&mut self) {
        self.cache_hits += 1;
    }

    pub fn visit_terminal(&mut self) {
        self.terminal_visits += 1;
    }

    pub fn report_and_reset(
        &mut self,
        chosen_move: M,
        cache_size: usize,
        depth: usize,
        duration: Duration,
    ) {
        let average_branching_factor = if self.expanded_nodes == 0 {
            0.0
        } else {
            self.expanded_children as f64 / self.expanded_nodes as f64
        };

        let report = SearchReport {
            chosen_move,
            explored_nodes: self.explored_nodes,
            expanded_nodes: self.expanded_nodes,
            cache_size,
            depth,
            average_branching_factor,
            duration,
        };

        debug!(
            "cache hits: {}, terminal visits: {}",
            self.cache_hits, self.terminal_visits
        );

        for observer in &self.observers {
            observer.on_search_complete(&report);
        }

        self.explored_nodes = 0;
        self.expanded_nodes = 0;
        self.expanded_children = 0;
        self.cache_hits = 0;
        self.terminal_visits = 0;
    }
}

impl<M: Clone> Default for SearchReporter<M> {
    fn default() -> Self {
        Self::new()
    }
}
