use std::collections::HashMap;
use std::hash::Hash;

use crate::entry::SearchEntry;

/// Outcome of a plain (depth-unaware) cache probe.
pub enum CacheLookup<'a, M> {
    Hit(&'a SearchEntry<M>),
    /// The position is being expanded further up the current call stack.
    Pending,
    Miss,
}

/// Memo table from position to a previously computed result. A `None` slot
/// is the in-progress sentinel planted before a position is expanded. One
/// instance per search strategy; never shared between strategies or calls
/// running concurrently.
pub struct SearchCache<P, M> {
    entries: HashMap<P, Option<SearchEntry<M>>>,
}

impl<P, M> SearchCache<P, M>
where
    P: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        SearchCache {
            entries: HashMap::new(),
        }
    }

    pub fn lookup(&self, position: &P) -> CacheLookup<'_, M> {
        match self.entries.get(position) {
            Some(Some(entry)) => CacheLookup::Hit(entry),
            Some(None) => CacheLookup::Pending,
            None => CacheLookup::Miss,
        }
    }

    /// Depth-aware probe: a stored entry is a hit only if it was solved at
    /// least as deep as `depth` (terminal entries satisfy any depth).
    pub fn get_solved(&self, position: &P, depth: i32) -> Option<&SearchEntry<M>> {
        match self.entries.get(position) {
            Some(Some(entry)) if entry.satisfies(depth) => Some(entry),
            _ => None,
        }
    }

    pub fn contains(&self, position: &P) -> bool {
        matches!(self.entries.get(position), Some(Some(_)))
    }

    pub fn mark_pending(&mut self, position: P) {
        self.entries.insert(position, None);
    }

    pub fn put(&mut self, position: P, entry: SearchEntry<M>) {
        self.entries.insert(position, Some(entry));
    }

    pub fn remove(&mut self, position: &P) {
        self.entries.remove(position);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<P, M> Default for SearchCache<P, M>
where
    P: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}
