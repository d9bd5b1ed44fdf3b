use std::collections::HashMap;

use classifier::StateClassifier;
use engine::{GameModel, Role};

use crate::alpha_beta::AlphaBeta;
use crate::error::SearchError;
use crate::minmax::MinMax;
use crate::options::SearchOptions;
use crate::strategy::AdversarialSearch;

pub type BoxedSearch<'a, E> = Box<
    dyn AdversarialSearch<Position = <E as GameModel>::Position, Move = <E as GameModel>::Move>
        + 'a,
>;

type Constructor<'a, E, C> = Box<dyn Fn(&'a E, Role, &'a C, usize) -> BoxedSearch<'a, E>>;

/// Maps a stable strategy key to a constructor. Populated by an explicit
/// list at startup; there is no implementation scanning.
pub struct StrategyRegistry<'a, E, C>
where
    E: GameModel,
    C: StateClassifier<Position = E::Position>,
{
    constructors: HashMap<String, Constructor<'a, E, C>>,
}

impl<'a, E, C> StrategyRegistry<'a, E, C>
where
    E: GameModel + 'a,
    C: StateClassifier<Position = E::Position> + 'a,
{
    pub fn new() -> Self {
        StrategyRegistry {
            constructors: HashMap::new(),
        }
    }

    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register("minmax", |model, max_role, classifier, depth| {
            let mut search = MinMax::new(model, max_role, classifier);
            search.set_depth(depth);
            Box::new(search)
        });

        registry.register("alphabeta", |model, max_role, classifier, depth| {
            let mut search = AlphaBeta::new(model, max_role, classifier);
            search.set_depth(depth);
            Box::new(search)
        });

        registry
    }

    pub fn register(
        &mut self,
        key: &str,
        constructor: impl Fn(&'a E, Role, &'a C, usize) -> BoxedSearch<'a, E> + 'static,
    ) {
        self.constructors.insert(key.to_string(), Box::new(constructor));
    }

    pub fn create(
        &self,
        key: &str,
        model: &'a E,
        max_role: Role,
        classifier: &'a C,
        depth: usize,
    ) -> Result<BoxedSearch<'a, E>, SearchError> {
        let constructor = self
            .constructors
            .get(key)
            .ok_or_else(|| SearchError::UnknownStrategy(key.to_string()))?;

        Ok(constructor(model, max_role, classifier, depth))
    }

    pub fn create_from_options(
        &self,
        options: &SearchOptions,
        model: &'a E,
        max_role: Role,
        classifier: &'a C,
    ) -> Result<BoxedSearch<'a, E>, SearchError> {
        self.create(&options.strategy, model, max_role, classifier, options.depth)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + use<'_, 'a, E, C> {
        self.constructors.keys().map(|key| key.as_str())
    }
}

impl<'a, E, C> Default for StrategyRegistry<'a, E, C>
where
    E: GameModel + 'a,
    C: StateClassifier<Position = E::Position> + 'a,
{
    fn default() -> Self {
        Self::new()
    }
}
