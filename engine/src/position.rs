use std::fmt::Debug;
use std::hash::Hash;

/// An immutable encoding of a game position, supplied by the external rules
/// model. Equality and hashing are by content.
pub trait GamePosition: Clone + Eq + Hash + Debug {
    /// Distinct content features of this position. The rollout labeler
    /// accumulates these into a training vocabulary.
    type Feature: Clone + Eq + Hash;

    fn contents(&self) -> Vec<Self::Feature>;
}

/// One of the two competing agents.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Role(pub usize);
