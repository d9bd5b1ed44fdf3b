use std::collections::{BTreeMap, HashMap, HashSet};

use classifier::LabeledExample;
use engine::{goal_difference, GameModel, GamePosition, ModelError, Role, StateNode};

use crate::report::{RolloutObserver, RolloutReport};

/// Manufactures exact supervised labels without expanding the whole game
/// tree: sample a random playout, label its terminal tail with the unscaled
/// goal difference, then induce labels backward through the trace.
///
/// A state is labeled only once every child reachable through the full
/// transition relation carries a label, so every emitted label is ground
/// truth rather than a bootstrapped estimate. The label map and the feature
/// vocabulary persist across rollouts and grow until `reset`.
pub struct RolloutLabeler<'a, E>
where
    E: GameModel,
{
    model: &'a E,
    max_role: Role,
    min_role: Role,
    labels: HashMap<E::Position, f64>,
    vocabulary: HashSet<<E::Position as GamePosition>::Feature>,
    observers: Vec<Box<dyn RolloutObserver>>,
}

impl<'a, E> RolloutLabeler<'a, E>
where
    E: GameModel,
{
    pub fn new(model: &'a E) -> Self {
        let [max_role, min_role] = model.roles();

        RolloutLabeler {
            model,
            max_role,
            min_role,
            labels: HashMap::new(),
            vocabulary: HashSet::new(),
            observers: Vec::new(),
        }
    }

    pub fn add_observer(&mut self, observer: Box<dyn RolloutObserver>) {
        self.observers.push(observer);
    }

    /// Sample one playout from `root` and propagate labels backward through
    /// it. Labels completed before a model failure remain valid.
    pub fn rollout(
        &mut self,
        root: &StateNode<E::Position>,
    ) -> Result<RolloutReport, ModelError> {
        let trace = self.sample_trace(root)?;
        self.label_trace(&trace)?;

        let report = RolloutReport {
            discovered_states: trace.len(),
            labeled_states: self.labels.len(),
            vocabulary_size: self.vocabulary.len(),
            label_histogram: self.label_histogram(),
        };

        for observer in &self.observers {
            observer.on_rollout_complete(&report);
        }

        Ok(report)
    }

    /// The current exact examples, one per labeled position.
    pub fn labeled_examples(&self) -> Vec<LabeledExample<<E::Position as GamePosition>::Feature>> {
        self.labels
            .iter()
            .map(|(position, &label)| LabeledExample::new(position.contents(), label))
            .collect()
    }

    pub fn label(&self, position: &E::Position) -> Option<f64> {
        self.labels.get(position).copied()
    }

    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    pub fn vocabulary(&self) -> &HashSet<<E::Position as GamePosition>::Feature> {
        &self.vocabulary
    }

    pub fn reset(&mut self) {
        self.labels.clear();
        self.vocabulary.clear();
    }

    /// Random walk from `root` until a terminal position, an already-labeled
    /// position, or a position already on this trace. The trace is
    /// duplicate-free; a revisit ends the walk at the state before it.
    fn sample_trace(
        &mut self,
        root: &StateNode<E::Position>,
    ) -> Result<Vec<StateNode<E::Position>>, ModelError> {
        let mut trace = Vec::new();
        let mut seen = HashSet::new();
        let mut current = root.clone();

        loop {
            self.note_contents(current.position());
            seen.insert(current.position().clone());

            let stop = self.model.is_terminal(current.position())
                || self.labels.contains_key(current.position());
            trace.push(current.clone());
            if stop {
                break;
            }

            let next = self.model.random_next_position(current.position())?;
            if seen.contains(&next) {
                break;
            }

            let next_role = self.opponent(current.controlling_role());
            current = current.child(next, next_role);
        }

        Ok(trace)
    }

    /// Walk the trace backward, labeling each state whose children are all
    /// labeled. One unlabeled child stops the pass; shallower states wait
    /// for a future rollout.
    fn label_trace(&mut self, trace: &[StateNode<E::Position>]) -> Result<(), ModelError> {
        for state in trace.iter().rev() {
            if self.labels.contains_key(state.position()) {
                continue;
            }

            if self.model.is_terminal(state.position()) {
                let label = goal_difference(self.model, state.position())?;
                self.labels.insert(state.position().clone(), label);
                continue;
            }

            match self.induced_label(state)? {
                Some(label) => {
                    self.labels.insert(state.position().clone(), label);
                }
                None => break,
            }
        }

        Ok(())
    }

    /// The extremal child label from the controlling role's perspective, or
    /// `None` when any child is still unlabeled. Terminal children are
    /// labeled on the fly. Ties keep the first-discovered child.
    fn induced_label(
        &mut self,
        state: &StateNode<E::Position>,
    ) -> Result<Option<f64>, ModelError> {
        let role = state.controlling_role();
        let children = self.model.next_positions(state.position(), role)?;
        let maximizing = role == self.max_role;

        let mut best: Option<f64> = None;
        for (_, child) in children {
            let label = match self.labels.get(&child) {
                Some(&label) => label,
                None if self.model.is_terminal(&child) => {
                    let label = goal_difference(self.model, &child)?;
                    self.note_contents(&child);
                    self.labels.insert(child, label);
                    label
                }
                None => return Ok(None),
            };

            let better = match best {
                None => true,
                Some(best) => {
                    if maximizing {
                        label > best
                    } else {
                        label < best
                    }
                }
            };
            if better {
                best = Some(label);
            }
        }

        Ok(best)
    }

    fn note_contents(&mut self, position: &E::Position) {
        for feature in position.contents() {
            self.vocabulary.insert(feature);
        }
    }

    fn opponent(&self, role: Role) -> Role {
        if role == self.max_role {
            self.min_role
        } else {
            self.max_role
        }
    }

    fn label_histogram(&self) -> BTreeMap<i64, usize> {
        let mut histogram = BTreeMap::new();
        for &label in self.labels.values() {
            *histogram.entry(label as i64).or_insert(0) += 1;
        }
        histogram
    }
}
