use std::collections::HashMap;

use engine::{GamePosition, HeuristicValue, StateNode};

use crate::classifier::{ClassificationError, StateClassifier};
use crate::training::LabeledExample;

/// Labels already known exactly bypass the regression estimate, rescaled so
/// they dominate estimates of the same sign.
const EXACT_LABEL_SCALE: f64 = 10.0;

/// A feature-weight regressor over position contents. Constructed untrained;
/// classifying before `train` completes is an error.
pub struct TableClassifier<P: GamePosition> {
    weights: HashMap<P::Feature, FeatureWeight>,
    exact_labels: HashMap<P, f64>,
    trained: bool,
}

#[derive(Default)]
struct FeatureWeight {
    label_sum: f64,
    examples: usize,
}

impl<P: GamePosition> TableClassifier<P> {
    pub fn new() -> Self {
        TableClassifier {
            weights: HashMap::new(),
            exact_labels: HashMap::new(),
            trained: false,
        }
    }

    /// Ingest a batch of exact examples. May be called repeatedly; weights
    /// accumulate across batches. An empty batch does not satisfy the
    /// training gate.
    pub fn train(&mut self, examples: &[LabeledExample<P::Feature>]) {
        for example in examples {
            for feature in &example.features {
                let weight = self.weights.entry(feature.clone()).or_default();
                weight.label_sum += example.label;
                weight.examples += 1;
            }
        }

        if !examples.is_empty() {
            self.trained = true;
        }
    }

    /// Record a position whose exact value is already known, so that
    /// classification of it never falls back to the estimate.
    pub fn note_exact(&mut self, position: P, label: f64) {
        self.exact_labels.insert(position, label);
    }

    pub fn is_trained(&self) -> bool {
        self.trained
    }

    fn estimate(&self, position: &P) -> f64 {
        let mut sum = 0.0;
        let mut known = 0usize;

        for feature in position.contents() {
            if let Some(weight) = self.weights.get(&feature) {
                sum += weight.label_sum / weight.examples as f64;
                known += 1;
            }
        }

        if known == 0 {
            0.0
        } else {
            sum / known as f64
        }
    }
}

impl<P: GamePosition> Default for TableClassifier<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: GamePosition> StateClassifier for TableClassifier<P> {
    type Position = P;

    fn classify(
        &self,
        state: &StateNode<Self::Position>,
    ) -> Result<HeuristicValue, ClassificationError> {
        if !self.trained {
            return Err(ClassificationError::Untrained);
        }

        if let Some(label) = self.exact_labels.get(state.position()) {
            return Ok(label * EXACT_LABEL_SCALE);
        }

        Ok(self.estimate(state.position()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::Role;

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    struct WordPosition(Vec<&'static str>);

    impl GamePosition for WordPosition {
        type Feature = &'static str;

        fn contents(&self) -> Vec<Self::Feature> {
            self.0.clone()
        }
    }

    fn node(words: Vec<&'static str>) -> StateNode<WordPosition> {
        StateNode::new(WordPosition(words), 0, Role(0))
    }

    #[test]
    fn test_untrained_classifier_is_an_error() {
        let classifier = TableClassifier::<WordPosition>::new();

        let result = classifier.classify(&node(vec!["a"]));

        assert!(matches!(result, Err(ClassificationError::Untrained)));
    }

    #[test]
    fn test_empty_batch_does_not_satisfy_the_training_gate() {
        let mut classifier = TableClassifier::<WordPosition>::new();

        classifier.train(&[]);
        assert!(!classifier.is_trained());
        assert!(matches!(
            classifier.classify(&node(vec!["a"])),
            Err(ClassificationError::Untrained)
        ));

        classifier.train(&[LabeledExample::new(vec!["a"], 10.0)]);
        assert!(classifier.is_trained());
        assert_eq!(classifier.classify(&node(vec!["a"])).unwrap(), 10.0);
    }

    #[test]
    fn test_trained_classifier_averages_feature_weights() {
        let mut classifier = TableClassifier::<WordPosition>::new();
        classifier.train(&[
            LabeledExample::new(vec!["a"], 10.0),
            LabeledExample::new(vec!["b"], -10.0),
        ]);

        let value = classifier.classify(&node(vec!["a", "b"])).unwrap();

        assert_eq!(value, 0.0);
    }

    #[test]
    fn test_unknown_features_classify_to_zero() {
        let mut classifier = TableClassifier::<WordPosition>::new();
        classifier.train(&[LabeledExample::new(vec!["a"], 10.0)]);

        let value = classifier.classify(&node(vec!["z"])).unwrap();

        assert_eq!(value, 0.0);
    }

    #[test]
    fn test_exact_label_bypasses_estimate() {
        let mut classifier = TableClassifier::<WordPosition>::new();
        classifier.train(&[LabeledExample::new(vec!["a"], 1.0)]);
        classifier.note_exact(WordPosition(vec!["a"]), 7.0);

        let value = classifier.classify(&node(vec!["a"])).unwrap();

        assert_eq!(value, 70.0);
    }
}
