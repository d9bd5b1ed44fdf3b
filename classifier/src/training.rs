use serde::{Deserialize, Serialize};

/// One supervised training example: the content features of a position and
/// its exact scalar label. Labels are ground truth produced by backward
/// induction, never heuristic estimates.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LabeledExample<F> {
    pub features: Vec<F>,
    pub label: f64,
}

impl<F> LabeledExample<F> {
    pub fn new(features: Vec<F>, label: f64) -> Self {
        LabeledExample { features, label }
    }
}
