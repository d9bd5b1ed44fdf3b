use std::collections::BTreeMap;

use log::info;

/// Snapshot pushed to every registered observer after each completed
/// rollout. Counters are cumulative over the labeler's lifetime except
/// `discovered_states`, which covers the rollout just finished.
#[derive(Clone, Debug)]
pub struct RolloutReport {
    pub discovered_states: usize,
    pub labeled_states: usize,
    pub vocabulary_size: usize,
    pub label_histogram: BTreeMap<i64, usize>,
}

pub trait RolloutObserver {
    fn on_rollout_complete(&self, report: &RolloutReport);
}

/// Bridges rollout reports onto the `log` facade.
pub struct LogRolloutObserver;

impl RolloutObserver for LogRolloutObserver {
    fn on_rollout_complete(&self, report: &RolloutReport) {
        info!(
            "Discovered: {}, Labeled: {}, Vocabulary: {}, Labels: {:?}",
            report.discovered_states,
            report.labeled_states,
            report.vocabulary_size,
            report.label_histogram
        );
    }
}
