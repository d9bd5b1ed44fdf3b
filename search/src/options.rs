use anyhow::Result;
use common::Config;
use serde::{Deserialize, Serialize};

/// Move-selection configuration: an explicit value object consumed at
/// construction. Any interactive surface producing it lives outside this
/// core.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SearchOptions {
    pub strategy: String,
    pub depth: usize,
    /// Rollouts per labeling pass. Parsed here so one config scope covers
    /// move selection and label generation; consumed by the external driver
    /// that feeds the rollout labeler.
    pub example_count: usize,
}

impl Config for SearchOptions {
    fn load(config: &common::ConfigLoader) -> Result<Self> {
        Ok(Self {
            strategy: config
                .get("strategy")
                .and_then(|v| v.as_string())
                .unwrap_or_else(|| "alphabeta".to_string()),
            depth: config.get("depth").and_then(|v| v.as_usize()).unwrap_or(2),
            example_count: config
                .get("example_count")
                .and_then(|v| v.as_usize())
                .unwrap_or(200),
        })
    }
}
