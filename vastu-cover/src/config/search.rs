//! Path search configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::search::TargetPolicy;

/// Per-region path search settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchSection {
    /// Fraction of free cells after which backtracking switches from
    /// moving away from the target to converging on it
    #[serde(default = "defaults::hamilton_threshold")]
    pub hamilton_threshold: f64,

    /// Maximum cells pushed by the backtracking search before giving up
    #[serde(default = "defaults::max_expansions")]
    pub max_expansions: usize,

    /// Use the sweep when backtracking fails to reach the target
    #[serde(default = "defaults::enabled")]
    pub fallback_on_failure: bool,

    /// What the sweep does when it cannot end on the target without
    /// dropping cells
    #[serde(default)]
    pub target_policy: TargetPolicy,
}

impl Default for SearchSection {
    fn default() -> Self {
        Self {
            hamilton_threshold: defaults::hamilton_threshold(),
            max_expansions: defaults::max_expansions(),
            fallback_on_failure: true,
            target_policy: TargetPolicy::default(),
        }
    }
}
