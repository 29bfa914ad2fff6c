//! Search configuration and result types.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::GridCell;

/// What the sweep does when it passes the target before its final cell and
/// no reordering of the swept cells can end on it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetPolicy {
    /// Cut the path right after the first visit of the target.
    #[default]
    Truncate,
    /// Keep every swept cell even if the path does not end on the target.
    PreferCoverage,
}

/// Runtime configuration for [`ObstacleAwareLongestPath`](super::ObstacleAwareLongestPath).
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// Fraction of free cells after which the backtracking search converges
    /// on the target instead of moving away from it.
    pub hamilton_threshold: f64,
    /// Maximum cells pushed by the backtracking search.
    pub max_expansions: usize,
    /// Use the sweep when backtracking cannot reach the target.
    pub fallback_on_failure: bool,
    /// Sweep finishing rule.
    pub target_policy: TargetPolicy,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            hamilton_threshold: 0.7,
            max_expansions: 2_000_000,
            fallback_on_failure: true,
            target_policy: TargetPolicy::default(),
        }
    }
}

impl SearchConfig {
    /// Set the expansion budget.
    pub fn with_max_expansions(mut self, max_expansions: usize) -> Self {
        self.max_expansions = max_expansions;
        self
    }

    /// Set the sweep finishing rule.
    pub fn with_target_policy(mut self, policy: TargetPolicy) -> Self {
        self.target_policy = policy;
        self
    }
}

/// Why the backtracking search gave up.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchFailure {
    #[error("every branch was explored without reaching the target")]
    Exhausted,

    #[error("expansion budget exhausted")]
    BudgetExceeded,
}

/// Path construction strategy that produced a result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Depth-first backtracking with distance-ranked neighbours
    Hamilton,
    /// Boustrophedon sweep with BFS reconnection
    Meander,
}

impl Strategy {
    /// Lowercase name for logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Hamilton => "hamilton",
            Strategy::Meander => "meander",
        }
    }
}

/// Why the sweep replaced the backtracking result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    /// Backtracking did not reach the target.
    SearchFailed(SearchFailure),
    /// The first result broke adjacency or repeated a cell.
    InvalidPath,
}

/// Result of [`ObstacleAwareLongestPath::generate_longest_path`](super::ObstacleAwareLongestPath::generate_longest_path).
#[derive(Clone, Debug, Serialize)]
pub struct PathReport {
    /// Cells in visiting order (empty if no path could be built)
    pub path: Vec<GridCell>,
    /// Strategy that produced `path`
    pub strategy: Strategy,
    /// Set when the sweep replaced a backtracking attempt
    pub fallback: Option<FallbackReason>,
    /// Cells pushed by the backtracking search (0 for a pure sweep)
    pub expansions: usize,
    /// Wall-clock time spent
    pub elapsed: Duration,
    /// Percentage of free cells on `path`
    pub coverage: f64,
}

impl PathReport {
    /// Whether a non-empty path was produced.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Last cell of the path.
    pub fn end(&self) -> Option<GridCell> {
        self.path.last().copied()
    }
}
