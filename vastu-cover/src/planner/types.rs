//! Planner configuration and output types.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{GridCell, RegionBounds, Subregion};
use crate::divider::{HorizontalDivider, SubregionArea};
use crate::endpoints::EndpointRecord;
use crate::search::{FallbackReason, SearchConfig, Strategy};

/// What to do when a start or end cell lands on an obstacle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndpointRepair {
    /// Move the endpoint to the nearest free cell of the sub-region.
    #[default]
    Relocate,
    /// Treat the endpoint cell as free.
    ///
    /// The cleared cell may then appear in the path even though the layout
    /// marks it as an obstacle; such paths carry
    /// [`RegionPath::endpoint_unflagged`].
    Unflag,
}

/// Runtime configuration for [`RegionPathGenerator`](super::RegionPathGenerator).
#[derive(Clone, Debug, Default)]
pub struct PlannerConfig {
    /// Per-region search settings
    pub search: SearchConfig,
    /// Endpoint repair rule
    pub endpoint_repair: EndpointRepair,
}

/// Path through one (sub)region, in global coordinates.
#[derive(Clone, Debug, Serialize)]
pub struct RegionPath {
    /// Region number (1-based)
    pub region: usize,
    /// Sub-region tag
    pub subregion: Subregion,
    /// Cells the path was searched in
    pub bounds: RegionBounds,
    /// Cells in visiting order
    pub path: Vec<GridCell>,
    /// Strategy that produced the path
    pub strategy: Strategy,
    /// Set when the sweep replaced backtracking
    pub fallback: Option<FallbackReason>,
    /// Percentage of the sub-region's free cells on the path
    pub coverage: f64,
    /// The path finishes on the sub-region's end cell
    pub reached_end: bool,
    /// An obstacle endpoint was cleared under [`EndpointRepair::Unflag`],
    /// so the path may contain a cell the layout marks as blocked
    pub endpoint_unflagged: bool,
}

/// A (sub)region that produced no path.
#[derive(Clone, Debug, Serialize)]
pub struct SkippedRegion {
    /// Region number (1-based)
    pub region: usize,
    /// Sub-region tag
    pub subregion: Subregion,
    /// Error code from [`CoverError::code`](crate::error::CoverError::code),
    /// or `EMPTY_PATH`
    pub code: &'static str,
    /// Human-readable reason
    pub reason: String,
}

/// Output of [`RegionPathGenerator::generate_all_region_paths`](super::RegionPathGenerator::generate_all_region_paths).
#[derive(Clone, Debug, Default, Serialize)]
pub struct RegionPlan {
    /// Paths in region order
    pub paths: Vec<RegionPath>,
    /// Sub-regions without a path
    pub skipped: Vec<SkippedRegion>,
    /// Time spent on all regions
    pub elapsed: Duration,
}

impl RegionPlan {
    /// Total cells over all paths.
    pub fn total_cells(&self) -> usize {
        self.paths.iter().map(|p| p.path.len()).sum()
    }

    /// Every sub-region produced a path.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Result of a full [`CoveragePlanner::plan`](super::CoveragePlanner::plan) run.
#[derive(Clone, Debug, Serialize)]
pub struct CoveragePlan {
    /// Vertical divider columns
    pub vertical: Vec<usize>,
    /// Horizontal splits
    pub horizontal: Vec<HorizontalDivider>,
    /// Free-cell areas per strip and sub-region
    pub areas: Vec<SubregionArea>,
    /// Endpoint records in region order
    pub endpoints: Vec<EndpointRecord>,
    /// Paths in region order
    pub paths: Vec<RegionPath>,
    /// Sub-regions without a path
    pub skipped: Vec<SkippedRegion>,
    /// Free cells in the grid
    pub free_cells: usize,
    /// Percentage of free cells covered by all paths together
    pub coverage: f64,
    /// Time spent on the whole pipeline
    pub elapsed: Duration,
}

impl CoveragePlan {
    /// All region paths concatenated in region order.
    ///
    /// Consecutive regions are not necessarily adjacent.
    pub fn route(&self) -> Vec<GridCell> {
        self.paths
            .iter()
            .flat_map(|p| p.path.iter().copied())
            .collect()
    }
}
