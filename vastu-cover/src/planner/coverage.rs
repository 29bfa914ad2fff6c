//! One-call coverage planning pipeline.

use std::collections::HashSet;
use std::time::Instant;

use log::info;

use super::region_paths::RegionPathGenerator;
use super::types::CoveragePlan;
use crate::config::CoverConfig;
use crate::core::GridCell;
use crate::divider::RegionDivider;
use crate::endpoints::PathEndpointGenerator;
use crate::error::Result;
use crate::layout::Layout;

/// Layout in, ordered region paths out.
///
/// Runs division, endpoint generation and per-region search with one
/// [`CoverConfig`].
#[derive(Clone, Debug, Default)]
pub struct CoveragePlanner {
    config: CoverConfig,
}

impl CoveragePlanner {
    /// Planner with the given configuration.
    pub fn new(config: CoverConfig) -> Self {
        Self { config }
    }

    /// Configuration in use.
    pub fn config(&self) -> &CoverConfig {
        &self.config
    }

    /// Plan coverage of `layout` split into `regions` vertical strips.
    ///
    /// Fails only on whole-layout problems (empty grid, invalid region
    /// count); per-region failures end up in [`CoveragePlan::skipped`].
    pub fn plan<L: Layout + ?Sized>(&self, layout: &L, regions: usize) -> Result<CoveragePlan> {
        let started = Instant::now();
        let grid = layout.occupancy_grid()?;

        let divider = RegionDivider::new(&grid);
        let vertical = divider.generate_vertical_dividers(regions)?;
        let horizontal = if self.config.split_strips() {
            divider.generate_horizontal_dividers(&vertical)
        } else {
            Vec::new()
        };
        let areas = divider.calculate_subregion_areas(&vertical, &horizontal);

        let endpoints = PathEndpointGenerator::from_layout(layout)
            .generate_endpoints_for_all_regions(&vertical, &horizontal);

        let region_plan = RegionPathGenerator::new(&grid, self.config.to_planner_config())
            .generate_all_region_paths(&vertical, &horizontal, &endpoints);

        let free_cells = divider.total_free();
        let covered: HashSet<GridCell> = region_plan
            .paths
            .iter()
            .flat_map(|p| p.path.iter().copied())
            .filter(|&c| grid.is_free(c))
            .collect();
        let coverage = if free_cells == 0 {
            0.0
        } else {
            covered.len() as f64 / free_cells as f64 * 100.0
        };

        let elapsed = started.elapsed();
        info!(
            "[Planner] {}x{} in {} regions: {} paths, {:.1}% coverage, {:.2}ms",
            grid.rows(),
            grid.cols(),
            regions,
            region_plan.paths.len(),
            coverage,
            elapsed.as_secs_f64() * 1000.0
        );

        Ok(CoveragePlan {
            vertical,
            horizontal,
            areas,
            endpoints,
            paths: region_plan.paths,
            skipped: region_plan.skipped,
            free_cells,
            coverage,
            elapsed,
        })
    }
}
