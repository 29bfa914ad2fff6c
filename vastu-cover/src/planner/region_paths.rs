//! Per-region path generation.
//!
//! Each endpoint record is turned into a region-local search problem:
//! bounds are resolved from the dividers, the obstacle mask is cut out and
//! re-indexed, the endpoints are floored into local cells, and the result is
//! translated back to global coordinates.

use std::time::Instant;

use log::{debug, info, warn};

use super::types::{EndpointRepair, PlannerConfig, RegionPath, RegionPlan, SkippedRegion};
use crate::core::{BoundaryPoint, CellState, GridCell, OccupancyGrid, RegionBounds, Subregion};
use crate::divider::{HorizontalDivider, strip_bounds};
use crate::endpoints::EndpointRecord;
use crate::error::{CoverError, Result};
use crate::search::ObstacleAwareLongestPath;

/// Runs the path search for every (sub)region.
#[derive(Clone, Debug)]
pub struct RegionPathGenerator<'a> {
    grid: &'a OccupancyGrid,
    config: PlannerConfig,
}

impl<'a> RegionPathGenerator<'a> {
    /// Generator over the global grid.
    pub fn new(grid: &'a OccupancyGrid, config: PlannerConfig) -> Self {
        Self { grid, config }
    }

    /// Planner configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Paths for all endpoint records, in record order.
    ///
    /// Sub-regions that fail are logged and listed in
    /// [`RegionPlan::skipped`]; the remaining regions are still planned.
    pub fn generate_all_region_paths(
        &self,
        vertical: &[usize],
        horizontal: &[HorizontalDivider],
        endpoints: &[EndpointRecord],
    ) -> RegionPlan {
        let started = Instant::now();
        let strips = strip_bounds(vertical, self.grid.rows(), self.grid.cols());
        let mut plan = RegionPlan::default();

        for record in endpoints {
            let bounds = self.subregion_bounds(&strips, horizontal, record);
            match self.generate_region_path(record, bounds) {
                Ok(region_path) if !region_path.path.is_empty() => {
                    debug!(
                        "[RegionPath] Region {} ({}): {} cells, {:.1}% coverage",
                        record.region,
                        record.subregion,
                        region_path.path.len(),
                        region_path.coverage
                    );
                    if !region_path.reached_end {
                        warn!(
                            "[RegionPath] Region {} ({}) path stops short of its end cell",
                            record.region, record.subregion
                        );
                    }
                    plan.paths.push(region_path);
                }
                Ok(_) => {
                    warn!(
                        "[RegionPath] Region {} ({}) produced an empty path, skipped",
                        record.region, record.subregion
                    );
                    plan.skipped.push(SkippedRegion {
                        region: record.region,
                        subregion: record.subregion,
                        code: "EMPTY_PATH",
                        reason: "search produced an empty path".to_string(),
                    });
                }
                Err(e) => {
                    warn!(
                        "[RegionPath] Region {} ({}) skipped: {}",
                        record.region, record.subregion, e
                    );
                    plan.skipped.push(SkippedRegion {
                        region: record.region,
                        subregion: record.subregion,
                        code: e.code(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        plan.elapsed = started.elapsed();
        info!(
            "[RegionPath] {} paths, {} skipped, {} cells in {:.2}ms",
            plan.paths.len(),
            plan.skipped.len(),
            plan.total_cells(),
            plan.elapsed.as_secs_f64() * 1000.0
        );
        plan
    }

    /// Path for one record inside `bounds`.
    pub fn generate_region_path(
        &self,
        record: &EndpointRecord,
        bounds: RegionBounds,
    ) -> Result<RegionPath> {
        let bounds = bounds.clip(self.grid.rows(), self.grid.cols());
        if bounds.is_empty() {
            return Err(CoverError::InvalidSubregion {
                region: record.region,
                subregion: record.subregion,
                rows: bounds.height(),
                cols: bounds.width(),
            });
        }

        let mut local = self.grid.subgrid(&bounds)?;
        if local.free_count() == 0 {
            return Err(CoverError::NoFreeCell {
                region: record.region,
                subregion: record.subregion,
            });
        }

        let (start, start_unflagged) =
            self.repair(&mut local, local_cell(&bounds, record.start), record)?;
        let (end, end_unflagged) =
            self.repair(&mut local, local_cell(&bounds, record.end), record)?;
        let (start, end) = if start == end && local.free_count() > 1 {
            spread_endpoints(&local, start, record)
        } else {
            (start, end)
        };

        let report = ObstacleAwareLongestPath::from_grid(local, start, end)?
            .with_config(self.config.search.clone())
            .generate_longest_path();

        Ok(RegionPath {
            region: record.region,
            subregion: record.subregion,
            bounds,
            path: bounds.path_to_global(&report.path),
            strategy: report.strategy,
            fallback: report.fallback,
            coverage: report.coverage,
            reached_end: report.end() == Some(end),
            endpoint_unflagged: start_unflagged || end_unflagged,
        })
    }

    /// Bounds of the record's (sub)region.
    ///
    /// A split tag without a matching horizontal divider covers the whole
    /// strip. Unknown region numbers yield empty bounds.
    pub fn subregion_bounds(
        &self,
        strips: &[RegionBounds],
        horizontal: &[HorizontalDivider],
        record: &EndpointRecord,
    ) -> RegionBounds {
        let Some(strip) = record
            .region
            .checked_sub(1)
            .and_then(|i| strips.get(i))
            .copied()
        else {
            return RegionBounds::new(0, 0, 0, 0);
        };

        let split = horizontal
            .iter()
            .find(|h| h.splits(strip.x_min, strip.x_max));
        match (record.subregion, split) {
            (Subregion::Upper, Some(h)) => h.upper(self.grid.rows()),
            (Subregion::Lower, Some(h)) => h.lower(),
            _ => strip,
        }
    }

    /// Make sure the endpoint is a free local cell. The flag is set when an
    /// obstacle was cleared to get there.
    fn repair(
        &self,
        local: &mut OccupancyGrid,
        cell: GridCell,
        record: &EndpointRecord,
    ) -> Result<(GridCell, bool)> {
        if local.is_free(cell) {
            return Ok((cell, false));
        }
        match self.config.endpoint_repair {
            EndpointRepair::Relocate => {
                let moved = local
                    .nearest_free(cell)
                    .ok_or_else(|| CoverError::NoFreeCell {
                        region: record.region,
                        subregion: record.subregion,
                    })?;
                debug!(
                    "[RegionPath] Region {} ({}): endpoint ({}, {}) on obstacle, moved to ({}, {})",
                    record.region, record.subregion, cell.row, cell.col, moved.row, moved.col
                );
                Ok((moved, false))
            }
            EndpointRepair::Unflag => {
                debug!(
                    "[RegionPath] Region {} ({}): clearing obstacle at endpoint ({}, {})",
                    record.region, record.subregion, cell.row, cell.col
                );
                local.set(cell, CellState::Free);
                Ok((cell, true))
            }
        }
    }
}

/// Distinct endpoints for a sub-region whose start and end landed on the
/// same cell.
///
/// The end moves to the free cell farthest from the start. A start cut off
/// from every other free cell first moves to the nearest free cell.
fn spread_endpoints(
    local: &OccupancyGrid,
    cell: GridCell,
    record: &EndpointRecord,
) -> (GridCell, GridCell) {
    let start = if local.farthest_reachable(cell).is_some() {
        cell
    } else {
        local
            .free_cells()
            .filter(|&c| c != cell)
            .min_by_key(|c| c.manhattan_distance(&cell))
            .unwrap_or(cell)
    };
    let end = local.farthest_reachable(start).unwrap_or(start);
    debug!(
        "[RegionPath] Region {} ({}): endpoints collapsed on ({}, {}), using ({}, {}) -> ({}, {})",
        record.region,
        record.subregion,
        cell.row,
        cell.col,
        start.row,
        start.col,
        end.row,
        end.col
    );
    (start, end)
}

/// Floor a boundary point into a cell and clamp it into `bounds` (local).
fn local_cell(bounds: &RegionBounds, point: BoundaryPoint) -> GridCell {
    bounds.clamp_to_local(point.y.floor() as i64, point.x.floor() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        region: usize,
        subregion: Subregion,
        start: (f64, f64),
        end: (f64, f64),
    ) -> EndpointRecord {
        EndpointRecord {
            region,
            subregion,
            start: start.into(),
            end: end.into(),
            degenerate: false,
        }
    }

    fn assert_valid(grid: &OccupancyGrid, bounds: &RegionBounds, path: &[GridCell]) {
        assert!(path.windows(2).all(|w| w[0].is_adjacent(&w[1])));
        assert!(path.iter().all(|&c| grid.is_free(c) && bounds.contains(c)));
        let mut sorted = path.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), path.len());
    }

    #[test]
    fn test_local_cell_clamps() {
        let bounds = RegionBounds::new(3, 6, 2, 5);
        assert_eq!(local_cell(&bounds, (6.0, 5.0).into()), GridCell::new(2, 2));
        assert_eq!(local_cell(&bounds, (3.0, 2.0).into()), GridCell::new(0, 0));
        assert_eq!(local_cell(&bounds, (4.7, 0.0).into()), GridCell::new(0, 1));
    }

    #[test]
    fn test_subregion_bounds() {
        let grid = OccupancyGrid::new(6, 8).unwrap();
        let generator = RegionPathGenerator::new(&grid, PlannerConfig::default());
        let strips = strip_bounds(&[4], 6, 8);
        let horizontal = [HorizontalDivider { x_min: 0, x_max: 4, row: 2 }];

        let upper = record(1, Subregion::Upper, (0.0, 2.0), (4.0, 6.0));
        assert_eq!(
            generator.subregion_bounds(&strips, &horizontal, &upper),
            RegionBounds::new(0, 4, 2, 6)
        );
        let lower = record(1, Subregion::Lower, (0.0, 2.0), (4.0, 0.0));
        assert_eq!(
            generator.subregion_bounds(&strips, &horizontal, &lower),
            RegionBounds::new(0, 4, 0, 2)
        );
        let whole = record(2, Subregion::Whole, (4.0, 6.0), (8.0, 0.0));
        assert_eq!(
            generator.subregion_bounds(&strips, &horizontal, &whole),
            RegionBounds::new(4, 8, 0, 6)
        );
        let unknown = record(7, Subregion::Whole, (0.0, 0.0), (0.0, 0.0));
        assert!(generator.subregion_bounds(&strips, &horizontal, &unknown).is_empty());
    }

    #[test]
    fn test_region_path_translated_to_global() {
        let grid = OccupancyGrid::new(4, 6).unwrap();
        let generator = RegionPathGenerator::new(&grid, PlannerConfig::default());
        let rec = record(2, Subregion::Upper, (3.0, 4.0), (6.0, 2.0));
        let bounds = RegionBounds::new(3, 6, 2, 4);
        let region_path = generator.generate_region_path(&rec, bounds).unwrap();
        assert_eq!(region_path.path.len(), 6);
        assert_eq!(region_path.path[0], GridCell::new(3, 3));
        assert_eq!(region_path.path.last(), Some(&GridCell::new(2, 5)));
        assert!(region_path.reached_end);
        assert_valid(&grid, &bounds, &region_path.path);
    }

    #[test]
    fn test_collapsed_endpoints_are_spread() {
        // Width-1 column; both endpoints clamp onto the top cell, which is
        // cut off by the obstacle below it
        let grid = OccupancyGrid::from_obstacles(4, 1, [GridCell::new(2, 0)]).unwrap();
        let generator = RegionPathGenerator::new(&grid, PlannerConfig::default());
        let rec = record(1, Subregion::Upper, (0.0, 4.0), (1.0, 4.0));
        let bounds = RegionBounds::strip(0, 1, 4);
        let region_path = generator.generate_region_path(&rec, bounds).unwrap();
        assert_eq!(
            region_path.path,
            vec![GridCell::new(1, 0), GridCell::new(0, 0)]
        );
        assert!(region_path.reached_end);
        assert_valid(&grid, &bounds, &region_path.path);
    }

    #[test]
    fn test_blocked_endpoint_relocated() {
        let grid = OccupancyGrid::from_obstacles(3, 3, [GridCell::new(0, 0)]).unwrap();
        let generator = RegionPathGenerator::new(&grid, PlannerConfig::default());
        let rec = record(1, Subregion::Whole, (0.0, 0.0), (3.0, 3.0));
        let bounds = RegionBounds::strip(0, 3, 3);
        let region_path = generator.generate_region_path(&rec, bounds).unwrap();
        assert!(!region_path.path.contains(&GridCell::new(0, 0)));
        assert_eq!(region_path.path[0], GridCell::new(0, 1));
        assert!(!region_path.endpoint_unflagged);
        assert_valid(&grid, &bounds, &region_path.path);
    }

    #[test]
    fn test_blocked_endpoint_unflagged() {
        let grid = OccupancyGrid::from_obstacles(3, 3, [GridCell::new(0, 0)]).unwrap();
        let config = PlannerConfig {
            endpoint_repair: EndpointRepair::Unflag,
            ..PlannerConfig::default()
        };
        let generator = RegionPathGenerator::new(&grid, config);
        let rec = record(1, Subregion::Whole, (0.0, 0.0), (3.0, 3.0));
        let region_path = generator
            .generate_region_path(&rec, RegionBounds::strip(0, 3, 3))
            .unwrap();
        assert_eq!(region_path.path[0], GridCell::new(0, 0));
        assert!(region_path.endpoint_unflagged);
        assert!(region_path.reached_end);
    }

    #[test]
    fn test_failures_are_skipped() {
        // Right strip is fully blocked
        let obstacles = (0..3).map(|row| GridCell::new(row, 2));
        let grid = OccupancyGrid::from_obstacles(3, 3, obstacles).unwrap();
        let generator = RegionPathGenerator::new(&grid, PlannerConfig::default());
        let horizontal = [HorizontalDivider { x_min: 0, x_max: 2, row: 3 }];
        let endpoints = [
            record(1, Subregion::Upper, (0.0, 3.0), (2.0, 3.0)),
            record(1, Subregion::Lower, (0.0, 0.0), (2.0, 2.0)),
            record(2, Subregion::Whole, (2.0, 3.0), (3.0, 0.0)),
        ];
        let plan = generator.generate_all_region_paths(&[2], &horizontal, &endpoints);
        assert_eq!(plan.paths.len(), 1);
        assert_eq!(plan.paths[0].subregion, Subregion::Lower);
        assert_eq!(plan.paths[0].path.len(), 6);
        assert_eq!(plan.skipped.len(), 2);
        assert_eq!(plan.skipped[0].code, "INVALID_SUBREGION");
        assert_eq!(plan.skipped[1].code, "NO_FREE_CELL");
        assert!(!plan.is_complete());
    }
}
