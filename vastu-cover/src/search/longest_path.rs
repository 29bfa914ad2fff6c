//! Per-region path search facade.

use std::collections::HashSet;
use std::time::Instant;

use log::{debug, info, warn};

use super::bfs::shortest_path;
use super::hamilton::HamiltonSearch;
use super::meander::sweep;
use super::types::{FallbackReason, PathReport, SearchConfig, SearchFailure, Strategy};
use crate::core::{GridCell, OccupancyGrid, VisitedMask};
use crate::error::{CoverError, EndpointRole, Result};

/// Long, non-self-crossing path through the free cells of one region.
///
/// Regions with obstacles try depth-first backtracking first; open regions
/// and failed searches use the boustrophedon sweep.
#[derive(Clone, Debug)]
pub struct ObstacleAwareLongestPath {
    grid: OccupancyGrid,
    start: GridCell,
    target: GridCell,
    config: SearchConfig,
}

impl ObstacleAwareLongestPath {
    /// Build from region dimensions and obstacle cells.
    ///
    /// Obstacles outside the region are ignored.
    pub fn new<I>(
        rows: usize,
        cols: usize,
        obstacles: I,
        start: GridCell,
        target: GridCell,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = GridCell>,
    {
        let grid = OccupancyGrid::from_obstacles(rows, cols, obstacles)?;
        Self::from_grid(grid, start, target)
    }

    /// Build from an existing grid.
    pub fn from_grid(grid: OccupancyGrid, start: GridCell, target: GridCell) -> Result<Self> {
        check_endpoint(&grid, EndpointRole::Start, start)?;
        check_endpoint(&grid, EndpointRole::Target, target)?;
        Ok(Self {
            grid,
            start,
            target,
            config: SearchConfig::default(),
        })
    }

    /// Replace the search configuration.
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Region grid.
    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    /// Start cell.
    pub fn start(&self) -> GridCell {
        self.start
    }

    /// Target cell.
    pub fn target(&self) -> GridCell {
        self.target
    }

    /// Search configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Build the best available path and report how it was obtained.
    pub fn generate_longest_path(&self) -> PathReport {
        let started = Instant::now();
        let mut expansions = 0;
        let mut fallback = None;

        let (mut strategy, mut path) = if self.grid.has_obstacles() {
            let outcome = HamiltonSearch::new(
                &self.grid,
                self.target,
                self.config.hamilton_threshold,
                self.config.max_expansions,
            )
            .run(self.start);
            expansions = outcome.expansions;
            match outcome.result {
                Ok(path) => (Strategy::Hamilton, path),
                Err(failure) if self.config.fallback_on_failure => {
                    debug!("[Hamilton] {}, falling back to sweep", failure);
                    fallback = Some(FallbackReason::SearchFailed(failure));
                    (Strategy::Meander, self.meander_path())
                }
                Err(failure) => {
                    warn!("[Hamilton] {} and sweep fallback disabled", failure);
                    (Strategy::Hamilton, Vec::new())
                }
            }
        } else {
            (Strategy::Meander, self.meander_path())
        };

        if !self.is_valid_path(&path) {
            warn!(
                "[LongestPath] {} produced an invalid path, using sweep",
                strategy.as_str()
            );
            fallback = Some(FallbackReason::InvalidPath);
            strategy = Strategy::Meander;
            path = self.meander_path();
        }

        let coverage = self.calculate_coverage(&path);
        let elapsed = started.elapsed();
        info!(
            "[LongestPath] {}x{} {}: {} cells, {:.1}% coverage in {:.2}ms",
            self.grid.rows(),
            self.grid.cols(),
            strategy.as_str(),
            path.len(),
            coverage,
            elapsed.as_secs_f64() * 1000.0
        );

        PathReport {
            path,
            strategy,
            fallback,
            expansions,
            elapsed,
            coverage,
        }
    }

    /// Depth-first backtracking from start to target.
    pub fn hamilton_path(&self) -> std::result::Result<Vec<GridCell>, SearchFailure> {
        HamiltonSearch::new(
            &self.grid,
            self.target,
            self.config.hamilton_threshold,
            self.config.max_expansions,
        )
        .run(self.start)
        .result
    }

    /// Boustrophedon sweep from start, finishing on target where possible.
    pub fn meander_path(&self) -> Vec<GridCell> {
        sweep(&self.grid, self.start, self.target, self.config.target_policy)
    }

    /// Shortest 4-connected path through cells not set in `visited`.
    ///
    /// `visited` is only read; an empty result means `target` is unreachable.
    pub fn bfs_path(
        &self,
        start: GridCell,
        target: GridCell,
        visited: &VisitedMask,
    ) -> Vec<GridCell> {
        shortest_path(start, target, visited)
    }

    /// No repeated cell and every step moves to a 4-neighbour.
    pub fn is_valid_path(&self, path: &[GridCell]) -> bool {
        let mut seen = HashSet::with_capacity(path.len());
        path.iter().all(|&c| seen.insert(c)) && path.windows(2).all(|w| w[0].is_adjacent(&w[1]))
    }

    /// Percentage of the region's free cells that `path` visits.
    pub fn calculate_coverage(&self, path: &[GridCell]) -> f64 {
        let free = self.grid.free_count();
        if free == 0 || path.is_empty() {
            return 0.0;
        }
        let covered: HashSet<GridCell> = path
            .iter()
            .copied()
            .filter(|&c| self.grid.is_free(c))
            .collect();
        covered.len() as f64 / free as f64 * 100.0
    }
}

fn check_endpoint(grid: &OccupancyGrid, role: EndpointRole, cell: GridCell) -> Result<()> {
    if !grid.contains(cell) {
        return Err(CoverError::EndpointOutOfBounds {
            role,
            row: cell.row,
            col: cell.col,
            rows: grid.rows(),
            cols: grid.cols(),
        });
    }
    if grid.is_obstacle(cell) {
        return Err(CoverError::EndpointBlocked {
            role,
            row: cell.row,
            col: cell.col,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn center_obstacle() -> ObstacleAwareLongestPath {
        ObstacleAwareLongestPath::new(
            3,
            3,
            [GridCell::new(1, 1)],
            GridCell::new(0, 0),
            GridCell::new(2, 2),
        )
        .unwrap()
    }

    #[test]
    fn test_open_grid_uses_sweep() {
        let search =
            ObstacleAwareLongestPath::new(4, 4, [], GridCell::new(0, 0), GridCell::new(3, 3)).unwrap();
        let report = search.generate_longest_path();
        assert_eq!(report.strategy, Strategy::Meander);
        assert_eq!(report.fallback, None);
        assert_eq!(report.expansions, 0);
        assert_eq!(report.end(), Some(GridCell::new(3, 3)));
        assert_eq!(report.path.len(), 13);
        assert!(search.is_valid_path(&report.path));
        assert_relative_eq!(report.coverage, 81.25);
    }

    #[test]
    fn test_open_grid_ends_on_target() {
        let search =
            ObstacleAwareLongestPath::new(4, 4, [], GridCell::new(0, 0), GridCell::new(0, 1)).unwrap();
        let report = search.generate_longest_path();
        assert_eq!(report.end(), Some(GridCell::new(0, 1)));
        assert_eq!(report.path.len(), 16);
        assert!(search.is_valid_path(&report.path));
        assert_relative_eq!(report.coverage, 100.0);
    }

    #[test]
    fn test_obstacles_use_backtracking() {
        let search = center_obstacle();
        let report = search.generate_longest_path();
        assert_eq!(report.strategy, Strategy::Hamilton);
        assert_eq!(report.end(), Some(GridCell::new(2, 2)));
        assert!(!report.path.contains(&GridCell::new(1, 1)));
        assert_relative_eq!(report.coverage, 5.0 / 8.0 * 100.0);
    }

    #[test]
    fn test_failed_backtracking_falls_back() {
        let config = SearchConfig::default().with_max_expansions(2);
        let search = center_obstacle().with_config(config);
        let report = search.generate_longest_path();
        assert_eq!(report.strategy, Strategy::Meander);
        assert_eq!(
            report.fallback,
            Some(FallbackReason::SearchFailed(SearchFailure::BudgetExceeded))
        );
        assert!(search.is_valid_path(&report.path));
        assert!(report.path.iter().all(|&c| search.grid().is_free(c)));
    }

    #[test]
    fn test_fallback_disabled() {
        let config = SearchConfig {
            fallback_on_failure: false,
            ..SearchConfig::default().with_max_expansions(2)
        };
        let report = center_obstacle().with_config(config).generate_longest_path();
        assert!(report.is_empty());
        assert_eq!(report.coverage, 0.0);
    }

    #[test]
    fn test_endpoint_validation() {
        let err = ObstacleAwareLongestPath::new(3, 3, [], GridCell::new(3, 0), GridCell::new(0, 0))
            .unwrap_err();
        assert!(matches!(
            err,
            CoverError::EndpointOutOfBounds {
                role: EndpointRole::Start,
                ..
            }
        ));

        let err = ObstacleAwareLongestPath::new(
            3,
            3,
            [GridCell::new(2, 2)],
            GridCell::new(0, 0),
            GridCell::new(2, 2),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CoverError::EndpointBlocked {
                role: EndpointRole::Target,
                ..
            }
        ));

        assert!(matches!(
            ObstacleAwareLongestPath::new(0, 3, [], GridCell::new(0, 0), GridCell::new(0, 0)),
            Err(CoverError::EmptyGrid { .. })
        ));
    }

    #[test]
    fn test_is_valid_path() {
        let search = center_obstacle();
        assert!(search.is_valid_path(&[]));
        assert!(search.is_valid_path(&[GridCell::new(0, 0), GridCell::new(0, 1)]));
        assert!(!search.is_valid_path(&[GridCell::new(0, 0), GridCell::new(1, 1)]));
        assert!(!search.is_valid_path(&[
            GridCell::new(0, 0),
            GridCell::new(0, 1),
            GridCell::new(0, 0),
        ]));
    }

    #[test]
    fn test_coverage_counts_distinct_free_cells() {
        let search = center_obstacle();
        assert_eq!(search.calculate_coverage(&[]), 0.0);
        let path = [
            GridCell::new(0, 0),
            GridCell::new(0, 0),
            GridCell::new(1, 1),
            GridCell::new(9, 9),
        ];
        assert_relative_eq!(search.calculate_coverage(&path), 12.5);
    }

    #[test]
    fn test_bfs_path_leaves_mask_untouched() {
        let search =
            ObstacleAwareLongestPath::new(3, 4, [], GridCell::new(0, 0), GridCell::new(2, 3)).unwrap();
        let mask = VisitedMask::new(3, 4);
        let path = search.bfs_path(GridCell::new(0, 0), GridCell::new(2, 3), &mask);
        assert_eq!(path.len() - 1, 5);
        assert_eq!(mask.count(), 0);
    }
}
