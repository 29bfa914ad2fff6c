//! Occupancy grid: the free/obstacle mask every planner stage works on.

use std::collections::VecDeque;

use log::warn;

use crate::error::{CoverError, Result};

use super::cell::{CellState, GridCell};
use super::region::RegionBounds;

/// Row-major occupancy grid of free and obstacle cells.
///
/// Out-of-grid queries behave like obstacles, so searches never need a
/// separate bounds check before asking whether a cell can be visited.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccupancyGrid {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
}

impl OccupancyGrid {
    /// Create an obstacle-free grid.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(CoverError::EmptyGrid { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![CellState::Free; rows * cols],
        })
    }

    /// Create a grid with the given obstacle cells.
    ///
    /// Obstacles outside the grid are dropped with a warning.
    pub fn from_obstacles<I>(rows: usize, cols: usize, obstacles: I) -> Result<Self>
    where
        I: IntoIterator<Item = GridCell>,
    {
        let mut grid = Self::new(rows, cols)?;
        for cell in obstacles {
            if grid.contains(cell) {
                grid.set(cell, CellState::Obstacle);
            } else {
                warn!(
                    "[Grid] Ignoring obstacle ({}, {}) outside {}x{} grid",
                    cell.row, cell.col, rows, cols
                );
            }
        }
        Ok(grid)
    }

    /// Create a grid from a row-major obstacle mask (`true` = obstacle).
    pub fn from_mask(rows: usize, cols: usize, obstacle_mask: &[bool]) -> Result<Self> {
        let mut grid = Self::new(rows, cols)?;
        if obstacle_mask.len() != rows * cols {
            return Err(CoverError::MaskSizeMismatch {
                expected: rows * cols,
                actual: obstacle_mask.len(),
            });
        }
        for (state, &blocked) in grid.cells.iter_mut().zip(obstacle_mask) {
            if blocked {
                *state = CellState::Obstacle;
            }
        }
        Ok(grid)
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Is the cell inside the grid?
    #[inline]
    pub fn contains(&self, cell: GridCell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    #[inline]
    pub(crate) fn index(&self, cell: GridCell) -> usize {
        cell.row * self.cols + cell.col
    }

    /// Cell state; out-of-grid cells read as obstacles.
    #[inline]
    pub fn get(&self, cell: GridCell) -> CellState {
        if self.contains(cell) {
            self.cells[self.index(cell)]
        } else {
            CellState::Obstacle
        }
    }

    /// Is the cell inside the grid and free?
    #[inline]
    pub fn is_free(&self, cell: GridCell) -> bool {
        self.get(cell).is_free()
    }

    /// Is the cell blocked (or outside the grid)?
    #[inline]
    pub fn is_obstacle(&self, cell: GridCell) -> bool {
        self.get(cell).is_obstacle()
    }

    /// Set a cell's state. Out-of-grid cells are ignored.
    pub fn set(&mut self, cell: GridCell, state: CellState) {
        if self.contains(cell) {
            let idx = self.index(cell);
            self.cells[idx] = state;
        }
    }

    /// Does the grid contain at least one obstacle?
    pub fn has_obstacles(&self) -> bool {
        self.cells.iter().any(|c| c.is_obstacle())
    }

    /// Number of free cells.
    pub fn free_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_free()).count()
    }

    /// Iterate over all cells with their state, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (GridCell, CellState)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &state)| (GridCell::new(i / self.cols, i % self.cols), state))
    }

    /// Iterate over obstacle cells, row-major.
    pub fn obstacles(&self) -> impl Iterator<Item = GridCell> + '_ {
        self.iter()
            .filter(|(_, state)| state.is_obstacle())
            .map(|(cell, _)| cell)
    }

    /// Iterate over free cells, row-major.
    pub fn free_cells(&self) -> impl Iterator<Item = GridCell> + '_ {
        self.iter()
            .filter(|(_, state)| state.is_free())
            .map(|(cell, _)| cell)
    }

    /// Free cell closest to `cell` by Manhattan distance.
    ///
    /// Ties go to the first free cell in row-major order.
    pub fn nearest_free(&self, cell: GridCell) -> Option<GridCell> {
        self.free_cells()
            .min_by_key(|free| free.manhattan_distance(&cell))
    }

    /// Free cell with the longest 4-connected walk from `cell`.
    ///
    /// Returns `None` when `cell` is blocked or no other free cell is
    /// reachable from it.
    pub fn farthest_reachable(&self, cell: GridCell) -> Option<GridCell> {
        if !self.is_free(cell) {
            return None;
        }
        let mut seen = vec![false; self.cell_count()];
        let mut queue = VecDeque::from([cell]);
        seen[self.index(cell)] = true;
        let mut last = cell;
        while let Some(current) = queue.pop_front() {
            last = current;
            for next in current.neighbors_4(self.rows, self.cols).into_iter().flatten() {
                let idx = self.index(next);
                if !seen[idx] && self.is_free(next) {
                    seen[idx] = true;
                    queue.push_back(next);
                }
            }
        }
        (last != cell).then_some(last)
    }

    /// Copy of the cells inside `bounds`, re-indexed to a local origin.
    ///
    /// Bounds are clipped to the grid; an empty intersection is an error.
    pub fn subgrid(&self, bounds: &RegionBounds) -> Result<Self> {
        let clipped = bounds.clip(self.rows, self.cols);
        let mut local = Self::new(clipped.height(), clipped.width())?;
        for row in clipped.y_min..clipped.y_max {
            for col in clipped.x_min..clipped.x_max {
                let global = GridCell::new(row, col);
                if self.is_obstacle(global) {
                    local.set(clipped.to_local(global), CellState::Obstacle);
                }
            }
        }
        Ok(local)
    }

    /// ASCII rendering, one line per row (row 0 first).
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.rows * (self.cols + 1));
        for row in 0..self.rows {
            for col in 0..self.cols {
                out.push(self.get(GridCell::new(row, col)).as_char());
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_grid_rejected() {
        assert!(matches!(
            OccupancyGrid::new(0, 4),
            Err(CoverError::EmptyGrid { rows: 0, cols: 4 })
        ));
        assert!(OccupancyGrid::new(3, 0).is_err());
    }

    #[test]
    fn test_from_obstacles() {
        let grid =
            OccupancyGrid::from_obstacles(3, 3, [GridCell::new(1, 1), GridCell::new(5, 5)])
                .unwrap();
        assert!(grid.is_obstacle(GridCell::new(1, 1)));
        assert!(grid.is_free(GridCell::new(0, 0)));
        assert_eq!(grid.free_count(), 8);
        assert!(grid.has_obstacles());
    }

    #[test]
    fn test_from_mask_size() {
        let err = OccupancyGrid::from_mask(2, 2, &[false; 3]).unwrap_err();
        assert!(matches!(
            err,
            CoverError::MaskSizeMismatch {
                expected: 4,
                actual: 3
            }
        ));

        let grid = OccupancyGrid::from_mask(2, 2, &[false, true, false, false]).unwrap();
        assert!(grid.is_obstacle(GridCell::new(0, 1)));
        assert_eq!(grid.obstacles().collect::<Vec<_>>(), vec![GridCell::new(0, 1)]);
    }

    #[test]
    fn test_out_of_grid_reads_as_obstacle() {
        let grid = OccupancyGrid::new(2, 2).unwrap();
        assert!(grid.is_obstacle(GridCell::new(2, 0)));
        assert!(!grid.is_free(GridCell::new(0, 7)));
    }

    #[test]
    fn test_nearest_free() {
        let mut grid = OccupancyGrid::new(3, 3).unwrap();
        grid.set(GridCell::new(0, 0), CellState::Obstacle);
        grid.set(GridCell::new(0, 1), CellState::Obstacle);
        assert_eq!(
            grid.nearest_free(GridCell::new(0, 0)),
            Some(GridCell::new(1, 0))
        );
    }

    #[test]
    fn test_farthest_reachable() {
        // .#.
        // ...
        let grid = OccupancyGrid::from_obstacles(2, 3, [GridCell::new(0, 1)]).unwrap();
        assert_eq!(
            grid.farthest_reachable(GridCell::new(0, 0)),
            Some(GridCell::new(0, 2))
        );
        assert_eq!(grid.farthest_reachable(GridCell::new(0, 1)), None);

        // Single free cell walled off from the rest
        let grid = OccupancyGrid::from_obstacles(3, 1, [GridCell::new(1, 0)]).unwrap();
        assert_eq!(grid.farthest_reachable(GridCell::new(2, 0)), None);
    }

    #[test]
    fn test_subgrid_translation() {
        let grid = OccupancyGrid::from_obstacles(4, 6, [GridCell::new(3, 4)]).unwrap();
        let bounds = RegionBounds::new(3, 6, 2, 4);
        let local = grid.subgrid(&bounds).unwrap();
        assert_eq!(local.rows(), 2);
        assert_eq!(local.cols(), 3);
        assert!(local.is_obstacle(GridCell::new(1, 1)));
        assert_eq!(local.free_count(), 5);
    }

    #[test]
    fn test_render() {
        let grid = OccupancyGrid::from_obstacles(2, 3, [GridCell::new(1, 2)]).unwrap();
        assert_eq!(grid.render(), "...\n..#\n");
    }
}
