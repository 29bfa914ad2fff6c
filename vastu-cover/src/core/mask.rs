//! Visited-cell mask used by the path searches.

use super::cell::GridCell;
use super::grid::OccupancyGrid;

/// Row-major boolean mask over a `rows x cols` grid.
///
/// Each search owns its mask; reconnection searches clone the caller's mask
/// instead of writing to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisitedMask {
    rows: usize,
    cols: usize,
    bits: Vec<bool>,
}

impl VisitedMask {
    /// All cells unvisited.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            bits: vec![false; rows * cols],
        }
    }

    /// Obstacle cells pre-marked as visited.
    pub fn from_obstacles(grid: &OccupancyGrid) -> Self {
        let mut mask = Self::new(grid.rows(), grid.cols());
        for cell in grid.obstacles() {
            mask.set(cell);
        }
        mask
    }

    /// Mask rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Mask columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn index(&self, cell: GridCell) -> Option<usize> {
        (cell.row < self.rows && cell.col < self.cols).then(|| cell.row * self.cols + cell.col)
    }

    /// Is the cell marked? Out-of-mask cells count as marked.
    #[inline]
    pub fn is_set(&self, cell: GridCell) -> bool {
        self.index(cell).is_none_or(|i| self.bits[i])
    }

    /// Mark a cell.
    #[inline]
    pub fn set(&mut self, cell: GridCell) {
        if let Some(i) = self.index(cell) {
            self.bits[i] = true;
        }
    }

    /// Unmark a cell.
    #[inline]
    pub fn clear(&mut self, cell: GridCell) {
        if let Some(i) = self.index(cell) {
            self.bits[i] = false;
        }
    }

    /// Number of marked cells.
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }
}
