//! Free-cell prefix sums.
//!
//! [`AreaTable`] is a summed-area table over the free mask: any rectangle's
//! free-cell count is four lookups. Region division, area reports and plan
//! statistics all read free areas through it.
//!
//! ```text
//! sums[(r, c)] = free cells in rows [0, r) x cols [0, c)
//!
//! free(x0..x1, y0..y1) = sums[y1][x1] - sums[y0][x1] - sums[y1][x0] + sums[y0][x0]
//! ```

use super::cell::GridCell;
use super::grid::OccupancyGrid;
use super::region::RegionBounds;

/// Summed-area table of free cells.
#[derive(Clone, Debug)]
pub struct AreaTable {
    rows: usize,
    cols: usize,
    /// (rows + 1) x (cols + 1), row-major
    sums: Vec<usize>,
}

impl AreaTable {
    /// Build the table for a grid.
    pub fn new(grid: &OccupancyGrid) -> Self {
        let rows = grid.rows();
        let cols = grid.cols();
        let stride = cols + 1;
        let mut sums = vec![0usize; (rows + 1) * stride];

        for row in 0..rows {
            let mut row_sum = 0;
            for col in 0..cols {
                if grid.is_free(GridCell::new(row, col)) {
                    row_sum += 1;
                }
                sums[(row + 1) * stride + col + 1] = sums[row * stride + col + 1] + row_sum;
            }
        }

        Self { rows, cols, sums }
    }

    #[inline]
    fn at(&self, row: usize, col: usize) -> usize {
        self.sums[row * (self.cols + 1) + col]
    }

    /// Grid rows covered by the table.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Grid columns covered by the table.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total free cells.
    #[inline]
    pub fn total(&self) -> usize {
        self.at(self.rows, self.cols)
    }

    /// Free cells inside `bounds` (clipped to the grid).
    pub fn free_in(&self, bounds: &RegionBounds) -> usize {
        let b = bounds.clip(self.rows, self.cols);
        self.at(b.y_max, b.x_max) + self.at(b.y_min, b.x_min)
            - self.at(b.y_min, b.x_max)
            - self.at(b.y_max, b.x_min)
    }

    /// Free cells in one column.
    pub fn column_free(&self, col: usize) -> usize {
        self.free_in(&RegionBounds::strip(col, col + 1, self.rows))
    }

    /// Free cells of `row` restricted to columns `[x_min, x_max)`.
    pub fn row_free(&self, row: usize, x_min: usize, x_max: usize) -> usize {
        self.free_in(&RegionBounds::new(x_min, x_max, row, row + 1))
    }
}
