//! Region bounds and sub-region tags.
//!
//! A region is a half-open rectangle of the global grid. Paths are searched in
//! region-local coordinates (origin at the region's lower-left cell) and
//! translated back afterwards; [`RegionBounds::to_local`] and
//! [`RegionBounds::to_global`] are exact inverses for cells inside the region.

use serde::{Deserialize, Serialize};

use super::cell::GridCell;

/// Which part of a vertical strip a path covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subregion {
    /// The full strip (no horizontal divider)
    Whole,
    /// Rows at or above the horizontal divider
    Upper,
    /// Rows below the horizontal divider
    Lower,
}

impl Subregion {
    /// Lowercase name, as used in logs and serialized output.
    pub fn as_str(self) -> &'static str {
        match self {
            Subregion::Whole => "whole",
            Subregion::Upper => "upper",
            Subregion::Lower => "lower",
        }
    }
}

impl std::fmt::Display for Subregion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Half-open cell rectangle `[x_min, x_max) x [y_min, y_max)`.
///
/// `x` indexes columns and `y` indexes rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegionBounds {
    /// First column
    pub x_min: usize,
    /// One past the last column
    pub x_max: usize,
    /// First row
    pub y_min: usize,
    /// One past the last row
    pub y_max: usize,
}

impl RegionBounds {
    /// Create bounds from column and row ranges.
    #[inline]
    pub const fn new(x_min: usize, x_max: usize, y_min: usize, y_max: usize) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// A vertical strip spanning every row.
    #[inline]
    pub const fn strip(x_min: usize, x_max: usize, rows: usize) -> Self {
        Self::new(x_min, x_max, 0, rows)
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.x_max.saturating_sub(self.x_min)
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.y_max.saturating_sub(self.y_min)
    }

    /// Number of cells.
    #[inline]
    pub fn area(&self) -> usize {
        self.width() * self.height()
    }

    /// Zero-area bounds cannot host a path.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.area() == 0
    }

    /// Does the region contain this global cell?
    #[inline]
    pub fn contains(&self, cell: GridCell) -> bool {
        (self.y_min..self.y_max).contains(&cell.row) && (self.x_min..self.x_max).contains(&cell.col)
    }

    /// Intersect with a `rows x cols` grid.
    pub fn clip(&self, rows: usize, cols: usize) -> Self {
        let x_max = self.x_max.min(cols);
        let y_max = self.y_max.min(rows);
        Self::new(self.x_min.min(x_max), x_max, self.y_min.min(y_max), y_max)
    }

    /// Global cell to region-local cell. Caller guarantees `contains(cell)`.
    #[inline]
    pub fn to_local(&self, cell: GridCell) -> GridCell {
        GridCell::new(cell.row - self.y_min, cell.col - self.x_min)
    }

    /// Region-local cell to global cell.
    #[inline]
    pub fn to_global(&self, cell: GridCell) -> GridCell {
        GridCell::new(cell.row + self.y_min, cell.col + self.x_min)
    }

    /// Translate a whole local path into global coordinates.
    pub fn path_to_global(&self, path: &[GridCell]) -> Vec<GridCell> {
        path.iter().map(|&c| self.to_global(c)).collect()
    }

    /// Translate a global (row, col), possibly outside the region, into the
    /// nearest local cell. Requires a non-empty region.
    pub fn clamp_to_local(&self, row: i64, col: i64) -> GridCell {
        let local_row = (row - self.y_min as i64).clamp(0, self.height() as i64 - 1);
        let local_col = (col - self.x_min as i64).clamp(0, self.width() as i64 - 1);
        GridCell::new(local_row as usize, local_col as usize)
    }
}
