//! Divider output types.

use serde::{Deserialize, Serialize};

use crate::core::RegionBounds;

/// Horizontal split of the vertical strip `[x_min, x_max)`.
///
/// Rows `[0, row)` form the lower sub-region and `[row, rows)` the upper one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HorizontalDivider {
    /// First column of the strip
    pub x_min: usize,
    /// One past the last column of the strip
    pub x_max: usize,
    /// Split row
    pub row: usize,
}

impl HorizontalDivider {
    /// Does this divider belong to the strip `[x_min, x_max)`?
    #[inline]
    pub fn splits(&self, x_min: usize, x_max: usize) -> bool {
        self.x_min == x_min && self.x_max == x_max
    }

    /// Upper sub-region bounds in a grid with `rows` rows.
    pub fn upper(&self, rows: usize) -> RegionBounds {
        RegionBounds::new(self.x_min, self.x_max, self.row, rows)
    }

    /// Lower sub-region bounds.
    pub fn lower(&self) -> RegionBounds {
        RegionBounds::new(self.x_min, self.x_max, 0, self.row)
    }
}

/// Free-cell areas of one strip and its sub-regions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SubregionArea {
    /// Region number (1-based, left to right)
    pub region: usize,
    /// Free cells in the whole strip
    pub total: usize,
    /// Free cells above the split, if the strip is split
    pub upper: Option<usize>,
    /// Free cells below the split, if the strip is split
    pub lower: Option<usize>,
    /// Split row, if any
    pub split: Option<usize>,
}
