//! Area-balanced vertical strips and per-strip horizontal splits.

use log::{debug, info};

use super::types::{HorizontalDivider, SubregionArea};
use crate::core::{AreaTable, OccupancyGrid, RegionBounds};
use crate::error::{CoverError, Result};
use crate::layout::Layout;

/// Splits a grid into regions of roughly equal free area.
#[derive(Clone, Debug)]
pub struct RegionDivider {
    areas: AreaTable,
}

impl RegionDivider {
    /// Divider over `grid`'s free cells.
    pub fn new(grid: &OccupancyGrid) -> Self {
        Self {
            areas: AreaTable::new(grid),
        }
    }

    /// Divider over a layout's obstacle mask.
    pub fn from_layout<L: Layout + ?Sized>(layout: &L) -> Result<Self> {
        Ok(Self::new(&layout.occupancy_grid()?))
    }

    /// Grid rows.
    pub fn rows(&self) -> usize {
        self.areas.rows()
    }

    /// Grid columns.
    pub fn cols(&self) -> usize {
        self.areas.cols()
    }

    /// Free cells in the whole grid.
    pub fn total_free(&self) -> usize {
        self.areas.total()
    }

    /// Free-area table backing this divider.
    pub fn areas(&self) -> &AreaTable {
        &self.areas
    }

    /// `n - 1` column positions splitting the grid into `n` vertical strips.
    ///
    /// Columns are accumulated left to right; a divider is placed once the
    /// running free count reaches `total / n`, or when the remaining column
    /// boundaries are all needed for the dividers still missing.
    pub fn generate_vertical_dividers(&self, n: usize) -> Result<Vec<usize>> {
        let cols = self.cols();
        if n == 0 || n > cols {
            return Err(CoverError::InvalidRegionCount { requested: n, cols });
        }

        let total = self.total_free();
        let target = total as f64 / n as f64;
        debug!("[Divider] Total free area {}, target per region {:.1}", total, target);

        let mut dividers = Vec::with_capacity(n - 1);
        let mut accumulated = 0usize;
        for x in 1..cols {
            let needed = n - 1 - dividers.len();
            if needed == 0 {
                break;
            }
            accumulated += self.areas.column_free(x - 1);
            let forced = cols - x == needed;
            if accumulated as f64 >= target || forced {
                debug!(
                    "[Divider] Vertical divider at x={} (area {}{})",
                    x,
                    accumulated,
                    if forced { ", forced" } else { "" }
                );
                dividers.push(x);
                accumulated = 0;
            }
        }

        info!("[Divider] {} regions -> dividers {:?}", n, dividers);
        Ok(dividers)
    }

    /// One horizontal split per strip, balancing free cells above and below.
    ///
    /// Strips without free cells get no divider.
    pub fn generate_horizontal_dividers(&self, vertical: &[usize]) -> Vec<HorizontalDivider> {
        let rows = self.rows();
        let mut dividers = Vec::new();

        for bounds in self.strips(vertical) {
            let total = self.areas.free_in(&bounds);
            if total == 0 {
                debug!(
                    "[Divider] Strip [{}, {}) has no free cells, not split",
                    bounds.x_min, bounds.x_max
                );
                continue;
            }

            let mut below = 0usize;
            let mut best_row = 0;
            let mut best_diff = usize::MAX;
            for row in 0..rows {
                below += self.areas.row_free(row, bounds.x_min, bounds.x_max);
                let diff = below.abs_diff(total - below);
                if diff < best_diff {
                    best_diff = diff;
                    best_row = row + 1;
                }
            }

            dividers.push(HorizontalDivider {
                x_min: bounds.x_min,
                x_max: bounds.x_max,
                row: best_row,
            });
        }

        dividers
    }

    /// Free cells per vertical strip.
    pub fn calculate_region_areas(&self, vertical: &[usize]) -> Vec<usize> {
        self.strips(vertical)
            .iter()
            .map(|bounds| self.areas.free_in(bounds))
            .collect()
    }

    /// Free cells per strip and, where split, per sub-region.
    pub fn calculate_subregion_areas(
        &self,
        vertical: &[usize],
        horizontal: &[HorizontalDivider],
    ) -> Vec<SubregionArea> {
        let rows = self.rows();
        self.strips(vertical)
            .iter()
            .enumerate()
            .map(|(i, bounds)| {
                let split = horizontal
                    .iter()
                    .find(|h| h.splits(bounds.x_min, bounds.x_max));
                match split {
                    Some(h) => {
                        let upper = self.areas.free_in(&h.upper(rows));
                        let lower = self.areas.free_in(&h.lower());
                        SubregionArea {
                            region: i + 1,
                            total: upper + lower,
                            upper: Some(upper),
                            lower: Some(lower),
                            split: Some(h.row),
                        }
                    }
                    None => SubregionArea {
                        region: i + 1,
                        total: self.areas.free_in(bounds),
                        upper: None,
                        lower: None,
                        split: None,
                    },
                }
            })
            .collect()
    }

    /// Check that positions are strictly increasing and inside `(0, cols)`.
    pub fn validate_dividers(&self, vertical: &[usize]) -> Result<()> {
        let cols = self.cols();
        let in_range = vertical.iter().all(|&x| x > 0 && x < cols);
        let increasing = vertical.windows(2).all(|w| w[0] < w[1]);
        if in_range && increasing {
            Ok(())
        } else {
            Err(CoverError::InvalidDividers {
                positions: vertical.to_vec(),
                cols,
            })
        }
    }

    /// Full-height strip bounds for the given divider positions.
    pub fn strips(&self, vertical: &[usize]) -> Vec<RegionBounds> {
        strip_bounds(vertical, self.rows(), self.cols())
    }
}

/// Full-height strips `[0, d1), [d1, d2), .., [dn, cols)`.
pub fn strip_bounds(vertical: &[usize], rows: usize, cols: usize) -> Vec<RegionBounds> {
    let mut edges = Vec::with_capacity(vertical.len() + 2);
    edges.push(0);
    edges.extend_from_slice(vertical);
    edges.push(cols);
    edges
        .windows(2)
        .map(|w| RegionBounds::strip(w[0], w[1], rows))
        .collect()
}
