//! Core types for the VastuCover library.
//!
//! ## Coordinates
//!
//! Grid cells are addressed as `(row, col)`, 0-indexed. The boundary polygon
//! uses the same axes in continuous form: `x` along columns, `y` along rows,
//! with integral values on cell edges. A vertical divider at `x = k` is the
//! line between column `k - 1` and column `k`.
//!
//! ```text
//!  y (rows)
//!  ^
//!  3 +---+---+---+
//!    |2,0|2,1|2,2|
//!  2 +---+---+---+
//!    |1,0|1,1|1,2|
//!  1 +---+---+---+
//!    |0,0|0,1|0,2|
//!  0 +---+---+---+--> x (cols)
//!    0   1   2   3
//! ```
//!
//! ## Type Categories
//!
//! - [`GridCell`], [`CellState`]: cell identity and occupancy
//! - [`OccupancyGrid`]: the free/obstacle mask
//! - [`AreaTable`]: free-cell prefix sums
//! - [`VisitedMask`]: per-search visited flags
//! - [`RegionBounds`], [`Subregion`]: rectangular regions and their tags
//! - [`BoundaryPoint`], [`Segment`], [`BoundaryPolygon`]: boundary geometry

mod area;
mod boundary;
mod cell;
mod grid;
mod mask;
mod region;

pub use area::AreaTable;
pub use boundary::{BoundaryPoint, BoundaryPolygon, Segment};
pub use cell::{CellState, GridCell};
pub use grid::OccupancyGrid;
pub use mask::VisitedMask;
pub use region::{RegionBounds, Subregion};
