//! Path endpoint generation.
//!
//! Each (sub)region path starts and ends where the divider lines cross the
//! outer boundary polygon, so that the robot finishes one region close to
//! where the next one begins.
//!
//! - [`PathEndpointGenerator`] - per-region start/end rules
//! - [`BoundaryIntersector`] - segment/boundary intersection capability,
//!   implemented by [`SegmentClipper`]
//!
//! Fractional crossings are snapped one cell toward the grid interior; when
//! the geometry yields no usable crossing, the nearest boundary point to the
//! intended location is used and the record is flagged `degenerate`.

mod generator;
mod intersect;
mod types;

pub use generator::PathEndpointGenerator;
pub use intersect::{BoundaryIntersector, SegmentClipper};
pub use types::{EndpointRecord, snap_toward};
