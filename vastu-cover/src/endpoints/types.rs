//! Endpoint records and interior-bias snapping.

use serde::Serialize;

use crate::core::{BoundaryPoint, Subregion};

/// Start and end point of one (sub)region's path.
///
/// Points are in polygon coordinates (x = column line, y = row line).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct EndpointRecord {
    /// Region number (1-based, left to right)
    pub region: usize,
    /// Which part of the strip the record covers
    pub subregion: Subregion,
    /// Path start
    pub start: BoundaryPoint,
    /// Path end
    pub end: BoundaryPoint,
    /// A fallback location replaced a missing boundary intersection
    pub degenerate: bool,
}

/// Round a fractional coordinate one cell toward `mid`.
///
/// Integral values are kept. Values above `mid` round down, all others up,
/// so a snapped point never moves outward past the boundary.
#[inline]
pub fn snap_toward(value: f64, mid: f64) -> f64 {
    if value.fract() == 0.0 {
        value
    } else if value > mid {
        value.floor()
    } else {
        value.ceil()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_toward() {
        assert_eq!(snap_toward(3.0, 5.0), 3.0);
        assert_eq!(snap_toward(7.4, 5.0), 7.0);
        assert_eq!(snap_toward(2.2, 5.0), 3.0);
        // Exactly at the midpoint rounds up
        assert_eq!(snap_toward(5.5, 5.5), 6.0);
    }
}
