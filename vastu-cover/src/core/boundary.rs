//! Boundary polygon geometry.
//!
//! Polygon coordinates share the grid's axes: `x` runs along columns and `y`
//! along rows, with integral values on cell edges.

use serde::{Deserialize, Serialize};

/// Point on (or near) the boundary polygon.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundaryPoint {
    /// Column axis
    pub x: f64,
    /// Row axis
    pub y: f64,
}

impl BoundaryPoint {
    /// Create a new point
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance
    #[inline]
    pub fn distance_squared(&self, other: &BoundaryPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Approximate equality within `epsilon` on both axes
    #[inline]
    pub fn approx_eq(&self, other: &BoundaryPoint, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }
}

impl From<(f64, f64)> for BoundaryPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Directed line segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    /// Start point
    pub start: BoundaryPoint,
    /// End point
    pub end: BoundaryPoint,
}

impl Segment {
    /// Create a new segment
    #[inline]
    pub const fn new(start: BoundaryPoint, end: BoundaryPoint) -> Self {
        Self { start, end }
    }

    /// Vertical segment at `x` spanning `[y0, y1]`.
    #[inline]
    pub fn vertical(x: f64, y0: f64, y1: f64) -> Self {
        Self::new(BoundaryPoint::new(x, y0), BoundaryPoint::new(x, y1))
    }

    /// Horizontal segment at `y` spanning `[x0, x1]`.
    #[inline]
    pub fn horizontal(y: f64, x0: f64, x1: f64) -> Self {
        Self::new(BoundaryPoint::new(x0, y), BoundaryPoint::new(x1, y))
    }

    /// Direction vector (end - start)
    #[inline]
    pub fn direction(&self) -> (f64, f64) {
        (self.end.x - self.start.x, self.end.y - self.start.y)
    }

    /// Point at parameter `t` (0 = start, 1 = end)
    #[inline]
    pub fn point_at(&self, t: f64) -> BoundaryPoint {
        let (dx, dy) = self.direction();
        BoundaryPoint::new(self.start.x + t * dx, self.start.y + t * dy)
    }

    /// Parameter of the point on this segment closest to `p`, in `[0, 1]`.
    pub fn project(&self, p: &BoundaryPoint) -> f64 {
        let (dx, dy) = self.direction();
        let len_sq = dx * dx + dy * dy;
        if len_sq <= f64::EPSILON {
            return 0.0;
        }
        (((p.x - self.start.x) * dx + (p.y - self.start.y) * dy) / len_sq).clamp(0.0, 1.0)
    }
}

/// Closed boundary ring supplied by the layout.
///
/// The ring is closed implicitly: an edge always joins the last point back to
/// the first, and a repeated closing point only adds a zero-length edge.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundaryPolygon {
    points: Vec<BoundaryPoint>,
}

impl BoundaryPolygon {
    /// Create a polygon from its ordered vertices.
    pub fn new(points: Vec<BoundaryPoint>) -> Self {
        Self { points }
    }

    /// Axis-aligned rectangle `[0, width] x [0, height]`.
    pub fn rectangle(width: f64, height: f64) -> Self {
        Self::new(vec![
            BoundaryPoint::new(0.0, 0.0),
            BoundaryPoint::new(width, 0.0),
            BoundaryPoint::new(width, height),
            BoundaryPoint::new(0.0, height),
        ])
    }

    /// Vertices in ring order.
    pub fn points(&self) -> &[BoundaryPoint] {
        &self.points
    }

    /// True when the polygon has no vertices.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Edges of the closed ring, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        let n = self.points.len();
        let count = if n < 2 { 0 } else { n };
        (0..count).map(move |i| Segment::new(self.points[i], self.points[(i + 1) % n]))
    }

    /// `(min_y, max_y)` over all vertices, or `None` for an empty polygon.
    pub fn y_extent(&self) -> Option<(f64, f64)> {
        self.points.iter().fold(None, |acc, p| match acc {
            None => Some((p.y, p.y)),
            Some((lo, hi)) => Some((lo.min(p.y), hi.max(p.y))),
        })
    }

    /// Point on the ring closest to `target`.
    pub fn nearest_point(&self, target: BoundaryPoint) -> Option<BoundaryPoint> {
        if self.points.len() == 1 {
            return Some(self.points[0]);
        }
        self.edges()
            .map(|edge| edge.point_at(edge.project(&target)))
            .min_by(|a, b| {
                a.distance_squared(&target)
                    .total_cmp(&b.distance_squared(&target))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rectangle_edges() {
        let poly = BoundaryPolygon::rectangle(4.0, 3.0);
        let edges: Vec<Segment> = poly.edges().collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3].end, BoundaryPoint::new(0.0, 0.0));
        assert_eq!(poly.y_extent(), Some((0.0, 3.0)));
    }

    #[test]
    fn test_degenerate_polygons() {
        assert_eq!(BoundaryPolygon::default().edges().count(), 0);
        assert_eq!(BoundaryPolygon::default().nearest_point(BoundaryPoint::default()), None);

        let single = BoundaryPolygon::new(vec![BoundaryPoint::new(1.0, 2.0)]);
        assert_eq!(single.edges().count(), 0);
        assert_eq!(
            single.nearest_point(BoundaryPoint::new(5.0, 5.0)),
            Some(BoundaryPoint::new(1.0, 2.0))
        );
    }

    #[test]
    fn test_projection() {
        let seg = Segment::horizontal(2.0, 0.0, 10.0);
        assert_relative_eq!(seg.project(&BoundaryPoint::new(2.5, 7.0)), 0.25);
        assert_relative_eq!(seg.project(&BoundaryPoint::new(-3.0, 0.0)), 0.0);
        assert_relative_eq!(seg.project(&BoundaryPoint::new(30.0, 0.0)), 1.0);
    }

    #[test]
    fn test_nearest_point() {
        let poly = BoundaryPolygon::rectangle(10.0, 6.0);
        let p = poly.nearest_point(BoundaryPoint::new(4.0, 5.0)).unwrap();
        assert_relative_eq!(p.x, 4.0);
        assert_relative_eq!(p.y, 6.0);

        let p = poly.nearest_point(BoundaryPoint::new(0.5, 3.0)).unwrap();
        assert_relative_eq!(p.x, 0.0);
        assert_relative_eq!(p.y, 3.0);
    }
}
