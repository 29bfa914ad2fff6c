//! Segment / boundary intersection.

use crate::core::{BoundaryPoint, BoundaryPolygon, Segment};

/// Finds where a divider segment crosses the boundary ring.
pub trait BoundaryIntersector {
    /// Intersection points ordered from `segment.start` to `segment.end`.
    fn intersect(&self, segment: &Segment, polygon: &BoundaryPolygon) -> Vec<BoundaryPoint>;
}

/// Parametric segment/edge clipping.
///
/// Edges parallel to the segment (including collinear overlaps) contribute
/// no points; their end vertices are still found through the neighbouring
/// edges. Points closer than `epsilon` are merged.
#[derive(Clone, Copy, Debug)]
pub struct SegmentClipper {
    /// Parameter and distance tolerance
    pub epsilon: f64,
}

impl Default for SegmentClipper {
    fn default() -> Self {
        Self { epsilon: 1e-9 }
    }
}

#[inline]
fn cross(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    ax * by - ay * bx
}

impl BoundaryIntersector for SegmentClipper {
    fn intersect(&self, segment: &Segment, polygon: &BoundaryPolygon) -> Vec<BoundaryPoint> {
        let eps = self.epsilon;
        let (dx, dy) = segment.direction();
        let mut hits: Vec<(f64, BoundaryPoint)> = Vec::new();

        for edge in polygon.edges() {
            let (ex, ey) = edge.direction();
            let denom = cross(dx, dy, ex, ey);
            if denom.abs() <= eps {
                continue;
            }
            let qx = edge.start.x - segment.start.x;
            let qy = edge.start.y - segment.start.y;
            let t = cross(qx, qy, ex, ey) / denom;
            let u = cross(qx, qy, dx, dy) / denom;
            if (-eps..=1.0 + eps).contains(&t) && (-eps..=1.0 + eps).contains(&u) {
                hits.push((t, segment.point_at(t.clamp(0.0, 1.0))));
            }
        }

        hits.sort_by(|a, b| a.0.total_cmp(&b.0));
        let mut points: Vec<BoundaryPoint> = Vec::with_capacity(hits.len());
        for (_, p) in hits {
            if points.last().is_none_or(|last| !last.approx_eq(&p, eps)) {
                points.push(p);
            }
        }
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_vertical_through_rectangle() {
        let poly = BoundaryPolygon::rectangle(10.0, 6.0);
        let hits = SegmentClipper::default().intersect(&Segment::vertical(4.0, -1.0, 7.0), &poly);
        assert_eq!(hits.len(), 2);
        assert_relative_eq!(hits[0].y, 0.0);
        assert_relative_eq!(hits[1].y, 6.0);
        assert_relative_eq!(hits[1].x, 4.0);
    }

    #[test]
    fn test_collinear_edge_keeps_vertices() {
        let poly = BoundaryPolygon::rectangle(10.0, 6.0);
        let hits = SegmentClipper::default().intersect(&Segment::vertical(0.0, -1.0, 7.0), &poly);
        assert_eq!(hits, vec![BoundaryPoint::new(0.0, 0.0), BoundaryPoint::new(0.0, 6.0)]);
    }

    #[test]
    fn test_slanted_edge() {
        // Triangle with a sloped right side from (4,0) to (0,4)
        let poly = BoundaryPolygon::new(vec![
            BoundaryPoint::new(0.0, 0.0),
            BoundaryPoint::new(4.0, 0.0),
            BoundaryPoint::new(0.0, 4.0),
        ]);
        let hits = SegmentClipper::default().intersect(&Segment::horizontal(1.5, 0.0, 4.0), &poly);
        assert_eq!(hits.len(), 2);
        assert_relative_eq!(hits[0].x, 0.0);
        assert_relative_eq!(hits[1].x, 2.5);
    }

    #[test]
    fn test_miss() {
        let poly = BoundaryPolygon::rectangle(2.0, 2.0);
        let hits = SegmentClipper::default().intersect(&Segment::vertical(5.0, 0.0, 2.0), &poly);
        assert!(hits.is_empty());
        assert!(
            SegmentClipper::default()
                .intersect(&Segment::vertical(1.0, 0.0, 2.0), &BoundaryPolygon::default())
                .is_empty()
        );
    }
}
