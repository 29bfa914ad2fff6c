//! Path endpoints from divider / boundary intersections.

use log::{debug, trace};

use super::intersect::{BoundaryIntersector, SegmentClipper};
use super::types::{EndpointRecord, snap_toward};
use crate::core::{BoundaryPoint, BoundaryPolygon, Segment, Subregion};
use crate::divider::{HorizontalDivider, strip_bounds};
use crate::layout::Layout;

/// Assigns a start/end pair to every (sub)region.
///
/// Endpoints sit where the divider lines meet the outer boundary so that
/// consecutive regions hand over near each other.
#[derive(Clone, Debug)]
pub struct PathEndpointGenerator<I = SegmentClipper> {
    rows: usize,
    cols: usize,
    polygon: BoundaryPolygon,
    intersector: I,
}

impl PathEndpointGenerator<SegmentClipper> {
    /// Generator for a `rows x cols` grid bounded by `polygon`.
    pub fn new(rows: usize, cols: usize, polygon: BoundaryPolygon) -> Self {
        Self::with_intersector(rows, cols, polygon, SegmentClipper::default())
    }

    /// Generator reading dimensions and boundary from a layout.
    pub fn from_layout<L: Layout + ?Sized>(layout: &L) -> Self {
        Self::new(layout.rows(), layout.cols(), layout.boundary_polygon())
    }
}

impl<I: BoundaryIntersector> PathEndpointGenerator<I> {
    /// Generator with a custom intersection backend.
    pub fn with_intersector(
        rows: usize,
        cols: usize,
        polygon: BoundaryPolygon,
        intersector: I,
    ) -> Self {
        Self {
            rows,
            cols,
            polygon,
            intersector,
        }
    }

    /// Boundary polygon.
    pub fn polygon(&self) -> &BoundaryPolygon {
        &self.polygon
    }

    /// Boundary crossings of the vertical line at `x`, bottom to top.
    ///
    /// The line spans the polygon's whole y extent. Fractional y values are
    /// snapped one cell toward mid-height.
    pub fn find_intersection_points(&self, x: f64) -> Vec<BoundaryPoint> {
        let Some((y_lo, y_hi)) = self.polygon.y_extent() else {
            return Vec::new();
        };
        let line = Segment::vertical(x, y_lo - 1.0, y_hi + 1.0);
        let mid = self.rows as f64 / 2.0;
        self.intersector
            .intersect(&line, &self.polygon)
            .into_iter()
            .map(|p| BoundaryPoint::new(p.x, snap_toward(p.y, mid)))
            .collect()
    }

    /// Boundary crossings of the horizontal divider at `row` spanning
    /// `[x_min, x_max]`, left to right.
    ///
    /// Fractional x values are snapped one cell toward the strip's middle.
    pub fn find_horizontal_intersection_points(
        &self,
        row: usize,
        x_min: usize,
        x_max: usize,
    ) -> Vec<BoundaryPoint> {
        let line = Segment::horizontal(row as f64, x_min as f64, x_max as f64);
        let mid = x_min as f64 + (x_max - x_min) as f64 / 2.0;
        self.intersector
            .intersect(&line, &self.polygon)
            .into_iter()
            .map(|p| BoundaryPoint::new(snap_toward(p.x, mid), p.y))
            .collect()
    }

    /// One record per strip, or an upper and a lower record for split
    /// strips, in region order.
    pub fn generate_endpoints_for_all_regions(
        &self,
        vertical: &[usize],
        horizontal: &[HorizontalDivider],
    ) -> Vec<EndpointRecord> {
        let strips = strip_bounds(vertical, self.rows, self.cols);
        let last = strips.len().saturating_sub(1);
        let mut records = Vec::with_capacity(strips.len() * 2);

        for (i, bounds) in strips.iter().enumerate() {
            let strip = Strip {
                region: i + 1,
                x_min: bounds.x_min,
                x_max: bounds.x_max,
                left: self.find_intersection_points(bounds.x_min as f64),
                right: self.find_intersection_points(bounds.x_max as f64),
            };
            trace!(
                "[Endpoints] Region {}: left {:?}, right {:?}",
                strip.region, strip.left, strip.right
            );

            let split = horizontal
                .iter()
                .find(|h| h.splits(bounds.x_min, bounds.x_max))
                .map(|h| h.row);

            match split {
                Some(row) => {
                    let crossings =
                        self.find_horizontal_intersection_points(row, strip.x_min, strip.x_max);
                    let (upper, lower) = if i == 0 {
                        self.first_region(&strip, row, &crossings)
                    } else if i == last {
                        self.last_region(&strip, row, &crossings)
                    } else {
                        self.interior_region(&strip, row)
                    };
                    records.push(upper);
                    records.push(lower);
                }
                None => records.push(self.whole_region(&strip)),
            }
        }

        for record in records.iter().filter(|r| r.degenerate) {
            debug!(
                "[Endpoints] Region {} ({}) used fallback endpoints {:?} -> {:?}",
                record.region, record.subregion, record.start, record.end
            );
        }
        records
    }

    /// Region 1: the boundary side is on the left, so both halves start at
    /// the split's boundary crossing.
    fn first_region(
        &self,
        strip: &Strip,
        split: usize,
        crossings: &[BoundaryPoint],
    ) -> (EndpointRecord, EndpointRecord) {
        let mut fallback = false;
        let x_min = strip.x_min as f64;
        let x_max = strip.x_max as f64;
        let y_split = split as f64;

        let start = nearest_in_x(crossings, x_min)
            .or_else(|| strip.left.first().copied())
            .unwrap_or_else(|| self.fallback_point(x_min, y_split, &mut fallback));
        let upper_end = highest_at_or_above(&strip.right, y_split)
            .unwrap_or_else(|| self.fallback_point(x_max, self.rows as f64, &mut fallback));
        let lower_end = lowest_at_or_below(&strip.right, y_split)
            .unwrap_or_else(|| self.fallback_point(x_max, 0.0, &mut fallback));

        (
            strip.record(Subregion::Upper, start, upper_end, fallback),
            strip.record(Subregion::Lower, start, lower_end, fallback),
        )
    }

    /// Last region: the boundary side is on the right, so both halves end
    /// at the split's boundary crossing.
    fn last_region(
        &self,
        strip: &Strip,
        split: usize,
        crossings: &[BoundaryPoint],
    ) -> (EndpointRecord, EndpointRecord) {
        let mut fallback = false;
        let x_min = strip.x_min as f64;
        let x_max = strip.x_max as f64;
        let y_split = split as f64;

        let end = nearest_in_x(crossings, x_max)
            .or_else(|| strip.right.first().copied())
            .unwrap_or_else(|| self.fallback_point(x_max, y_split, &mut fallback));
        let upper_start = highest_at_or_above(&strip.left, y_split)
            .unwrap_or_else(|| self.fallback_point(x_min, self.rows as f64, &mut fallback));
        let lower_start = lowest_at_or_below(&strip.left, y_split)
            .unwrap_or_else(|| self.fallback_point(x_min, 0.0, &mut fallback));

        (
            strip.record(Subregion::Upper, upper_start, end, fallback),
            strip.record(Subregion::Lower, lower_start, end, fallback),
        )
    }

    /// Interior regions: upper half runs between the highest crossings,
    /// lower half between the lowest. Missing sides use the split corner.
    fn interior_region(&self, strip: &Strip, split: usize) -> (EndpointRecord, EndpointRecord) {
        let mut fallback = false;
        let y_split = split as f64;
        let mut corner = |x: usize| {
            fallback = true;
            BoundaryPoint::new(x as f64, y_split)
        };

        let upper_start =
            highest_at_or_above(&strip.left, y_split).unwrap_or_else(|| corner(strip.x_min));
        let upper_end =
            highest_at_or_above(&strip.right, y_split).unwrap_or_else(|| corner(strip.x_max));
        let lower_start =
            lowest_at_or_below(&strip.left, y_split).unwrap_or_else(|| corner(strip.x_min));
        let lower_end =
            lowest_at_or_below(&strip.right, y_split).unwrap_or_else(|| corner(strip.x_max));

        (
            strip.record(Subregion::Upper, upper_start, upper_end, fallback),
            strip.record(Subregion::Lower, lower_start, lower_end, fallback),
        )
    }

    /// Unsplit strip: top of the left line to the bottom of the right line.
    fn whole_region(&self, strip: &Strip) -> EndpointRecord {
        let start = highest(&strip.left);
        let end = lowest(&strip.right);
        match (start, end) {
            (Some(start), Some(end)) => strip.record(Subregion::Whole, start, end, false),
            _ => {
                let mid = (self.rows / 2) as f64;
                strip.record(
                    Subregion::Whole,
                    BoundaryPoint::new(strip.x_min as f64, mid),
                    BoundaryPoint::new(strip.x_max as f64, mid),
                    true,
                )
            }
        }
    }

    /// Boundary point nearest to the intended location, snapped inward.
    ///
    /// Without a boundary the intended location itself is used.
    fn fallback_point(&self, x: f64, y: f64, used: &mut bool) -> BoundaryPoint {
        *used = true;
        let wanted = BoundaryPoint::new(x, y);
        let p = self.polygon.nearest_point(wanted).unwrap_or(wanted);
        BoundaryPoint::new(
            snap_toward(p.x, self.cols as f64 / 2.0),
            snap_toward(p.y, self.rows as f64 / 2.0),
        )
    }
}

/// Divider-line crossings of one strip.
struct Strip {
    region: usize,
    x_min: usize,
    x_max: usize,
    left: Vec<BoundaryPoint>,
    right: Vec<BoundaryPoint>,
}

impl Strip {
    fn record(
        &self,
        subregion: Subregion,
        start: BoundaryPoint,
        end: BoundaryPoint,
        degenerate: bool,
    ) -> EndpointRecord {
        EndpointRecord {
            region: self.region,
            subregion,
            start,
            end,
            degenerate,
        }
    }
}

fn nearest_in_x(points: &[BoundaryPoint], x: f64) -> Option<BoundaryPoint> {
    points
        .iter()
        .copied()
        .min_by(|a, b| (a.x - x).abs().total_cmp(&(b.x - x).abs()))
}

fn highest(points: &[BoundaryPoint]) -> Option<BoundaryPoint> {
    points.iter().copied().max_by(|a, b| a.y.total_cmp(&b.y))
}

fn lowest(points: &[BoundaryPoint]) -> Option<BoundaryPoint> {
    points.iter().copied().min_by(|a, b| a.y.total_cmp(&b.y))
}

fn highest_at_or_above(points: &[BoundaryPoint], y: f64) -> Option<BoundaryPoint> {
    points
        .iter()
        .copied()
        .filter(|p| p.y >= y)
        .max_by(|a, b| a.y.total_cmp(&b.y))
}

fn lowest_at_or_below(points: &[BoundaryPoint], y: f64) -> Option<BoundaryPoint> {
    points
        .iter()
        .copied()
        .filter(|p| p.y <= y)
        .min_by(|a, b| a.y.total_cmp(&b.y))
}
