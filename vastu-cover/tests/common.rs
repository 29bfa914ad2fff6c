//! Test utilities for VastuCover.
//!
//! Layout builders for typical rooms and path property checks.

#![allow(dead_code)]

use std::collections::HashSet;

use vastu_cover::{BoundaryPoint, GridCell, GridLayout, OccupancyGrid, RegionBounds};

/// Obstacle-free rectangular room with a matching boundary.
pub fn open_room(rows: usize, cols: usize) -> GridLayout {
    GridLayout::new(rows, cols)
        .unwrap()
        .with_rectangular_boundary()
}

/// Rectangular room with a 2x2 pillar whose lower-left cell is `(row, col)`.
pub fn pillar_room(rows: usize, cols: usize, row: usize, col: usize) -> GridLayout {
    let pillar = (row..row + 2).flat_map(|r| (col..col + 2).map(move |c| GridCell::new(r, c)));
    open_room(rows, cols).with_obstacles(pillar)
}

/// 10x12 L-shaped room: the top-right 4x6 block is outside the walls.
///
/// ```text
///  10 +-----+
///     |     |
///   6 |     +-----+
///     |           |
///   0 +-----------+
///     0     6     12
/// ```
pub fn l_room() -> GridLayout {
    let outside = (6..10).flat_map(|r| (6..12).map(move |c| GridCell::new(r, c)));
    GridLayout::new(10, 12)
        .unwrap()
        .with_obstacles(outside)
        .with_boundary(vec![
            BoundaryPoint::new(0.0, 0.0),
            BoundaryPoint::new(12.0, 0.0),
            BoundaryPoint::new(12.0, 6.0),
            BoundaryPoint::new(6.0, 6.0),
            BoundaryPoint::new(6.0, 10.0),
            BoundaryPoint::new(0.0, 10.0),
        ])
}

/// Assert the path is simple, 4-connected and obstacle free.
pub fn assert_valid_path(grid: &OccupancyGrid, path: &[GridCell]) {
    for pair in path.windows(2) {
        assert!(
            pair[0].is_adjacent(&pair[1]),
            "({}, {}) -> ({}, {}) is not a single step",
            pair[0].row,
            pair[0].col,
            pair[1].row,
            pair[1].col
        );
    }
    let distinct: HashSet<GridCell> = path.iter().copied().collect();
    assert_eq!(distinct.len(), path.len(), "path repeats a cell");
    for cell in path {
        assert!(grid.is_free(*cell), "path enters obstacle ({}, {})", cell.row, cell.col);
    }
}

/// Assert every cell of the path lies inside `bounds`.
pub fn assert_within(bounds: &RegionBounds, path: &[GridCell]) {
    assert!(path.iter().all(|&c| bounds.contains(c)));
}
