//! Layout collaborator interface.
//!
//! The planner does not build layouts; it reads grid dimensions, the
//! obstacle mask and the boundary ring from anything implementing
//! [`Layout`]. [`GridLayout`] is a small in-memory implementation for
//! callers that already hold the data.

use crate::core::{BoundaryPoint, BoundaryPolygon, CellState, GridCell, OccupancyGrid};
use crate::error::Result;

/// Read-only view of a coverage layout.
pub trait Layout {
    /// Number of grid rows.
    fn rows(&self) -> usize;

    /// Number of grid columns.
    fn cols(&self) -> usize;

    /// Is the cell at (row, col) blocked?
    fn is_obstacle(&self, row: usize, col: usize) -> bool;

    /// Ordered boundary ring in grid coordinates (x = column, y = row).
    fn boundary_points(&self) -> &[BoundaryPoint];

    /// Snapshot of the obstacle mask as an [`OccupancyGrid`].
    fn occupancy_grid(&self) -> Result<OccupancyGrid> {
        let rows = self.rows();
        let cols = self.cols();
        let mut grid = OccupancyGrid::new(rows, cols)?;
        for row in 0..rows {
            for col in 0..cols {
                if self.is_obstacle(row, col) {
                    grid.set(GridCell::new(row, col), CellState::Obstacle);
                }
            }
        }
        Ok(grid)
    }

    /// Boundary ring as a polygon.
    fn boundary_polygon(&self) -> BoundaryPolygon {
        BoundaryPolygon::new(self.boundary_points().to_vec())
    }
}

/// In-memory layout: an occupancy grid plus a boundary ring.
#[derive(Clone, Debug)]
pub struct GridLayout {
    grid: OccupancyGrid,
    boundary: Vec<BoundaryPoint>,
}

impl GridLayout {
    /// Obstacle-free layout without a boundary.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        Ok(Self::from_grid(OccupancyGrid::new(rows, cols)?))
    }

    /// Wrap an existing grid.
    pub fn from_grid(grid: OccupancyGrid) -> Self {
        Self {
            grid,
            boundary: Vec::new(),
        }
    }

    /// Parse an ASCII picture: `#` is an obstacle, anything else is free.
    ///
    /// The first line is row 0 (the same orientation as
    /// [`OccupancyGrid::render`]). All lines must have the same width.
    pub fn from_ascii(lines: &[&str]) -> Result<Self> {
        let rows = lines.len();
        let cols = lines.first().map_or(0, |l| l.chars().count());
        let mut mask = Vec::with_capacity(rows * cols);
        for line in lines {
            mask.extend(line.chars().map(|c| c == '#'));
        }
        Ok(Self::from_grid(OccupancyGrid::from_mask(rows, cols, &mask)?))
    }

    /// Add obstacle cells.
    pub fn with_obstacles<I>(mut self, obstacles: I) -> Self
    where
        I: IntoIterator<Item = GridCell>,
    {
        for cell in obstacles {
            self.grid.set(cell, CellState::Obstacle);
        }
        self
    }

    /// Set the boundary ring.
    pub fn with_boundary(mut self, points: Vec<BoundaryPoint>) -> Self {
        self.boundary = points;
        self
    }

    /// Use the grid's outer rectangle `[0, cols] x [0, rows]` as boundary.
    pub fn with_rectangular_boundary(self) -> Self {
        let rect = BoundaryPolygon::rectangle(self.grid.cols() as f64, self.grid.rows() as f64);
        let points = rect.points().to_vec();
        self.with_boundary(points)
    }

    /// Underlying grid.
    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }
}

impl Layout for GridLayout {
    fn rows(&self) -> usize {
        self.grid.rows()
    }

    fn cols(&self) -> usize {
        self.grid.cols()
    }

    fn is_obstacle(&self, row: usize, col: usize) -> bool {
        self.grid.is_obstacle(GridCell::new(row, col))
    }

    fn boundary_points(&self) -> &[BoundaryPoint] {
        &self.boundary
    }

    fn occupancy_grid(&self) -> Result<OccupancyGrid> {
        Ok(self.grid.clone())
    }
}
