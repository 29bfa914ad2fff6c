//! Cell types for the coverage grid.

use serde::{Deserialize, Serialize};

/// Occupancy state of a single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum CellState {
    /// Traversable cell
    #[default]
    Free = 0,
    /// Blocked cell, never part of a path
    Obstacle = 1,
}

impl CellState {
    /// Can a path visit this cell?
    #[inline]
    pub fn is_free(self) -> bool {
        matches!(self, CellState::Free)
    }

    /// Is this cell blocked?
    #[inline]
    pub fn is_obstacle(self) -> bool {
        matches!(self, CellState::Obstacle)
    }

    /// Single character representation for debugging
    pub fn as_char(self) -> char {
        match self {
            CellState::Free => '.',
            CellState::Obstacle => '#',
        }
    }
}

/// Grid cell identity: 0-indexed (row, column).
///
/// Rows grow along the boundary polygon's y axis and columns along its x
/// axis, so cell `(row, col)` covers the unit square `[col, col + 1) x
/// [row, row + 1)` in polygon coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridCell {
    /// Row index (y)
    pub row: usize,
    /// Column index (x)
    pub col: usize,
}

impl GridCell {
    /// Create a new grid cell
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance to another cell
    #[inline]
    pub fn manhattan_distance(&self, other: &GridCell) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// True when the two cells differ by exactly one step along one axis.
    #[inline]
    pub fn is_adjacent(&self, other: &GridCell) -> bool {
        self.manhattan_distance(other) == 1
    }

    /// The 4 cardinal neighbours inside a `rows x cols` grid.
    ///
    /// Neighbour order is right, down, left, up; out-of-grid slots are `None`.
    #[inline]
    pub fn neighbors_4(&self, rows: usize, cols: usize) -> [Option<GridCell>; 4] {
        let right = (self.col + 1 < cols).then(|| GridCell::new(self.row, self.col + 1));
        let down = (self.row + 1 < rows).then(|| GridCell::new(self.row + 1, self.col));
        let left = self
            .col
            .checked_sub(1)
            .map(|col| GridCell::new(self.row, col));
        let up = self
            .row
            .checked_sub(1)
            .map(|row| GridCell::new(row, self.col));
        [right, down, left, up]
    }
}

impl From<(usize, usize)> for GridCell {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl From<GridCell> for (usize, usize) {
    fn from(cell: GridCell) -> Self {
        (cell.row, cell.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_state() {
        assert!(CellState::Free.is_free());
        assert!(CellState::Obstacle.is_obstacle());
        assert_eq!(CellState::default(), CellState::Free);
        assert_eq!(CellState::Obstacle.as_char(), '#');
    }

    #[test]
    fn test_manhattan_distance() {
        let a = GridCell::new(0, 0);
        let b = GridCell::new(3, 3);
        assert_eq!(a.manhattan_distance(&b), 6);
        assert_eq!(b.manhattan_distance(&a), 6);
        assert!(GridCell::new(2, 2).is_adjacent(&GridCell::new(2, 3)));
        assert!(!GridCell::new(2, 2).is_adjacent(&GridCell::new(3, 3)));
        assert!(!a.is_adjacent(&a));
    }

    #[test]
    fn test_neighbors_order() {
        let n = GridCell::new(1, 1).neighbors_4(3, 3);
        assert_eq!(
            n,
            [
                Some(GridCell::new(1, 2)),
                Some(GridCell::new(2, 1)),
                Some(GridCell::new(1, 0)),
                Some(GridCell::new(0, 1)),
            ]
        );
    }

    #[test]
    fn test_neighbors_corner() {
        let n = GridCell::new(0, 0).neighbors_4(2, 2);
        assert_eq!(n[0], Some(GridCell::new(0, 1)));
        assert_eq!(n[1], Some(GridCell::new(1, 0)));
        assert_eq!(n[2], None);
        assert_eq!(n[3], None);

        let n = GridCell::new(1, 1).neighbors_4(2, 2);
        assert_eq!(n[0], None);
        assert_eq!(n[1], None);
    }

    #[test]
    fn test_tuple_conversion() {
        let cell: GridCell = (2, 5).into();
        assert_eq!(cell, GridCell::new(2, 5));
        let tuple: (usize, usize) = cell.into();
        assert_eq!(tuple, (2, 5));
    }
}
