//! Depth-first backtracking toward a long obstacle-free path.
//!
//! Neighbours are ranked by Manhattan distance to the target: while the
//! path is short the search moves away from the target to sweep the region,
//! then it converges once the path covers `threshold` of the free cells.
//! Recursion is replaced by an explicit frame stack so deep regions cannot
//! overflow the thread stack.

use log::{debug, trace};

use super::types::SearchFailure;
use crate::core::{GridCell, OccupancyGrid, VisitedMask};

/// One level of the depth-first search.
struct Frame {
    /// Ranked unvisited neighbours at the time the frame was entered
    candidates: [Option<GridCell>; 4],
    /// Next candidate to try
    next: usize,
}

/// Outcome of a backtracking run, with the work it cost.
pub(crate) struct HamiltonOutcome {
    pub result: Result<Vec<GridCell>, SearchFailure>,
    pub expansions: usize,
}

/// Backtracking search state. Owns its visited mask and path buffer.
pub(crate) struct HamiltonSearch<'a> {
    grid: &'a OccupancyGrid,
    target: GridCell,
    /// Path length at which ranking flips to ascending distance
    switch_len: f64,
    max_expansions: usize,
    visited: VisitedMask,
    path: Vec<GridCell>,
    expansions: usize,
}

impl<'a> HamiltonSearch<'a> {
    pub fn new(
        grid: &'a OccupancyGrid,
        target: GridCell,
        threshold: f64,
        max_expansions: usize,
    ) -> Self {
        Self {
            grid,
            target,
            switch_len: threshold * grid.free_count() as f64,
            max_expansions,
            visited: VisitedMask::from_obstacles(grid),
            path: Vec::with_capacity(grid.free_count()),
            expansions: 0,
        }
    }

    /// Run from `start`.
    pub fn run(mut self, start: GridCell) -> HamiltonOutcome {
        let result = self.search(start);
        match &result {
            Ok(path) => debug!(
                "[Hamilton] Reached target in {} cells, {} expansions",
                path.len(),
                self.expansions
            ),
            Err(failure) => debug!(
                "[Hamilton] Failed after {} expansions: {}",
                self.expansions, failure
            ),
        }
        HamiltonOutcome {
            result,
            expansions: self.expansions,
        }
    }

    fn search(&mut self, start: GridCell) -> Result<Vec<GridCell>, SearchFailure> {
        let mut stack = vec![self.enter(start)];
        if start == self.target {
            return Ok(std::mem::take(&mut self.path));
        }

        while let Some(frame) = stack.last_mut() {
            let next = frame.candidates.get(frame.next).copied().flatten();
            frame.next += 1;

            match next {
                Some(cell) if !self.visited.is_set(cell) => {
                    if self.expansions >= self.max_expansions {
                        return Err(SearchFailure::BudgetExceeded);
                    }
                    let frame = self.enter(cell);
                    if cell == self.target {
                        return Ok(std::mem::take(&mut self.path));
                    }
                    stack.push(frame);
                }
                Some(_) => {}
                None => {
                    // Dead end: unmark and backtrack
                    stack.pop();
                    if let Some(cell) = self.path.pop() {
                        self.visited.clear(cell);
                        trace!("[Hamilton] Backtrack from ({}, {})", cell.row, cell.col);
                    }
                }
            }
        }

        Err(SearchFailure::Exhausted)
    }

    /// Mark `cell`, append it to the path and rank its neighbours.
    fn enter(&mut self, cell: GridCell) -> Frame {
        self.visited.set(cell);
        self.path.push(cell);
        self.expansions += 1;
        Frame {
            candidates: self.rank_neighbors(cell),
            next: 0,
        }
    }

    fn rank_neighbors(&self, cell: GridCell) -> [Option<GridCell>; 4] {
        let mut buf = [cell; 4];
        let mut len = 0;
        for n in cell
            .neighbors_4(self.grid.rows(), self.grid.cols())
            .into_iter()
            .flatten()
        {
            if !self.visited.is_set(n) {
                buf[len] = n;
                len += 1;
            }
        }

        // Stable sort: ties keep neighbour order
        let ranked = &mut buf[..len];
        let target = self.target;
        if (self.path.len() as f64) < self.switch_len {
            ranked.sort_by_key(|n| std::cmp::Reverse(n.manhattan_distance(&target)));
        } else {
            ranked.sort_by_key(|n| n.manhattan_distance(&target));
        }

        let mut candidates = [None; 4];
        for (slot, &n) in candidates.iter_mut().zip(ranked.iter()) {
            *slot = Some(n);
        }
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(
        grid: &OccupancyGrid,
        start: GridCell,
        target: GridCell,
        budget: usize,
    ) -> HamiltonOutcome {
        HamiltonSearch::new(grid, target, 0.7, budget).run(start)
    }

    #[test]
    fn test_center_obstacle() {
        let grid = OccupancyGrid::from_obstacles(3, 3, [GridCell::new(1, 1)]).unwrap();
        let outcome = run(&grid, GridCell::new(0, 0), GridCell::new(2, 2), 1_000);
        let path = outcome.result.unwrap();
        assert_eq!(
            path,
            vec![
                GridCell::new(0, 0),
                GridCell::new(0, 1),
                GridCell::new(0, 2),
                GridCell::new(1, 2),
                GridCell::new(2, 2),
            ]
        );
        assert_eq!(outcome.expansions, 5);
    }

    #[test]
    fn test_start_is_target() {
        let grid = OccupancyGrid::new(2, 2).unwrap();
        let cell = GridCell::new(1, 0);
        let path = run(&grid, cell, cell, 10).result.unwrap();
        assert_eq!(path, vec![cell]);
    }

    #[test]
    fn test_walled_off_target_exhausts() {
        // Column 1 is a wall
        let grid = OccupancyGrid::from_obstacles(
            3,
            3,
            [GridCell::new(0, 1), GridCell::new(1, 1), GridCell::new(2, 1)],
        )
        .unwrap();
        let outcome = run(&grid, GridCell::new(0, 0), GridCell::new(2, 2), 1_000);
        assert_eq!(outcome.result, Err(SearchFailure::Exhausted));
        assert!(outcome.expansions >= 3);
    }

    #[test]
    fn test_budget_exceeded() {
        let grid = OccupancyGrid::from_obstacles(6, 6, [GridCell::new(2, 2)]).unwrap();
        let outcome = run(&grid, GridCell::new(0, 0), GridCell::new(5, 5), 3);
        assert_eq!(outcome.result, Err(SearchFailure::BudgetExceeded));
        assert_eq!(outcome.expansions, 3);
    }

    #[test]
    fn test_path_is_simple_and_avoids_obstacles() {
        let obstacles = [GridCell::new(1, 1), GridCell::new(2, 3), GridCell::new(3, 1)];
        let grid = OccupancyGrid::from_obstacles(5, 5, obstacles).unwrap();
        let path = run(&grid, GridCell::new(0, 0), GridCell::new(4, 4), 100_000)
            .result
            .unwrap();
        assert_eq!(path.last(), Some(&GridCell::new(4, 4)));
        assert!(path.windows(2).all(|w| w[0].is_adjacent(&w[1])));
        assert!(path.iter().all(|&c| grid.is_free(c)));
        let mut sorted = path.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), path.len());
    }
}
