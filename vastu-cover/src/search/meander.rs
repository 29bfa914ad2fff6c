//! Boustrophedon sweep with BFS reconnection.
//!
//! Cells are scheduled line by line (rows or columns), alternating the scan
//! direction on every line. Obstacles and cells already on the path are
//! skipped; when the next scheduled cell is not adjacent to the tail, the
//! shortest detour through unvisited cells is spliced in.

use std::collections::HashSet;

use log::{debug, trace};

use super::bfs::shortest_path;
use super::types::TargetPolicy;
use crate::core::{GridCell, OccupancyGrid, VisitedMask};

/// Sweep orientation and ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct SweepPlan {
    /// Lines are rows (scan along columns) when true
    pub row_major: bool,
    /// First line is the highest index instead of 0
    pub lines_descending: bool,
    /// First line is scanned from the highest index
    pub first_scan_descending: bool,
}

impl SweepPlan {
    pub fn new(rows: usize, cols: usize, start: GridCell, target: GridCell) -> Self {
        let share_col_edge =
            start.col == target.col && (start.col == 0 || start.col == cols - 1);
        let share_row_edge =
            start.row == target.row && (start.row == 0 || start.row == rows - 1);
        let row_major = share_col_edge || (cols > rows && !share_row_edge);

        let near_high = |index: usize, len: usize| index > len - 1 - index;
        let (lines_descending, first_scan_descending) = if row_major {
            (near_high(start.row, rows), near_high(start.col, cols))
        } else {
            (near_high(start.col, cols), near_high(start.row, rows))
        };

        Self {
            row_major,
            lines_descending,
            first_scan_descending,
        }
    }

    /// Every grid cell in sweep order.
    pub fn schedule(&self, rows: usize, cols: usize) -> Vec<GridCell> {
        let (line_count, line_len) = if self.row_major {
            (rows, cols)
        } else {
            (cols, rows)
        };

        let mut cells = Vec::with_capacity(rows * cols);
        for i in 0..line_count {
            let line = if self.lines_descending {
                line_count - 1 - i
            } else {
                i
            };
            let descending = self.first_scan_descending ^ (i % 2 == 1);
            for j in 0..line_len {
                let pos = if descending { line_len - 1 - j } else { j };
                cells.push(if self.row_major {
                    GridCell::new(line, pos)
                } else {
                    GridCell::new(pos, line)
                });
            }
        }
        cells
    }
}

/// Sweep `grid` from `start`, trying to finish on `target`.
pub(crate) fn sweep(
    grid: &OccupancyGrid,
    start: GridCell,
    target: GridCell,
    policy: TargetPolicy,
) -> Vec<GridCell> {
    let rows = grid.rows();
    let cols = grid.cols();
    let plan = SweepPlan::new(rows, cols, start, target);
    trace!("[Meander] {:?}", plan);

    let mut visited = VisitedMask::from_obstacles(grid);
    let mut path = Vec::with_capacity(grid.free_count());
    visited.set(start);
    path.push(start);

    for cell in plan.schedule(rows, cols) {
        if visited.is_set(cell) {
            continue;
        }
        let tail = path[path.len() - 1];
        if tail.is_adjacent(&cell) {
            visited.set(cell);
            path.push(cell);
            continue;
        }

        let link = shortest_path(tail, cell, &visited);
        if link.is_empty() {
            trace!("[Meander] ({}, {}) unreachable, skipped", cell.row, cell.col);
            continue;
        }
        for step in link.into_iter().skip(1) {
            visited.set(step);
            path.push(step);
        }
    }

    finish_at_target(&mut path, &visited, target, policy);
    path
}

/// Make the path end on `target` where that costs no coverage, otherwise
/// follow `policy`.
fn finish_at_target(
    path: &mut Vec<GridCell>,
    visited: &VisitedMask,
    target: GridCell,
    policy: TargetPolicy,
) {
    let Some(&tail) = path.last() else {
        return;
    };
    if tail == target {
        return;
    }

    let Some(k) = path.iter().position(|&c| c == target) else {
        let link = shortest_path(tail, target, visited);
        if link.is_empty() {
            debug!(
                "[Meander] Target ({}, {}) unreachable from sweep end",
                target.row, target.col
            );
        } else {
            path.extend(link.into_iter().skip(1));
        }
        return;
    };

    let mut rotated = path.clone();
    if rotate_to_target(&mut rotated, visited.rows(), visited.cols(), target) {
        *path = rotated;
        return;
    }

    match policy {
        TargetPolicy::Truncate => {
            debug!(
                "[Meander] Truncating sweep at target, step {} of {}",
                k,
                path.len()
            );
            path.truncate(k + 1);
        }
        TargetPolicy::PreferCoverage => {
            debug!(
                "[Meander] Target passed at step {} of {}, keeping full sweep",
                k,
                path.len()
            );
        }
    }
}

/// Reorder the tail of `path` until it ends on `target`, keeping every cell.
///
/// When the tail touches `path[i]`, reversing `path[i + 1..]` is still a
/// simple 4-connected path and ends on `path[i + 1]`. Each step takes the
/// rotation whose new tail is closest to `target`, never revisiting a tail.
/// `path[0]` never moves.
fn rotate_to_target(path: &mut [GridCell], rows: usize, cols: usize, target: GridCell) -> bool {
    let Some(last) = path.len().checked_sub(1) else {
        return false;
    };
    let mut position = vec![usize::MAX; rows * cols];
    for (i, c) in path.iter().enumerate() {
        position[c.row * cols + c.col] = i;
    }
    let mut tails = HashSet::from([path[last]]);

    for _ in 0..2 * (rows + cols) {
        let tail = path[last];
        if tail == target {
            return true;
        }

        let pivots: Vec<usize> = tail
            .neighbors_4(rows, cols)
            .into_iter()
            .flatten()
            .map(|n| position[n.row * cols + n.col])
            .filter(|&i| i != usize::MAX && i + 1 < last)
            .collect();
        let pivot = pivots
            .iter()
            .copied()
            .find(|&i| path[i + 1] == target)
            .or_else(|| {
                pivots
                    .iter()
                    .copied()
                    .filter(|&i| !tails.contains(&path[i + 1]))
                    .min_by_key(|&i| path[i + 1].manhattan_distance(&target))
            });
        let Some(i) = pivot else {
            return false;
        };

        path[i + 1..].reverse();
        for (j, c) in path.iter().enumerate().skip(i + 1) {
            position[c.row * cols + c.col] = j;
        }
        tails.insert(path[last]);
        trace!(
            "[Meander] Rotated at step {}, tail now ({}, {})",
            i,
            path[last].row,
            path[last].col
        );
    }

    path[last] == target
}
