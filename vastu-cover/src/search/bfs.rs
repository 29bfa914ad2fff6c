//! Shortest 4-connected reconnection paths.

use std::collections::VecDeque;

use log::trace;

use crate::core::{GridCell, VisitedMask};

/// Shortest path from `start` to `target` through cells not set in `visited`.
///
/// `start` itself may be marked. Returns `[start, .., target]`, `[start]`
/// when both are equal, or an empty vector when `target` is unreachable.
pub(crate) fn shortest_path(
    start: GridCell,
    target: GridCell,
    visited: &VisitedMask,
) -> Vec<GridCell> {
    let rows = visited.rows();
    let cols = visited.cols();
    if start.row >= rows || start.col >= cols {
        return Vec::new();
    }
    if start == target {
        return vec![start];
    }
    if visited.is_set(target) {
        return Vec::new();
    }

    let mut seen = visited.clone();
    let mut parent: Vec<Option<GridCell>> = vec![None; rows * cols];
    let mut queue = VecDeque::new();
    seen.set(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for next in current.neighbors_4(rows, cols).into_iter().flatten() {
            if seen.is_set(next) {
                continue;
            }
            seen.set(next);
            parent[next.row * cols + next.col] = Some(current);
            if next == target {
                return unwind(&parent, cols, start, target);
            }
            queue.push_back(next);
        }
    }

    trace!(
        "[BFS] ({}, {}) -> ({}, {}) unreachable",
        start.row, start.col, target.row, target.col
    );
    Vec::new()
}

fn unwind(
    parent: &[Option<GridCell>],
    cols: usize,
    start: GridCell,
    target: GridCell,
) -> Vec<GridCell> {
    let mut path = vec![target];
    let mut current = target;
    while current != start {
        match parent[current.row * cols + current.col] {
            Some(prev) => {
                path.push(prev);
                current = prev;
            }
            None => return Vec::new(),
        }
    }
    path.reverse();
    path
}
