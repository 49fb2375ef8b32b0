//! Reachability of goal rows
//!
//! The search only looks at fence markers, so pawns never block a path. It is a pure function
//! of the board markers, the start cell and the goal row.

use crate::board::Board;
use crate::types::{Coord, Direction};

use quoridor_base::geometry::CELL_COUNT;

use std::collections::VecDeque;

/// Returns the length of the shortest unblocked path from `start` to any cell of row `goal_row`
///
/// Returns `None` if no such path exists. Each cell is expanded at most once, so the search
/// takes at most 81 steps.
pub fn distance(b: &Board, start: Coord, goal_row: u8) -> Option<usize> {
    if start.row() == goal_row {
        return Some(0);
    }

    let mut visited = [false; CELL_COUNT];
    let mut queue = VecDeque::with_capacity(CELL_COUNT);
    visited[start.index()] = true;
    queue.push_back((start, 0));

    while let Some((cur, dist)) = queue.pop_front() {
        for dir in Direction::ALL {
            if b.is_edge_blocked(cur, dir) {
                continue;
            }
            let next = match cur.step(dir) {
                Some(next) => next,
                None => continue,
            };
            if visited[next.index()] {
                continue;
            }
            if next.row() == goal_row {
                return Some(dist + 1);
            }
            visited[next.index()] = true;
            queue.push_back((next, dist + 1));
        }
    }

    None
}

/// Returns `true` if there is an unblocked path from `start` to any cell of row `goal_row`
#[inline]
pub fn has_path(b: &Board, start: Coord, goal_row: u8) -> bool {
    distance(b, start, goal_row).is_some()
}
