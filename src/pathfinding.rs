use crate::grid::Grid;
use std::collections::{HashSet, VecDeque};

const NEIGHBORS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

fn is_walkable(grid: &Grid, x: i32, y: i32) -> bool {
    grid.get(x, y).is_some_and(|tile| tile.is_walkable())
}

/// Every walkable cell 4-connected to `start`, including `start` itself.
/// Empty when `start` is a wall or off the grid.
pub fn reachable(grid: &Grid, start: (i32, i32)) -> HashSet<(i32, i32)> {
    let mut seen = HashSet::new();
    if !is_walkable(grid, start.0, start.1) {
        return seen;
    }

    let mut queue = VecDeque::from([start]);
    seen.insert(start);
    while let Some((x, y)) = queue.pop_front() {
        for (dx, dy) in NEIGHBORS {
            let next = (x + dx, y + dy);
            if is_walkable(grid, next.0, next.1) && seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    seen
}
