//! Exhaustive backtracking search over a maze grid.
//!
//! The search enumerates every simple path from start to end, so its worst
//! case is exponential in the number of open cells. It is a demonstration
//! structure for small grids, not a production pathfinder. Recursion depth
//! is bounded by the cell count; callers must provide stack to match.

use crate::grid::Grid;
use crate::maze::{Maze, Solution};

// Fixed try order: right, down, left, up. Solution discovery order (and
// therefore tie-breaking) is defined by this order.
const MOVES: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Find a route of minimum length from start to end.
///
/// Among equally short routes the first one discovered wins. Returns `None`
/// when no route exists; that is a normal outcome, not a fault.
pub fn find_shortest_path(maze: &Maze) -> Option<Solution> {
    let mut best: Option<Solution> = None;
    for sol in collect_solutions(maze) {
        match &best {
            Some(b) if b.path_len() <= sol.path_len() => {}
            _ => best = Some(sol),
        }
    }
    best
}

/// Find every route from start to end, in discovery order.
///
/// Discovery order is deterministic given the fixed move order, so repeated
/// calls on the same maze agree. Returns `None` when no route exists.
pub fn find_all_solutions(maze: &Maze) -> Option<Vec<Solution>> {
    let solutions = collect_solutions(maze);
    if solutions.is_empty() {
        None
    } else {
        Some(solutions)
    }
}

fn collect_solutions(maze: &Maze) -> Vec<Solution> {
    let layout = maze.layout();
    let mut visited = Grid::filled(layout.rows(), layout.cols(), false);
    let mut found = Vec::new();
    explore(maze, &mut visited, maze.start(), 0, &mut found);
    found
}

fn explore(
    maze: &Maze,
    visited: &mut Grid<bool>,
    (row, col): (usize, usize),
    distance: usize,
    found: &mut Vec<Solution>,
) {
    visited[(row, col)] = true;

    if (row, col) == maze.end() {
        found.push(Solution {
            trace: visited.clone(),
            len: distance,
        });
        // No early return: the end cell stays marked while its neighbors are
        // explored, so further routes that arrive another way are still found.
    }

    for (dr, dc) in MOVES {
        let r = row as isize + dr;
        let c = col as isize + dc;
        if !visited.in_bounds(r, c) {
            continue;
        }
        let next = (r as usize, c as usize);
        if maze.layout()[next].is_open() && !visited[next] {
            explore(maze, visited, next, distance + 1, found);
        }
    }

    // Backtrack so sibling branches may route through this cell.
    visited[(row, col)] = false;
}
