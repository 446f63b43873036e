//! Maze input and solution types for the backtracking search.

use crate::grid::Grid;

/// One maze cell: either navigable or a wall.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Cell {
    Open,
    Blocked,
}

impl Cell {
    pub fn is_open(self) -> bool {
        matches!(self, Cell::Open)
    }
}

/// A rectangular maze with fixed entry and destination coordinates.
///
/// The layout is immutable input; the search never writes to it. Bounds of
/// `start` and `end` are asserted at construction — supplying out-of-range
/// coordinates is a caller bug, not a recoverable condition.
#[derive(Clone, Debug)]
pub struct Maze {
    layout: Grid<Cell>,
    start: (usize, usize),
    end: (usize, usize),
}

impl Maze {
    /// # Panics
    ///
    /// Panics if `start` or `end` lies outside `layout`.
    pub fn new(layout: Grid<Cell>, start: (usize, usize), end: (usize, usize)) -> Self {
        assert!(
            start.0 < layout.rows() && start.1 < layout.cols(),
            "maze start out of bounds"
        );
        assert!(
            end.0 < layout.rows() && end.1 < layout.cols(),
            "maze end out of bounds"
        );
        Self { layout, start, end }
    }

    /// Convenience constructor from 0/1 rows: zero is a wall, anything else
    /// is open. Matches the layout notation used throughout the tests.
    ///
    /// # Panics
    ///
    /// Panics on ragged or empty rows, or out-of-bounds `start`/`end`.
    pub fn from_bits<R: AsRef<[u8]>>(rows: &[R], start: (usize, usize), end: (usize, usize)) -> Self {
        let layout = Grid::from_rows(
            rows.iter()
                .map(|r| {
                    r.as_ref()
                        .iter()
                        .map(|&b| if b == 0 { Cell::Blocked } else { Cell::Open })
                        .collect()
                })
                .collect(),
        );
        Self::new(layout, start, end)
    }

    pub fn layout(&self) -> &Grid<Cell> {
        &self.layout
    }

    pub fn start(&self) -> (usize, usize) {
        self.start
    }

    pub fn end(&self) -> (usize, usize) {
        self.end
    }
}

/// One discovered route through a maze: the cells the route occupies and the
/// number of moves it takes. Produced by the search; never mutated after.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Solution {
    pub(crate) trace: Grid<bool>,
    pub(crate) len: usize,
}

impl Solution {
    /// Number of moves from start to end along this route. A route whose
    /// start equals its end has length zero.
    pub fn path_len(&self) -> usize {
        self.len
    }

    /// Snapshot of the cells on the route, parallel to the maze layout.
    pub fn trace(&self) -> &Grid<bool> {
        &self.trace
    }

    pub fn on_path(&self, row: usize, col: usize) -> bool {
        self.trace[(row, col)]
    }
}
