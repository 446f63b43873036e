//! probelab: study implementations of two classic algorithm families — an
//! exhaustive backtracking maze solver and fixed-capacity open-addressing
//! hash tables with selectable probing strategies.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: make the interesting invariants of each structure — probe-chain
//!   integrity, tombstone handling, backtracking correctness — small enough
//!   to verify in isolation.
//! - Layers:
//!   - Grid<T>: rectangular row-major storage shared by the maze layout,
//!     the search scratch state, and solution traces.
//!   - Maze / Solution: immutable search input and the routes it yields.
//!   - backtrack: depth-first enumeration of every simple path, with the
//!     solution accumulator threaded through the recursion rather than held
//!     as solver state, so searches are reentrant and repeatable.
//!   - ProbeKey: the integer hashing capability (home slot, double-hash
//!     stride, reserved sentinel) the tables are generic over.
//!   - OpenTable<K>: one slot array, three probe strategies (linear,
//!     quadratic, double hashing) sharing a single insert/search/remove
//!     contract.
//!   - ChainedTable<K>: separate-chaining companion on the same contract.
//!
//! Constraints
//! - Single-threaded, synchronous, no suspension points; `&mut self` is the
//!   only mutation path, so an instance has exactly one writer.
//! - Tables never resize. A full table (or an exhausted probe sequence)
//!   rejects inserts via `false`; nothing panics on full.
//! - Absence is data: NotFound/miss outcomes are `Option`s and `bool`s,
//!   never errors.
//! - The quadratic table's probe sequence is bounded by the array edge and
//!   does not wrap. Operations on it may give up while free slots remain
//!   elsewhere; that policy is part of the contract, not a defect.
//! - Maze searches enumerate all simple paths: exponential worst case,
//!   intended for small grids. Recursion depth is at most the cell count.
//!
//! Malformed input (ragged grids, out-of-range coordinates, zero capacity)
//! is a precondition violation and fails fast with a panic at construction;
//! see the `# Panics` sections on the constructors.
//!
//! Notes and non-goals
//! - Keys are plain integers (`i32`/`i64` ship with `ProbeKey`); the value
//!   minimum is the reserved tombstone sentinel and is rejected everywhere.
//! - No persistence, no interior mutability, no locking; wrap a table in
//!   external synchronization if it must cross threads.

mod backtrack;
mod chained;
mod grid;
mod maze;
mod open_table;
mod open_table_proptest;
mod probe;

// Public surface
pub use backtrack::{find_all_solutions, find_shortest_path};
pub use chained::ChainedTable;
pub use grid::Grid;
pub use maze::{Cell, Maze, Solution};
pub use open_table::{OpenTable, Slot};
pub use probe::ProbeKey;
