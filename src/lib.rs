//! # queens-rs: counting n-Queens solutions in Rust
//!
//! **`queens-rs`** is a small library for exhaustively enumerating solutions to the
//! **n-Queens problem**: how many ways are there to place `n` chess queens on an
//! `n x n` board so that no queen attacks another?
//!
//! It does not report the solutions themselves. Instead it counts two things:
//!
//! - the number of **solutions** (complete, conflict-free boards), and
//! - the number of **placements** --- every tentative queen placement the search
//!   tried, including the ones that were later backtracked. This makes the search
//!   effort itself observable, which is useful for comparing board sizes.
//!
//! ## How it works
//!
//! The search is a classic depth-first backtracking walk over columns, one queen
//! per column, in the style of Dijkstra's EWD316 treatment of the problem.
//! The trick that makes it fast is the [`Board`][crate::board::Board] state:
//! three occupancy bit sets (rows, "/"-diagonals, "\\"-diagonals) are maintained
//! incrementally on every placement and removal, so deciding whether a square is
//! attacked is three bit lookups --- constant time, never a scan of placed queens.
//!
//! ## Basic Usage
//!
//! ```rust
//! use queens_rs::search::solve;
//!
//! let counts = solve(4).unwrap();
//! assert_eq!(counts.solutions, 2);
//! assert_eq!(counts.placements, 16);
//! ```
//!
//! ## Core Components
//!
//! - **[`board`]**: the board state, conflict check, and the placement/removal
//!   protocol that keeps the occupancy sets consistent.
//! - **[`search`]**: the recursive search driver and the top-level
//!   [`solve`][crate::search::solve] entry point.
//! - **[`bitset`]**: the fixed-capacity bit set backing the occupancy arrays.
//! - **[`types`]**: the [`Counts`][crate::types::Counts] result record and the
//!   error taxonomy.

pub mod bitset;
pub mod board;
pub mod search;
pub mod types;
