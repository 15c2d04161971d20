//! End-to-end tests for the n-Queens counter.
//!
//! Tests cover the reference solution counts, the placement counter, error
//! reporting, and the backtracking invariants of the board.

use queens_rs::board::Board;
use queens_rs::search::solve;
use queens_rs::types::{BoardError, Counts};

// ─── Reference Counts ──────────────────────────────────────────────────────────

#[test]
fn reference_solution_counts() {
    // Established n-Queens solution counts for small boards.
    let expected: &[(usize, u64)] = &[
        (1, 1),
        (2, 0),
        (3, 0),
        (4, 2),
        (5, 10),
        (6, 4),
        (7, 40),
        (8, 92),
    ];
    for &(size, solutions) in expected {
        let counts = solve(size).unwrap();
        assert_eq!(counts.solutions, solutions, "wrong count for size {}", size);
    }
}

#[test]
fn smallest_board_is_trivial() {
    let counts = solve(1).unwrap();
    assert_eq!(counts.solutions, 1);
    assert_eq!(counts.placements, 1);
}

#[test]
fn four_queens_placement_count() {
    // With rows tried in ascending order the 4-queens search makes exactly
    // 16 tentative placements on its way to the 2 solutions.
    let counts = solve(4).unwrap();
    assert_eq!(counts.solutions, 2);
    assert_eq!(counts.placements, 16);
}

#[test]
fn reference_placement_counts() {
    // Placement totals for the ascending-row enumeration order, checked
    // against the EWD316-style reference implementation.
    let expected: &[(usize, u64)] = &[
        (1, 1),
        (2, 2),
        (3, 5),
        (4, 16),
        (5, 53),
        (6, 152),
        (8, 2056),
    ];
    for &(size, placements) in expected {
        let counts = solve(size).unwrap();
        assert_eq!(
            counts.placements, placements,
            "wrong placement count for size {}",
            size
        );
    }
}

#[test]
fn placements_dominate_solutions() {
    // Every solution costs at least `size` placements along its own path.
    for size in [1, 4, 5, 6, 7, 8] {
        let counts = solve(size).unwrap();
        assert!(counts.solutions > 0);
        assert!(
            counts.placements >= counts.solutions * size as u64,
            "size {}: {} placements for {} solutions",
            size,
            counts.placements,
            counts.solutions
        );
    }
}

#[test]
fn solve_is_deterministic() {
    for size in [4, 6, 8] {
        let first = solve(size).unwrap();
        let second = solve(size).unwrap();
        assert_eq!(first, second);
    }
}

// ─── Errors ────────────────────────────────────────────────────────────────────

#[test]
fn zero_queens_is_rejected() {
    assert!(matches!(solve(0), Err(BoardError::InvalidSize(0))));
    assert!(matches!(Board::new(0), Err(BoardError::InvalidSize(0))));
}

#[test]
fn hopeless_allocation_is_rejected() {
    assert!(matches!(
        Board::new(usize::MAX / 2),
        Err(BoardError::Allocation(_))
    ));
}

// ─── Board Invariants ──────────────────────────────────────────────────────────

#[test]
fn search_unwinds_every_placement() {
    let mut board = Board::new(8).unwrap();
    board.search();

    // Every placement was matched by a removal.
    assert_eq!(board.current_column(), 0);
    assert!(board.is_empty());
    for row in 0..8 {
        assert!(board.is_row_free(row));
    }

    // The counters survive the unwind.
    assert_eq!(board.solutions(), 92);
    assert!(board.placements() > 0);
}

#[test]
fn counters_never_decrease_across_runs() {
    // A board can be searched again; counters keep accumulating.
    let mut board = Board::new(4).unwrap();
    board.search();
    let after_first = (board.placements(), board.solutions());
    board.search();
    assert_eq!(board.placements(), after_first.0 * 2);
    assert_eq!(board.solutions(), after_first.1 * 2);
}

// ─── Reporting ─────────────────────────────────────────────────────────────────

#[test]
fn report_line_matches_reference_output() {
    let counts = solve(4).unwrap();
    assert_eq!(
        counts.to_string(),
        "The 4-Queens problem required 16 queen placements to find all 2 solutions"
    );
}

#[test]
fn counts_snapshot_matches_accessors() {
    let mut board = Board::new(5).unwrap();
    board.search();
    assert_eq!(
        board.counts(),
        Counts {
            size: 5,
            placements: board.placements(),
            solutions: board.solutions(),
        }
    );
    assert_eq!(board.solutions(), 10);
}
