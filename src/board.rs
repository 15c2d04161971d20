//! Board state, conflict check, and the placement/removal protocol.
//!
//! The board tracks queen attacks through three occupancy bit sets: one per
//! row, one per "/"-diagonal, and one per "\\"-diagonal. Each diagonal family
//! has `2*size - 1` members, and every square belongs to exactly one member of
//! each family, so a square is attack-free iff its three bits are all clear.
//! [`place_queen`][Board::place_queen] and [`remove_queen`][Board::remove_queen]
//! keep the sets consistent incrementally, which is what makes the conflict
//! check constant-time.

use crate::bitset::BitSet;
use crate::types::{BoardError, Counts};

/// One n-Queens search instance.
///
/// Columns are filled left to right, one queen per column; `current_column`
/// always equals the number of queens on the board. The occupancy sets are
/// exactly the attacks of the currently placed queens, an invariant that
/// holds before and after every placement/removal pair.
#[derive(Debug, Clone)]
pub struct Board {
    /// Board dimension; also the number of queens to place.
    size: usize,
    /// Row of the queen in each column. Entries at indices >= `current_column`
    /// are stale leftovers from backtracking and are never read.
    queens: Vec<usize>,
    /// Rows currently holding a queen.
    rows: BitSet,
    /// Occupied "/"-diagonals, indexed by `(size - 1) + column - row`.
    diag_up: BitSet,
    /// Occupied "\"-diagonals, indexed by `column + row`.
    diag_down: BitSet,
    /// The column currently being filled, in `0..=size`.
    current_column: usize,
    /// Every tentative placement, backtracked ones included.
    placements: u64,
    /// Complete conflict-free configurations found so far.
    solutions: u64,
}

impl Board {
    /// Creates an empty board for `size` queens.
    ///
    /// Fails with [`BoardError::InvalidSize`] when `size < 1`, and with
    /// [`BoardError::Allocation`] when the backing storage cannot be reserved.
    /// Storage acquired before a failing step is released by drop, so the
    /// failure path leaks nothing.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size < 1 {
            return Err(BoardError::InvalidSize(size));
        }

        let mut queens = Vec::new();
        queens.try_reserve_exact(size)?;
        queens.resize(size, 0);

        // Each diagonal family has one member per anti-/diagonal of the grid.
        let num_diagonals = 2 * size - 1;

        Ok(Self {
            size,
            queens,
            rows: BitSet::try_new(size)?,
            diag_up: BitSet::try_new(num_diagonals)?,
            diag_down: BitSet::try_new(num_diagonals)?,
            current_column: 0,
            placements: 0,
            solutions: 0,
        })
    }

    /// Returns the board dimension.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the column currently being filled; equals the number of queens
    /// on the board.
    #[inline]
    pub fn current_column(&self) -> usize {
        self.current_column
    }

    /// Returns the total number of tentative placements so far.
    #[inline]
    pub fn placements(&self) -> u64 {
        self.placements
    }

    /// Returns the number of solutions found so far.
    #[inline]
    pub fn solutions(&self) -> u64 {
        self.solutions
    }

    /// Returns the row of the queen placed in `column`, or `None` if that
    /// column has no queen yet.
    pub fn queen_row(&self, column: usize) -> Option<usize> {
        if column < self.current_column {
            Some(self.queens[column])
        } else {
            None
        }
    }

    /// Returns true if no queens are placed and every row and diagonal is free.
    ///
    /// A board is in this state right after construction, and again after a
    /// completed top-level search (every placement was backtracked).
    pub fn is_empty(&self) -> bool {
        self.current_column == 0
            && self.rows.is_empty()
            && self.diag_up.is_empty()
            && self.diag_down.is_empty()
    }

    /// Index of the "/"-diagonal through (`current_column`, `row`).
    #[inline]
    fn up_diagonal(&self, row: usize) -> usize {
        (self.size - 1) + self.current_column - row
    }

    /// Index of the "\"-diagonal through (`current_column`, `row`).
    #[inline]
    fn down_diagonal(&self, row: usize) -> usize {
        self.current_column + row
    }

    /// Returns true if a queen at (`current_column`, `row`) would be attacked
    /// by no placed queen.
    ///
    /// `row` must be below [`size`][Board::size]; larger rows have no square
    /// and no occupancy bit.
    ///
    /// Three bit lookups, independent of board size. The occupancy sets are
    /// maintained incrementally precisely so this never scans placed queens.
    #[inline]
    pub fn is_row_free(&self, row: usize) -> bool {
        debug_assert!(row < self.size);
        !self.rows.contains(row)
            && !self.diag_up.contains(self.up_diagonal(row))
            && !self.diag_down.contains(self.down_diagonal(row))
    }

    /// Places a queen at (`current_column`, `row`) and advances to the next
    /// column.
    ///
    /// The caller must have checked [`is_row_free`][Board::is_row_free]
    /// immediately before; this does not re-check. Counts toward
    /// [`placements`][Board::placements] whether or not the placement
    /// survives backtracking.
    #[inline]
    pub fn place_queen(&mut self, row: usize) {
        debug_assert!(row < self.size);
        debug_assert!(self.current_column < self.size);
        debug_assert!(self.is_row_free(row));

        self.queens[self.current_column] = row;
        self.rows.insert(row);
        self.diag_up.insert(self.up_diagonal(row));
        self.diag_down.insert(self.down_diagonal(row));
        self.current_column += 1;
        self.placements += 1;
    }

    /// Removes the most recently placed queen, which must be at `row`.
    ///
    /// Strict LIFO inverse of [`place_queen`][Board::place_queen]: the column
    /// counter is decremented first because the diagonal indices must be
    /// computed for the column the queen was placed in. Calling this twice
    /// with stale state corrupts the board.
    #[inline]
    pub fn remove_queen(&mut self, row: usize) {
        debug_assert!(self.current_column > 0);
        debug_assert_eq!(self.queens[self.current_column - 1], row);

        self.current_column -= 1;
        self.diag_down.remove(self.down_diagonal(row));
        self.diag_up.remove(self.up_diagonal(row));
        self.rows.remove(row);
    }

    /// Records one complete conflict-free configuration.
    #[inline]
    pub(crate) fn record_solution(&mut self) {
        debug_assert_eq!(self.current_column, self.size);
        self.solutions += 1;
    }

    /// Snapshot of the counters.
    pub fn counts(&self) -> Counts {
        Counts {
            size: self.size,
            placements: self.placements,
            solutions: self.solutions,
        }
    }
}
