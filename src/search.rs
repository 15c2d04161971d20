//! Recursive backtracking search driver.

use log::debug;

use crate::board::Board;
use crate::types::{BoardError, Counts};

impl Board {
    /// Exhaustively explores every completion of the current partial
    /// placement, counting solutions and placements along the way.
    ///
    /// Candidate rows for the current column are tried in ascending order.
    /// Each successful placement is either a full board (counted as a
    /// solution) or recursed into, and is always removed again before the
    /// next candidate, so the board comes back in the exact state it was
    /// called with. Recursion depth equals the number of columns still to
    /// fill, and never proceeds past a full board.
    pub fn search(&mut self) {
        for row in 0..self.size() {
            if self.is_row_free(row) {
                self.place_queen(row);
                if self.current_column() == self.size() {
                    self.record_solution();
                } else {
                    self.search();
                }
                self.remove_queen(row);
            }
        }
    }
}

/// Solves the n-Queens problem for the given board size.
///
/// Builds a fresh [`Board`], runs the exhaustive search from the empty
/// placement, and returns the final [`Counts`]. The result is deterministic:
/// the same size always yields the same placement and solution counts.
///
/// # Errors
///
/// Returns [`BoardError::InvalidSize`] for `size < 1` and
/// [`BoardError::Allocation`] if the board storage cannot be allocated.
pub fn solve(size: usize) -> Result<Counts, BoardError> {
    debug!("solve(size = {})", size);
    let mut board = Board::new(size)?;
    board.search();
    let counts = board.counts();
    debug!(
        "solve(size = {}): {} placements, {} solutions",
        size, counts.placements, counts.solutions
    );
    Ok(counts)
}
