//! Result record and error taxonomy for the n-Queens search.

use std::collections::TryReserveError;
use std::fmt;

/// Final tallies of one completed search.
///
/// `placements` counts every tentative queen placement the search tried,
/// including the ones that were backtracked, so it measures search effort
/// rather than just the answer. For a fixed board size both numbers are
/// fully deterministic.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Counts {
    /// Board dimension (and number of queens placed per solution).
    pub size: usize,
    /// Total tentative placements, backtracked ones included.
    pub placements: u64,
    /// Number of complete, conflict-free configurations.
    pub solutions: u64,
}

impl fmt::Display for Counts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The {}-Queens problem required {} queen placements to find all {} solutions",
            self.size, self.placements, self.solutions
        )
    }
}

/// Errors that can occur while constructing a [`Board`][crate::board::Board].
///
/// Both variants are unrecoverable for the run that hits them: there is no
/// retry and no default substitution. The search itself never fails once a
/// board has been constructed.
#[derive(Debug)]
pub enum BoardError {
    /// The requested board size was below 1.
    InvalidSize(usize),
    /// Backing storage for the board could not be allocated.
    Allocation(TryReserveError),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidSize(size) => {
                write!(f, "the number of queens must be greater than 0 (got {})", size)
            }
            BoardError::Allocation(err) => {
                write!(f, "failed to allocate memory for the chess board: {}", err)
            }
        }
    }
}

impl std::error::Error for BoardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BoardError::InvalidSize(_) => None,
            BoardError::Allocation(err) => Some(err),
        }
    }
}

impl From<TryReserveError> for BoardError {
    fn from(err: TryReserveError) -> Self {
        BoardError::Allocation(err)
    }
}
