//! Error types for sorting and selection.

use std::fmt;

/// Errors surfaced by ordsort operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// Selection asked for a rank outside `0..len`.
    InvalidRank { rank: usize, len: usize },
}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortError::InvalidRank { rank, len } => {
                write!(
                    f,
                    "invalid rank: {} is out of range for {} elements",
                    rank, len
                )
            }
        }
    }
}

impl std::error::Error for SortError {}
