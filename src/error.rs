//! Error types for tuple ranking.

use std::fmt;

/// Errors that can occur while ranking or unranking tuples.
///
/// Each failure class is its own variant so callers can tell bad input apart
/// from an arithmetic limit or a rank that belongs to no tuple.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RankError {
    /// The tuple is empty or not strictly increasing.
    InvalidInput(String),
    /// A binomial, rank, or tuple element does not fit in the chosen width.
    Overflow(String),
    /// No tuple of `dimension` elements encodes to the given rank.
    InvalidRank {
        /// Requested tuple length.
        dimension: usize,
        /// Rank left over after extracting every digit.
        remainder: String,
    },
    /// The dimension is zero.
    DimensionMismatch(usize),
}

impl RankError {
    pub(crate) fn overflow(what: impl fmt::Display) -> Self {
        RankError::Overflow(what.to_string())
    }
}

impl fmt::Display for RankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            RankError::Overflow(msg) => write!(f, "arithmetic overflow: {}", msg),
            RankError::InvalidRank {
                dimension,
                remainder,
            } => write!(
                f,
                "invalid rank for dimension {}: {} left after decoding",
                dimension, remainder
            ),
            RankError::DimensionMismatch(k) => {
                write!(f, "dimension must be at least 1, got {}", k)
            }
        }
    }
}

impl std::error::Error for RankError {}
