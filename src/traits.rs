//! Trait seam for tuple rankers.

use crate::error::RankError;
use crate::natural::Natural;

/// A bijection between strictly increasing `k`-tuples and the naturals.
///
/// Implementations must be pure: the same tuple always ranks to the same
/// value, and `unrank(rank(t), t.len()) == t` for every valid tuple `t`.
pub trait TupleRanker<N: Natural> {
    /// Rank a strictly increasing, non-empty tuple.
    fn rank(&self, tuple: &[N]) -> Result<N, RankError>;

    /// Recover the unique tuple of length `dimension` with the given rank.
    fn unrank(&self, rank: &N, dimension: usize) -> Result<Vec<N>, RankError>;

    /// Rank a tuple whose elements must all be below `universe`.
    ///
    /// The result is then below `self.count(universe, tuple.len())`.
    fn rank_within(&self, tuple: &[N], universe: &N) -> Result<N, RankError> {
        self.validate(tuple)?;
        if let Some(last) = tuple.last() {
            if last >= universe {
                return Err(RankError::InvalidInput(format!(
                    "element {} exceeds universe size {}",
                    last, universe
                )));
            }
        }
        self.rank(tuple)
    }

    /// Recover a tuple whose elements are all below `universe`.
    ///
    /// Fails with [`RankError::InvalidRank`] when `rank` is not below
    /// `self.count(universe, dimension)`.
    fn unrank_within(&self, rank: &N, dimension: usize, universe: &N)
        -> Result<Vec<N>, RankError>;

    /// Number of strictly increasing `dimension`-tuples drawn from
    /// `0..bound`. This is the exclusive upper bound on their ranks.
    fn count(&self, bound: &N, dimension: usize) -> Result<N, RankError>;

    /// Check that a tuple is non-empty and strictly increasing.
    fn validate(&self, tuple: &[N]) -> Result<(), RankError> {
        validate_tuple(tuple)
    }
}

/// Check that a tuple is non-empty and strictly increasing.
pub(crate) fn validate_tuple<N: Natural>(tuple: &[N]) -> Result<(), RankError> {
    if tuple.is_empty() {
        return Err(RankError::InvalidInput("tuple must not be empty".to_string()));
    }

    for (i, pair) in tuple.windows(2).enumerate() {
        if pair[1] <= pair[0] {
            return Err(RankError::InvalidInput(format!(
                "tuple must be strictly increasing, found {} <= {} at index {}",
                pair[1],
                pair[0],
                i + 1
            )));
        }
    }

    Ok(())
}
