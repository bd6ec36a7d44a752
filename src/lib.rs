//! Ranking strictly increasing tuples.
//!
//! `combinadic` maps every strictly increasing `k`-tuple of naturals to a
//! single natural (its *rank*) and back. For a fixed `k` the map is a
//! bijection, and the tuples with maximum element below `m` take exactly the
//! ranks `0..C(m, k)`. That makes the rank a minimal perfect hash, useful for:
//!
//! - Dense table indexes keyed by unordered sets (pairs, triangles, hands of cards)
//! - Compact storage of a k-subset of `[N]` in `log2(C(N, k))` bits
//! - Enumerating and sampling subsets by index
//!
//! # Encoding
//!
//! ```text
//! rank(x_0 < x_1 < ... < x_{k-1}) = C(x_0, 1) + C(x_1, 2) + ... + C(x_{k-1}, k)
//! ```
//!
//! # Historical Context
//!
//! The representation of a natural as a sum of binomial coefficients with
//! strictly increasing tops is the *combinatorial number system*, described by
//! Ernesto Pascal (1887) and popularised for computing by D. H. Lehmer (1964),
//! who used it to index combinations without tables. Knuth's TAOCP 4A
//! (§7.2.1.3) treats it as the rank function of the colexicographic order on
//! combinations.
//!
//! # Numeric width
//!
//! Every function is generic over [`Natural`]: pick `u32`, `u64`, `u128`, or
//! (with the `bigint` feature) `num_bigint::BigUint`. Arithmetic is checked,
//! so a rank or coefficient that does not fit surfaces as
//! [`RankError::Overflow`] rather than silently wrapping.
//!
//! # Example
//!
//! ```rust
//! use combinadic::{decode, encode};
//!
//! let rank = encode(&[0u64, 4, 6]).unwrap();
//! assert_eq!(rank, 26);
//!
//! let tuple = decode(&rank, 3).unwrap();
//! assert_eq!(tuple, vec![0, 4, 6]);
//! ```
//!
//! # References
//!
//! - Pascal, E. (1887). "Sopra una formula numerica"
//! - Lehmer, D. H. (1964). "The machine tools of combinatorics"
//! - Buckles, B. P., & Lybanon, M. (1977). "Algorithm 515: Generation of a vector from the lexicographical index"
//! - Knuth, D. E. (2011). "The Art of Computer Programming, Vol. 4A", §7.2.1.3

#![warn(missing_docs)]
#![warn(clippy::all)]

mod binomial;
mod enumerate;
mod error;
mod natural;
mod ranker;
mod traits;

pub use binomial::binomial;
pub use enumerate::{successor, tuples, tuples_below, Tuples};
pub use error::RankError;
pub use natural::{narrow, Natural};
pub use ranker::CombinadicRanker;
pub use traits::TupleRanker;

/// How the decoder finds each digit `x` with `C(x, m) <= remaining`.
///
/// Both strategies return the same digit; they trade simplicity for speed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchStrategy {
    /// Step `x` upward one at a time. `O(x)` per digit.
    Linear,
    /// Gallop with doubling steps, then bisect. `O(log x)` binomials per digit.
    #[default]
    Exponential,
}

/// Rank a strictly increasing, non-empty tuple.
///
/// # Errors
///
/// - [`RankError::InvalidInput`] if the tuple is empty or not strictly increasing.
/// - [`RankError::Overflow`] if the rank does not fit in `N`.
pub fn encode<N: Natural>(tuple: &[N]) -> Result<N, RankError> {
    CombinadicRanker::new().rank(tuple)
}

/// Recover the unique strictly increasing tuple of length `dimension` whose
/// rank is `rank`.
///
/// # Errors
///
/// - [`RankError::DimensionMismatch`] if `dimension == 0`.
/// - [`RankError::Overflow`] if the tuple cannot be represented in `N`.
/// - [`RankError::InvalidRank`] if no tuple of that dimension has this rank.
pub fn decode<N: Natural>(rank: &N, dimension: usize) -> Result<Vec<N>, RankError> {
    CombinadicRanker::new().unrank(rank, dimension)
}

/// Number of strictly increasing `dimension`-tuples with every element below
/// `bound`, i.e. `C(bound, dimension)`.
pub fn count<N: Natural>(bound: &N, dimension: usize) -> Result<N, RankError> {
    CombinadicRanker::new().count(bound, dimension)
}
