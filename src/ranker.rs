//! Combinatorial number system ranker.
//!
//! Ranks a strictly increasing tuple `x_0 < x_1 < ... < x_{k-1}` as
//!
//! ```text
//! rank = C(x_0, 1) + C(x_1, 2) + ... + C(x_{k-1}, k)
//! ```
//!
//! # Theory
//!
//! For fixed `k` every natural has exactly one such representation (the
//! "k-combinadic"), so the map is a bijection onto the naturals. The tuples
//! whose maximum is below `m` take exactly the ranks `0..C(m, k)`: enumerating
//! tuples by maximum element, then by the remaining elements compared from the
//! top down, yields `0, 1, 2, ...` with no gaps. That makes the rank a minimal
//! perfect hash of the tuple.
//!
//! Decoding extracts the digits greedily from the top: `x_{k-1}` is the
//! largest `x` with `C(x, k) <= rank`, then the same for `k-1` on what is
//! left, down to `x_0`, which is simply the remainder.

use crate::binomial::{
    binomial, binomial_or_none, binomial_with_factorial, DescendingFactorial, RunningFactorial,
};
use crate::error::RankError;
use crate::natural::{from_usize, Natural};
use crate::traits::{validate_tuple, TupleRanker};
use crate::SearchStrategy;

/// Ranker for strictly increasing tuples over the combinatorial number system.
///
/// Stateless apart from the decoder's search strategy; safe to share between
/// threads.
///
/// # Performance
///
/// - Encoding: `O(k^2)` checked multiplications
/// - Decoding, exponential search: `O(k log x)` binomials
/// - Decoding, linear search: `O(x)` steps, only sensible for small elements
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CombinadicRanker {
    strategy: SearchStrategy,
}

impl CombinadicRanker {
    /// Create a ranker with the default (exponential) search.
    pub fn new() -> Self {
        Self {
            strategy: SearchStrategy::default(),
        }
    }

    /// Create a ranker with a specific decoder search strategy.
    ///
    /// Both strategies return identical tuples; they differ only in speed.
    pub fn with_strategy(strategy: SearchStrategy) -> Self {
        Self { strategy }
    }

    /// The decoder search strategy in use.
    pub fn strategy(&self) -> SearchStrategy {
        self.strategy
    }

    /// Sum `C(x_i, i+1)` over the tuple, carrying `(i+1)!` across terms.
    fn encode<N: Natural>(tuple: &[N]) -> Result<N, RankError> {
        validate_tuple(tuple)?;

        let mut running = RunningFactorial::<N>::new();
        let mut rank = N::zero();

        for (i, x) in tuple.iter().enumerate() {
            let term = binomial_with_factorial(x, i + 1, running.advance())?;
            rank = rank.checked_add(&term).ok_or_else(|| {
                RankError::overflow(format!("rank exceeds the rank width at index {}", i))
            })?;
        }

        Ok(rank)
    }

    /// Greedy digit extraction. `universe` caps the top digit (exclusive).
    fn decode<N: Natural>(
        &self,
        rank: &N,
        dimension: usize,
        universe: Option<&N>,
    ) -> Result<Vec<N>, RankError> {
        if dimension == 0 {
            return Err(RankError::DimensionMismatch(dimension));
        }

        // The smallest tuple tops out at `dimension - 1`.
        from_usize::<N>(dimension - 1)?;

        let mut remaining = rank.clone();
        let mut digits = Vec::new();
        let mut upper = universe.cloned();
        let mut factorials = DescendingFactorial::<N>::new(dimension);

        for i in (0..dimension).rev() {
            let m = i + 1;
            let m_factorial = factorials.get(m).cloned();
            let floor = from_usize::<N>(i)?;

            let digit = match self.strategy {
                SearchStrategy::Linear => {
                    linear_search(&remaining, m, &floor, upper.as_ref(), m_factorial.as_ref())?
                }
                SearchStrategy::Exponential => exponential_search(
                    &remaining,
                    m,
                    &floor,
                    upper.as_ref(),
                    m_factorial.as_ref(),
                )?,
            };

            // No room below the previous digit: the universe is too small.
            let (x, c) = match digit {
                Some(found) => found,
                None => {
                    return Err(RankError::InvalidRank {
                        dimension,
                        remainder: remaining.to_string(),
                    })
                }
            };
            remaining = remaining - c;
            digits.push(x.clone());
            upper = Some(x);
        }

        if !remaining.is_zero() {
            return Err(RankError::InvalidRank {
                dimension,
                remainder: remaining.to_string(),
            });
        }

        digits.reverse();
        Ok(digits)
    }
}

/// A digit candidate and its coefficient `C(x, m)`.
type Digit<N> = Option<(N, N)>;

/// Scan upward from `floor` (where `C(floor, m) = 0`), stepping the
/// coefficient with `C(x+1, m) = C(x, m) (x+1) / (x+1-m)`.
///
/// Returns `None` when no `x` in `floor..upper` is available.
fn linear_search<N: Natural>(
    remaining: &N,
    m: usize,
    floor: &N,
    upper: Option<&N>,
    m_factorial: Option<&N>,
) -> Result<Digit<N>, RankError> {
    if upper.is_some_and(|u| u <= floor) {
        return Ok(None);
    }

    let mut x = floor.clone();
    let mut c = N::zero();
    if remaining.is_zero() {
        return Ok(Some((x, c)));
    }

    loop {
        let next = match x.checked_add(&N::one()) {
            Some(v) => v,
            None => break,
        };
        if upper.is_some_and(|u| next >= *u) {
            break;
        }

        let next_c = if c.is_zero() {
            // C(m, m)
            Some(N::one())
        } else {
            match c.checked_mul(&next) {
                Some(product) => Some(product / (next.clone() - floor.clone() - N::one())),
                None => binomial_or_none(&next, m, m_factorial)?,
            }
        };

        match next_c {
            Some(v) if v <= *remaining => {
                x = next;
                c = v;
            }
            _ => break,
        }
    }

    Ok(Some((x, c)))
}

/// Gallop upward from `floor` doubling the step, then bisect the bracket.
///
/// Returns `None` when no `x` in `floor..upper` is available.
fn exponential_search<N: Natural>(
    remaining: &N,
    m: usize,
    floor: &N,
    upper: Option<&N>,
    m_factorial: Option<&N>,
) -> Result<Digit<N>, RankError> {
    if upper.is_some_and(|u| u <= floor) {
        return Ok(None);
    }

    let one = N::one();
    let two = one.clone() + one.clone();

    // Invariant: C(lo, m) <= remaining; hi (if any) is excluded.
    let mut lo = floor.clone();
    let mut lo_c = N::zero();
    let mut hi = upper.cloned();
    let mut step = one.clone();

    loop {
        let probe = match lo.checked_add(&step) {
            Some(p) => p,
            None if step.is_one() => break,
            None => {
                step = one.clone();
                continue;
            }
        };
        if hi.as_ref().is_some_and(|h| probe >= *h) {
            break;
        }

        match binomial_or_none(&probe, m, m_factorial)? {
            Some(c) if c <= *remaining => {
                lo = probe;
                lo_c = c;
                step = step.checked_mul(&two).unwrap_or_else(|| one.clone());
            }
            _ => {
                hi = Some(probe);
                break;
            }
        }
    }

    if let Some(mut hi) = hi {
        while hi.clone() - lo.clone() > one {
            let mid = lo.clone() + (hi.clone() - lo.clone()) / two.clone();
            match binomial_or_none(&mid, m, m_factorial)? {
                Some(c) if c <= *remaining => {
                    lo = mid;
                    lo_c = c;
                }
                _ => hi = mid,
            }
        }
    }

    Ok(Some((lo, lo_c)))
}

impl<N: Natural> TupleRanker<N> for CombinadicRanker {
    fn rank(&self, tuple: &[N]) -> Result<N, RankError> {
        Self::encode(tuple)
    }

    fn unrank(&self, rank: &N, dimension: usize) -> Result<Vec<N>, RankError> {
        self.decode(rank, dimension, None)
    }

    fn unrank_within(
        &self,
        rank: &N,
        dimension: usize,
        universe: &N,
    ) -> Result<Vec<N>, RankError> {
        self.decode(rank, dimension, Some(universe))
    }

    fn count(&self, bound: &N, dimension: usize) -> Result<N, RankError> {
        if dimension == 0 {
            return Err(RankError::DimensionMismatch(dimension));
        }
        binomial(bound, dimension)
    }
}
