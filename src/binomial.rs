//! Binomial coefficients shared by the encoder and decoder.
//!
//! # Theory
//!
//! The product of `m` consecutive integers is divisible by `m!`, so
//!
//! ```text
//! C(x, m) = x (x-1) ... (x-m+1) / m!
//! ```
//!
//! is exact when the falling factorial is assembled first and divided once.
//! Partial products are *not* divisible by partial factorials in general, so
//! dividing per step would be wrong.
//!
//! The falling factorial grows like `x^m` and overflows long before `C(x, m)`
//! does. When it (or `m!`) does not fit, [`binomial`] falls back to the
//! multiplicative recurrence `C(x, j+1) = C(x, j) (x-j) / (j+1)` over the
//! smaller of `m` and `x-m`, reduced by `gcd(C(x, j), j+1)` before
//! multiplying. Every intermediate value is then some `C(x, j)` with
//! `j <= x/2`, none larger than the result, so overflow is reported exactly
//! when `C(x, m)` itself does not fit.
//!
//! Both paths are exact and therefore agree bit for bit; the choice only
//! affects which inputs can be computed at a given width.

use crate::error::RankError;
use crate::natural::Natural;

/// Running factorial `n!`, advanced one step at a time.
///
/// The encoder walks dimensions `1, 2, ..., k` in order and needs `(i+1)!`
/// at each step; carrying it forward avoids recomputing from scratch.
/// Once the factorial overflows it stays `None`.
#[derive(Clone, Debug)]
pub(crate) struct RunningFactorial<N> {
    n: usize,
    value: Option<N>,
}

impl<N: Natural> RunningFactorial<N> {
    /// Start at `0! = 1`.
    pub(crate) fn new() -> Self {
        Self {
            n: 0,
            value: Some(N::one()),
        }
    }

    /// Advance from `n!` to `(n+1)!` and return it, or `None` on overflow.
    pub(crate) fn advance(&mut self) -> Option<&N> {
        self.n += 1;
        let factor = N::from_usize(self.n);
        self.value = match (self.value.take(), factor) {
            (Some(v), Some(f)) => v.checked_mul(&f),
            _ => None,
        };
        self.value.as_ref()
    }
}

/// Factorials `k!, (k-1)!, ..., 1!` handed out top down.
///
/// The decoder needs `m!` for `m = k, k-1, ..., 1`. The largest factorial that
/// fits (at most `k!`) is built once and then divided down by `m` at each
/// step. Requests above that ceiling get `None`.
#[derive(Clone, Debug)]
pub(crate) struct DescendingFactorial<N> {
    n: usize,
    value: N,
}

impl<N: Natural> DescendingFactorial<N> {
    /// Build `min(k, largest n with n! in N)!`.
    pub(crate) fn new(k: usize) -> Self {
        let mut n = 0;
        let mut value = N::one();
        while n < k {
            match N::from_usize(n + 1).and_then(|f| value.checked_mul(&f)) {
                Some(next) => value = next,
                None => break,
            }
            n += 1;
        }
        Self { n, value }
    }

    /// `m!`, or `None` if it does not fit. `m` must not increase between calls.
    pub(crate) fn get(&mut self, m: usize) -> Option<&N> {
        while self.n > m {
            // n was multiplied in on the way up, so it fits.
            let f = N::from_usize(self.n)?;
            self.value = self.value.clone() / f;
            self.n -= 1;
        }
        if self.n == m {
            Some(&self.value)
        } else {
            None
        }
    }
}

/// `m!`, or `None` if it does not fit.
pub(crate) fn factorial<N: Natural>(m: usize) -> Option<N> {
    let mut running = RunningFactorial::<N>::new();
    for _ in 0..m {
        running.advance()?;
    }
    running.value
}

/// `x (x-1) ... (x-m+1)`, or `None` if it does not fit. Requires `m <= x`.
fn falling_factorial<N: Natural>(x: &N, m: usize) -> Option<N> {
    let one = N::one();
    let mut product = N::one();
    let mut term = x.clone();
    for _ in 0..m {
        product = product.checked_mul(&term)?;
        term = term.checked_sub(&one)?;
    }
    Some(product)
}

/// `C(x, m)` via the gcd-reduced multiplicative recurrence. Requires `m <= x`.
fn binomial_recurrence<N: Natural>(x: &N, m: &N) -> Option<N> {
    let rest = x.clone() - m.clone();
    let steps = if rest < *m { rest } else { m.clone() };

    let one = N::one();
    let mut result = N::one();
    let mut numer = x.clone();
    let mut denom = N::one();
    let mut j = N::zero();
    while j < steps {
        let g = result.gcd(&denom);
        let reduced = result / g.clone();
        let factor = numer.clone() / (denom.clone() / g);
        result = reduced.checked_mul(&factor)?;
        numer = numer - one.clone();
        denom = denom.checked_add(&one)?;
        j = j + one.clone();
    }
    Some(result)
}

/// Compute `C(x, m)` given `m!` if the caller already has it.
///
/// Returns `0` when `m > x` and `1` when `m == 0`.
pub(crate) fn binomial_with_factorial<N: Natural>(
    x: &N,
    m: usize,
    m_factorial: Option<&N>,
) -> Result<N, RankError> {
    if m == 0 {
        return Ok(N::one());
    }
    // An `m` wider than `N` is larger than any `x`.
    let m_n = match N::from_usize(m) {
        Some(v) => v,
        None => return Ok(N::zero()),
    };
    if m_n > *x {
        return Ok(N::zero());
    }

    if let Some(f) = m_factorial {
        if let Some(product) = falling_factorial(x, m) {
            return Ok(product / f.clone());
        }
    }

    binomial_recurrence(x, &m_n)
        .ok_or_else(|| RankError::overflow(format!("C({}, {}) exceeds the rank width", x, m)))
}

/// Binomial coefficient `C(x, m)` ("x choose m") at width `N`.
///
/// # Errors
///
/// [`RankError::Overflow`] if and only if the coefficient does not fit in `N`.
///
/// # Example
///
/// ```rust
/// use combinadic::binomial;
///
/// assert_eq!(binomial(&6u32, 3).unwrap(), 20);
/// assert_eq!(binomial(&2u32, 3).unwrap(), 0);
/// assert!(binomial(&40u8, 20).is_err());
/// ```
pub fn binomial<N: Natural>(x: &N, m: usize) -> Result<N, RankError> {
    let f = factorial::<N>(m);
    binomial_with_factorial(x, m, f.as_ref())
}

/// Like [`binomial_with_factorial`], but treats an overflowing coefficient as
/// `None`.
///
/// The decoder uses this while searching: a coefficient too wide for `N` is
/// certainly larger than any representable rank.
pub(crate) fn binomial_or_none<N: Natural>(
    x: &N,
    m: usize,
    m_factorial: Option<&N>,
) -> Result<Option<N>, RankError> {
    match binomial_with_factorial(x, m, m_factorial) {
        Ok(v) => Ok(Some(v)),
        Err(RankError::Overflow(_)) => Ok(None),
        Err(e) => Err(e),
    }
}
