//! Numeric width abstraction.
//!
//! Every rank, binomial, and tuple element is a [`Natural`]. The width is the
//! caller's choice: any unsigned primitive works, and with the `bigint`
//! feature so does `num_bigint::BigUint`. All arithmetic goes through the
//! checked operations, so exceeding the width surfaces as
//! [`RankError::Overflow`] instead of wrapping.

use std::fmt::{Debug, Display};

use num_integer::Integer;
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, FromPrimitive, ToPrimitive, Unsigned};

use crate::error::RankError;

/// An unsigned integer type usable as a tuple element or rank.
pub trait Natural:
    Integer
    + Unsigned
    + Clone
    + CheckedAdd
    + CheckedSub
    + CheckedMul
    + CheckedDiv
    + FromPrimitive
    + ToPrimitive
    + Debug
    + Display
{
}

impl<T> Natural for T where
    T: Integer
        + Unsigned
        + Clone
        + CheckedAdd
        + CheckedSub
        + CheckedMul
        + CheckedDiv
        + FromPrimitive
        + ToPrimitive
        + Debug
        + Display
{
}

/// Convert a value between widths, e.g. a `u64` rank into `u16`.
///
/// Fails with [`RankError::Overflow`] when the value does not fit in `N`.
///
/// ```rust
/// use combinadic::narrow;
///
/// assert_eq!(narrow::<u16, u64>(&999).unwrap(), 999u16);
/// assert!(narrow::<u16, u64>(&999_999).is_err());
/// ```
pub fn narrow<N: Natural, M: Natural>(value: &M) -> Result<N, RankError> {
    let too_wide = || RankError::overflow(format!("{} does not fit the target width", value));

    if let Some(v) = value.to_u128() {
        return N::from_u128(v).ok_or_else(too_wide);
    }
    // Wider than 128 bits: only an arbitrary-precision target can hold it.
    N::from_str_radix(&value.to_string(), 10).map_err(|_| too_wide())
}

/// Convert a `usize` into `N`, failing if it does not fit.
#[inline]
pub(crate) fn from_usize<N: Natural>(value: usize) -> Result<N, RankError> {
    N::from_usize(value)
        .ok_or_else(|| RankError::overflow(format!("{} does not fit the rank width", value)))
}

/// `value + 1`, checked.
#[inline]
pub(crate) fn succ<N: Natural>(value: &N) -> Result<N, RankError> {
    value
        .checked_add(&N::one())
        .ok_or_else(|| RankError::overflow(format!("{} + 1", value)))
}
