//! Rank-order enumeration of strictly increasing tuples.
//!
//! Tuples come out ordered by their largest element, ties broken by the next
//! largest, and so on down (colexicographic order). This is exactly rank
//! order, so the `n`-th tuple yielded has rank `n`:
//!
//! ```text
//! k = 2:  [0,1] [0,2] [1,2] [0,3] [1,3] [2,3] [0,4] ...
//! rank:     0     1     2     3     4     5     6
//! ```

use crate::error::RankError;
use crate::natural::{from_usize, succ, Natural};
use crate::traits::validate_tuple;

/// Advance `tuple` in place to the tuple whose rank is one higher.
///
/// The lowest element that can move up without colliding with its neighbour
/// is incremented and every element below it resets to `0, 1, 2, ...`.
///
/// # Errors
///
/// - [`RankError::InvalidInput`] if `tuple` is empty or not strictly increasing.
/// - [`RankError::Overflow`] if the top element is already the largest value
///   of the width.
///
/// # Example
///
/// ```rust
/// use combinadic::successor;
///
/// let mut t = vec![1u32, 2];
/// successor(&mut t).unwrap();
/// assert_eq!(t, vec![0, 3]);
/// ```
pub fn successor<N: Natural>(tuple: &mut [N]) -> Result<(), RankError> {
    validate_tuple(tuple)?;

    let k = tuple.len();
    let mut pivot = k - 1;
    for (i, pair) in tuple.windows(2).enumerate() {
        if succ(&pair[0])? < pair[1] {
            pivot = i;
            break;
        }
    }

    tuple[pivot] = succ(&tuple[pivot])?;
    for (j, slot) in tuple[..pivot].iter_mut().enumerate() {
        *slot = from_usize(j)?;
    }
    Ok(())
}

/// Iterator over strictly increasing tuples in rank order.
///
/// Created by [`tuples`] or [`tuples_below`].
#[derive(Clone, Debug)]
pub struct Tuples<N> {
    next: Option<Vec<N>>,
    bound: Option<N>,
}

impl<N: Natural> Iterator for Tuples<N> {
    type Item = Vec<N>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        if let (Some(bound), Some(last)) = (&self.bound, current.last()) {
            if last >= bound {
                return None;
            }
        }

        let mut following = current.clone();
        match successor(&mut following) {
            Ok(()) => self.next = Some(following),
            // At the top of the width the enumeration simply ends. `current`
            // came from `first_tuple` or `successor`, so nothing else can fail.
            Err(err) => debug_assert!(
                matches!(err, RankError::Overflow(_)),
                "successor of a valid tuple failed: {}",
                err
            ),
        }
        Some(current)
    }
}

fn first_tuple<N: Natural>(dimension: usize) -> Result<Vec<N>, RankError> {
    if dimension == 0 {
        return Err(RankError::DimensionMismatch(dimension));
    }
    (0..dimension).map(from_usize).collect()
}

/// All strictly increasing `dimension`-tuples in rank order, starting from
/// `[0, 1, ..., dimension - 1]`.
///
/// The sequence is unbounded until the width runs out.
pub fn tuples<N: Natural>(dimension: usize) -> Result<Tuples<N>, RankError> {
    Ok(Tuples {
        next: Some(first_tuple(dimension)?),
        bound: None,
    })
}

/// All strictly increasing `dimension`-tuples with every element below
/// `bound`, in rank order. Yields exactly `C(bound, dimension)` tuples.
pub fn tuples_below<N: Natural>(dimension: usize, bound: N) -> Result<Tuples<N>, RankError> {
    Ok(Tuples {
        next: Some(first_tuple(dimension)?),
        bound: Some(bound),
    })
}
