//! Property-based tests for tuple ranking.
//!
//! These tests verify mathematical invariants that must hold for all inputs,
//! using proptest to generate random test cases.

use combinadic::{
    count, decode, encode, narrow, tuples_below, CombinadicRanker, RankError, SearchStrategy,
    TupleRanker,
};
use proptest::prelude::*;

/// Generate a strictly increasing tuple with elements below `bound`.
fn increasing_tuple(max_dim: usize, bound: u64) -> impl Strategy<Value = Vec<u64>> {
    (1..=max_dim).prop_flat_map(move |dim| {
        proptest::collection::btree_set(0..bound, dim).prop_map(|set| set.into_iter().collect::<Vec<u64>>())
    })
}

/// Generate a 10-tuple whose top element is at least 1000, so that
/// C(top, 10) alone exceeds `u64` but the rank still fits `u128`.
fn wide_tuple() -> impl Strategy<Value = Vec<u64>> {
    (proptest::collection::btree_set(0..1000u64, 9), 1000u64..10_000).prop_map(|(low, top)| {
        let mut tuple: Vec<u64> = low.into_iter().collect();
        tuple.push(top);
        tuple
    })
}

/// Generate a (dimension, rank) pair with the rank below C(bound, dimension).
fn rank_below(max_dim: usize, bound: u64) -> impl Strategy<Value = (usize, u64)> {
    (1..=max_dim).prop_flat_map(move |dim| {
        let total = count(&bound, dim).expect("count fits in u64");
        (Just(dim), 0..total)
    })
}

fn linear() -> CombinadicRanker {
    CombinadicRanker::with_strategy(SearchStrategy::Linear)
}

fn exponential() -> CombinadicRanker {
    CombinadicRanker::with_strategy(SearchStrategy::Exponential)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    // =======================================================================
    // BIJECTION: encode(decode(r, k)) == r
    // =======================================================================

    #[test]
    fn decode_then_encode((dim, rank) in rank_below(8, 60)) {
        let tuple = decode(&rank, dim)
            .expect("decoding should succeed for every rank");

        prop_assert_eq!(tuple.len(), dim);
        prop_assert!(tuple.windows(2).all(|w| w[0] < w[1]), "decoded tuple must be strictly increasing");
        prop_assert!(*tuple.last().unwrap() < 60, "rank below C(60, k) must decode below 60");
        prop_assert_eq!(encode(&tuple)?, rank);
    }

    #[test]
    fn decode_arbitrary_rank(rank in any::<u64>(), dim in 1usize..12) {
        let tuple = decode(&rank, dim)?;

        prop_assert!(tuple.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(encode(&tuple)?, rank);
    }

    // =======================================================================
    // ROUNDTRIP: decode(encode(t), k) == t
    // =======================================================================

    #[test]
    fn encode_then_decode(tuple in increasing_tuple(10, 120)) {
        let rank = encode(&tuple)?;
        let decoded = decode(&rank, tuple.len())?;

        prop_assert_eq!(tuple, decoded, "roundtrip must preserve the tuple");
    }

    #[test]
    fn rank_within_universe(tuple in increasing_tuple(6, 500)) {
        let ranker = CombinadicRanker::new();
        let universe = tuple.last().unwrap() + 1;

        let rank = ranker.rank_within(&tuple, &universe)?;
        let total = ranker.count(&universe, tuple.len())?;
        prop_assert!(rank < total, "rank {} must be below C({}, {}) = {}", rank, universe, tuple.len(), total);

        let decoded = ranker.unrank_within(&rank, tuple.len(), &universe)?;
        prop_assert_eq!(tuple, decoded);
    }

    // =======================================================================
    // STRATEGIES AND WIDTHS AGREE
    // =======================================================================

    #[test]
    fn strategies_agree((dim, rank) in rank_below(6, 200)) {
        let a = linear().unrank(&rank, dim)?;
        let b = exponential().unrank(&rank, dim)?;

        prop_assert_eq!(a, b, "linear and exponential search must agree");
    }

    #[test]
    fn strategies_agree_at_narrow_width(rank in any::<u16>(), dim in 1usize..6) {
        // Large u16 ranks push the search into coefficients that overflow u16.
        let a = linear().unrank(&rank, dim)?;
        let b = exponential().unrank(&rank, dim)?;

        prop_assert_eq!(&a, &b, "linear and exponential search must agree");
        prop_assert_eq!(encode(&a)?, rank);
    }

    #[test]
    fn widths_agree(tuple in increasing_tuple(5, 200)) {
        let narrow_tuple: Vec<u32> = tuple.iter().map(|&x| x as u32).collect();
        let wide_tuple: Vec<u128> = tuple.iter().map(|&x| x as u128).collect();

        let r64 = encode(&tuple)?;
        let r32 = encode(&narrow_tuple)?;
        let r128 = encode(&wide_tuple)?;

        prop_assert_eq!(r64 as u128, r128);
        prop_assert_eq!(r32 as u64, r64);
    }

    // =======================================================================
    // MONOTONICITY
    // =======================================================================

    #[test]
    fn raising_an_element_raises_the_rank(tuple in increasing_tuple(8, 200), pick in any::<prop::sample::Index>()) {
        let i = pick.index(tuple.len());
        let ceiling = tuple.get(i + 1).copied().unwrap_or(200);
        prop_assume!(tuple[i] + 1 < ceiling);

        let mut raised = tuple.clone();
        raised[i] += 1;

        prop_assert!(encode(&raised)? > encode(&tuple)?);
    }

    // =======================================================================
    // BOUNDARY: k = 1 is the identity
    // =======================================================================

    #[test]
    fn dimension_one_is_identity(x in any::<u64>()) {
        prop_assert_eq!(encode(&[x])?, x);
        prop_assert_eq!(decode(&x, 1)?, vec![x]);
    }

    // =======================================================================
    // ERROR CASES
    // =======================================================================

    #[test]
    fn rejects_non_increasing((a, b) in (0u64..10000, 0u64..10000)) {
        prop_assume!(a >= b);
        let result = encode(&[a, b]);

        prop_assert!(matches!(result, Err(RankError::InvalidInput(_))), "should reject non-increasing tuple");
    }

    #[test]
    fn reports_overflow_for_wide_tuples(tuple in wide_tuple()) {
        let result = encode(&tuple);
        prop_assert!(matches!(result, Err(RankError::Overflow(_))), "rank beyond u64 must be reported, not wrapped");

        let wide: Vec<u128> = tuple.iter().map(|&x| u128::from(x)).collect();
        let rank = encode(&wide)?;
        prop_assert_eq!(decode(&rank, wide.len())?, wide);
    }

    #[test]
    fn rejects_ranks_outside_universe(dim in 1usize..6, universe in 1u64..40, excess in 0u64..1000) {
        let ranker = CombinadicRanker::new();
        let total = ranker.count(&universe, dim)?;
        let result = ranker.unrank_within(&(total + excess), dim, &universe);

        prop_assert!(matches!(result, Err(RankError::InvalidRank { .. })), "rank beyond C(universe, k) must be rejected");
    }

    // =======================================================================
    // DETERMINISM
    // =======================================================================

    #[test]
    fn encoding_is_deterministic(tuple in increasing_tuple(10, 120)) {
        prop_assert_eq!(encode(&tuple)?, encode(&tuple)?);
    }
}

// =======================================================================
// EXHAUSTIVE TESTS (not proptest, but important)
// =======================================================================

#[test]
fn enumeration_is_dense() {
    // Tuples with max < m in (max, then next-largest, ...) order rank to 0..C(m, k).
    for k in 1..=5usize {
        for m in 0..=14u64 {
            let ranks: Vec<u64> = tuples_below(k, m)
                .unwrap()
                .map(|t| encode(&t).unwrap())
                .collect();
            let expected: Vec<u64> = (0..count(&m, k).unwrap()).collect();
            assert_eq!(ranks, expected, "k = {}, m = {}", k, m);
        }
    }
}

#[test]
fn strategies_agree_near_u16_max() {
    for dim in 1..=4usize {
        for rank in (u16::MAX - 2000)..=u16::MAX {
            let a = linear().unrank(&rank, dim).unwrap();
            let b = exponential().unrank(&rank, dim).unwrap();
            assert_eq!(a, b, "k = {}, rank = {}", dim, rank);
            assert!(a.windows(2).all(|w| w[0] < w[1]));
            assert_eq!(encode(&a).unwrap(), rank);
        }
    }
}

#[test]
fn reference_scenarios() {
    assert_eq!(encode(&[0u64, 4, 6]).unwrap(), 26);
    assert_eq!(encode(&[0u64, 1, 2, 3, 4, 5, 7, 9]).unwrap(), 10);
    assert_eq!(encode(&[0u64, 1]).unwrap(), 0);
    assert_eq!(encode(&[0u64, 2]).unwrap(), 1);
    assert_eq!(encode(&[1u64, 2]).unwrap(), 2);
    assert_eq!(encode(&[0u64, 3]).unwrap(), 3);
    assert_eq!(decode(&26u64, 3).unwrap(), vec![0, 4, 6]);
    assert_eq!(decode(&10u64, 8).unwrap(), vec![0, 1, 2, 3, 4, 5, 7, 9]);
}

#[test]
fn error_scenarios() {
    assert!(matches!(
        encode(&[3u64, 1]),
        Err(RankError::InvalidInput(_))
    ));

    // 999999 does not fit a 16-bit rank.
    let result = narrow::<u16, u64>(&999_999).and_then(|r| decode(&r, 2));
    assert!(matches!(result, Err(RankError::Overflow(_))));

    // At 32 bits it does, and the tuple round-trips.
    let tuple = decode(&999_999u32, 2).unwrap();
    assert_eq!(encode(&tuple).unwrap(), 999_999);

    assert_eq!(decode(&0u64, 0), Err(RankError::DimensionMismatch(0)));
}

#[test]
fn overflow_is_reported_not_wrapped() {
    // C(2^32 - 1, 2) needs 63 bits.
    let result = encode(&[0u32, u32::MAX]);
    assert!(matches!(result, Err(RankError::Overflow(_))));

    let wide = encode(&[0u64, u64::from(u32::MAX)]).unwrap();
    assert_eq!(wide, u64::from(u32::MAX) * u64::from(u32::MAX - 1) / 2);
}

#[cfg(feature = "bigint")]
#[test]
fn arbitrary_precision_ranks() {
    use num_bigint::BigUint;

    let tuple: Vec<BigUint> = [0u64, 1_000, 1_000_000, 1_000_000_000_000]
        .iter()
        .map(|&x| BigUint::from(x))
        .collect();
    let rank = encode(&tuple).unwrap();
    assert!(rank > BigUint::from(u64::MAX));

    let decoded = decode(&rank, 4).unwrap();
    assert_eq!(decoded, tuple);
}
