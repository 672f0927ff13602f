use agrmt_agreement::{agreement, agreement_breakdown, pattern_agreement};
use proptest::prelude::*;

fn arb_frequencies() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0u32..500, 3..12)
}

fn arb_nonzero_frequencies() -> impl Strategy<Value = Vec<u32>> {
    arb_frequencies().prop_filter("needs at least one observation", |v| v.iter().any(|&x| x > 0))
}

// ── Bounded in [-1, 1] ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn agreement_is_finite_and_bounded(v in arb_nonzero_frequencies()) {
        let a = agreement(&v).unwrap();
        prop_assert!(a.is_finite());
        prop_assert!((-1.0 - 1e-12..=1.0 + 1e-12).contains(&a), "out of range: {}", a);
    }
}

// ── Scale invariance ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn scaling_does_not_change_agreement(v in arb_frequencies(), factor in 1u64..50) {
        let scaled: Vec<u64> = v.iter().map(|&x| x as u64 * factor).collect();
        let a = agreement(&v).unwrap();
        let b = agreement(&scaled).unwrap();
        prop_assert!((a - b).abs() < 1e-9, "{} vs {}", a, b);
    }
}

// ── Single-category unanimity ────────────────────────────────────────────

proptest! {
    #[test]
    fn single_category_is_perfect_agreement(
        k in 3usize..15,
        position in 0usize..15,
        count in 1u32..10_000,
    ) {
        let mut v = vec![0u32; k];
        v[position % k] = count;
        prop_assert_eq!(agreement(&v).unwrap(), 1.0);
    }
}

// ── Decomposition invariants ─────────────────────────────────────────────

proptest! {
    #[test]
    fn layer_weights_sum_to_one(v in arb_nonzero_frequencies()) {
        let b = agreement_breakdown(&v).unwrap();
        prop_assert!(b.is_consistent(1e-9), "weights sum to {}", b.weight_sum());
    }

    #[test]
    fn at_most_one_layer_per_category(v in arb_frequencies()) {
        let b = agreement_breakdown(&v).unwrap();
        prop_assert!(b.layers.len() <= v.len());
    }

    #[test]
    fn active_categories_shrink_every_layer(v in arb_nonzero_frequencies()) {
        let b = agreement_breakdown(&v).unwrap();
        let active: Vec<usize> = b
            .layers
            .iter()
            .map(|l| l.pattern.iter().filter(|&&p| p == 1).count())
            .collect();
        for pair in active.windows(2) {
            prop_assert!(pair[1] < pair[0]);
        }
    }

    #[test]
    fn repeated_calls_are_identical(v in arb_frequencies()) {
        let a = agreement(&v).unwrap();
        let b = agreement(&v).unwrap();
        prop_assert_eq!(a.to_bits(), b.to_bits());
    }
}

// ── Pattern agreement ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn pattern_agreement_is_bounded(pattern in prop::collection::vec(0u8..=1, 3..12)) {
        let a = pattern_agreement(&pattern).unwrap();
        prop_assert!((-1.0 - 1e-12..=1.0 + 1e-12).contains(&a), "out of range: {}", a);
    }

    #[test]
    fn pattern_agreement_is_mirror_symmetric(pattern in prop::collection::vec(0u8..=1, 3..12)) {
        let mut mirrored = pattern.clone();
        mirrored.reverse();
        let a = pattern_agreement(&pattern).unwrap();
        let b = pattern_agreement(&mirrored).unwrap();
        prop_assert!((a - b).abs() < 1e-12, "{} vs {}", a, b);
    }
}
