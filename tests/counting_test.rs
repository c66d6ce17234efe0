//! End-to-end checks of the enumeration against hand-worked cases.

use hcount::combinatorics::binom;
use hcount::{HError, Params, count_semigroups};
use num_bigint::BigUint;

fn h(n: i64, k: i64) -> BigUint {
    let params = Params::new(n, k).unwrap();
    count_semigroups(&params).unwrap().count
}

#[test]
fn empty_outer_range_counts_only_the_empty_subset() {
    // n = 5, k = 0: b = 2 and p(0, 2) = 1 lies above 0
    assert_eq!(h(5, 0), BigUint::from(1u32));
}

#[test]
fn hand_worked_k0() {
    // I = {} and I = {0}
    assert_eq!(h(7, 0), BigUint::from(2u32));
    // I = {} and I = {-1}; {-1} takes only the empty fixation
    assert_eq!(h(15, 0), BigUint::from(2u32));
}

#[test]
fn hand_worked_k1() {
    // 4 (I = {}) + 2 (I = {-1}) + 1 (I = {0}); I = {-1, 0} is pruned
    assert_eq!(h(23, 1), BigUint::from(7u32));
}

#[test]
fn pinned_counts_for_larger_k() {
    // several outer branches build pair lists and accept more than one fixation
    assert_eq!(h(55, 2), BigUint::from(109u32));
    assert_eq!(h(61, 2), BigUint::from(131u32));
    assert_eq!(h(72, 2), BigUint::from(147u32));
    assert_eq!(h(100, 3), BigUint::from(1625u32));
    assert_eq!(h(301, 4), BigUint::from(540_650u32));
}

#[test]
fn pinned_counts_exercise_pairs_and_family_c() {
    let params = Params::new(100, 3).unwrap();
    let outcome = count_semigroups(&params).unwrap();
    assert!(outcome.stats.pruned > 0);
    assert!(outcome.stats.by_deficiency.len() > 1);
    // I = {-6} alone tries 2^12 fixations against a budget of 3
    assert!(outcome.stats.fixations_tried > outcome.stats.fixations_accepted);
}

#[test]
fn count_includes_empty_subset_term() {
    for (n, k) in [(31, 1), (35, 1), (39, 1), (55, 2), (62, 2), (72, 2)] {
        let params = Params::new(n, k).unwrap();
        let outcome = count_semigroups(&params).unwrap();
        assert!(outcome.count >= binom(params.d(), k), "n={n} k={k}");
        assert!(outcome.stats.fixations_accepted >= 1);
    }
}

#[test]
fn repeated_runs_agree() {
    for (n, k) in [(23, 1), (55, 2), (61, 2)] {
        let params = Params::new(n, k).unwrap();
        let first = count_semigroups(&params).unwrap();
        let second = count_semigroups(&params).unwrap();
        assert_eq!(first, second, "n={n} k={k}");
    }
}

#[test]
fn outer_subsets_cover_the_powerset() {
    // b = 1, k = 2: outer range {-4, ..., 0}
    let params = Params::new(55, 2).unwrap();
    let outcome = count_semigroups(&params).unwrap();
    assert_eq!(outcome.stats.outer_subsets, 32);
    let accepted: u64 = outcome.stats.by_deficiency.values().sum();
    assert_eq!(accepted, outcome.stats.fixations_accepted);
    assert!(outcome.stats.by_deficiency.keys().all(|&l| (0..=2).contains(&l)));
}

#[test]
fn precondition_is_checked_before_enumeration() {
    assert_eq!(
        Params::new(1, 5),
        Err(HError::DomainPrecondition { n: 1, k: 5, bound: 124 })
    );
    // b = 0: bound is 24k + 12 exactly
    assert!(Params::new(36, 1).is_err());
    assert!(Params::new(39, 1).is_ok());
}
