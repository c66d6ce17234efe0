use itertools::Itertools;

use super::types::{CountOutcome, Pair, Params};
use crate::combinatorics::binom;
use crate::enumeration::{IntSet, Powerset, removing_range, set_minus};
use crate::error::HError;

/// R = A(I) ∪ B(I) ∪ C(I) for boundary parameter `b`.
pub fn exclusion_set(i: &IntSet, b: i64) -> IntSet {
    let mut r = IntSet::new();
    for a in i.iter() {
        // A(I)
        r.insert(b - 2 * a);
        // B(I)
        if (b - a).rem_euclid(2) == 0 {
            r.insert((b - a) / 2);
        }
    }
    // C(I): every a < a' of I
    for (a, a2) in i.iter().tuple_combinations() {
        r.insert(b - a - a2);
    }
    r
}

/// l = |R| - |I|
#[inline]
pub fn deficiency(i: &IntSet, r: &IntSet) -> i64 {
    r.len() as i64 - i.len() as i64
}

/// P(I, R): for each a in I, the pairs x < y with x + y = b - a and neither in R.
pub fn pair_list(i: &IntSet, r: &IntSet, b: i64) -> Vec<Pair> {
    let mut pairs = Vec::new();
    for a in i.iter() {
        let sum = b - a;
        let mut x = 1;
        while x < sum - x {
            let y = sum - x;
            if !(r.contains(x) || r.contains(y)) {
                pairs.push(Pair { x, y });
            }
            x += 1;
        }
    }
    pairs
}

/// True iff `fixation` meets every pair. An empty pair list is always satisfied.
pub fn is_valid_fixation(pairs: &[Pair], fixation: &IntSet) -> bool {
    pairs.iter().all(|p| p.covered_by(fixation))
}

/// X_n for the branch. An empty I has no minimum, and its base range is empty.
pub fn base_range(i: &IntSet, b: i64) -> IntSet {
    match i.min() {
        Some(m) => removing_range(b, m),
        None => IntSet::new(),
    }
}

/// Everything one outer subset I contributes: prune on deficiency, then try
/// every fixation drawn from R_c = X_n \ R and add C(d(n) - |X_n|, k - l')
/// for each one that fits the budget and hits every pair.
pub fn update_count(
    i: &IntSet,
    params: &Params,
    mut acc: CountOutcome,
) -> Result<CountOutcome, HError> {
    let b = params.residue();
    let k = params.k;
    acc.stats.outer_subsets += 1;

    let r = exclusion_set(i, b);
    let l = deficiency(i, &r);
    if l > k {
        acc.stats.pruned += 1;
        return Ok(acc);
    }

    let pairs = pair_list(i, &r, b);
    let xn = base_range(i, b);
    let r_c = set_minus(&xn, &r);
    let free = params.d() - xn.len() as i64;

    for fixation in Powerset::new(&r_c)? {
        acc.stats.fixations_tried += 1;
        let l_ = l + fixation.len() as i64;
        if l_ > k || !is_valid_fixation(&pairs, &fixation) {
            continue;
        }
        acc.count += binom(free, k - l_);
        acc.stats.fixations_accepted += 1;
        *acc.stats.by_deficiency.entry(l_).or_insert(0) += 1;
    }
    Ok(acc)
}
