use itertools::Itertools;
use smallvec::SmallVec;
use std::fmt;

use crate::combinatorics::p;

/// Finite set of distinct integers, always iterated in ascending order.
///
/// Every set the enumeration touches stays O(k) in size, so the elements live
/// inline in a sorted `SmallVec` and membership is a binary search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct IntSet {
    items: SmallVec<[i64; 16]>,
}

impl IntSet {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn contains(&self, x: i64) -> bool {
        self.items.binary_search(&x).is_ok()
    }

    /// Insert `x`, keeping the order. Returns false if it was already present.
    pub fn insert(&mut self, x: i64) -> bool {
        match self.items.binary_search(&x) {
            Ok(_) => false,
            Err(pos) => {
                self.items.insert(pos, x);
                true
            }
        }
    }

    #[inline]
    pub fn min(&self) -> Option<i64> {
        self.items.first().copied()
    }

    #[inline]
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, i64>> {
        self.items.iter().copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[i64] {
        &self.items
    }
}

impl FromIterator<i64> for IntSet {
    fn from_iter<T: IntoIterator<Item = i64>>(iter: T) -> Self {
        let items = iter.into_iter().sorted_unstable().dedup().collect();
        Self { items }
    }
}

impl fmt::Display for IntSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.items.iter().join(", "))
    }
}

/// Outer candidate range: from 0 (or -1 when 3 | n) down to p(k, n mod 3).
/// Empty when the lower bound lies above the top.
pub fn inserting_range(n: i64, k: i64) -> IntSet {
    let b = n.rem_euclid(3);
    let top = if b == 0 { -1 } else { 0 };
    (p(k, b)..=top).collect()
}

/// X_n for a branch whose smallest element is `m`: {1, ..., b - 2m}.
pub fn removing_range(b: i64, m: i64) -> IntSet {
    (1..=b - 2 * m).collect()
}

/// Elements of `a` that are not in `b`.
pub fn set_minus(a: &IntSet, b: &IntSet) -> IntSet {
    // `a` is sorted, so the filtered stream is too
    IntSet {
        items: a.iter().filter(|&x| !b.contains(x)).collect(),
    }
}
