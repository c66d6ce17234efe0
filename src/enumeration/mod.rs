use crate::error::HError;

pub mod set;
pub use set::{IntSet, inserting_range, removing_range, set_minus};

// -------------------------------------------------------------------------------------
// Subset codec: bit i of a u64 code <-> i-th element of the set (ascending)
// -------------------------------------------------------------------------------------

/// Largest set whose powerset codes fit in a `u64` (2^63 codes).
pub const MAX_CODE_BITS: usize = 63;

/// Number of codes for a set of `len` elements, i.e. 2^len.
pub fn code_space(len: usize) -> Result<u64, HError> {
    if len > MAX_CODE_BITS {
        return Err(HError::RangeTooLarge {
            len,
            max: MAX_CODE_BITS,
        });
    }
    Ok(1u64 << len)
}

/// If `code` in binary is 1011 then the result is {x_0, x_1, x_3} of
/// `set` = {x_0 < x_1 < x_2 < x_3}. Caller keeps `code` below 2^|set|.
pub fn decode_subset(set: &IntSet, code: u64) -> IntSet {
    debug_assert!(set.len() > MAX_CODE_BITS || code < (1u64 << set.len()));
    // elements are visited in ascending order, so pushes stay sorted
    let mut out = IntSet::new();
    for (i, x) in set.iter().enumerate().take(u64::BITS as usize) {
        if (code >> i) & 1 == 1 {
            out.insert(x);
        }
    }
    out
}

/// Every subset of a set, in code order 0..2^|set|.
pub struct Powerset<'a> {
    set: &'a IntSet,
    next: u64,
    end: u64,
}

impl<'a> Powerset<'a> {
    pub fn new(set: &'a IntSet) -> Result<Self, HError> {
        Ok(Self {
            set,
            next: 0,
            end: code_space(set.len())?,
        })
    }

    /// Total number of subsets this iterator yields.
    #[inline]
    pub fn size(&self) -> u64 {
        self.end
    }
}

impl Iterator for Powerset<'_> {
    type Item = IntSet;

    fn next(&mut self) -> Option<IntSet> {
        if self.next >= self.end {
            return None;
        }
        let subset = decode_subset(self.set, self.next);
        self.next += 1;
        Some(subset)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = usize::try_from(self.end - self.next).ok();
        (rem.unwrap_or(usize::MAX), rem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn set(xs: &[i64]) -> IntSet {
        xs.iter().copied().collect()
    }

    #[test]
    fn decode_literal() {
        assert_eq!(decode_subset(&set(&[2, 5, 9]), 5), set(&[2, 9]));
        assert_eq!(decode_subset(&set(&[2, 5, 9]), 0), IntSet::new());
        assert_eq!(decode_subset(&set(&[2, 5, 9]), 7), set(&[2, 5, 9]));
    }

    #[test]
    fn decode_follows_ascending_order_not_insertion() {
        // built descending, bit 0 still means the smallest element
        let s: IntSet = (-3..=0).rev().collect();
        assert_eq!(decode_subset(&s, 1), set(&[-3]));
        assert_eq!(decode_subset(&s, 8), set(&[0]));
    }

    #[test]
    fn powerset_is_a_bijection() {
        for m in 0..=8usize {
            let s: IntSet = (0..m as i64).map(|x| 3 * x - 4).collect();
            let all: Vec<IntSet> = Powerset::new(&s).unwrap().collect();
            assert_eq!(all.len(), 1 << m);
            let distinct: HashSet<IntSet> = all.iter().cloned().collect();
            assert_eq!(distinct.len(), 1 << m);
            assert!(all.iter().all(|sub| sub.iter().all(|x| s.contains(x))));
        }
    }

    #[test]
    fn powerset_of_empty_set_yields_empty_subset() {
        let empty = IntSet::new();
        let all: Vec<IntSet> = Powerset::new(&empty).unwrap().collect();
        assert_eq!(all, vec![IntSet::new()]);
    }

    #[test]
    fn oversized_sets_are_rejected() {
        assert_eq!(code_space(63), Ok(1u64 << 63));
        let big: IntSet = (0..64).collect();
        assert_eq!(
            Powerset::new(&big).err(),
            Some(HError::RangeTooLarge { len: 64, max: 63 })
        );
    }
}
