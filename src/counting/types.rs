use ahash::AHashMap;
use itertools::Itertools;
use num_bigint::BigUint;
use std::fmt;

use crate::combinatorics::{d, p};
use crate::enumeration::{IntSet, MAX_CODE_BITS};
use crate::error::HError;

/// Validated (n, k) plus the quantities derived from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    pub n: i64,
    pub k: i64,
}

impl Params {
    /// Rejects n < 1 or k < 0 as usage errors, any n at or below
    /// [`Params::domain_bound`] as a precondition failure, and any (n, k)
    /// whose ranges the subset codec cannot index.
    pub fn new(n: i64, k: i64) -> Result<Self, HError> {
        if n < 1 {
            return Err(HError::Usage {
                reason: format!("n must be a positive integer, got {n}"),
            });
        }
        if k < 0 {
            return Err(HError::Usage {
                reason: format!("k must be a non-negative integer, got {k}"),
            });
        }
        let bound = Self::domain_bound(n, k);
        if n <= bound {
            return Err(HError::DomainPrecondition { n, k, bound });
        }
        let params = Self { n, k };
        params.check_code_bounds()?;
        Ok(params)
    }

    /// Top of the outer candidate range: 0, or -1 when 3 | n.
    #[inline]
    pub fn outer_top(&self) -> i64 {
        if self.residue() == 0 { -1 } else { 0 }
    }

    /// |{p(k, b), ..., top}|, computed without building the range.
    pub fn outer_len(&self) -> i64 {
        (self.outer_top() - p(self.k, self.residue()) + 1).max(0)
    }

    /// Largest X_n any branch can build: min(I) >= p(k, b), so |X_n| <= b - 2 p(k, b).
    pub fn max_base_len(&self) -> i64 {
        if self.outer_len() == 0 {
            return 0;
        }
        (self.residue() - 2 * p(self.k, self.residue())).max(0)
    }

    /// Both powersets (outer I, inner fixations drawn from R_c within X_n)
    /// must fit the codec. Checked from (n, k) alone, before any set exists.
    pub fn check_code_bounds(&self) -> Result<(), HError> {
        for len in [self.outer_len(), self.max_base_len()] {
            if len > MAX_CODE_BITS as i64 {
                return Err(HError::RangeTooLarge {
                    len: usize::try_from(len).unwrap_or(usize::MAX),
                    max: MAX_CODE_BITS,
                });
            }
        }
        Ok(())
    }

    /// n must exceed 24k + 12 - 8(n mod 3) for the count to be valid.
    #[inline]
    pub fn domain_bound(n: i64, k: i64) -> i64 {
        24 * k + 12 - 8 * n.rem_euclid(3)
    }

    /// b = n mod 3
    #[inline]
    pub fn residue(&self) -> i64 {
        self.n.rem_euclid(3)
    }

    #[inline]
    pub fn d(&self) -> i64 {
        d(self.n)
    }

    /// Embedding dimension being counted, d(n) - k.
    #[inline]
    pub fn dimension(&self) -> i64 {
        self.d() - self.k
    }

    /// Minimal generators are bounded above by this.
    #[inline]
    pub fn generator_bound(&self) -> i64 {
        self.n / 2
    }
}

/// Two integers summing to b - a; a valid fixation must contain at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pair {
    pub x: i64,
    pub y: i64,
}

impl Pair {
    #[inline]
    pub fn covered_by(&self, fixation: &IntSet) -> bool {
        fixation.contains(self.x) || fixation.contains(self.y)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountStats {
    pub outer_subsets: u64,
    pub pruned: u64,
    pub fixations_tried: u64,
    pub fixations_accepted: u64,
    /// accepted fixations keyed by final deficiency l'
    pub by_deficiency: AHashMap<i64, u64>,
}

impl fmt::Display for CountStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hist = self
            .by_deficiency
            .iter()
            .sorted_unstable_by_key(|(l, _)| **l)
            .map(|(l, c)| format!("{l}:{c}"))
            .join(", ");
        write!(
            f,
            "outer={} pruned={} fixations tried={} accepted={} by_deficiency=[{}]",
            self.outer_subsets, self.pruned, self.fixations_tried, self.fixations_accepted, hist
        )
    }
}

/// Running total and counters, threaded through the fold by value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountOutcome {
    pub count: BigUint,
    pub stats: CountStats,
}
