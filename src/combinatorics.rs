use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Exact C(n, k). Zero whenever k falls outside 0..=n.
pub fn binom(n: i64, k: i64) -> BigUint {
    if n < 0 || k < 0 || k > n {
        return BigUint::zero();
    }
    let k = k.min(n - k);
    if k == 0 {
        return BigUint::one();
    }

    // after step i the accumulator is C(n, i), so each division is exact
    let mut result = BigUint::from(n as u64);
    for i in 2..=k {
        result *= BigUint::from((n - i + 1) as u64);
        result /= BigUint::from(i as u64);
    }
    result
}

/// d(n) = |X_n|, the number of integers strictly between n/3 and n/2.
#[inline]
pub fn d(n: i64) -> i64 {
    (n - 1).div_euclid(2) - n.div_euclid(3)
}

/// Lower end of the outer candidate range.
#[inline]
pub fn p(k: i64, b: i64) -> i64 {
    -2 * k - 1 + b
}
