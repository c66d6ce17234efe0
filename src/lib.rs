//! Enumerates h_{n, d(n) - k}: the number of numerical semigroups of embedding
//! dimension d(n) - k that exclude n and whose minimal generators are all
//! below n / 2. Valid once n > 24k + 12 - 8(n mod 3).

pub mod combinatorics;
pub mod counting;
pub mod enumeration;
pub mod error;
pub mod report;

pub use counting::{CountOutcome, CountStats, Params, count_semigroups};
pub use error::HError;
