use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HError {
    #[error("usage: {reason}")]
    Usage { reason: String },

    #[error("n must be strictly greater than {bound} for k = {k} (got n = {n})")]
    DomainPrecondition { n: i64, k: i64, bound: i64 },

    /// The subset codec indexes subsets with a `u64`; larger sets cannot be enumerated.
    #[error("cannot enumerate subsets of a {len}-element set (max {max})")]
    RangeTooLarge { len: usize, max: usize },
}
