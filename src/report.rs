use num_bigint::BigUint;
use std::time::Duration;

use crate::counting::Params;

pub fn result_sentence(params: &Params, count: &BigUint) -> String {
    let dim = params.dimension();
    format!(
        "There are {count} numerical semigroups of embedding dimension {dim} with minimal generating set \
         bounded above by {} such that {} is not in the semigroup, i.e.\nh_{{{}, {dim}}} = {count}",
        params.generator_bound(),
        params.n,
        params.n,
    )
}

pub fn elapsed_line(elapsed: Duration) -> String {
    format!("{:.3}ms to run.", elapsed.as_secs_f64() * 1e3)
}
