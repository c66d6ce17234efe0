use indicatif::{ProgressBar, ProgressStyle};

use super::solve::update_count;
use super::types::{CountOutcome, Params};
use crate::enumeration::{IntSet, Powerset, inserting_range};
use crate::error::HError;

/// Outer range for `params`, refused before construction if any powerset
/// the run needs is too large for the codec.
fn outer_range(params: &Params) -> Result<IntSet, HError> {
    params.check_code_bounds()?;
    Ok(inserting_range(params.n, params.k))
}

fn fold_outer(
    params: &Params,
    outer: &IntSet,
    mut on_step: impl FnMut(),
) -> Result<CountOutcome, HError> {
    // For I in Powerset({p(k, b), ..., 0})
    Powerset::new(outer)?.try_fold(CountOutcome::default(), |acc, i| {
        let acc = update_count(&i, params, acc)?;
        on_step();
        Ok(acc)
    })
}

/// h_{n, d(n) - k}, with no output of any kind.
pub fn count_semigroups(params: &Params) -> Result<CountOutcome, HError> {
    let outer = outer_range(params)?;
    fold_outer(params, &outer, || {})
}

/// Same count as [`count_semigroups`], with stderr diagnostics and a
/// progress bar over the outer subsets.
pub fn count_semigroups_with_progress(params: &Params) -> Result<CountOutcome, HError> {
    let outer = outer_range(params)?;
    let total = Powerset::new(&outer)?.size();
    eprintln!(
        "[enumerate] outer range {} ({} element(s), {} subsets)",
        outer,
        outer.len(),
        total
    );

    let pb = ProgressBar::new(total);
    let style = ProgressStyle::with_template("[{elapsed_precise}] {bar:40} {pos}/{len} subsets")
        .map(|s| s.progress_chars("=>-"))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    pb.set_style(style);

    let outcome = fold_outer(params, &outer, || pb.inc(1));
    pb.finish_and_clear();
    outcome
}
