use anyhow::{Context, Result};
use std::env;
use std::num::IntErrorKind;
use std::time::Instant;

use hcount::counting::{self, Params};
use hcount::{HError, report};

fn usage() -> ! {
    eprintln!("usage: hcount <n> <k>\nError: must supply at least 2 arguments: n and k.");
    std::process::exit(1);
}

fn parse_int(name: &str, raw: &str) -> Result<i64, HError> {
    raw.trim()
        .parse::<u32>()
        .map(i64::from)
        .map_err(|err| {
            let reason = match err.kind() {
                IntErrorKind::PosOverflow => {
                    format!("{name} is out of range (max {}), got {raw:?}", u32::MAX)
                }
                _ => format!("{name} must be a non-negative integer, got {raw:?}"),
            };
            HError::Usage { reason }
        })
}

fn parse_args() -> Result<Params> {
    // anything past n and k is ignored
    let args: Vec<String> = env::args().skip(1).take(2).collect();
    let [n, k] = args.as_slice() else { usage() };
    let n = parse_int("n", n)?;
    let k = parse_int("k", k)?;
    Ok(Params::new(n, k)?)
}

fn main() -> Result<()> {
    let params = parse_args()?;
    eprintln!(
        "[params] n={} k={} b={} d(n)={} bound={}",
        params.n,
        params.k,
        params.residue(),
        params.d(),
        Params::domain_bound(params.n, params.k)
    );

    let start = Instant::now();
    let outcome = counting::count_semigroups_with_progress(&params)
        .with_context(|| format!("enumerate h for n={} k={}", params.n, params.k))?;
    let elapsed = start.elapsed();

    println!("{}", report::result_sentence(&params, &outcome.count));
    println!("{}", report::elapsed_line(elapsed));
    eprintln!("[summary] {}", outcome.stats);
    Ok(())
}
