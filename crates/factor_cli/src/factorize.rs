//! `factor factorize` — batch factorization.
//!
//! Takes numbers from the command line, or from standard input when none are
//! given, factorizes them as one batch, and prints one result per number.

use std::io::Write;

use tracing::debug;

use crate::pipeline::{
    build_factorizer, output_format, read_numbers_from_stdin, report_status, resolve_config,
};
use crate::report::write_factorizations;
use crate::{FactorizeArgs, GlobalArgs};

/// Runs the `factor factorize` command.
///
/// Returns exit code 0 on success. Any invalid number aborts the whole batch
/// before anything is printed.
pub fn run(args: &FactorizeArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let config = resolve_config(global)?;
    let format = output_format(args.format, &config);
    let factorizer = build_factorizer(config, args.strategy);

    let numbers = if args.numbers.is_empty() {
        read_numbers_from_stdin()?
    } else {
        args.numbers.clone()
    };

    let results = factorizer.factorize_all(&numbers)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_factorizations(&mut out, &results, format)?;
    out.flush()?;

    let stats = factorizer.cache().stats();
    debug!(
        count = results.len(),
        cache_limit = stats.limit,
        cached_primes = stats.prime_count,
        hits = stats.hits,
        regenerations = stats.regenerations,
        "factorized batch"
    );
    report_status(
        &mut std::io::stderr(),
        global,
        format_args!(
            "Factorized {} number(s) using {} cached prime(s)",
            results.len(),
            stats.prime_count
        ),
    )?;

    Ok(0)
}
