//! `factor primes` — list the primes up to a limit.

use std::io::Write;

use factor_config::OutputFormat;
use factor_core::Factorizer;

use crate::pipeline::{build_factorizer, output_format, report_status, resolve_config};
use crate::report::write_primes;
use crate::{GlobalArgs, PrimesArgs};

/// Runs the `factor primes` command.
///
/// The limit may not exceed `⌊√limits.max_input⌋`, the largest sieve any
/// accepted input needs. Returns exit code 0 on success.
pub fn run(args: &PrimesArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let config = resolve_config(global)?;
    let format = output_format(args.format, &config);
    let factorizer = build_factorizer(config, args.strategy);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let found = list_primes(&mut out, &factorizer, args.limit, args.count, format)?;
    out.flush()?;

    report_status(
        &mut std::io::stderr(),
        global,
        format_args!("Found {found} prime(s) up to {}", args.limit),
    )?;

    Ok(0)
}

/// Writes the primes `<= limit` (or just their count) and returns how many
/// there are. Nothing is written when the limit is out of range.
fn list_primes<W: Write>(
    out: &mut W,
    factorizer: &Factorizer,
    limit: u64,
    count_only: bool,
    format: OutputFormat,
) -> Result<usize, Box<dyn std::error::Error>> {
    let primes = factorizer.primes_up_to(limit)?;
    if count_only {
        writeln!(out, "{}", primes.len())?;
    } else {
        write_primes(out, &primes, format)?;
    }
    Ok(primes.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use factor_common::FactorError;

    fn bounded(max_input: u64) -> Factorizer {
        Factorizer::new().with_max_input(max_input)
    }

    #[test]
    fn lists_up_to_sieve_bound() {
        let mut out = Vec::new();
        let found = list_primes(&mut out, &bounded(400), 20, false, OutputFormat::Text).unwrap();
        assert_eq!(found, 8);
        assert_eq!(String::from_utf8(out).unwrap(), "2, 3, 5, 7, 11, 13, 17, 19\n");
    }

    #[test]
    fn one_past_sieve_bound_errors() {
        let mut out = Vec::new();
        let err = list_primes(&mut out, &bounded(400), 21, false, OutputFormat::Text).unwrap_err();
        assert_eq!(
            err.downcast_ref::<FactorError>(),
            Some(&FactorError::SieveTooLarge { limit: 21, max: 20 })
        );
        assert!(out.is_empty());
    }

    #[test]
    fn huge_limit_is_an_error_not_an_allocation() {
        let mut out = Vec::new();
        let factorizer = Factorizer::new();
        let result = list_primes(&mut out, &factorizer, 1_000_000_000_000, true, OutputFormat::Text);
        assert!(result.is_err());
        assert_eq!(factorizer.cache().limit(), 1);
    }

    #[test]
    fn count_only() {
        let mut out = Vec::new();
        list_primes(&mut out, &Factorizer::new(), 100, true, OutputFormat::Json).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "25\n");
    }
}
