//! Rendering of results to an output stream.
//!
//! Text output is one line per item; JSON output is a single pretty-printed
//! array. Writers are generic so tests can render into a `Vec<u8>`.

use std::io::{self, Write};

use factor_config::OutputFormat;
use factor_core::Factorization;

/// Writes factorization results, one `"<number>: <factors>"` line each in text mode.
pub fn write_factorizations<W: Write>(
    out: &mut W,
    results: &[Factorization],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            for result in results {
                writeln!(out, "{result}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, results)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Writes a list of primes: comma-separated in text mode, an array in JSON.
pub fn write_primes<W: Write>(out: &mut W, primes: &[u64], format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            let line: Vec<String> = primes.iter().map(u64::to_string).collect();
            writeln!(out, "{}", line.join(", "))?;
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, primes)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
