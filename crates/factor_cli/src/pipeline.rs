//! Shared helpers for CLI commands.
//!
//! Configuration resolution, factorizer construction, and parsing of numbers
//! read from standard input.

use std::fmt;
use std::io::{self, Read, Write};
use std::path::Path;

use factor_config::{FactorConfig, OutputFormat};
use factor_core::Factorizer;
use tracing::debug;

use crate::{GlobalArgs, ReportFormat, StrategyChoice};

/// Loads configuration from `--config` if given, else from `factor.toml` in
/// the current directory if present, else defaults.
pub fn resolve_config(global: &GlobalArgs) -> Result<FactorConfig, Box<dyn std::error::Error>> {
    let config = match global.config {
        Some(ref path) => {
            debug!(path = %path, "loading configuration");
            factor_config::load_config_file(Path::new(path))?
        }
        None => factor_config::load_config(&std::env::current_dir()?)?,
    };
    Ok(config)
}

/// Builds a factorizer from configuration, applying a `--strategy` override.
pub fn build_factorizer(mut config: FactorConfig, strategy: Option<StrategyChoice>) -> Factorizer {
    if let Some(choice) = strategy {
        config.sieve.strategy = choice.into();
    }
    Factorizer::from_config(&config)
}

/// Picks the output format: the command-line flag wins over the config file.
pub fn output_format(flag: Option<ReportFormat>, config: &FactorConfig) -> OutputFormat {
    match flag {
        Some(ReportFormat::Text) => OutputFormat::Text,
        Some(ReportFormat::Json) => OutputFormat::Json,
        None => config.output.format,
    }
}

/// Parses whitespace-separated integers.
pub fn parse_numbers(input: &str) -> Result<Vec<i64>, Box<dyn std::error::Error>> {
    let mut numbers = Vec::new();
    for token in input.split_whitespace() {
        let n: i64 = token
            .parse()
            .map_err(|e| format!("invalid integer '{token}': {e}"))?;
        numbers.push(n);
    }
    Ok(numbers)
}

/// Reads all of standard input and parses it with [`parse_numbers`].
pub fn read_numbers_from_stdin() -> Result<Vec<i64>, Box<dyn std::error::Error>> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    parse_numbers(&input)
}

/// Writes an indented status line unless `--quiet` was given.
pub fn report_status<W: Write>(
    err: &mut W,
    global: &GlobalArgs,
    line: fmt::Arguments<'_>,
) -> io::Result<()> {
    if global.quiet {
        return Ok(());
    }
    writeln!(err, "   {line}")
}
