//! factor — command-line front end for the prime factorizer.
//!
//! Provides `factor factorize` for batch factorization and `factor primes` for
//! listing the primes up to a limit. All computation lives in `factor_core`;
//! this binary owns argument parsing, configuration, logging and output.

#![warn(missing_docs)]

mod factorize;
mod logging;
mod pipeline;
mod primes;
mod report;

use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use factor_common::SieveStrategy;

/// factor — prime factorization with a cached sieve.
#[derive(Parser, Debug)]
#[command(name = "factor", version, about = "Prime factorization with a cached sieve")]
pub struct Cli {
    /// Suppress all output except results and errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose (debug-level) output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a custom `factor.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Factorize numbers given as arguments or on standard input.
    Factorize(FactorizeArgs),
    /// List all primes up to a limit.
    Primes(PrimesArgs),
}

/// Arguments for the `factor factorize` subcommand.
#[derive(Parser, Debug)]
pub struct FactorizeArgs {
    /// Numbers to factorize. Reads whitespace-separated integers from stdin
    /// when omitted.
    #[arg(allow_negative_numbers = true)]
    pub numbers: Vec<i64>,

    /// Output format (overrides `output.format` in the config).
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Prime cache growth strategy (overrides `sieve.strategy`).
    #[arg(long, value_enum)]
    pub strategy: Option<StrategyChoice>,
}

/// Arguments for the `factor primes` subcommand.
#[derive(Parser, Debug)]
pub struct PrimesArgs {
    /// Upper bound (inclusive).
    pub limit: u64,

    /// Print only how many primes there are.
    #[arg(short, long)]
    pub count: bool,

    /// Output format (overrides `output.format` in the config).
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Prime cache growth strategy (overrides `sieve.strategy`).
    #[arg(long, value_enum)]
    pub strategy: Option<StrategyChoice>,
}

/// Result output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable lines.
    Text,
    /// Machine-readable JSON.
    Json,
}

/// Prime cache growth strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyChoice {
    /// Re-sieve from scratch on every growth.
    Rebuild,
    /// Sieve only the new segment.
    Incremental,
}

impl From<StrategyChoice> for SieveStrategy {
    fn from(choice: StrategyChoice) -> Self {
        match choice {
            StrategyChoice::Rebuild => SieveStrategy::Rebuild,
            StrategyChoice::Incremental => SieveStrategy::Incremental,
        }
    }
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to print verbose/debug information.
    pub verbose: bool,
    /// Optional path to a custom config file.
    pub config: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        config: cli.config,
    };
    logging::init(&global);

    let result = match cli.command {
        Command::Factorize(ref args) => factorize::run(args, &global),
        Command::Primes(ref args) => primes::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
