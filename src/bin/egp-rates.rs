//! egp-rates CLI - live FX rates expressed in Egyptian Pounds
//!
//! ## Example Usage
//!
//! ```bash
//! # Table of EGP per 1 unit of every currency
//! egp-rates
//!
//! # EGP value of 250 units of every currency, as CSV on stdout
//! egp-rates --amount 250 --csv -
//!
//! # CSV file, shorter timeout
//! egp-rates --timeout 3 --csv rates.csv
//! ```

use clap::Parser;
use egp_rates::app::{self, RunOptions};
use egp_rates::config::Config;
use egp_rates::data::sources::OpenErApiSource;
use egp_rates::output::CsvDestination;
use std::io;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

/// egp-rates: convert every currency to Egyptian Pounds
#[derive(Parser, Debug)]
#[command(name = "egp-rates")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Convert all currencies to Egyptian Pound (EGP)", long_about = None)]
struct Cli {
    /// Amount of each foreign currency to convert to EGP [default: 1.0]
    #[arg(long, allow_negative_numbers = true)]
    amount: Option<f64>,

    /// HTTP timeout in seconds [default: 10]
    #[arg(long, value_parser = parse_timeout)]
    timeout: Option<f64>,

    /// Write CSV to this path, or '-' for stdout (empty prints the table)
    #[arg(long, value_name = "PATH", allow_hyphen_values = true)]
    csv: Option<CsvDestination>,

    /// Print a fetch summary to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl Cli {
    /// CSV destination, if any; an empty path means table mode
    fn csv_destination(&self) -> Option<CsvDestination> {
        match &self.csv {
            Some(CsvDestination::File(path)) if path.as_os_str().is_empty() => None,
            other => other.clone(),
        }
    }
}

fn parse_timeout(s: &str) -> Result<f64, String> {
    let seconds: f64 = s
        .parse()
        .map_err(|e| format!("invalid timeout '{}': {}", s, e))?;
    if Duration::try_from_secs_f64(seconds).is_err() {
        return Err(format!(
            "timeout must be a non-negative number of seconds, got {}",
            s
        ));
    }
    Ok(seconds)
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref());
    let timeout = cli.timeout.unwrap_or(config.timeout);

    let timeout = match Duration::try_from_secs_f64(timeout) {
        Ok(timeout) => timeout,
        Err(e) => {
            eprintln!("Error: invalid timeout {}: {}", timeout, e);
            process::exit(app::EXIT_FETCH_FAILED);
        }
    };

    let source = match OpenErApiSource::with_endpoint(config.endpoint.clone(), timeout) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(e.exit_code());
        }
    };

    let options = RunOptions {
        amount: cli.amount.unwrap_or(config.amount),
        csv: cli.csv_destination(),
        verbose: cli.verbose,
    };

    let code = app::run(&source, &options, io::stdout().lock(), io::stderr().lock());
    process::exit(code);
}
