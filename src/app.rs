//! Fetch -> calculate -> render pipeline behind the CLI
//!
//! Written against an injected [`RateSource`] and output streams so the whole
//! control flow, exit codes included, runs without a network or a terminal.

use crate::data::fx::compute_conversions;
use crate::data::sources::RateSource;
use crate::output::{write_csv_with_stdout, write_table, CsvDestination};
use log::{debug, error};
use std::io::Write;

pub const EXIT_OK: i32 = 0;
/// Table could not be written (including the "nothing to render" bug case)
pub const EXIT_RENDER_FAILED: i32 = 1;
pub const EXIT_FETCH_FAILED: i32 = 2;
pub const EXIT_CSV_FAILED: i32 = 3;

/// What one invocation should do once rates are in hand
#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    /// Units of each foreign currency to convert
    pub amount: f64,
    /// `None` prints the table
    pub csv: Option<CsvDestination>,
    /// Print a fetch summary to the error stream
    pub verbose: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            amount: 1.0,
            csv: None,
            verbose: false,
        }
    }
}

/// Run one invocation and return the process exit code.
///
/// Table and CSV-to-stdout output go to `out`; diagnostics go to `err`.
pub fn run<S, O, E>(source: &S, options: &RunOptions, mut out: O, mut err: E) -> i32
where
    S: RateSource + ?Sized,
    O: Write,
    E: Write,
{
    let snapshot = match source.fetch_snapshot() {
        Ok(snapshot) => snapshot,
        Err(e) => {
            debug!("{} error from {}: {}", e.kind(), source.name(), e);
            let _ = writeln!(err, "Error: {}", e);
            return EXIT_FETCH_FAILED;
        }
    };

    if options.verbose {
        let updated = snapshot
            .updated_at
            .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
            .unwrap_or_else(|| "unknown".to_string());
        let _ = writeln!(
            err,
            "{} rates from {} (base {}, updated {})",
            snapshot.len(),
            source.name(),
            snapshot.base_code.as_deref().unwrap_or("unknown"),
            updated
        );
    }

    let conversions = compute_conversions(&snapshot.rates, options.amount);
    debug!("Computed {} conversions", conversions.len());

    match &options.csv {
        Some(destination) => {
            if let Err(e) = write_csv_with_stdout(&conversions, destination, &mut out) {
                debug!("CSV write to {} failed: {}", destination, e);
                let _ = writeln!(err, "Failed writing CSV: {}", e);
                return EXIT_CSV_FAILED;
            }
        }
        None => {
            if let Err(e) = write_table(&conversions, &mut out) {
                error!("Rendering table failed: {}", e);
                let _ = writeln!(err, "Error: {}", e);
                return EXIT_RENDER_FAILED;
            }
        }
    }

    EXIT_OK
}
