//! CSV export

use crate::data::fx::Conversion;
use crate::error::{FxError, Result};
use csv::{Terminator, WriterBuilder};
use std::fmt;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::str::FromStr;

/// Header row written before any conversion
pub const CSV_HEADER: [&str; 2] = ["currency", "egp_per_unit"];

const CSV_DECIMALS: usize = 8;

/// Where CSV goes: `-` is standard output, anything else a file path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsvDestination {
    Stdout,
    File(PathBuf),
}

impl FromStr for CsvDestination {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(if s == "-" {
            CsvDestination::Stdout
        } else {
            CsvDestination::File(PathBuf::from(s))
        })
    }
}

impl fmt::Display for CsvDestination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CsvDestination::Stdout => write!(f, "-"),
            CsvDestination::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Write the header and one `code,value` row per conversion to `writer`.
///
/// Values carry exactly eight decimals and no grouping separators. Records
/// end in `\r\n`.
pub fn write_csv_to<W: Write>(conversions: &[Conversion], writer: W) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_writer(writer);
    writer.write_record(CSV_HEADER)?;

    for conversion in conversions {
        let value = format!("{:.*}", CSV_DECIMALS, conversion.amount_in_base);
        writer.write_record([conversion.currency_code.as_str(), value.as_str()])?;
    }

    writer.flush()?;
    Ok(())
}

/// Write conversions as CSV to `destination`.
///
/// A file is created or truncated and closed again before returning, on
/// success and failure alike. `stdout` is only borrowed for the write.
pub fn write_csv_with_stdout<W: Write>(
    conversions: &[Conversion],
    destination: &CsvDestination,
    stdout: W,
) -> Result<()> {
    match destination {
        CsvDestination::Stdout => write_csv_to(conversions, stdout),
        CsvDestination::File(path) => {
            let file = File::create(path)
                .map_err(|e| FxError::Io(format!("{}: {}", path.display(), e)))?;
            write_csv_to(conversions, file)
        }
    }
}

/// [`write_csv_with_stdout`] against the process's standard output
pub fn write_csv(conversions: &[Conversion], destination: &CsvDestination) -> Result<()> {
    write_csv_with_stdout(conversions, destination, io::stdout().lock())
}
