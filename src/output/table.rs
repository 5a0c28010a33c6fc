//! Aligned plain-text table

use crate::data::fx::Conversion;
use std::io::{self, Write};

const CODE_HEADER: &str = "Currency";
const VALUE_HEADER: &str = "EGP per 1 unit";
const TABLE_DECIMALS: usize = 6;

/// Format `value` with a fixed number of decimals and `,` between thousands.
///
/// ```rust
/// use egp_rates::output::format_grouped;
///
/// assert_eq!(format_grouped(1234567.5, 2), "1,234,567.50");
/// assert_eq!(format_grouped(-999.0, 1), "-999.0");
/// ```
pub fn format_grouped(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    // inf / NaN have no digits to group
    if !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return formatted;
    }

    let mut grouped = String::with_capacity(formatted.len() + int_part.len() / 3);
    grouped.push_str(sign);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(frac_part) = frac_part {
        grouped.push('.');
        grouped.push_str(frac_part);
    }
    grouped
}

/// Write the conversion table: header, dashes, then one row per conversion.
///
/// Codes are left-aligned and values right-aligned, two spaces apart. An
/// empty list is an error: the calculator always emits the base currency, so
/// nothing to render means something upstream broke.
pub fn write_table<W: Write>(conversions: &[Conversion], mut out: W) -> io::Result<()> {
    if conversions.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "no conversions to render",
        ));
    }

    let rows: Vec<(&str, String)> = conversions
        .iter()
        .map(|c| {
            (
                c.currency_code.as_str(),
                format_grouped(c.amount_in_base, TABLE_DECIMALS),
            )
        })
        .collect();

    let code_width = rows
        .iter()
        .map(|(code, _)| code.chars().count())
        .chain(std::iter::once(CODE_HEADER.len()))
        .max()
        .unwrap_or(CODE_HEADER.len());
    let value_width = rows
        .iter()
        .map(|(_, value)| value.chars().count())
        .chain(std::iter::once(VALUE_HEADER.len()))
        .max()
        .unwrap_or(VALUE_HEADER.len());

    writeln!(
        out,
        "{:<cw$}  {:>vw$}",
        CODE_HEADER,
        VALUE_HEADER,
        cw = code_width,
        vw = value_width
    )?;
    writeln!(out, "{}  {}", "-".repeat(code_width), "-".repeat(value_width))?;
    for (code, value) in &rows {
        writeln!(
            out,
            "{:<cw$}  {:>vw$}",
            code,
            value,
            cw = code_width,
            vw = value_width
        )?;
    }
    out.flush()
}

/// [`write_table`] to standard output
pub fn print_table(conversions: &[Conversion]) -> io::Result<()> {
    write_table(conversions, io::stdout().lock())
}
