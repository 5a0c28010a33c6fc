//! Rendering conversions for people (aligned table) and for tools (CSV)

pub mod csv_export;
pub mod table;

pub use csv_export::{write_csv, write_csv_to, write_csv_with_stdout, CsvDestination, CSV_HEADER};
pub use table::{format_grouped, print_table, write_table};
