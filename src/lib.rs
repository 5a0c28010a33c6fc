//! # egp-rates
//!
//! Express every currency in Egyptian Pounds.
//!
//! One run fetches the live rate table (units of each currency per 1 EGP),
//! inverts every usable rate into "EGP per unit of currency", scales it by the
//! requested amount, and renders the result as an aligned table or as CSV.
//!
//! ## Example
//!
//! ```rust,no_run
//! use egp_rates::prelude::*;
//! use std::time::Duration;
//!
//! let rates = fetch_rates(Duration::from_secs(10))?;
//! let conversions = compute_conversions(&rates, 100.0);
//! print_table(&conversions)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod output;

pub mod prelude {
    //! Commonly used types and functions
    pub use crate::app::{run, RunOptions};
    pub use crate::config::Config;
    pub use crate::data::fx::{compute_conversions, Conversion, RateMap, RateSnapshot, BASE_CURRENCY};
    pub use crate::data::sources::{fetch_rates, OpenErApiSource, RateSource};
    pub use crate::error::{FxError, Result};
    pub use crate::output::{print_table, write_csv, CsvDestination};
}
