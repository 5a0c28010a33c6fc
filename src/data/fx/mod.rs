//! Foreign Exchange (FX) conversion into the base currency
//!
//! # Components
//!
//! - **base**: base currency constants, [`RateMap`] and [`RateSnapshot`]
//! - **conversion**: [`Conversion`] records and the calculator that inverts rates
//!
//! # Example
//!
//! ```rust
//! use egp_rates::data::fx::{compute_conversions, RateMap};
//!
//! let mut rates = RateMap::new();
//! rates.insert("USD".to_string(), 50.0);
//!
//! let conversions = compute_conversions(&rates, 2.0);
//! assert_eq!(conversions.len(), 2);
//! assert_eq!(conversions[0].currency_code, "EGP");
//! assert_eq!(conversions[1].amount_in_base, 2.0 / 50.0);
//! ```

pub mod base;
pub mod conversion;

pub use base::{RateMap, RateSnapshot, BASE_CURRENCY};
pub use conversion::{compute_conversions, Conversion};
