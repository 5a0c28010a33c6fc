//! Conversion calculator - inverts "foreign per base" rates into "base per foreign"

use super::base::{RateMap, BASE_CURRENCY};
use log::debug;

/// Base-currency value of a fixed amount of one currency
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub currency_code: String,
    pub amount_in_base: f64,
}

impl Conversion {
    pub fn new(currency_code: impl Into<String>, amount_in_base: f64) -> Self {
        Self {
            currency_code: currency_code.into(),
            amount_in_base,
        }
    }
}

/// Compute how much base currency `amount` units of each currency are worth.
///
/// The result always holds exactly one identity entry for [`BASE_CURRENCY`]
/// worth `amount`, plus one entry per positive rate, sorted ascending by code.
/// Non-positive rates cannot be inverted and are dropped. A rate keyed by the
/// base code itself is dropped too, so the identity entry stays unique.
pub fn compute_conversions(rates: &RateMap, amount: f64) -> Vec<Conversion> {
    let mut conversions = Vec::with_capacity(rates.len() + 1);
    conversions.push(Conversion::new(BASE_CURRENCY, amount));

    for (code, &rate) in rates {
        if code == BASE_CURRENCY {
            debug!("Dropping provider rate for base currency {}", code);
            continue;
        }
        if rate <= 0.0 {
            debug!("Skipping {}: rate {} cannot be inverted", code, rate);
            continue;
        }
        conversions.push(Conversion::new(code.as_str(), amount * (1.0 / rate)));
    }

    conversions.sort_by(|a, b| a.currency_code.cmp(&b.currency_code));
    conversions
}
