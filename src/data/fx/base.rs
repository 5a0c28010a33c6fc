//! Base FX types - base currency and the fetched rate table

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Currency every rate is quoted against (Egyptian Pound)
pub const BASE_CURRENCY: &str = "EGP";

/// Uppercased currency code -> units of that currency per 1 unit of [`BASE_CURRENCY`]
pub type RateMap = BTreeMap<String, f64>;

/// One successful response from a rate provider
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RateSnapshot {
    /// `base_code` as reported by the provider, if it sent one
    pub base_code: Option<String>,
    /// Provider's last update time, if it sent one
    pub updated_at: Option<DateTime<Utc>>,
    /// Usable rates (string keys, finite numeric values)
    pub rates: RateMap,
}

impl RateSnapshot {
    /// Snapshot holding only a rate table
    pub fn from_rates(rates: RateMap) -> Self {
        Self {
            rates,
            ..Self::default()
        }
    }

    /// Number of currencies in the table
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}
