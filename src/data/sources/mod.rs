//! External rate source integrations
//!
//! This module provides the provider the CLI talks to:
//! - open.er-api.com: free daily rates quoted against a chosen base currency
//!
//! Sources are behind the [`RateSource`] trait so the pipeline can be driven
//! by a canned table in tests.

pub mod open_er_api;

pub use open_er_api::{parse_body, OpenErApiSource, DEFAULT_ENDPOINT};

use crate::data::fx::{RateMap, RateSnapshot};
use crate::error::Result;
use std::time::Duration;

/// Trait for external rate sources
pub trait RateSource: Send + Sync {
    /// Fetch the current rate table, quoted against [`crate::data::fx::BASE_CURRENCY`]
    fn fetch_snapshot(&self) -> Result<RateSnapshot>;

    /// Get the source name
    fn name(&self) -> &str;
}

/// Fetch the live rate table from the default provider.
///
/// Performs exactly one GET with the given timeout. No retries, no caching.
pub fn fetch_rates(timeout: Duration) -> Result<RateMap> {
    let source = OpenErApiSource::new(timeout)?;
    source.fetch_snapshot().map(|snapshot| snapshot.rates)
}
