//! Rate data: where it comes from and what is computed from it
//!
//! - **sources**: fetching the raw rate table from a provider
//! - **fx**: base-currency types and the conversion calculator

pub mod fx;
pub mod sources;
