//! open.er-api.com rate source
//!
//! One synchronous GET against `/v6/latest/EGP`. The response looks like
//! `{ "result": "success", "base_code": "EGP", "time_last_update_unix": ..., "rates": { "USD": 0.0206, ... } }`.

use super::RateSource;
use crate::data::fx::{RateMap, RateSnapshot};
use crate::error::{FxError, Result};
use chrono::{DateTime, Utc};
use log::{debug, info};
use reqwest::blocking::Client;
use serde_json::{Map, Value};
use std::time::Duration;

/// Latest rates with the Egyptian Pound as base
pub const DEFAULT_ENDPOINT: &str = "https://open.er-api.com/v6/latest/EGP";

const API_FAILURE_FALLBACK: &str = "API returned non-success result";

/// open.er-api.com data source
pub struct OpenErApiSource {
    endpoint: String,
    timeout: Duration,
    client: Client,
}

impl OpenErApiSource {
    /// Source against the public endpoint
    pub fn new(timeout: Duration) -> Result<Self> {
        Self::with_endpoint(DEFAULT_ENDPOINT, timeout)
    }

    /// Source against any URL serving the same schema
    pub fn with_endpoint(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FxError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.into(),
            timeout,
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl RateSource for OpenErApiSource {
    fn fetch_snapshot(&self) -> Result<RateSnapshot> {
        debug!("GET {} (timeout {:?})", self.endpoint, self.timeout);

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .map_err(|e| FxError::Transport(format!("Network error fetching rates: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FxError::Transport(format!(
                "HTTP {} when fetching rates",
                status.as_u16()
            )));
        }

        let body = response
            .bytes()
            .map_err(|e| FxError::Transport(format!("Network error fetching rates: {}", e)))?;

        let snapshot = parse_body(&body)?;
        info!(
            "Fetched {} rates from {} (updated {})",
            snapshot.len(),
            self.name(),
            snapshot
                .updated_at
                .map(|dt| dt.to_rfc3339())
                .unwrap_or_else(|| "unknown".to_string())
        );
        Ok(snapshot)
    }

    fn name(&self) -> &str {
        "open.er-api.com"
    }
}

/// Validate a response body and extract the usable rates.
///
/// Entries with an empty code or a value that is not a finite number are
/// skipped silently. Codes are uppercased; when two codes collide after
/// uppercasing the later one in the document wins.
pub fn parse_body(body: &[u8]) -> Result<RateSnapshot> {
    let text = std::str::from_utf8(body)
        .map_err(|_| FxError::Schema("Failed to parse rates JSON".to_string()))?;
    let payload: Value = serde_json::from_str(text)
        .map_err(|_| FxError::Schema("Failed to parse rates JSON".to_string()))?;

    let payload = match payload {
        Value::Object(map) => map,
        _ => {
            return Err(FxError::Schema(
                "Unexpected response schema from API".to_string(),
            ))
        }
    };

    if let Some(result) = payload.get("result") {
        if result.as_str() != Some("success") {
            return Err(FxError::Schema(api_failure_message(&payload)));
        }
    }

    let raw_rates = payload
        .get("rates")
        .and_then(Value::as_object)
        .ok_or_else(|| FxError::Schema("Unexpected rates schema from API".to_string()))?;

    let mut rates = RateMap::new();
    for (code, value) in raw_rates {
        if code.is_empty() {
            debug!("Skipping rate with empty currency code");
            continue;
        }
        match parse_rate(value) {
            Some(rate) => {
                rates.insert(code.to_uppercase(), rate);
            }
            None => debug!("Skipping {}: {} is not a finite number", code, value),
        }
    }

    Ok(RateSnapshot {
        base_code: payload
            .get("base_code")
            .and_then(Value::as_str)
            .map(str::to_uppercase),
        updated_at: payload
            .get("time_last_update_unix")
            .and_then(Value::as_i64)
            .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0)),
        rates,
    })
}

/// JSON numbers, booleans (1 / 0) and numeric strings, as long as the result is finite
fn parse_rate(value: &Value) -> Option<f64> {
    let rate = match value {
        Value::Number(n) => n.as_f64()?,
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::String(s) => strip_digit_separators(s.trim())?.parse::<f64>().ok()?,
        _ => return None,
    };
    rate.is_finite().then_some(rate)
}

/// Drop `_` separators that sit between two digits ("1_000.5" -> "1000.5").
/// Any other underscore makes the string non-numeric.
fn strip_digit_separators(s: &str) -> Option<String> {
    let bytes = s.as_bytes();
    let mut cleaned = String::with_capacity(s.len());
    for (i, c) in s.char_indices() {
        if c == '_' {
            let between_digits = i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).map_or(false, u8::is_ascii_digit);
            if !between_digits {
                return None;
            }
        } else {
            cleaned.push(c);
        }
    }
    Some(cleaned)
}

fn api_failure_message(payload: &Map<String, Value>) -> String {
    ["error-type", "message"]
        .iter()
        .filter_map(|key| payload.get(*key))
        .find(|value| is_truthy(value))
        .map(|value| match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .unwrap_or_else(|| API_FAILURE_FALLBACK.to_string())
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
