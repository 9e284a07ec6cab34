//! Extracting route inputs from a request.

use crate::http::FixtureRequest;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::error;

/// Header name prefixes reported by `/headers`.
pub const CUSTOM_HEADER_PREFIXES: [&str; 2] = ["x-", "another-"];

/// Best-effort JSON parse of the request body.
///
/// An empty body or a body that is not valid JSON yields `{}`. Parse
/// failures are logged and never reach the caller.
pub fn parse_body(request: &FixtureRequest) -> Value {
    let text = request.text();
    if text.is_empty() {
        return Value::Object(Map::new());
    }

    serde_json::from_str(&text).unwrap_or_else(|e| {
        error!("Error parsing JSON: {}", e);
        Value::Object(Map::new())
    })
}

/// Headers whose name starts with one of [`CUSTOM_HEADER_PREFIXES`], keyed
/// by lowercase name.
pub fn custom_headers(request: &FixtureRequest) -> BTreeMap<String, String> {
    request
        .headers
        .iter()
        .map(|(name, value)| (name.to_ascii_lowercase(), value))
        .filter(|(name, _)| {
            CUSTOM_HEADER_PREFIXES
                .iter()
                .any(|prefix| name.starts_with(*prefix))
        })
        .map(|(name, value)| (name, value.clone()))
        .collect()
}
