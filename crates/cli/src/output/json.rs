//! JSON output formatting.

use serde::Serialize;

use crate::error::Result;

/// Serializes a report as a single line of JSON.
pub fn format_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}
