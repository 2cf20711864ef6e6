//! Wire types for the device API
//!
//! Fetched JSON is validated row by row at this boundary. Rows that do not
//! match the expected shape are dropped with a debug log instead of trusted
//! implicitly.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One autocomplete suggestion row from `/devices/autocomplete`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub brand: String,
}

/// The device a user has committed to, distinct from suggestions merely displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub id: i64,
    pub name: String,
}

/// Error types for API calls
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected response body: {0}")]
    UnexpectedBody(String),

    #[error("Request cancelled")]
    Cancelled,
}

/// Decode an autocomplete response body into validated rows
///
/// The body must be a JSON array. Individual rows that fail to decode, or
/// decode with an empty name, are skipped rather than failing the whole
/// response.
pub fn parse_device_rows(body: &serde_json::Value) -> Result<Vec<Device>, ApiError> {
    let rows = body
        .as_array()
        .ok_or_else(|| ApiError::UnexpectedBody("expected a JSON array".to_string()))?;

    let devices = rows
        .iter()
        .filter_map(|row| match serde_json::from_value::<Device>(row.clone()) {
            Ok(device) if !device.name.trim().is_empty() => Some(device),
            Ok(_) => {
                log::debug!("Dropping suggestion row with empty name: {}", row);
                None
            }
            Err(e) => {
                log::debug!("Dropping malformed suggestion row: {} ({})", row, e);
                None
            }
        })
        .collect();

    Ok(devices)
}
