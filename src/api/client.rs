//! HTTP client for the device API
//!
//! `DeviceApi` is the seam the workers talk through, so worker tests run
//! against an in-process mock instead of a live server.

use std::time::Duration;

use serde::Deserialize;

use super::types::{ApiError, Device, parse_device_rows};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// The two calls the app makes against the device-comparison service
pub trait DeviceApi {
    /// `GET /devices/autocomplete?query=<text>` -> validated suggestion rows
    fn suggest(
        &self,
        query: &str,
    ) -> impl std::future::Future<Output = Result<Vec<Device>, ApiError>> + Send;

    /// `GET /compare/ai?id1=<id>&id2=<id>` -> AI analysis text
    fn compare(
        &self,
        id1: i64,
        id2: i64,
    ) -> impl std::future::Future<Output = Result<String, ApiError>> + Send;
}

/// Shape of the `/compare/ai` response body
#[derive(Debug, Deserialize)]
struct CompareBody {
    ai_analysis: String,
}

/// `reqwest`-backed implementation of [`DeviceApi`]
#[derive(Debug, Clone)]
pub struct HttpDeviceApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpDeviceApi {
    /// Create a client for the given base URL (no trailing slash expected;
    /// one is stripped if present)
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl DeviceApi for HttpDeviceApi {
    async fn suggest(&self, query: &str) -> Result<Vec<Device>, ApiError> {
        let url = format!("{}/devices/autocomplete", self.base_url);

        // .query() URL-encodes the user text
        let response = self
            .http
            .get(&url)
            .query(&[("query", query)])
            .send()
            .await?
            .error_for_status()?;

        let body: serde_json::Value = response.json().await?;
        parse_device_rows(&body)
    }

    async fn compare(&self, id1: i64, id2: i64) -> Result<String, ApiError> {
        let url = format!("{}/compare/ai", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[("id1", id1), ("id2", id2)])
            .send()
            .await?
            .error_for_status()?;

        let body: CompareBody = response
            .json()
            .await
            .map_err(|e| ApiError::UnexpectedBody(e.to_string()))?;

        Ok(body.ai_analysis)
    }
}
