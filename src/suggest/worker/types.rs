//! Lookup Worker Types
//!
//! Type definitions for the lookup worker thread communication.
//! These types enable the request/response pattern with cancellation support
//! and carry the monotonic request id used to discard stale responses.

use tokio_util::sync::CancellationToken;

use crate::api::Device;

/// Request to look up suggestions for a query
#[derive(Debug)]
pub struct LookupRequest {
    /// The trimmed query text (URL-encoding happens in the client)
    pub query: String,
    /// Monotonic ID for tracking this request; newer beats older
    pub request_id: u64,
    /// Token for cancelling this request
    pub cancel_token: CancellationToken,
}

/// Response from a suggestion lookup
#[derive(Debug)]
pub enum LookupResponse {
    /// Lookup succeeded; `devices` may be empty (not an error)
    Success {
        devices: Vec<Device>,
        /// The query that produced these rows
        query: String,
        /// Request ID this response belongs to
        request_id: u64,
    },
    /// Lookup failed (network error, bad body); the UI leaves the list as-is
    Error { message: String, request_id: u64 },
    /// Lookup was cancelled before completing
    Cancelled { request_id: u64 },
}

impl LookupResponse {
    pub fn request_id(&self) -> u64 {
        match self {
            LookupResponse::Success { request_id, .. } => *request_id,
            LookupResponse::Error { request_id, .. } => *request_id,
            LookupResponse::Cancelled { request_id } => *request_id,
        }
    }
}
