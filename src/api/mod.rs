//! Device API boundary
//!
//! Types and client for the external device-comparison service. The service
//! itself is a collaborator; this module only speaks its two endpoints and
//! validates what comes back before anything else in the app sees it.

pub mod client;
pub mod types;

// Re-export public types
pub use client::{DeviceApi, HttpDeviceApi};
pub use types::{ApiError, Device, Selection, parse_device_rows};
