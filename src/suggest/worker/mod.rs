//! Lookup Worker Module
//!
//! Executes suggestion lookups in a background thread so the UI stays
//! responsive while a request is outstanding. Requests and responses travel
//! over std::sync::mpsc channels; each request carries a cancellation token
//! and a monotonic id.

pub mod thread;
pub mod types;

// Re-exports for convenience
pub use thread::spawn_worker;
pub use types::{LookupRequest, LookupResponse};
