//! Suggestion search component
//!
//! Turns keystrokes into debounced remote lookups and an interactive,
//! dismissible suggestion list, and exposes the user's committed choice.
//! Each picker owns one independent instance; nothing here is shared.

pub mod debouncer;
pub mod highlight;
pub mod state;
pub mod worker;

// Re-export public types
pub use debouncer::Debouncer;
pub use state::SuggestState;
pub use worker::{LookupRequest, LookupResponse};
