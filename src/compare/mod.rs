//! AI comparison flow
//!
//! Once both pickers hold a selection, the app can request an AI-written
//! comparison of the pair. The fetch runs through a worker thread with the
//! same request/response and cancellation pattern as the suggestion lookups.

pub mod compare_render;
pub mod compare_state;
pub mod worker;

pub use compare_state::{ComparePhase, CompareState};
pub use worker::{CompareRequest, CompareResponse, spawn_worker};
