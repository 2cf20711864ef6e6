//! devpick - interactive device comparison picker
//!
//! Two debounced search boxes against a device-comparison HTTP API, plus an
//! AI-written comparison of the selected pair. The binary wires the workers
//! and terminal; everything else lives here so tests can drive it directly.

pub mod api;
pub mod app;
pub mod compare;
pub mod config;
pub mod error;
pub mod layout;
pub mod notification;
pub mod picker;
pub mod suggest;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use config::Config;
pub use error::DevpickError;
