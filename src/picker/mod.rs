//! Device picker
//!
//! One picker per search slot: a single-line input field, its suggestion
//! dropdown, and the channel plumbing to that picker's lookup worker.

mod input_state;
mod picker_render;
mod picker_state;

pub use input_state::InputState;
pub use picker_render::{render_dropdown, render_input};
pub use picker_state::PickerState;
