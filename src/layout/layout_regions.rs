//! Layout regions tracking for UI components
//!
//! Tracks where UI components are rendered for position-aware mouse
//! interactions. A click landing in no tracked region is the "outside
//! interaction" that dismisses open dropdowns.

use ratatui::layout::Rect;

/// Identifies a UI component region; picker regions carry the picker index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    PickerInput(usize),
    Dropdown(usize),
    ComparePane,
    StatusBar,
}

/// Tracks rendered areas of UI components
///
/// Updated during each render pass. Regions are `None` when the component is
/// not visible. Used by mouse event handlers to determine which component is
/// under the cursor.
#[derive(Default, Clone, Debug)]
pub struct LayoutRegions {
    pub picker_inputs: [Option<Rect>; 2],
    /// Only populated while a dropdown is open
    pub dropdowns: [Option<Rect>; 2],
    pub compare_pane: Option<Rect>,
    pub status_bar: Option<Rect>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all regions before a new render pass
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
