//! Color palette for the UI
//!
//! Central place for the handful of colors the widgets share.

use ratatui::style::Color;

pub mod picker {
    use super::*;

    pub const BORDER_FOCUSED: Color = Color::Cyan;
    pub const BORDER_UNFOCUSED: Color = Color::DarkGray;
    pub const SELECTED_LABEL: Color = Color::Green;
}

pub mod dropdown {
    use super::*;

    pub const BORDER: Color = Color::Cyan;
    pub const NAME: Color = Color::White;
    pub const BRAND: Color = Color::Gray;
    pub const MATCH: Color = Color::Yellow;
    pub const HIGHLIGHT_BG: Color = Color::Cyan;
    pub const HIGHLIGHT_FG: Color = Color::Black;
}

pub mod compare {
    use super::*;

    pub const BORDER: Color = Color::DarkGray;
    pub const TEXT: Color = Color::White;
    pub const DIM: Color = Color::Gray;
    pub const ERROR: Color = Color::Red;
}

pub mod status {
    use super::*;

    pub const KEY: Color = Color::Cyan;
    pub const TEXT: Color = Color::Gray;
    pub const READY: Color = Color::Green;
}
