use tui_textarea::{CursorMove, TextArea};

/// Single-line text input backing one picker
pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl InputState {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();
        textarea.set_cursor_line_style(ratatui::style::Style::default());

        Self { textarea }
    }

    /// The raw input text (first line; the input never grows a second one)
    pub fn query(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    /// Replace the whole text, cursor at the end
    pub fn set_text(&mut self, text: &str) {
        self.clear();
        self.textarea.insert_str(text);
        self.textarea.move_cursor(CursorMove::End);
    }

    pub fn clear(&mut self) {
        self.textarea.move_cursor(CursorMove::Head);
        self.textarea.delete_line_by_end();
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
