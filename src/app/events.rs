use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use super::state::App;

/// Timeout for event polling - allows periodic UI refresh for debounced
/// lookups and notification expiration
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    /// Handle events and update application state
    pub fn handle_events(&mut self) -> io::Result<()> {
        // Run per-loop maintenance before blocking on input so debounced
        // lookups fire even while the user is idle
        self.tick();

        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                // Check that it's a key press event to avoid duplicates
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    self.handle_key_event(key);
                }
                Event::Mouse(mouse) => {
                    self.handle_mouse_event(mouse);
                }
                // Bracketed paste goes into the focused picker
                Event::Paste(text) => {
                    self.focused_picker_mut().handle_paste(&text);
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => {
                    self.should_quit = true;
                    return;
                }
                KeyCode::Char('x') => {
                    self.reset_focused_picker();
                    return;
                }
                KeyCode::Char('r') => {
                    // Re-issue the last comparison, or start the first one
                    if !self.compare.retry() {
                        self.trigger_compare();
                    }
                    return;
                }
                _ => {}
            }
        }

        if key.code == KeyCode::Tab || key.code == KeyCode::BackTab {
            // Switching pickers drops the open dropdown; the Selection stays
            self.focused_picker_mut().suggest.dismiss();
            self.focus = self.focus.other();
            return;
        }

        let consumed = self.focused_picker_mut().handle_key(key);

        // Enter with no dropdown open means "compare" once both slots are set
        if !consumed && key.code == KeyCode::Enter && self.compare_ready() {
            self.trigger_compare();
        }
    }
}
