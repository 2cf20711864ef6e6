use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::layout::{Region, region_at};

use super::state::{App, Focus};

impl App {
    /// Route mouse events by hit-testing the regions of the last render
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        self.handle_left_click(mouse.column, mouse.row);
    }

    pub(crate) fn handle_left_click(&mut self, x: u16, y: u16) {
        match region_at(&self.layout_regions, x, y) {
            Some(Region::Dropdown(i)) => {
                if let Some(rect) = self.layout_regions.dropdowns[i] {
                    // Row 0 sits just inside the top border; border clicks
                    // fall out of range and commit nothing
                    let first_row = rect.y + 1;
                    if y >= first_row {
                        self.pickers[i].commit_row((y - first_row) as usize);
                    }
                }
            }
            Some(Region::PickerInput(i)) => {
                self.focus = Focus::from_index(i);
                self.pickers[1 - i].suggest.dismiss();
            }
            _ => {
                // Outside interaction: dropdowns close, Selections stay
                for picker in &mut self.pickers {
                    picker.suggest.dismiss();
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
