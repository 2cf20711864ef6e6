use crate::compare::CompareState;
use crate::config::Config;
use crate::layout::LayoutRegions;
use crate::notification::NotificationState;
use crate::picker::PickerState;

/// Which picker has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Device1,
    Device2,
}

impl Focus {
    pub fn index(self) -> usize {
        match self {
            Focus::Device1 => 0,
            Focus::Device2 => 1,
        }
    }

    pub fn other(self) -> Focus {
        match self {
            Focus::Device1 => Focus::Device2,
            Focus::Device2 => Focus::Device1,
        }
    }

    pub fn from_index(index: usize) -> Focus {
        if index == 0 {
            Focus::Device1
        } else {
            Focus::Device2
        }
    }
}

/// Application state
///
/// Owns the two pickers and the page-level orchestration between them: focus,
/// compare readiness, and the notification toast.
pub struct App {
    pub pickers: [PickerState; 2],
    pub focus: Focus,
    pub compare: CompareState,
    pub notification: NotificationState,
    pub layout_regions: LayoutRegions,
    pub should_quit: bool,
}

impl App {
    /// Create a new App instance; does no I/O, workers attach afterwards
    pub fn new(config: &Config) -> Self {
        Self {
            pickers: [
                PickerState::new("Device 1", &config.search),
                PickerState::new("Device 2", &config.search),
            ],
            focus: Focus::Device1,
            compare: CompareState::new(),
            notification: NotificationState::new(),
            layout_regions: LayoutRegions::new(),
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn focused_picker_mut(&mut self) -> &mut PickerState {
        &mut self.pickers[self.focus.index()]
    }

    /// The device ids behind both selections, once both pickers have one
    pub fn selected_pair(&self) -> Option<(i64, i64)> {
        match (self.pickers[0].selection(), self.pickers[1].selection()) {
            (Some(first), Some(second)) => Some((first.id, second.id)),
            _ => None,
        }
    }

    pub fn compare_ready(&self) -> bool {
        self.selected_pair().is_some()
    }

    /// Issue a comparison request for the current pair, if complete
    pub fn trigger_compare(&mut self) {
        if let Some((id1, id2)) = self.selected_pair() {
            self.compare.request(id1, id2);
        }
    }

    /// Per-loop maintenance: worker responses, due lookups, selection events,
    /// notification expiry
    pub fn tick(&mut self) {
        for picker in &mut self.pickers {
            picker.tick();
        }
        self.compare.poll_responses();
        self.notification.clear_if_expired();

        for i in 0..self.pickers.len() {
            if let Some(selection) = self.pickers[i].take_selection_event() {
                // A displayed comparison belongs to the previous pair
                self.compare.invalidate();
                self.notification
                    .show(&format!("Selected {}", selection.name));
            }
        }
    }

    /// Clear the focused picker for a fresh search
    pub fn reset_focused_picker(&mut self) {
        self.focused_picker_mut().reset();
        self.compare.invalidate();
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
