use std::time::Duration;

use crate::api::{Device, Selection};

use super::debouncer::Debouncer;
use super::worker::LookupResponse;

/// State of one suggestion search instance
///
/// Owns the suggestion list, the committed Selection, the debounce timer, and
/// the monotonic request counter that guards against stale responses. The
/// input text itself lives in the picker's textarea; this state only reacts
/// to it.
#[derive(Debug)]
pub struct SuggestState {
    suggestions: Vec<Device>,
    selected_index: usize,
    visible: bool,
    selection: Option<Selection>,
    pub debouncer: Debouncer,
    min_query_len: usize,
    /// Id handed to the most recently issued lookup; responses tagged with an
    /// older id lost the race and are discarded
    latest_request_id: u64,
    /// Selection committed since the last drain, for page-level orchestration
    pending_event: Option<Selection>,
}

impl SuggestState {
    pub fn new(min_query_len: usize, debounce: Duration) -> Self {
        Self {
            suggestions: Vec::new(),
            selected_index: 0,
            visible: false,
            selection: None,
            debouncer: Debouncer::with_delay(debounce),
            min_query_len,
            latest_request_id: 0,
            pending_event: None,
        }
    }

    pub fn min_query_len(&self) -> usize {
        self.min_query_len
    }

    /// React to an edit of the bound input
    ///
    /// Short queries cancel any pending lookup and hide the list; the list is
    /// never shown for a query below the minimum length. Anything longer
    /// re-arms the quiet-period timer, superseding the previous keystroke.
    pub fn on_input(&mut self, raw: &str) {
        let query = raw.trim();
        if query.chars().count() < self.min_query_len {
            self.debouncer.cancel_pending();
            self.hide();
            return;
        }
        self.debouncer.schedule_execution();
    }

    /// Claim the id for a lookup about to be issued
    pub fn begin_request(&mut self) -> u64 {
        self.latest_request_id += 1;
        self.latest_request_id
    }

    pub fn latest_request_id(&self) -> u64 {
        self.latest_request_id
    }

    /// Apply a worker response, discarding anything stale
    pub fn apply_response(&mut self, response: LookupResponse) {
        if response.request_id() < self.latest_request_id {
            log::debug!(
                "Discarding stale response {} (latest is {})",
                response.request_id(),
                self.latest_request_id
            );
            return;
        }

        match response {
            LookupResponse::Success { devices, .. } => {
                if devices.is_empty() {
                    // No matches is not an error; just close the dropdown
                    self.hide();
                } else {
                    self.suggestions = devices;
                    self.selected_index = 0;
                    self.visible = true;
                }
            }
            LookupResponse::Error { message, .. } => {
                // Soft failure: log it and leave the list in its prior state.
                // The next keystroke is the only retry path.
                log::error!("Suggestion lookup failed: {}", message);
            }
            LookupResponse::Cancelled { .. } => {}
        }
    }

    /// Commit the suggestion at `index`
    ///
    /// Records it as the current Selection, hides the list, and queues one
    /// selection event for the page controller. Returns the Selection so the
    /// caller can write the name into the input field.
    pub fn select(&mut self, index: usize) -> Option<Selection> {
        let device = self.suggestions.get(index)?;
        let selection = Selection {
            id: device.id,
            name: device.name.clone(),
        };
        self.selection = Some(selection.clone());
        self.pending_event = Some(selection.clone());
        self.hide();
        Some(selection)
    }

    /// Commit the keyboard-highlighted suggestion
    pub fn select_highlighted(&mut self) -> Option<Selection> {
        if !self.visible {
            return None;
        }
        self.select(self.selected_index)
    }

    pub fn select_next(&mut self) {
        if !self.suggestions.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.suggestions.len();
        }
    }

    pub fn select_previous(&mut self) {
        if !self.suggestions.is_empty() {
            if self.selected_index == 0 {
                self.selected_index = self.suggestions.len() - 1;
            } else {
                self.selected_index -= 1;
            }
        }
    }

    /// Hide and clear the suggestion list; the Selection is untouched
    pub fn hide(&mut self) {
        self.visible = false;
        self.suggestions.clear();
        self.selected_index = 0;
    }

    /// Outside interaction: close the dropdown, keep the Selection
    pub fn dismiss(&mut self) {
        self.hide();
    }

    /// Start a fresh pick: list, Selection, and pending timer all cleared
    pub fn reset(&mut self) {
        self.hide();
        self.selection = None;
        self.pending_event = None;
        self.debouncer.cancel_pending();
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Drain the selection event queued by the last commit, if any
    pub fn take_selection_event(&mut self) -> Option<Selection> {
        self.pending_event.take()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn suggestions(&self) -> &[Device] {
        &self.suggestions
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
