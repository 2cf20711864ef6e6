use std::sync::mpsc::{Receiver, Sender};
use std::time::Duration;

use ratatui::crossterm::event::{KeyCode, KeyEvent};
use tokio_util::sync::CancellationToken;

use crate::api::Selection;
use crate::config::SearchConfig;
use crate::suggest::worker::{LookupRequest, LookupResponse};
use crate::suggest::SuggestState;

use super::input_state::InputState;

/// One device search slot: input text, suggestion state, and the channels to
/// this picker's lookup worker
///
/// Channels are optional so the picker degrades to a no-op lookup when no
/// worker is attached (tests drive `SuggestState` directly instead).
pub struct PickerState {
    pub label: String,
    pub input: InputState,
    pub suggest: SuggestState,
    request_tx: Option<Sender<LookupRequest>>,
    response_rx: Option<Receiver<LookupResponse>>,
    /// Token of the most recently issued lookup; cancelled when a newer one
    /// is issued or the picker resets
    active_cancel: Option<CancellationToken>,
}

impl PickerState {
    pub fn new(label: &str, search: &SearchConfig) -> Self {
        Self {
            label: label.to_string(),
            input: InputState::new(),
            suggest: SuggestState::new(
                search.min_query_len,
                Duration::from_millis(search.debounce_ms),
            ),
            request_tx: None,
            response_rx: None,
            active_cancel: None,
        }
    }

    /// Attach the channels to this picker's lookup worker
    pub fn set_channels(
        &mut self,
        request_tx: Sender<LookupRequest>,
        response_rx: Receiver<LookupResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    /// Handle a key while this picker is focused
    ///
    /// Returns `false` when the key was not consumed (Enter with no dropdown
    /// open, Esc with nothing to dismiss) so the app can give it a
    /// page-level meaning.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Esc {
            if self.suggest.is_visible() {
                self.suggest.dismiss();
                return true;
            }
            return false;
        }

        if self.suggest.is_visible() {
            match key.code {
                KeyCode::Down => {
                    self.suggest.select_next();
                    return true;
                }
                KeyCode::Up => {
                    self.suggest.select_previous();
                    return true;
                }
                KeyCode::Enter => {
                    self.commit_highlighted();
                    return true;
                }
                _ => {}
            }
        }

        if key.code == KeyCode::Enter {
            return false;
        }

        let before = self.input.query().to_string();
        self.input.textarea.input(key);
        if self.input.query() != before {
            self.on_edit();
        }
        true
    }

    /// Insert pasted text at the cursor (first line only; the input is
    /// single-line)
    pub fn handle_paste(&mut self, text: &str) {
        let line = text.lines().next().unwrap_or("");
        if line.is_empty() {
            return;
        }
        self.input.textarea.insert_str(line);
        self.on_edit();
    }

    /// React to an edit of the input text
    fn on_edit(&mut self) {
        self.suggest.on_input(self.input.query());
    }

    /// Commit the keyboard-highlighted suggestion into the input
    pub fn commit_highlighted(&mut self) {
        if let Some(selection) = self.suggest.select_highlighted() {
            self.input.set_text(&selection.name);
        }
    }

    /// Commit the suggestion row at `index` (mouse path)
    pub fn commit_row(&mut self, index: usize) {
        if let Some(selection) = self.suggest.select(index) {
            self.input.set_text(&selection.name);
        }
    }

    /// Per-loop maintenance: apply worker responses, then issue a lookup if
    /// the quiet period has elapsed
    pub fn tick(&mut self) {
        self.poll_responses();
        self.issue_due_lookup();
    }

    fn poll_responses(&mut self) {
        let Some(rx) = &self.response_rx else {
            return;
        };
        let responses: Vec<LookupResponse> = std::iter::from_fn(|| rx.try_recv().ok()).collect();
        for response in responses {
            self.suggest.apply_response(response);
        }
    }

    fn issue_due_lookup(&mut self) {
        if !self.suggest.debouncer.should_execute() {
            return;
        }
        self.suggest.debouncer.mark_executed();

        let query = self.input.query().trim().to_string();
        if query.chars().count() < self.suggest.min_query_len() {
            return;
        }

        // A newly issued lookup supersedes the previous in-flight one
        if let Some(token) = self.active_cancel.take() {
            token.cancel();
        }
        let cancel_token = CancellationToken::new();
        self.active_cancel = Some(cancel_token.clone());

        let request_id = self.suggest.begin_request();
        log::debug!("Picker '{}' issuing lookup {} for {:?}", self.label, request_id, query);

        if let Some(tx) = &self.request_tx {
            let _ = tx.send(LookupRequest {
                query,
                request_id,
                cancel_token,
            });
        }
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.suggest.selection()
    }

    pub fn take_selection_event(&mut self) -> Option<Selection> {
        self.suggest.take_selection_event()
    }

    /// Clear input text, Selection, and suggestion list; cancel anything
    /// outstanding
    pub fn reset(&mut self) {
        if let Some(token) = self.active_cancel.take() {
            token.cancel();
        }
        self.input.clear();
        self.suggest.reset();
    }
}

#[cfg(test)]
#[path = "picker_state_tests.rs"]
mod picker_state_tests;
