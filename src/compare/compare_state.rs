use std::sync::mpsc::{Receiver, Sender};

use tokio_util::sync::CancellationToken;

use super::worker::{CompareRequest, CompareResponse};

/// Where the comparison pane currently is
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ComparePhase {
    /// Nothing requested yet (or the pair changed since the last result)
    #[default]
    Idle,
    /// A request is in flight
    Loading,
    /// Analysis text ready for display
    Ready(String),
    /// The request failed; retry re-issues it
    Failed(String),
}

/// State of the comparison flow
pub struct CompareState {
    phase: ComparePhase,
    /// Pair behind the most recent request, kept for retry
    last_pair: Option<(i64, i64)>,
    latest_request_id: u64,
    request_tx: Option<Sender<CompareRequest>>,
    response_rx: Option<Receiver<CompareResponse>>,
    active_cancel: Option<CancellationToken>,
}

impl Default for CompareState {
    fn default() -> Self {
        Self::new()
    }
}

impl CompareState {
    pub fn new() -> Self {
        Self {
            phase: ComparePhase::Idle,
            last_pair: None,
            latest_request_id: 0,
            request_tx: None,
            response_rx: None,
            active_cancel: None,
        }
    }

    pub fn set_channels(
        &mut self,
        request_tx: Sender<CompareRequest>,
        response_rx: Receiver<CompareResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    pub fn phase(&self) -> &ComparePhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == ComparePhase::Loading
    }

    /// Request an AI comparison for the given device pair
    pub fn request(&mut self, id1: i64, id2: i64) {
        if let Some(token) = self.active_cancel.take() {
            token.cancel();
        }
        let cancel_token = CancellationToken::new();
        self.active_cancel = Some(cancel_token.clone());

        self.latest_request_id += 1;
        self.last_pair = Some((id1, id2));
        self.phase = ComparePhase::Loading;

        log::debug!(
            "Requesting comparison {} for devices {} vs {}",
            self.latest_request_id,
            id1,
            id2
        );

        if let Some(tx) = &self.request_tx {
            let _ = tx.send(CompareRequest {
                id1,
                id2,
                request_id: self.latest_request_id,
                cancel_token,
            });
        }
    }

    /// Re-issue the last request (retry button behavior)
    ///
    /// Returns false when there is nothing to retry.
    pub fn retry(&mut self) -> bool {
        match self.last_pair {
            Some((id1, id2)) => {
                self.request(id1, id2);
                true
            }
            None => false,
        }
    }

    /// A displayed result belongs to the pair it was requested for; a new
    /// selection makes it meaningless
    pub fn invalidate(&mut self) {
        if let Some(token) = self.active_cancel.take() {
            token.cancel();
        }
        self.phase = ComparePhase::Idle;
        self.last_pair = None;
    }

    /// Apply worker responses, discarding anything stale
    pub fn poll_responses(&mut self) {
        let Some(rx) = &self.response_rx else {
            return;
        };
        let responses: Vec<CompareResponse> = std::iter::from_fn(|| rx.try_recv().ok()).collect();
        for response in responses {
            self.apply_response(response);
        }
    }

    pub fn apply_response(&mut self, response: CompareResponse) {
        if response.request_id() < self.latest_request_id {
            log::debug!(
                "Discarding stale comparison response {} (latest is {})",
                response.request_id(),
                self.latest_request_id
            );
            return;
        }

        // A response for an invalidated flow is also meaningless
        if self.phase != ComparePhase::Loading {
            return;
        }

        match response {
            CompareResponse::Success { analysis, .. } => {
                self.phase = ComparePhase::Ready(analysis);
            }
            CompareResponse::Error { message, .. } => {
                log::error!("Comparison request failed: {}", message);
                self.phase = ComparePhase::Failed(message);
            }
            CompareResponse::Cancelled { .. } => {}
        }
    }
}

#[cfg(test)]
#[path = "compare_state_tests.rs"]
mod compare_state_tests;
