//! Comparison Worker Thread
//!
//! Fetches the AI comparison in a background thread, mirroring the lookup
//! worker: mpsc channels, a current-thread tokio runtime for the async HTTP
//! call, cancellation tokens, and a panic hook that reports instead of
//! corrupting the TUI.

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{Receiver, Sender};

use tokio_util::sync::CancellationToken;

use crate::api::{ApiError, DeviceApi};

/// Request for an AI comparison of two devices
#[derive(Debug)]
pub struct CompareRequest {
    pub id1: i64,
    pub id2: i64,
    /// Monotonic ID for tracking this request; newer beats older
    pub request_id: u64,
    pub cancel_token: CancellationToken,
}

/// Response from a comparison fetch
#[derive(Debug)]
pub enum CompareResponse {
    Success { analysis: String, request_id: u64 },
    Error { message: String, request_id: u64 },
    Cancelled { request_id: u64 },
}

impl CompareResponse {
    pub fn request_id(&self) -> u64 {
        match self {
            CompareResponse::Success { request_id, .. } => *request_id,
            CompareResponse::Error { request_id, .. } => *request_id,
            CompareResponse::Cancelled { request_id } => *request_id,
        }
    }
}

/// Spawn the comparison worker thread
pub fn spawn_worker<C>(
    client: C,
    request_rx: Receiver<CompareRequest>,
    response_tx: Sender<CompareResponse>,
) where
    C: DeviceApi + Send + 'static,
{
    std::thread::spawn(move || {
        let response_tx_clone = response_tx.clone();
        let prev_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let panic_msg = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
                s.clone()
            } else {
                "Unknown panic in comparison worker".to_string()
            };

            log::error!(
                "Comparison worker panic: {} at {:?}",
                panic_msg,
                panic_info.location()
            );

            let _ = response_tx_clone.send(CompareResponse::Error {
                message: format!("Comparison worker crashed: {}", panic_msg),
                request_id: 0,
            });
        }));

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("Failed to create tokio runtime");

            rt.block_on(worker_loop(client, request_rx, response_tx));
        }));

        panic::set_hook(prev_hook);

        if let Err(e) = result {
            let panic_msg = if let Some(s) = e.downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = e.downcast_ref::<String>() {
                s.clone()
            } else {
                "Unknown panic".to_string()
            };
            log::error!("Comparison worker thread panicked: {}", panic_msg);
        }
    });
}

async fn worker_loop<C>(
    client: C,
    request_rx: Receiver<CompareRequest>,
    response_tx: Sender<CompareResponse>,
) where
    C: DeviceApi,
{
    log::debug!("Comparison worker thread started");

    while let Ok(request) = request_rx.recv() {
        handle_request(&client, request, &response_tx).await;
    }

    log::debug!("Comparison worker thread shutting down");
}

async fn handle_request<C>(
    client: &C,
    request: CompareRequest,
    response_tx: &Sender<CompareResponse>,
) where
    C: DeviceApi,
{
    if request.cancel_token.is_cancelled() {
        let _ = response_tx.send(CompareResponse::Cancelled {
            request_id: request.request_id,
        });
        return;
    }

    let result = tokio::select! {
        biased;
        _ = request.cancel_token.cancelled() => Err(ApiError::Cancelled),
        result = client.compare(request.id1, request.id2) => result,
    };

    match result {
        Ok(analysis) => {
            log::debug!("Comparison {} succeeded", request.request_id);
            let _ = response_tx.send(CompareResponse::Success {
                analysis,
                request_id: request.request_id,
            });
        }
        Err(ApiError::Cancelled) => {
            log::debug!("Comparison {} was cancelled", request.request_id);
            let _ = response_tx.send(CompareResponse::Cancelled {
                request_id: request.request_id,
            });
        }
        Err(e) => {
            log::error!("Comparison {} failed: {}", request.request_id, e);
            let _ = response_tx.send(CompareResponse::Error {
                message: e.to_string(),
                request_id: request.request_id,
            });
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
