//! Lookup Worker Thread
//!
//! Handles suggestion lookups in a background thread so network latency never
//! blocks the UI loop. Receives requests via channel, calls the device API
//! with cancellation support, and sends responses back to the main thread.
//!
//! Single background thread with std::sync::mpsc channels and a blocking
//! recv() (fine in a dedicated thread); a current-thread tokio runtime inside
//! drives the async HTTP client. A panic hook converts worker panics into an
//! error response instead of corrupting the TUI.

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{Receiver, Sender};

use crate::api::{ApiError, DeviceApi};

use super::types::{LookupRequest, LookupResponse};

/// Spawn the lookup worker thread
///
/// # Arguments
/// * `client` - Device API client used for every lookup
/// * `request_rx` - Channel to receive requests from the main thread
/// * `response_tx` - Channel to send responses to the main thread
pub fn spawn_worker<C>(
    client: C,
    request_rx: Receiver<LookupRequest>,
    response_tx: Sender<LookupResponse>,
) where
    C: DeviceApi + Send + 'static,
{
    std::thread::spawn(move || {
        // The default panic hook prints to stderr which corrupts the TUI
        let response_tx_clone = response_tx.clone();
        let prev_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let panic_msg = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
                s.clone()
            } else {
                "Unknown panic in lookup worker".to_string()
            };

            log::error!(
                "Lookup worker panic: {} at {:?}",
                panic_msg,
                panic_info.location()
            );

            // Use request_id = 0 to indicate a worker-level error
            let _ = response_tx_clone.send(LookupResponse::Error {
                message: format!("Lookup worker crashed: {}", panic_msg),
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
            log::error!("Lookup worker thread panicked: {}", panic_msg);
        }
    });
}

/// Main async worker loop - processes requests until the channel is closed
async fn worker_loop<C>(
    client: C,
    request_rx: Receiver<LookupRequest>,
    response_tx: Sender<LookupResponse>,
) where
    C: DeviceApi,
{
    log::debug!("Lookup worker thread started");

    while let Ok(request) = request_rx.recv() {
        // Drain to the newest queued request; anything older was superseded
        // by a later keystroke and reporting it would only be discarded
        let mut request = request;
        while let Ok(newer) = request_rx.try_recv() {
            let _ = response_tx.send(LookupResponse::Cancelled {
                request_id: request.request_id,
            });
            request = newer;
        }

        log::debug!(
            "Worker received request {}: {:?}",
            request.request_id,
            request.query
        );
        handle_request(&client, request, &response_tx).await;
    }

    log::debug!("Lookup worker thread shutting down");
}

/// Handle a single lookup request
async fn handle_request<C>(
    client: &C,
    request: LookupRequest,
    response_tx: &Sender<LookupResponse>,
) where
    C: DeviceApi,
{
    if request.cancel_token.is_cancelled() {
        let _ = response_tx.send(LookupResponse::Cancelled {
            request_id: request.request_id,
        });
        return;
    }

    let result = tokio::select! {
        biased;
        _ = request.cancel_token.cancelled() => Err(ApiError::Cancelled),
        result = client.suggest(&request.query) => result,
    };

    match result {
        Ok(devices) => {
            log::debug!(
                "Lookup {} returned {} rows",
                request.request_id,
                devices.len()
            );
            let _ = response_tx.send(LookupResponse::Success {
                devices,
                query: request.query,
                request_id: request.request_id,
            });
        }
        Err(ApiError::Cancelled) => {
            log::debug!("Lookup {} was cancelled", request.request_id);
            let _ = response_tx.send(LookupResponse::Cancelled {
                request_id: request.request_id,
            });
        }
        Err(e) => {
            log::error!("Lookup {} failed: {}", request.request_id, e);
            let _ = response_tx.send(LookupResponse::Error {
                message: e.to_string(),
                request_id: request.request_id,
            });
        }
    }
}

#[cfg(test)]
#[path = "thread_tests.rs"]
mod thread_tests;
