//! Tests for the lookup worker thread
//!
//! The worker is exercised end to end against an in-process mock client;
//! no network is involved.

use std::sync::mpsc::channel;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use super::*;
use crate::api::Device;

const RECV_TIMEOUT: Duration = Duration::from_secs(5);

/// Mock client returning canned responses per query
struct MockApi;

impl DeviceApi for MockApi {
    async fn suggest(&self, query: &str) -> Result<Vec<Device>, ApiError> {
        match query {
            "fail" => Err(ApiError::UnexpectedBody("expected a JSON array".to_string())),
            "empty" => Ok(Vec::new()),
            "slow" => {
                tokio::time::sleep(Duration::from_secs(30)).await;
                Ok(Vec::new())
            }
            _ => Ok(vec![Device {
                id: 1,
                name: format!("{} Pro", query),
                brand: "Mock".to_string(),
            }]),
        }
    }

    async fn compare(&self, _id1: i64, _id2: i64) -> Result<String, ApiError> {
        unreachable!("lookup worker never calls compare")
    }
}

fn request(query: &str, request_id: u64) -> LookupRequest {
    LookupRequest {
        query: query.to_string(),
        request_id,
        cancel_token: CancellationToken::new(),
    }
}

#[test]
fn test_successful_lookup_round_trip() {
    let (request_tx, request_rx) = channel();
    let (response_tx, response_rx) = channel();
    spawn_worker(MockApi, request_rx, response_tx);

    request_tx.send(request("gal", 1)).unwrap();

    match response_rx.recv_timeout(RECV_TIMEOUT).unwrap() {
        LookupResponse::Success {
            devices,
            query,
            request_id,
        } => {
            assert_eq!(request_id, 1);
            assert_eq!(query, "gal");
            assert_eq!(devices.len(), 1);
            assert_eq!(devices[0].name, "gal Pro");
        }
        other => panic!("expected Success, got {:?}", other),
    }
}

#[test]
fn test_empty_result_is_success_not_error() {
    let (request_tx, request_rx) = channel();
    let (response_tx, response_rx) = channel();
    spawn_worker(MockApi, request_rx, response_tx);

    request_tx.send(request("empty", 1)).unwrap();

    match response_rx.recv_timeout(RECV_TIMEOUT).unwrap() {
        LookupResponse::Success { devices, .. } => assert!(devices.is_empty()),
        other => panic!("expected Success, got {:?}", other),
    }
}

#[test]
fn test_failed_lookup_reports_error() {
    let (request_tx, request_rx) = channel();
    let (response_tx, response_rx) = channel();
    spawn_worker(MockApi, request_rx, response_tx);

    request_tx.send(request("fail", 7)).unwrap();

    match response_rx.recv_timeout(RECV_TIMEOUT).unwrap() {
        LookupResponse::Error {
            message,
            request_id,
        } => {
            assert_eq!(request_id, 7);
            assert!(message.contains("JSON array"));
        }
        other => panic!("expected Error, got {:?}", other),
    }
}

#[test]
fn test_pre_cancelled_request_reports_cancelled() {
    let (request_tx, request_rx) = channel();
    let (response_tx, response_rx) = channel();
    spawn_worker(MockApi, request_rx, response_tx);

    let req = request("gal", 2);
    req.cancel_token.cancel();
    request_tx.send(req).unwrap();

    match response_rx.recv_timeout(RECV_TIMEOUT).unwrap() {
        LookupResponse::Cancelled { request_id } => assert_eq!(request_id, 2),
        other => panic!("expected Cancelled, got {:?}", other),
    }
}

#[test]
fn test_in_flight_request_can_be_cancelled() {
    let (request_tx, request_rx) = channel();
    let (response_tx, response_rx) = channel();
    spawn_worker(MockApi, request_rx, response_tx);

    let req = request("slow", 3);
    let token = req.cancel_token.clone();
    request_tx.send(req).unwrap();

    // Give the worker a moment to start the call, then cancel it
    std::thread::sleep(Duration::from_millis(50));
    token.cancel();

    match response_rx.recv_timeout(RECV_TIMEOUT).unwrap() {
        LookupResponse::Cancelled { request_id } => assert_eq!(request_id, 3),
        other => panic!("expected Cancelled, got {:?}", other),
    }
}

#[test]
fn test_queued_requests_are_superseded_by_newest() {
    let (request_tx, request_rx) = channel();
    let (response_tx, response_rx) = channel();

    // Queue several requests before the worker starts draining
    request_tx.send(request("a", 1)).unwrap();
    request_tx.send(request("ab", 2)).unwrap();
    request_tx.send(request("abc", 3)).unwrap();
    spawn_worker(MockApi, request_rx, response_tx);

    let mut success_queries = Vec::new();
    let mut cancelled = Vec::new();
    for _ in 0..3 {
        match response_rx.recv_timeout(RECV_TIMEOUT).unwrap() {
            LookupResponse::Success { query, .. } => success_queries.push(query),
            LookupResponse::Cancelled { request_id } => cancelled.push(request_id),
            other => panic!("unexpected response {:?}", other),
        }
    }

    assert_eq!(success_queries, vec!["abc".to_string()]);
    assert_eq!(cancelled, vec![1, 2]);
}

#[test]
fn test_worker_shuts_down_when_channel_closes() {
    let (request_tx, request_rx) = channel();
    let (response_tx, response_rx) = channel::<LookupResponse>();
    spawn_worker(MockApi, request_rx, response_tx);

    drop(request_tx);

    // With the request channel closed the worker exits and drops its sender
    assert!(response_rx.recv_timeout(RECV_TIMEOUT).is_err());
}
