//! Common test utilities for integration tests
//!
//! Provides a stub transport that records every request it receives and
//! answers with a canned response.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use certeus::{
    CerteusClient, ClientConfig, Transport, TransportError, TransportRequest, TransportResponse,
};

/// Transport stub: records requests, replies with a fixed status and body
#[derive(Clone)]
pub struct RecordingTransport {
    status: u16,
    body: String,
    requests: Arc<Mutex<Vec<TransportRequest>>>,
}

impl RecordingTransport {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Reply with 200 and the given JSON value
    pub fn ok_json(body: &serde_json::Value) -> Self {
        Self::new(200, body.to_string())
    }

    /// All requests seen so far
    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The only request seen; panics unless exactly one was sent
    pub fn single_request(&self) -> TransportRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request, got {requests:?}");
        requests.into_iter().next().unwrap()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        Ok(TransportResponse::new(self.status, self.body.clone()))
    }
}

/// Client with an empty base URL backed by `transport`
pub fn client_with(transport: &RecordingTransport) -> CerteusClient {
    CerteusClient::with_transport(ClientConfig::default(), Arc::new(transport.clone()))
}

/// Client with an explicit base URL backed by `transport`
pub fn client_at(base_url: &str, transport: &RecordingTransport) -> CerteusClient {
    CerteusClient::with_transport(
        ClientConfig::with_base_url(base_url),
        Arc::new(transport.clone()),
    )
}
