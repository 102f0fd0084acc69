//! Default transport backed by reqwest
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use tracing::trace;

use crate::domain::ports::{HttpMethod, Transport, TransportError, TransportRequest, TransportResponse};

/// Transport using a pooled `reqwest::Client`
///
/// No timeout is configured: cancellation is done by dropping the future.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http_client: ReqwestClient,
}

impl ReqwestTransport {
    /// Build a transport with a fresh connection pool
    pub fn new() -> Result<Self, reqwest::Error> {
        let http_client = ReqwestClient::builder()
            .user_agent(concat!("certeus/", env!("CARGO_PKG_VERSION")))
            .pool_max_idle_per_host(10)
            .tcp_nodelay(true)
            .build()?;

        Ok(Self { http_client })
    }

    /// Reuse an existing reqwest client (shared pool, custom TLS, proxies, ...)
    pub const fn from_client(http_client: ReqwestClient) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        };

        let mut builder = self.http_client.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        trace!(status, bytes = body.len(), "transport response received");

        Ok(TransportResponse::new(status, body.to_vec()))
    }
}
