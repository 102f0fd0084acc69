//! CERTEUS API client
use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument, warn};

use super::query::{escape_path_segment, QueryBuilder, LIST_RULES};
use super::transport::ReqwestTransport;
use crate::domain::errors::ClientError;
use crate::domain::models::{
    ClientConfig, EnqueueRequest, EnqueueResponse, JobStatusResponse, ListOptions,
    PfsListResponse, PfsXattrsResponse, PublishRequest, PublishResponse, QueueSummaryResponse,
    TransportEchoResponse,
};
use crate::domain::ports::{HttpMethod, Transport, TransportRequest};

/// Message sent by [`CerteusClient::transport_echo`] when none is given
pub const DEFAULT_ECHO_MESSAGE: &str = "synapse";

/// Typed client for the CERTEUS HTTP API
///
/// Every operation is a single round trip through the configured
/// [`Transport`]: no retries, no caching, no timeouts of its own. The
/// client holds only immutable configuration and is cheap to clone.
#[derive(Clone)]
pub struct CerteusClient {
    base_url: String,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for CerteusClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CerteusClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl CerteusClient {
    /// Create a client using the default reqwest transport
    ///
    /// # Example
    /// ```no_run
    /// use certeus::{CerteusClient, ClientConfig, ListOptions};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = CerteusClient::new(ClientConfig::with_base_url("http://127.0.0.1:8000"))?;
    /// let listing = client.pfs_list("pfs://mail/", &ListOptions::default().recursive()).await?;
    /// for entry in listing.entries {
    ///     println!("{} {}", entry.uri, entry.size);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let transport = ReqwestTransport::new().map_err(|e| ClientError::Transport(Box::new(e)))?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client with a substituted transport
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        debug!(base_url = %config.base_url, "creating CERTEUS client");
        Self {
            base_url: config.base_url,
            transport,
        }
    }

    /// Configured base URL (empty for relative addressing)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List PFS objects under `prefix`
    pub async fn pfs_list(
        &self,
        prefix: &str,
        opts: &ListOptions,
    ) -> Result<PfsListResponse, ClientError> {
        let path = QueryBuilder::new()
            .required("prefix", prefix)
            .optional(&LIST_RULES, opts)
            .into_path("/v1/pfs/list");
        self.get(&path).await
    }

    /// Fetch the extended attributes of a PFS object
    pub async fn pfs_xattrs(&self, uri: &str) -> Result<PfsXattrsResponse, ClientError> {
        let path = QueryBuilder::new()
            .required("uri", uri)
            .into_path("/v1/pfs/xattrs");
        self.get(&path).await
    }

    /// Submit a proof-carrying object to ProofGate
    pub async fn publish(&self, request: &PublishRequest) -> Result<PublishResponse, ClientError> {
        self.execute(HttpMethod::Post, "/v1/proofgate/publish", Some(request))
            .await
    }

    /// Round-trip a message through the P2P transport probe
    ///
    /// Sends [`DEFAULT_ECHO_MESSAGE`] when `msg` is `None`.
    pub async fn transport_echo(
        &self,
        msg: Option<&str>,
    ) -> Result<TransportEchoResponse, ClientError> {
        let path = QueryBuilder::new()
            .required("msg", msg.unwrap_or(DEFAULT_ECHO_MESSAGE))
            .into_path("/v1/p2p/transport/echo");
        self.get(&path).await
    }

    /// Put a job on the server-side P2P queue
    pub async fn p2p_enqueue(
        &self,
        request: &EnqueueRequest,
    ) -> Result<EnqueueResponse, ClientError> {
        self.execute(HttpMethod::Post, "/v1/p2p/enqueue", Some(request))
            .await
    }

    /// Look up a queued job
    pub async fn p2p_job_status(&self, job_id: &str) -> Result<JobStatusResponse, ClientError> {
        let path = format!("/v1/p2p/jobs/{}", escape_path_segment(job_id));
        self.get(&path).await
    }

    /// Queue depth, total and per device
    pub async fn p2p_queue_summary(&self) -> Result<QueueSummaryResponse, ClientError> {
        self.get("/v1/p2p/queue").await
    }

    /// Ask the server to process one queued job
    pub async fn p2p_dequeue_once(&self) -> Result<JobStatusResponse, ClientError> {
        self.execute::<(), _>(HttpMethod::Post, "/v1/p2p/dequeue_once", None)
            .await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.execute::<(), T>(HttpMethod::Get, path, None).await
    }

    /// Issue one request and decode the JSON response
    ///
    /// A body, when present, is sent as JSON with `content-type:
    /// application/json`; without one neither body nor header is sent.
    /// Non-2xx responses become [`ClientError::Http`] carrying the body
    /// verbatim.
    #[instrument(skip_all, fields(method = %method, path = %path))]
    async fn execute<B, T>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ClientError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let (headers, body) = match body {
            Some(body) => (
                vec![("content-type".to_string(), "application/json".to_string())],
                Some(serde_json::to_string(body).map_err(ClientError::Encode)?),
            ),
            None => (Vec::new(), None),
        };

        let request = TransportRequest {
            method,
            url: format!("{}{}", self.base_url, path),
            headers,
            body,
        };

        debug!(url = %request.url, has_body = request.body.is_some(), "sending request");

        let response = self
            .transport
            .send(request)
            .await
            .map_err(ClientError::Transport)?;

        if !response.is_success() {
            let body = response.text();
            warn!(status = response.status, "request failed");
            debug!(body = %body, "error response body");
            return Err(ClientError::Http {
                status: response.status,
                body,
            });
        }

        response.json().map_err(ClientError::Decode)
    }
}
