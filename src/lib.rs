//! CERTEUS - typed client for the CERTEUS HTTP API
//!
//! A thin async wrapper over the PFS, ProofGate and P2P endpoints: it
//! builds query strings, serializes request bodies to JSON, issues calls
//! through a pluggable [`Transport`], and decodes responses into typed
//! shapes. Any non-2xx status fails uniformly with [`ClientError::Http`].
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): payload types, the transport port, errors
//! - **Infrastructure Layer** (`infrastructure`): HTTP client, reqwest transport, config, logging
//! - **CLI Layer** (`cli`): the `certeus` command-line interface
//!
//! # Example
//!
//! ```no_run
//! use certeus::{CerteusClient, ClientConfig, DeviceKind, EnqueueRequest};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = CerteusClient::new(ClientConfig::with_base_url("http://127.0.0.1:8000"))?;
//!     let job = client.p2p_enqueue(&EnqueueRequest::new(DeviceKind::Qoracle)).await?;
//!     let status = client.p2p_job_status(&job.job_id).await?;
//!     println!("{} is {}", status.job_id, status.status);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::models::{
    ClientConfig, Config, DeviceKind, EnqueueRequest, EnqueueResponse, JobStatusResponse,
    JsonObject, ListOptions, LoggingConfig, PfsListEntry, PfsListResponse, PfsXattrsResponse,
    PublishRequest, PublishResponse, QueueSummaryResponse, TransportEchoResponse,
};
pub use domain::ports::{
    transport_fn, FnTransport, HttpMethod, Transport, TransportError, TransportRequest,
    TransportResponse,
};
pub use domain::{ClientError, UnknownDeviceKind};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::http::{CerteusClient, ReqwestTransport, DEFAULT_ECHO_MESSAGE};
