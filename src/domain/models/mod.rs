//! Request and response payloads exchanged with the CERTEUS API.

pub mod config;
pub mod p2p;
pub mod pfs;
pub mod proofgate;

pub use config::{ClientConfig, Config, LoggingConfig};
pub use p2p::{
    DeviceKind, EnqueueRequest, EnqueueResponse, JobStatusResponse, QueueSummaryResponse,
    TransportEchoResponse,
};
pub use pfs::{ListOptions, PfsListEntry, PfsListResponse, PfsXattrsResponse};
pub use proofgate::{PublishRequest, PublishResponse};

/// Opaque JSON object passed through the client untouched.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;
