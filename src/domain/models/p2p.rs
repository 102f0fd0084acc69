//! P2P queue and transport probe types
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::JsonObject;
use crate::domain::errors::UnknownDeviceKind;

/// Downstream processing target a queued job is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    /// `hde`
    Hde,
    /// `qoracle`
    Qoracle,
    /// `entangler`
    Entangler,
    /// `chronosync`
    Chronosync,
}

impl DeviceKind {
    /// Every device kind, in wire order
    pub const ALL: [Self; 4] = [Self::Hde, Self::Qoracle, Self::Entangler, Self::Chronosync];

    /// Wire name of the device kind
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hde => "hde",
            Self::Qoracle => "qoracle",
            Self::Entangler => "entangler",
            Self::Chronosync => "chronosync",
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceKind {
    type Err = UnknownDeviceKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hde" => Ok(Self::Hde),
            "qoracle" => Ok(Self::Qoracle),
            "entangler" => Ok(Self::Entangler),
            "chronosync" => Ok(Self::Chronosync),
            _ => Err(UnknownDeviceKind(s.to_string())),
        }
    }
}

/// Body of `POST /v1/p2p/enqueue`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnqueueRequest {
    /// Target device
    pub device: DeviceKind,

    /// Job payload (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<JsonObject>,
}

impl EnqueueRequest {
    /// Enqueue a job without a payload
    pub const fn new(device: DeviceKind) -> Self {
        Self {
            device,
            payload: None,
        }
    }

    /// Attach a payload to the job
    #[must_use]
    pub fn with_payload(mut self, payload: JsonObject) -> Self {
        self.payload = Some(payload);
        self
    }
}

/// Response of `POST /v1/p2p/enqueue`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnqueueResponse {
    /// Server-assigned job id
    pub job_id: String,

    /// Server-defined status
    pub status: String,

    /// Opaque completion estimate
    pub eta_hint: String,

    /// Keys not modelled above, kept as received
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Response of `GET /v1/p2p/jobs/{job_id}` and `POST /v1/p2p/dequeue_once`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobStatusResponse {
    /// Server-assigned job id
    pub job_id: String,

    /// Server-defined status; not validated client-side
    pub status: String,

    /// Device name as reported by the server
    pub device: String,

    /// Job payload, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<JsonObject>,

    /// Keys not modelled above, kept as received
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Response of `GET /v1/p2p/queue`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueSummaryResponse {
    /// Total number of queued jobs
    pub depth: u64,

    /// Queued jobs per device name
    pub by_device: BTreeMap<String, u64>,

    /// Keys not modelled above, kept as received
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Response of `GET /v1/p2p/transport/echo`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportEchoResponse {
    /// First echoed copy of the message
    pub a: String,

    /// Second echoed copy of the message
    pub b: String,

    /// Whether the two copies match
    pub ok: bool,

    /// Message length
    pub len: u64,

    /// Original message
    pub message: String,

    /// Keys not modelled above, kept as received
    #[serde(flatten)]
    pub extra: JsonObject,
}
