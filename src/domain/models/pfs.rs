//! Proof filesystem (PFS) listing and extended attribute types
use serde::{Deserialize, Serialize};

use super::JsonObject;

/// A single object returned by a PFS listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PfsListEntry {
    /// Object location (e.g. `pfs://mail/abc/attachment.pdf`)
    pub uri: String,

    /// Object size in bytes
    pub size: u64,

    /// Keys not modelled above, kept as received
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Response of `GET /v1/pfs/list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PfsListResponse {
    /// Prefix the listing was requested for, as echoed by the server
    pub prefix: String,

    /// Entries in server order
    pub entries: Vec<PfsListEntry>,

    /// Keys not modelled above, kept as received
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Response of `GET /v1/pfs/xattrs`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PfsXattrsResponse {
    /// Object location the attributes belong to
    pub uri: String,

    /// Attribute name to arbitrary JSON value
    pub xattrs: JsonObject,

    /// Keys not modelled above, kept as received
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Optional filters for a PFS listing
///
/// Fields left at their defaults are not sent at all. See
/// `infrastructure::http::query` for the exact inclusion rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Descend into nested prefixes (sent only when `true`)
    pub recursive: bool,

    /// Maximum number of entries (sent only when non-zero)
    pub limit: Option<u32>,

    /// MIME type filter (sent only when non-empty)
    pub mime: Option<String>,
}

impl ListOptions {
    /// Enable recursive listing
    #[must_use]
    pub fn recursive(mut self) -> Self {
        self.recursive = true;
        self
    }

    /// Cap the number of returned entries
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Only list objects of the given MIME type
    #[must_use]
    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }
}
