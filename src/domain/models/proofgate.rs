//! ProofGate publication types
use serde::{Deserialize, Deserializer, Serialize};

use super::JsonObject;

/// Body of `POST /v1/proofgate/publish`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishRequest {
    /// Proof-carrying object submitted for publication
    pub pco: JsonObject,

    /// Token budget hint (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_tokens: Option<u64>,

    /// Publication policy (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<JsonObject>,
}

impl PublishRequest {
    /// Create a request with only the payload set
    pub fn new(pco: JsonObject) -> Self {
        Self {
            pco,
            budget_tokens: None,
            policy: None,
        }
    }

    /// Attach a token budget hint
    #[must_use]
    pub fn with_budget_tokens(mut self, budget_tokens: u64) -> Self {
        self.budget_tokens = Some(budget_tokens);
        self
    }

    /// Attach a publication policy
    #[must_use]
    pub fn with_policy(mut self, policy: JsonObject) -> Self {
        self.policy = Some(policy);
        self
    }
}

/// Response of `POST /v1/proofgate/publish`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishResponse {
    /// Server-defined publication status (e.g. `PUBLISH`, `CONDITIONAL`)
    pub status: String,

    /// Echoed payload, if the server returned one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pco: Option<JsonObject>,

    /// Ledger reference: `None` when the key is missing, `Some(None)` when
    /// the server sent `null`
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub ledger_ref: Option<Option<String>>,

    /// Keys not modelled above, kept as received
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl PublishResponse {
    /// Ledger reference, if the server assigned one
    pub fn ledger(&self) -> Option<&str> {
        self.ledger_ref.as_ref().and_then(Option::as_deref)
    }
}

/// Treat a key that is present (even as `null`) as `Some`
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
