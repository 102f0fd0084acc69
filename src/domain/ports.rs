//! Transport port: the boundary between the client and the network
use std::fmt;
use std::future::Future;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

/// Error raised by a transport; surfaced to callers unchanged
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// HTTP verbs used by the CERTEUS API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// `GET`
    Get,
    /// `POST`
    Post,
}

impl HttpMethod {
    /// Upper-case method name as sent on the wire
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully built request handed to a [`Transport`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportRequest {
    /// HTTP method
    pub method: HttpMethod,

    /// Base URL and path, concatenated
    pub url: String,

    /// Request headers (only `content-type` when a body is present)
    pub headers: Vec<(String, String)>,

    /// Serialized JSON body
    pub body: Option<String>,
}

impl TransportRequest {
    /// Look up a header by case-insensitive name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Buffered response returned by a [`Transport`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,

    /// Raw response body
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// Build a response from a status and body
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for any 2xx status
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Body as text; invalid UTF-8 is replaced rather than rejected
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Decode the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Mechanism performing the actual network exchange
///
/// This is the single extension point of the client. The default
/// implementation is `infrastructure::http::ReqwestTransport`; tests and
/// restricted environments can supply their own, either by implementing
/// this trait or by wrapping an async closure with [`transport_fn`].
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform one request/response round trip
    ///
    /// Non-2xx statuses are *not* errors at this level; return them as a
    /// normal [`TransportResponse`]. Only failures to obtain a response at
    /// all belong in `Err`.
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError>;
}

/// Transport backed by an async closure; see [`transport_fn`]
#[derive(Clone)]
pub struct FnTransport<F> {
    f: F,
}

impl<F> fmt::Debug for FnTransport<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnTransport").finish_non_exhaustive()
    }
}

/// Adapt an async closure into a [`Transport`]
///
/// # Example
/// ```
/// use certeus::domain::ports::{transport_fn, TransportError, TransportRequest, TransportResponse};
///
/// let transport = transport_fn(|request: TransportRequest| async move {
///     assert!(request.url.ends_with("/v1/p2p/queue"));
///     Ok::<_, TransportError>(TransportResponse::new(200, r#"{"depth":0,"by_device":{}}"#))
/// });
/// # let _ = transport;
/// ```
pub const fn transport_fn<F, Fut>(f: F) -> FnTransport<F>
where
    F: Fn(TransportRequest) -> Fut + Send + Sync,
    Fut: Future<Output = Result<TransportResponse, TransportError>> + Send + 'static,
{
    FnTransport { f }
}

#[async_trait]
impl<F, Fut> Transport for FnTransport<F>
where
    F: Fn(TransportRequest) -> Fut + Send + Sync,
    Fut: Future<Output = Result<TransportResponse, TransportError>> + Send + 'static,
{
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        (self.f)(request).await
    }
}
