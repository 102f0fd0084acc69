//! HTTP client for the CERTEUS API
//!
//! - `client`: typed operations and the shared request executor
//! - `query`: query-string rule table and path escaping
//! - `transport`: default reqwest-backed transport

pub mod client;
pub mod query;
pub mod transport;

pub use client::{CerteusClient, DEFAULT_ECHO_MESSAGE};
pub use query::{escape_path_segment, QueryBuilder, QueryRule, LIST_RULES};
pub use transport::ReqwestTransport;
