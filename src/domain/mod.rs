//! Domain layer for the CERTEUS client
//!
//! Wire payload shapes, the transport port, and the client error type.
//! Nothing in here performs I/O.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{ClientError, UnknownDeviceKind};
pub use ports::{HttpMethod, Transport, TransportError, TransportRequest, TransportResponse};
