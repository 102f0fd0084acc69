//! Infrastructure layer module
//!
//! This module contains the adapters around the domain layer:
//! - HTTP client and reqwest transport
//! - Configuration management
//! - Logging infrastructure
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod config;
pub mod http;
pub mod logging;
