//! Command-line interface for the CERTEUS client.

pub mod commands;
pub mod output;
pub mod types;

pub use types::{Cli, Commands};

use anyhow::Result;

use crate::domain::models::Config;
use crate::infrastructure::http::CerteusClient;

/// Build the API client described by `config`
pub fn connect(config: &Config) -> Result<CerteusClient> {
    Ok(CerteusClient::new(config.client.clone())?)
}

/// Print an error to stderr and exit with status 1
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        let mut body = serde_json::json!({ "error": err.to_string() });
        if let Some(status) = err
            .downcast_ref::<crate::domain::errors::ClientError>()
            .and_then(crate::domain::errors::ClientError::status)
        {
            body["status"] = serde_json::json!(status);
        }
        eprintln!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1);
}
