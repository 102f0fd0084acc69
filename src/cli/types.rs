//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use super::commands::{p2p::P2pArgs, pfs::PfsArgs, publish::PublishArgs};
use crate::domain::models::Config;
use crate::infrastructure::config::ConfigLoader;

#[derive(Parser, Debug)]
#[command(name = "certeus")]
#[command(about = "CERTEUS - client for the PFS, ProofGate and P2P API", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// API base URL (overrides client.base_url from config)
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Configuration file (replaces .certeus/config.yaml and .certeus/local.yaml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Proof filesystem commands
    Pfs(PfsArgs),

    /// Publish a proof-carrying object through ProofGate
    Publish(PublishArgs),

    /// P2P queue and transport commands
    P2p(P2pArgs),
}

impl Cli {
    /// Load configuration and apply command-line overrides
    ///
    /// The binary always talks to a remote host, so unlike the library
    /// an empty base URL is rejected here.
    pub fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load()?,
        };

        if let Some(base_url) = &self.base_url {
            ConfigLoader::validate_base_url(base_url)?;
            config.client.base_url.clone_from(base_url);
        }

        if config.client.base_url.is_empty() {
            anyhow::bail!(
                "No base URL configured. Pass --base-url, set client.base_url in \
                 .certeus/config.yaml, or export CERTEUS_CLIENT__BASE_URL"
            );
        }

        Ok(config)
    }
}

/// Parse a JSON object argument (used by `--pco`, `--policy`, `--payload`)
pub fn parse_json_object(raw: &str) -> Result<crate::domain::models::JsonObject> {
    match serde_json::from_str(raw).context("Argument is not valid JSON")? {
        serde_json::Value::Object(map) => Ok(map),
        other => anyhow::bail!("Expected a JSON object, got: {other}"),
    }
}
