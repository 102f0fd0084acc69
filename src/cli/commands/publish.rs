//! ProofGate publish command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::cli::types::parse_json_object;
use crate::domain::models::{JsonObject, PublishRequest, PublishResponse};
use crate::infrastructure::http::CerteusClient;

#[derive(Args, Debug)]
pub struct PublishArgs {
    /// Proof-carrying object, as a JSON object
    #[arg(long, value_parser = parse_json_object)]
    pub pco: JsonObject,

    /// Token budget hint
    #[arg(long)]
    pub budget_tokens: Option<u64>,

    /// Publication policy, as a JSON object
    #[arg(long, value_parser = parse_json_object)]
    pub policy: Option<JsonObject>,
}

impl From<PublishArgs> for PublishRequest {
    fn from(args: PublishArgs) -> Self {
        Self {
            pco: args.pco,
            budget_tokens: args.budget_tokens,
            policy: args.policy,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct PublishOutput(pub PublishResponse);

impl CommandOutput for PublishOutput {
    fn to_human(&self) -> String {
        let ledger = self.0.ledger().unwrap_or("-");
        format!("Status: {}\nLedger ref: {ledger}", self.0.status)
    }
}

pub async fn execute(args: PublishArgs, client: &CerteusClient, json_mode: bool) -> Result<()> {
    let request = PublishRequest::from(args);
    let response = client.publish(&request).await?;
    output(&PublishOutput(response), json_mode);
    Ok(())
}
