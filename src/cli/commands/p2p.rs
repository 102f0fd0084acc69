//! P2P CLI commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::cli::output::{compact, output, table, CommandOutput};
use crate::cli::types::parse_json_object;
use crate::domain::models::{
    DeviceKind, EnqueueRequest, EnqueueResponse, JobStatusResponse, JsonObject,
    QueueSummaryResponse, TransportEchoResponse,
};
use crate::infrastructure::http::CerteusClient;

#[derive(Args, Debug)]
pub struct P2pArgs {
    #[command(subcommand)]
    pub command: P2pCommands,
}

#[derive(Subcommand, Debug)]
pub enum P2pCommands {
    /// Round-trip a message through the transport probe
    Echo {
        /// Message to echo (defaults to "synapse")
        msg: Option<String>,
    },
    /// Enqueue a job for a device
    Enqueue {
        /// Target device: hde, qoracle, entangler, chronosync
        device: DeviceKind,
        /// Job payload, as a JSON object
        #[arg(short, long, value_parser = parse_json_object)]
        payload: Option<JsonObject>,
    },
    /// Show the status of a job
    Job {
        /// Job ID
        job_id: String,
    },
    /// Show queue depth per device
    Queue,
    /// Process one queued job
    Dequeue,
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct EchoOutput(pub TransportEchoResponse);

impl CommandOutput for EchoOutput {
    fn to_human(&self) -> String {
        let verdict = if self.0.ok { "match" } else { "MISMATCH" };
        format!(
            "Echo {verdict} ({} bytes)\n  a: {}\n  b: {}\n  message: {}",
            self.0.len, self.0.a, self.0.b, self.0.message
        )
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct EnqueueOutput(pub EnqueueResponse);

impl CommandOutput for EnqueueOutput {
    fn to_human(&self) -> String {
        format!(
            "Enqueued job {} ({})\nETA: {}",
            self.0.job_id, self.0.status, self.0.eta_hint
        )
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct JobOutput(pub JobStatusResponse);

impl CommandOutput for JobOutput {
    fn to_human(&self) -> String {
        let mut lines = vec![
            format!("Job: {}", self.0.job_id),
            format!("Status: {}", self.0.status),
            format!("Device: {}", self.0.device),
        ];
        if let Some(ref payload) = self.0.payload {
            lines.push("Payload:".to_string());
            for (key, value) in payload {
                lines.push(format!("  {key} = {}", compact(value)));
            }
        }
        lines.join("\n")
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct QueueOutput(pub QueueSummaryResponse);

impl CommandOutput for QueueOutput {
    fn to_human(&self) -> String {
        if self.0.by_device.is_empty() {
            return format!("Queue depth: {}", self.0.depth);
        }

        let mut t = table(["DEVICE", "QUEUED"]);
        for (device, count) in &self.0.by_device {
            t.add_row(vec![device.clone(), count.to_string()]);
        }
        format!("Queue depth: {}\n{t}", self.0.depth)
    }
}

pub async fn execute(args: P2pArgs, client: &CerteusClient, json_mode: bool) -> Result<()> {
    match args.command {
        P2pCommands::Echo { msg } => {
            let echo = client.transport_echo(msg.as_deref()).await?;
            output(&EchoOutput(echo), json_mode);
        }
        P2pCommands::Enqueue { device, payload } => {
            let request = EnqueueRequest { device, payload };
            let job = client.p2p_enqueue(&request).await?;
            output(&EnqueueOutput(job), json_mode);
        }
        P2pCommands::Job { job_id } => {
            let job = client.p2p_job_status(&job_id).await?;
            output(&JobOutput(job), json_mode);
        }
        P2pCommands::Queue => {
            let summary = client.p2p_queue_summary().await?;
            output(&QueueOutput(summary), json_mode);
        }
        P2pCommands::Dequeue => {
            let job = client.p2p_dequeue_once().await?;
            output(&JobOutput(job), json_mode);
        }
    }
    Ok(())
}
