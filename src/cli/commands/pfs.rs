//! PFS CLI commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::cli::output::{compact, output, table, CommandOutput};
use crate::domain::models::{ListOptions, PfsListResponse, PfsXattrsResponse};
use crate::infrastructure::http::CerteusClient;

#[derive(Args, Debug)]
pub struct PfsArgs {
    #[command(subcommand)]
    pub command: PfsCommands,
}

#[derive(Subcommand, Debug)]
pub enum PfsCommands {
    /// List objects under a prefix
    List {
        /// Prefix to list (e.g. pfs://mail/)
        prefix: String,
        /// Descend into nested prefixes
        #[arg(short, long)]
        recursive: bool,
        /// Maximum number of entries
        #[arg(short, long)]
        limit: Option<u32>,
        /// Only list objects of this MIME type
        #[arg(short, long)]
        mime: Option<String>,
    },
    /// Show extended attributes of an object
    Xattrs {
        /// Object URI
        uri: String,
    },
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct PfsListOutput(pub PfsListResponse);

impl CommandOutput for PfsListOutput {
    fn to_human(&self) -> String {
        if self.0.entries.is_empty() {
            return format!("No objects under {}.", self.0.prefix);
        }

        let mut t = table(["URI", "SIZE"]);
        for entry in &self.0.entries {
            t.add_row(vec![entry.uri.clone(), entry.size.to_string()]);
        }

        format!(
            "Found {} object(s) under {}:\n{t}",
            self.0.entries.len(),
            self.0.prefix
        )
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct PfsXattrsOutput(pub PfsXattrsResponse);

impl CommandOutput for PfsXattrsOutput {
    fn to_human(&self) -> String {
        let mut lines = vec![format!("URI: {}", self.0.uri)];
        if self.0.xattrs.is_empty() {
            lines.push("No extended attributes.".to_string());
        } else {
            for (name, value) in &self.0.xattrs {
                lines.push(format!("  {name} = {}", compact(value)));
            }
        }
        lines.join("\n")
    }
}

pub async fn execute(args: PfsArgs, client: &CerteusClient, json_mode: bool) -> Result<()> {
    match args.command {
        PfsCommands::List {
            prefix,
            recursive,
            limit,
            mime,
        } => {
            let opts = ListOptions {
                recursive,
                limit,
                mime,
            };
            let listing = client.pfs_list(&prefix, &opts).await?;
            output(&PfsListOutput(listing), json_mode);
        }
        PfsCommands::Xattrs { uri } => {
            let xattrs = client.pfs_xattrs(&uri).await?;
            output(&PfsXattrsOutput(xattrs), json_mode);
        }
    }
    Ok(())
}
