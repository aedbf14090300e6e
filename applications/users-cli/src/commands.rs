//! Subcommands and their execution.

use crate::render::{find_user, render_json, render_table};
use anyhow::{anyhow, Context};
use clap::{Subcommand, ValueEnum};
use std::io::Write;
use tracing::info;
use users_client::UserSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Aligned plain-text table
    #[default]
    Table,
    /// Pretty-printed JSON array
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Fetch and print every user
    List {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Fetch the list and print one user as JSON
    Show {
        /// User id
        id: u64,
    },
}

/// Execute a command against `source`, writing results to `out`.
///
/// Each command fetches the list exactly once.
pub async fn run<W: Write>(command: &Command, source: &dyn UserSource, out: &mut W) -> anyhow::Result<()> {
    let users = source.fetch_users().await.context("failed to fetch users")?;
    info!(count = users.len(), "Fetched users");

    match command {
        Command::List { format } => {
            let rendered = match format {
                OutputFormat::Table => render_table(&users),
                OutputFormat::Json => {
                    let mut json = render_json(&users)?;
                    json.push('\n');
                    json
                }
            };
            out.write_all(rendered.as_bytes())?;
        }
        Command::Show { id } => {
            let user = find_user(&users, *id).ok_or_else(|| anyhow!("user {} not found", id))?;
            serde_json::to_writer_pretty(&mut *out, user)?;
            writeln!(out)?;
        }
    }

    Ok(())
}
