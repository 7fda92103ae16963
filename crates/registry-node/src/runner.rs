//! Line-oriented command loop.

use anyhow::{Context, Result};
use seed_registry::prelude::SeedRegistryApi;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::info;

use crate::node::RegistryNode;

/// Counts from one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines answered with a response.
    pub commands: u64,
    /// Responses with `ok: false`.
    pub failures: u64,
}

/// Answer every command line from `input` with one JSON line on `output`.
///
/// Blank lines and lines starting with `#` are skipped.
pub async fn run<S, I, O>(node: &mut RegistryNode<S>, input: I, mut output: O) -> Result<RunSummary>
where
    S: SeedRegistryApi,
    I: AsyncBufRead + Unpin,
    O: AsyncWrite + Unpin,
{
    let mut summary = RunSummary::default();
    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await.context("reading command")? {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let response = node.handle_line(line);
        summary.commands += 1;
        if !response.ok {
            summary.failures += 1;
        }

        let mut encoded = serde_json::to_string(&response)?;
        encoded.push('\n');
        output
            .write_all(encoded.as_bytes())
            .await
            .context("writing response")?;
    }

    output.flush().await?;
    info!(
        commands = summary.commands,
        failures = summary.failures,
        height = node.block_height(),
        "Input exhausted"
    );
    Ok(summary)
}
