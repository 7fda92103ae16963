//! # Registry Node
//!
//! Boots a seed variety registry and answers newline-delimited JSON commands.
//!
//! ## Startup Sequence
//!
//! 1. Parse arguments
//! 2. Load telemetry and registry configuration (env, then CLI overrides)
//! 3. Register metrics and install the log subscriber
//! 4. Build the registry over in-memory collaborators
//! 5. Answer commands from `--script` or stdin until input ends

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{self, BufReader};
use tracing::{info, warn};

use registry_node::{build_node, run, Args};
use seed_registry::prelude::ServiceConfig;
use seed_telemetry::{init_telemetry, TelemetryConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let telemetry = args.telemetry_config(TelemetryConfig::from_env());
    init_telemetry(&telemetry).context("initializing telemetry")?;

    let base = ServiceConfig::from_env().context("reading registry configuration")?;
    let config = args
        .service_config(base)
        .context("applying command-line overrides")?;

    if args.authorities.is_empty() {
        warn!("No verified authorities configured; every registration will be rejected");
    }
    info!(
        max_varieties = config.max_varieties,
        registration_fee = config.registration_fee,
        fee_policy = ?config.fee_policy,
        authorities = args.authorities.len(),
        "Starting registry node"
    );

    let mut node = build_node(&args.authorities, config);
    let stdout = io::stdout();

    let summary = match &args.script {
        Some(path) => {
            let file = tokio::fs::File::open(path)
                .await
                .with_context(|| format!("opening script {}", path.display()))?;
            run(&mut node, BufReader::new(file), stdout).await?
        }
        None => run(&mut node, BufReader::new(io::stdin()), stdout).await?,
    };

    info!(
        commands = summary.commands,
        failures = summary.failures,
        registrations = node.registry().stats().registrations,
        "Registry node stopped"
    );
    Ok(())
}
