//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use seed_registry::prelude::{ConfigError, FeePolicy, ServiceConfig};
use seed_telemetry::TelemetryConfig;

/// Registry Node: drive a seed variety registry with JSON commands
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "registry-node")]
#[command(about = "Seed variety registry driven by newline-delimited JSON commands")]
pub struct Args {
    /// Read commands from this file instead of stdin
    #[arg(short, long)]
    pub script: Option<PathBuf>,

    /// Principals the authority oracle verifies (comma separated)
    #[arg(short, long, value_delimiter = ',')]
    pub authorities: Vec<String>,

    /// Record cap (overrides SEED_MAX_VARIETIES)
    #[arg(long)]
    pub max_varieties: Option<u64>,

    /// Initial registration fee (overrides SEED_REGISTRATION_FEE)
    #[arg(long)]
    pub registration_fee: Option<u64>,

    /// Only the configured authority may change the fee
    #[arg(long)]
    pub strict_fee_policy: bool,

    /// Emit JSON log lines on stderr
    #[arg(long)]
    pub json_logs: bool,
}

impl Args {
    /// Apply command-line overrides on top of `base`.
    pub fn service_config(&self, base: ServiceConfig) -> Result<ServiceConfig, ConfigError> {
        let mut config = base;
        if let Some(max) = self.max_varieties {
            config.max_varieties = max;
        }
        if let Some(fee) = self.registration_fee {
            config.registration_fee = fee;
        }
        if self.strict_fee_policy {
            config.fee_policy = FeePolicy::AuthorityOnly;
        }
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides on top of `base`.
    #[must_use]
    pub fn telemetry_config(&self, base: TelemetryConfig) -> TelemetryConfig {
        TelemetryConfig {
            json_logs: base.json_logs || self.json_logs,
            ..base
        }
    }
}
