//! # Seed Telemetry
//!
//! Logging and metrics for the seed variety registry.
//!
//! ## Components
//!
//! - **Logging**: `tracing-subscriber` with an `EnvFilter`, pretty or JSON
//!   output on stderr
//! - **Metrics**: Prometheus counters, gauges and histograms in a private
//!   registry, rendered in text exposition format on demand
//!
//! ## Usage
//!
//! ```rust,ignore
//! use seed_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     init_telemetry(&TelemetryConfig::from_env())?;
//!     // Registry operations now log and can be metered
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `SEED_LOG_LEVEL` / `RUST_LOG` | `info` | Log filter |
//! | `SEED_JSON_LOGS` | `false` | JSON log lines |
//! | `SEED_CONSOLE_OUTPUT` | `true` | Write logs at all |
//! | `SEED_SERVICE_NAME` | `seed-registry` | Service name in the startup line |

pub mod config;
pub mod logging;
pub mod metrics;

pub use config::TelemetryConfig;
pub use logging::init_logging;
pub use metrics::{encode_metrics, register_metrics};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TelemetryError {
    #[error("Failed to initialize logging: {0}")]
    LoggingInit(String),

    #[error("Failed to initialize Prometheus metrics: {0}")]
    MetricsInit(String),
}

/// Register metrics, then install the log subscriber.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    register_metrics()?;
    init_logging(config)
}

/// Convenience macro for recording a metric increment.
#[macro_export]
macro_rules! metric_inc {
    ($metric:expr) => {
        $metric.inc()
    };
    ($metric:expr, $labels:expr) => {
        $metric.with_label_values($labels).inc()
    };
}
