//! Prometheus metrics for the seed variety registry.
//!
//! All metrics follow the naming convention: `seed_registry_<metric>_<unit>`
//!
//! ## Metric Types
//!
//! - **Counter**: operation outcomes, rejection codes, fees collected
//! - **Gauge**: issued variety count
//! - **Histogram**: time spent handling one command

use lazy_static::lazy_static;
use prometheus::{
    exponential_buckets, Encoder, Histogram, HistogramOpts, IntCounter, IntCounterVec, IntGauge,
    Opts, Registry, TextEncoder,
};

use crate::TelemetryError;

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    // =========================================================================
    // REGISTRATION METRICS
    // =========================================================================

    /// Registration attempts by outcome
    pub static ref REGISTRATIONS: IntCounterVec = IntCounterVec::new(
        Opts::new("seed_registry_registrations_total", "Variety registration attempts"),
        &["outcome"]  // outcome: accepted/rejected
    ).expect("metric creation failed");

    /// Rejected registrations by result code
    pub static ref REGISTRATION_REJECTIONS: IntCounterVec = IntCounterVec::new(
        Opts::new(
            "seed_registry_registration_rejections_total",
            "Rejected registrations by result code"
        ),
        &["code"]
    ).expect("metric creation failed");

    /// Registration fees transferred to the authority
    pub static ref FEES_COLLECTED: IntCounter = IntCounter::new(
        "seed_registry_fees_collected_total",
        "Sum of registration fees transferred to the authority"
    ).expect("metric creation failed");

    /// Issued variety ids
    pub static ref VARIETY_COUNT: IntGauge = IntGauge::new(
        "seed_registry_varieties",
        "Number of varieties registered"
    ).expect("metric creation failed");

    // =========================================================================
    // UPDATE AND CONFIGURATION METRICS
    // =========================================================================

    /// Update attempts by outcome
    pub static ref UPDATES: IntCounterVec = IntCounterVec::new(
        Opts::new("seed_registry_updates_total", "Variety update attempts"),
        &["outcome"]
    ).expect("metric creation failed");

    /// Authority and fee changes by operation and outcome
    pub static ref CONFIG_CHANGES: IntCounterVec = IntCounterVec::new(
        Opts::new("seed_registry_config_changes_total", "Authority and fee changes"),
        &["operation", "outcome"]  // operation: authority/fee
    ).expect("metric creation failed");

    // =========================================================================
    // COMMAND METRICS
    // =========================================================================

    /// Command handling duration
    pub static ref COMMAND_DURATION: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            "seed_registry_command_duration_seconds",
            "Time spent handling one command"
        ).buckets(exponential_buckets(0.000_01, 2.0, 15).expect("valid bucket layout"))
    ).expect("metric creation failed");

    /// Input lines that could not be parsed into a command
    pub static ref MALFORMED_COMMANDS: IntCounter = IntCounter::new(
        "seed_registry_malformed_commands_total",
        "Input lines that failed to parse"
    ).expect("metric creation failed");
}

/// Outcome label values.
pub mod outcome {
    pub const ACCEPTED: &str = "accepted";
    pub const REJECTED: &str = "rejected";
}

/// Register all metrics with the global registry.
///
/// Calling this more than once is harmless.
pub fn register_metrics() -> Result<(), TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        // Registration
        Box::new(REGISTRATIONS.clone()),
        Box::new(REGISTRATION_REJECTIONS.clone()),
        Box::new(FEES_COLLECTED.clone()),
        Box::new(VARIETY_COUNT.clone()),
        // Updates and configuration
        Box::new(UPDATES.clone()),
        Box::new(CONFIG_CHANGES.clone()),
        // Commands
        Box::new(COMMAND_DURATION.clone()),
        Box::new(MALFORMED_COMMANDS.clone()),
    ];

    for metric in metrics {
        match REGISTRY.register(metric) {
            Ok(()) | Err(prometheus::Error::AlreadyReg) => {}
            Err(e) => return Err(TelemetryError::MetricsInit(e.to_string())),
        }
    }
    Ok(())
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}

/// Timer guard for automatic histogram observation.
pub struct HistogramTimer {
    histogram: Histogram,
    start: std::time::Instant,
}

impl HistogramTimer {
    /// Start a new timer for the given histogram.
    pub fn new(histogram: &Histogram) -> Self {
        Self {
            histogram: histogram.clone(),
            start: std::time::Instant::now(),
        }
    }
}

impl Drop for HistogramTimer {
    fn drop(&mut self) {
        self.histogram.observe(self.start.elapsed().as_secs_f64());
    }
}

/// Start timing for a histogram. Observation happens on drop.
#[macro_export]
macro_rules! time_histogram {
    ($histogram:expr) => {
        $crate::metrics::HistogramTimer::new(&$histogram)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_metrics_twice() {
        assert!(register_metrics().is_ok());
        assert!(register_metrics().is_ok());
    }

    #[test]
    fn test_counter_increment() {
        REGISTRATIONS.with_label_values(&[outcome::ACCEPTED]).inc();
        assert!(REGISTRATIONS.with_label_values(&[outcome::ACCEPTED]).get() >= 1);
    }

    #[test]
    fn test_encode_contains_registered_metric() {
        register_metrics().unwrap();
        MALFORMED_COMMANDS.inc();
        let text = encode_metrics().unwrap();
        assert!(text.contains("seed_registry_malformed_commands_total"));
    }

    #[test]
    fn test_histogram_timer() {
        let before = COMMAND_DURATION.get_sample_count();
        {
            let _timer = HistogramTimer::new(&COMMAND_DURATION);
        }
        assert!(COMMAND_DURATION.get_sample_count() > before);
    }
}
