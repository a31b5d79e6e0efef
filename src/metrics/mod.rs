//! Prometheus metrics for the triage service.
//!
//! Counters and histograms live in a process-wide registry. Call
//! [`init_metrics`] once at start-up; recording into an unregistered metric is
//! harmless but it will not show up in [`gather_metrics`].
//!
//! # Example
//! ```no_run
//! use disaster_triage::metrics::{init_metrics, gather_metrics};
//!
//! init_metrics().ok();
//! println!("{}", gather_metrics());
//! ```

use lazy_static::lazy_static;
use once_cell::sync::OnceCell;
use prometheus::{CounterVec, Histogram, HistogramOpts, IntCounter, Opts, Registry};

lazy_static! {
    /// Global Prometheus registry for all metrics
    pub static ref PROMETHEUS_REGISTRY: Registry = Registry::new();

    /// Completed analyses
    ///
    /// Labels: urgency, disaster_type
    pub static ref ANALYSES_TOTAL: CounterVec = CounterVec::new(
        Opts::new("analyses_total", "Total number of completed situation analyses")
            .namespace("disaster_triage"),
        &["urgency", "disaster_type"]
    ).expect("Failed to create ANALYSES_TOTAL metric");

    /// Requests rejected for missing text
    pub static ref REJECTED_REQUESTS_TOTAL: IntCounter = IntCounter::with_opts(
        Opts::new("rejected_requests_total", "Requests rejected because no text was supplied")
            .namespace("disaster_triage")
    ).expect("Failed to create REJECTED_REQUESTS_TOTAL metric");

    /// Statistical predictions replaced by a placeholder
    ///
    /// Labels: model, reason
    pub static ref MODEL_FALLBACKS_TOTAL: CounterVec = CounterVec::new(
        Opts::new("model_fallbacks_total", "Statistical predictions replaced by a placeholder")
            .namespace("disaster_triage"),
        &["model", "reason"]
    ).expect("Failed to create MODEL_FALLBACKS_TOTAL metric");

    /// Time spent in the full analysis pipeline
    pub static ref ANALYSIS_DURATION_SECONDS: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            "analysis_duration_seconds",
            "Duration of a single situation analysis in seconds"
        )
        .namespace("disaster_triage")
        .buckets(vec![0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1])
    ).expect("Failed to create ANALYSIS_DURATION_SECONDS metric");
}

static INIT: OnceCell<Result<(), String>> = OnceCell::new();

fn register_all() -> Result<(), prometheus::Error> {
    PROMETHEUS_REGISTRY.register(Box::new(ANALYSES_TOTAL.clone()))?;
    PROMETHEUS_REGISTRY.register(Box::new(REJECTED_REQUESTS_TOTAL.clone()))?;
    PROMETHEUS_REGISTRY.register(Box::new(MODEL_FALLBACKS_TOTAL.clone()))?;
    PROMETHEUS_REGISTRY.register(Box::new(ANALYSIS_DURATION_SECONDS.clone()))?;
    Ok(())
}

/// Register every metric with the global registry. Safe to call repeatedly.
pub fn init_metrics() -> Result<(), String> {
    INIT.get_or_init(|| register_all().map_err(|e| e.to_string()))
        .clone()
}

/// Record a completed analysis
pub fn record_analysis(urgency: &str, disaster_type: &str, seconds: f64) {
    ANALYSES_TOTAL
        .with_label_values(&[urgency, disaster_type])
        .inc();
    ANALYSIS_DURATION_SECONDS.observe(seconds);
}

/// Record a request rejected for missing text
pub fn record_rejection() {
    REJECTED_REQUESTS_TOTAL.inc();
}

/// Record a statistical fallback
pub fn record_model_fallback(model: &str, reason: &str) {
    MODEL_FALLBACKS_TOTAL
        .with_label_values(&[model, reason])
        .inc();
}

/// Render all registered metrics in Prometheus text format
pub fn gather_metrics() -> String {
    use prometheus::Encoder;
    let encoder = prometheus::TextEncoder::new();
    let metric_families = PROMETHEUS_REGISTRY.gather();
    let mut buffer = Vec::new();

    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!("Failed to encode metrics: {}", e);
        return String::from("# Error encoding metrics\n");
    }

    String::from_utf8(buffer).unwrap_or_else(|e| {
        tracing::error!("Failed to convert metrics to string: {}", e);
        String::from("# Error converting metrics\n")
    })
}
