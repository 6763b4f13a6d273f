//! Metrics for the preprocessing run
//!
//! Each pipeline phase defines its own metrics in a dedicated submodule so
//! names stay consistent. Recording goes through the `metrics` facade and is a
//! no-op until [`init_metrics`] installs a recorder.

pub mod core;
pub mod filter;
pub mod ingest;
pub mod output;
pub mod registry;

pub use filter::FilterMetrics;
pub use ingest::IngestMetrics;
pub use output::OutputMetrics;

use std::sync::{Once, OnceLock};
use tracing::{info, warn};

static INIT: Once = Once::new();
static HANDLE: OnceLock<metrics_exporter_prometheus::PrometheusHandle> = OnceLock::new();

/// Install the Prometheus recorder and register all phase metrics.
///
/// Idempotent. No HTTP listener is started; the snapshot is rendered
/// in-process by [`render_snapshot`].
pub fn init_metrics() {
    INIT.call_once(|| {
        let builder = metrics_exporter_prometheus::PrometheusBuilder::new();
        match builder.install_recorder() {
            Ok(handle) => {
                if HANDLE.set(handle).is_err() {
                    warn!("METRICS: handle already stored");
                }
                registry::register_all_metrics();
                info!("Prometheus recorder installed");
            }
            Err(e) => {
                warn!("Failed to install Prometheus recorder: {}", e);
            }
        }
    });
}

/// Prometheus text exposition of everything recorded so far
pub fn render_snapshot() -> Option<String> {
    HANDLE.get().map(|h| h.render())
}

/// Trait for phase-specific metrics collections
pub trait PhaseMetrics {
    /// Register all metrics for this phase so they show up before first use
    fn register_metrics();

    fn phase_name() -> &'static str;

    fn metrics_documentation() -> Vec<MetricDoc>;
}

/// Documentation for a single metric
#[derive(Debug, Clone)]
pub struct MetricDoc {
    pub name: &'static str,
    pub metric_type: MetricType,
    pub help: &'static str,
    pub labels: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetricType {
    Counter,
    Histogram,
}

/// Metric names follow news_prep_{phase}_{name}, counters end in _total
macro_rules! phase_metric {
    (counter, $phase:literal, $name:literal) => {
        concat!("news_prep_", $phase, "_", $name, "_total")
    };
    (histogram, $phase:literal, $name:literal) => {
        concat!("news_prep_", $phase, "_", $name)
    };
}

pub(crate) use phase_metric;
