//! Filter phase metrics: rows kept or dropped by length and dedupe checks

use crate::metrics::{phase_metric, MetricDoc, MetricType, PhaseMetrics};

pub struct FilterMetrics;

impl FilterMetrics {
    pub fn record_kept(source: &str, count: usize) {
        ::metrics::counter!(phase_metric!(counter, "filter", "documents_kept"), "source" => source.to_string())
            .increment(count as u64);
    }

    pub fn record_skipped_short(source: &str, count: usize) {
        ::metrics::counter!(phase_metric!(counter, "filter", "skipped_short"), "source" => source.to_string())
            .increment(count as u64);
    }

    pub fn record_skipped_duplicate(source: &str, count: usize) {
        ::metrics::counter!(phase_metric!(counter, "filter", "skipped_duplicate"), "source" => source.to_string())
            .increment(count as u64);
    }
}

impl PhaseMetrics for FilterMetrics {
    fn register_metrics() {
        use metrics::counter;

        let _ = counter!(phase_metric!(counter, "filter", "documents_kept"));
        let _ = counter!(phase_metric!(counter, "filter", "skipped_short"));
        let _ = counter!(phase_metric!(counter, "filter", "skipped_duplicate"));
    }

    fn phase_name() -> &'static str {
        "filter"
    }

    fn metrics_documentation() -> Vec<MetricDoc> {
        vec![
            MetricDoc {
                name: phase_metric!(counter, "filter", "documents_kept"),
                metric_type: MetricType::Counter,
                help: "Rows that passed every check and became documents",
                labels: vec!["source"],
            },
            MetricDoc {
                name: phase_metric!(counter, "filter", "skipped_short"),
                metric_type: MetricType::Counter,
                help: "Rows dropped because the cleaned title or text was too short",
                labels: vec!["source"],
            },
            MetricDoc {
                name: phase_metric!(counter, "filter", "skipped_duplicate"),
                metric_type: MetricType::Counter,
                help: "Rows dropped as exact duplicates within their file",
                labels: vec!["source"],
            },
        ]
    }
}
