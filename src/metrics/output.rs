//! Output phase metrics

use crate::metrics::{phase_metric, MetricDoc, MetricType, PhaseMetrics};

pub struct OutputMetrics;

impl OutputMetrics {
    pub fn record_truncated(count: usize) {
        ::metrics::counter!(phase_metric!(counter, "output", "documents_truncated")).increment(count as u64);
    }

    pub fn record_written(count: usize) {
        ::metrics::counter!(phase_metric!(counter, "output", "documents_written")).increment(count as u64);
    }
}

impl PhaseMetrics for OutputMetrics {
    fn register_metrics() {
        use metrics::counter;

        let _ = counter!(phase_metric!(counter, "output", "documents_truncated"));
        let _ = counter!(phase_metric!(counter, "output", "documents_written"));
    }

    fn phase_name() -> &'static str {
        "output"
    }

    fn metrics_documentation() -> Vec<MetricDoc> {
        vec![
            MetricDoc {
                name: phase_metric!(counter, "output", "documents_truncated"),
                metric_type: MetricType::Counter,
                help: "Documents cut by the max document limit",
                labels: vec![],
            },
            MetricDoc {
                name: phase_metric!(counter, "output", "documents_written"),
                metric_type: MetricType::Counter,
                help: "Documents written to the output file",
                labels: vec![],
            },
        ]
    }
}
