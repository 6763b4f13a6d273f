//! Ingest phase metrics: input files and rows read from them

use crate::metrics::{phase_metric, MetricDoc, MetricType, PhaseMetrics};

pub struct IngestMetrics;

impl IngestMetrics {
    pub fn record_file_loaded(source: &str, rows: usize) {
        ::metrics::counter!(phase_metric!(counter, "ingest", "files_loaded"), "source" => source.to_string())
            .increment(1);
        ::metrics::counter!(phase_metric!(counter, "ingest", "rows_read"), "source" => source.to_string())
            .increment(rows as u64);
    }

    pub fn record_file_failed(source: &str) {
        ::metrics::counter!(phase_metric!(counter, "ingest", "files_failed"), "source" => source.to_string())
            .increment(1);
    }

    pub fn record_file_missing(source: &str) {
        ::metrics::counter!(phase_metric!(counter, "ingest", "files_missing"), "source" => source.to_string())
            .increment(1);
    }

    pub fn duration_histogram() -> &'static str {
        phase_metric!(histogram, "ingest", "file_duration_seconds")
    }
}

impl PhaseMetrics for IngestMetrics {
    fn register_metrics() {
        use metrics::{counter, histogram};

        let _ = counter!(phase_metric!(counter, "ingest", "files_loaded"));
        let _ = counter!(phase_metric!(counter, "ingest", "rows_read"));
        let _ = counter!(phase_metric!(counter, "ingest", "files_failed"));
        let _ = counter!(phase_metric!(counter, "ingest", "files_missing"));
        let _ = histogram!(phase_metric!(histogram, "ingest", "file_duration_seconds"));
    }

    fn phase_name() -> &'static str {
        "ingest"
    }

    fn metrics_documentation() -> Vec<MetricDoc> {
        vec![
            MetricDoc {
                name: phase_metric!(counter, "ingest", "files_loaded"),
                metric_type: MetricType::Counter,
                help: "Input files read successfully",
                labels: vec!["source"],
            },
            MetricDoc {
                name: phase_metric!(counter, "ingest", "rows_read"),
                metric_type: MetricType::Counter,
                help: "Rows read from input files",
                labels: vec!["source"],
            },
            MetricDoc {
                name: phase_metric!(counter, "ingest", "files_failed"),
                metric_type: MetricType::Counter,
                help: "Input files that could not be read or parsed",
                labels: vec!["source"],
            },
            MetricDoc {
                name: phase_metric!(counter, "ingest", "files_missing"),
                metric_type: MetricType::Counter,
                help: "Expected input files that were absent",
                labels: vec!["source"],
            },
            MetricDoc {
                name: phase_metric!(histogram, "ingest", "file_duration_seconds"),
                metric_type: MetricType::Histogram,
                help: "Time spent loading and filtering one input file",
                labels: vec!["source"],
            },
        ]
    }
}
