//! Registration of every phase's metrics, with name conflict detection

use crate::metrics::{MetricDoc, PhaseMetrics};
use std::collections::HashMap;
use tracing::{debug, info, warn};

pub fn register_all_metrics() {
    let all = collect_documentation(true);
    info!("Registered {} total metrics across all phases", all.len());
}

/// All documented metrics keyed by name; optionally registers them too
pub fn collect_documentation(register: bool) -> HashMap<&'static str, MetricDoc> {
    let mut all_metrics = HashMap::new();
    register_phase_metrics::<super::IngestMetrics>(&mut all_metrics, register);
    register_phase_metrics::<super::FilterMetrics>(&mut all_metrics, register);
    register_phase_metrics::<super::OutputMetrics>(&mut all_metrics, register);
    all_metrics
}

fn register_phase_metrics<T: PhaseMetrics>(
    all_metrics: &mut HashMap<&'static str, MetricDoc>,
    register: bool,
) {
    if register {
        T::register_metrics();
    }
    let phase_name = T::phase_name();
    let docs = T::metrics_documentation();
    debug!("Registering {} metrics for phase '{}'", docs.len(), phase_name);

    for doc in docs {
        if all_metrics.contains_key(doc.name) {
            warn!(
                "Metric name conflict detected: '{}' redefined by phase '{}'",
                doc.name, phase_name
            );
        } else {
            all_metrics.insert(doc.name, doc);
        }
    }
}
