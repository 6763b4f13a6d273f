//! Timing helpers

use std::time::Instant;

/// Records the elapsed time into a histogram when dropped
pub struct TimingGuard {
    start: Instant,
    histogram_name: &'static str,
    source: String,
}

impl TimingGuard {
    pub fn new(histogram_name: &'static str, source: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            histogram_name,
            source: source.into(),
        }
    }
}

impl Drop for TimingGuard {
    fn drop(&mut self) {
        let duration = self.start.elapsed().as_secs_f64();
        ::metrics::histogram!(self.histogram_name, "source" => self.source.clone()).record(duration);
    }
}

pub fn time_operation(histogram_name: &'static str, source: impl Into<String>) -> TimingGuard {
    TimingGuard::new(histogram_name, source)
}
