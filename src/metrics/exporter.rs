use std::io::Write;

use parking_lot::Mutex;

use crate::metrics::snapshot::CacheLatestMetricsSnapshot;
use crate::metrics::traits::MetricsExporter;

/// Prometheus text exporter for view metrics snapshots.
///
/// Writes the Prometheus text exposition format so the output can be scraped
/// by Prometheus or forwarded to an OpenTelemetry collector. Write errors are
/// ignored; metrics are observational.
#[derive(Debug)]
pub struct PrometheusTextExporter<W: Write + Send> {
    prefix: String,
    writer: Mutex<W>,
}

impl<W: Write + Send> PrometheusTextExporter<W> {
    pub fn new(prefix: impl Into<String>, writer: W) -> Self {
        Self {
            prefix: prefix.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the exporter, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn write_counter(&self, name: &str, value: u64) {
        let mut writer = self.writer.lock();
        let _ = writeln!(writer, "# TYPE {} counter", name);
        let _ = writeln!(writer, "{} {}", name, value);
    }

    fn write_gauge(&self, name: &str, value: u64) {
        let mut writer = self.writer.lock();
        let _ = writeln!(writer, "# TYPE {} gauge", name);
        let _ = writeln!(writer, "{} {}", name, value);
    }

    fn metric_name(&self, suffix: &str) -> String {
        if self.prefix.is_empty() {
            suffix.to_string()
        } else {
            format!("{}_{}", self.prefix, suffix)
        }
    }
}

impl<W: Write + Send> MetricsExporter<CacheLatestMetricsSnapshot> for PrometheusTextExporter<W> {
    fn export(&self, snapshot: &CacheLatestMetricsSnapshot) {
        self.write_counter(&self.metric_name("begin_calls_total"), snapshot.begin_calls);
        self.write_counter(&self.metric_name("get_calls_total"), snapshot.get_calls);
        self.write_counter(&self.metric_name("get_hits_total"), snapshot.get_hits);
        self.write_counter(&self.metric_name("get_misses_total"), snapshot.get_misses);
        self.write_counter(
            &self.metric_name("advance_calls_total"),
            snapshot.advance_calls,
        );
        self.write_counter(
            &self.metric_name("cache_resets_total"),
            snapshot.cache_resets,
        );
        self.write_counter(&self.metric_name("take_calls_total"), snapshot.take_calls);
        self.write_counter(&self.metric_name("take_hits_total"), snapshot.take_hits);
        self.write_counter(&self.metric_name("swap_calls_total"), snapshot.swap_calls);
        self.write_counter(&self.metric_name("len_calls_total"), snapshot.len_calls);
        self.write_gauge(
            &self.metric_name("cache_populated"),
            u64::from(snapshot.cache_populated),
        );
    }
}
