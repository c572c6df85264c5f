//! Wall-clock timing of traversal calls.
//!
//! [`measure`] wraps a single call. [`Bench`] collects named samples across
//! repeated calls and summarizes them into a [`TimingReport`]. Timing never
//! changes what the wrapped closure returns.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use serde_json::json;

/// Run `f` and return its value with the elapsed wall-clock time.
pub fn measure<R>(f: impl FnOnce() -> R) -> (R, Duration) {
    let started = Instant::now();
    let value = f();
    (value, started.elapsed())
}

/// Aggregated timing report across instrumented operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingReport {
    /// Per-operation timing statistics, ordered by name.
    pub operations: Vec<OpTiming>,
}

/// Timing statistics for a single named operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpTiming {
    pub name: String,
    pub min: Duration,
    /// Middle sample; the mean of the two middle samples for an even count.
    pub median: Duration,
    pub p95: Duration,
    pub p99: Duration,
    pub count: usize,
}

#[derive(Debug, Clone)]
struct Sample {
    name: String,
    elapsed: Duration,
}

/// Sample collector for repeated measurements.
#[derive(Debug, Clone, Default)]
pub struct Bench {
    samples: Vec<Sample>,
}

impl Bench {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute `f` while recording its duration under `name`.
    pub fn timed<R>(&mut self, name: &str, f: impl FnOnce() -> R) -> (R, Duration) {
        let (value, elapsed) = measure(f);
        self.record(name, elapsed);
        (value, elapsed)
    }

    /// Record an externally measured sample.
    pub fn record(&mut self, name: &str, elapsed: Duration) {
        self.samples.push(Sample {
            name: name.to_string(),
            elapsed,
        });
    }

    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Summarize all recorded samples, grouped by name.
    #[must_use]
    pub fn report(&self) -> TimingReport {
        let mut grouped: BTreeMap<&str, Vec<Duration>> = BTreeMap::new();
        for sample in &self.samples {
            grouped
                .entry(sample.name.as_str())
                .or_default()
                .push(sample.elapsed);
        }

        let operations = grouped
            .into_iter()
            .map(|(name, mut values)| {
                values.sort_unstable();
                OpTiming {
                    name: name.to_string(),
                    min: values.first().copied().unwrap_or_default(),
                    median: median(&values),
                    p95: percentile(&values, 95),
                    p99: percentile(&values, 99),
                    count: values.len(),
                }
            })
            .collect();

        TimingReport { operations }
    }
}

impl TimingReport {
    /// Returns true when no timing samples were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Look up one operation by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&OpTiming> {
        self.operations.iter().find(|op| op.name == name)
    }

    /// Render the timing report as JSON.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        let operations = self
            .operations
            .iter()
            .map(|op| {
                json!({
                    "name": op.name,
                    "count": op.count,
                    "min_us": op.min.as_micros(),
                    "median_us": op.median.as_micros(),
                    "p95_us": op.p95.as_micros(),
                    "p99_us": op.p99.as_micros(),
                })
            })
            .collect::<Vec<_>>();

        json!({ "operations": operations })
    }

    /// Render one row per variant, with the name column sized to the
    /// longest label.
    #[must_use]
    pub fn display_table(&self) -> String {
        if self.operations.is_empty() {
            return "No timing samples recorded.".to_string();
        }

        let width = self
            .operations
            .iter()
            .map(|op| op.name.len())
            .chain(std::iter::once("variant".len()))
            .max()
            .unwrap_or_default();
        let header = format!(
            "{:<width$}  {:>4}  {:>10}  {:>10}  {:>10}  {:>10}",
            "variant", "runs", "min", "median", "p95", "p99"
        );
        let mut lines = vec![header.clone(), "=".repeat(header.len())];
        lines.extend(self.operations.iter().map(|op| {
            format!(
                "{:<width$}  {:>4}  {:>10}  {:>10}  {:>10}  {:>10}",
                op.name,
                op.count,
                format_duration(op.min),
                format_duration(op.median),
                format_duration(op.p95),
                format_duration(op.p99),
            )
        }));

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

/// Median of an ascending slice. Even-length slices average the two middle
/// samples.
#[must_use]
pub fn median(sorted: &[Duration]) -> Duration {
    let mid = sorted.len() / 2;
    match sorted.len() {
        0 => Duration::ZERO,
        len if len % 2 == 1 => sorted[mid],
        _ => (sorted[mid - 1] + sorted[mid]) / 2,
    }
}

/// Nearest-rank percentile of an ascending slice. `pct` is clamped to 100.
#[must_use]
pub fn percentile(sorted: &[Duration], pct: usize) -> Duration {
    let Some(last) = sorted.len().checked_sub(1) else {
        return Duration::ZERO;
    };
    let rank = pct.min(100).saturating_mul(sorted.len()).div_ceil(100);
    sorted[rank.saturating_sub(1).min(last)]
}

/// Human-readable duration: whole microseconds below 1ms, otherwise
/// milliseconds or seconds to three decimals.
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    match duration.as_micros() {
        us if us < 1_000 => format!("{us}µs"),
        us if us < 1_000_000 => format!("{:.3}ms", duration.as_secs_f64() * 1_000.0),
        _ => format!("{:.3}s", duration.as_secs_f64()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_returns_closure_value() {
        let (value, elapsed) = measure(|| 7_u8);
        assert_eq!(value, 7);
        assert!(elapsed < Duration::from_secs(5));
    }

    #[test]
    fn timed_records_a_sample() {
        let mut bench = Bench::new();
        let (value, _) = bench.timed("enabled", || 42_u8);
        assert_eq!(value, 42);
        assert_eq!(bench.sample_count(), 1);

        let report = bench.report();
        assert_eq!(report.operations.len(), 1);
        assert_eq!(report.operations[0].name, "enabled");
        assert_eq!(report.operations[0].count, 1);
    }

    #[test]
    fn report_groups_and_sorts_operations() {
        let mut bench = Bench::new();
        bench.record("matrix-ring", Duration::from_micros(3_000));
        bench.record("matrix-ring", Duration::from_micros(1_000));
        bench.record("matrix-ring", Duration::from_micros(2_000));
        bench.record("list-queue", Duration::from_micros(5_000));

        let report = bench.report();
        assert_eq!(report.operations.len(), 2);
        assert_eq!(report.operations[0].name, "list-queue");

        let ring = report.get("matrix-ring").expect("ring timing");
        assert_eq!(ring.count, 3);
        assert_eq!(ring.min, Duration::from_micros(1_000));
        assert_eq!(ring.median, Duration::from_micros(2_000));
        assert_eq!(ring.p99, Duration::from_micros(3_000));
    }

    #[test]
    fn empty_report_renders_placeholder() {
        let report = Bench::new().report();
        assert!(report.is_empty());
        assert_eq!(report.display_table(), "No timing samples recorded.");
    }

    #[test]
    fn json_reports_microseconds() {
        let mut bench = Bench::new();
        bench.record("matrix-queue", Duration::from_micros(250));
        let json = bench.report().to_json();
        assert_eq!(json["operations"][0]["name"], "matrix-queue");
        assert_eq!(json["operations"][0]["median_us"], 250);
    }

    #[test]
    fn percentile_of_empty_is_zero() {
        assert_eq!(percentile(&[], 50), Duration::ZERO);
    }

    #[test]
    fn format_duration_picks_unit() {
        assert_eq!(format_duration(Duration::from_micros(12)), "12µs");
        assert_eq!(format_duration(Duration::from_micros(1_500)), "1.500ms");
        assert_eq!(format_duration(Duration::from_millis(2_050)), "2.050s");
    }

    #[test]
    fn table_lists_each_operation() {
        let mut bench = Bench::new();
        bench.record("matrix-queue", Duration::from_micros(10));
        bench.record("list-queue", Duration::from_micros(20));
        let table = bench.report().display_table();
        assert!(table.contains("matrix-queue"));
        assert!(table.contains("list-queue"));
        assert_eq!(table.lines().count(), 4);
    }

    #[test]
    fn table_columns_line_up() {
        let mut bench = Bench::new();
        bench.record("matrix-queue", Duration::from_micros(10));
        bench.record("matrix-ring", Duration::from_micros(1_500));
        let table = bench.report().display_table();
        let lines: Vec<_> = table.lines().collect();
        assert!(lines[0].starts_with("variant       runs"));
        assert!(lines[2].starts_with("matrix-queue     1"));
        assert!(lines[3].starts_with("matrix-ring      1"));
        let widths: Vec<_> = lines.iter().map(|l| l.chars().count()).collect();
        assert!(widths.iter().all(|&w| w == widths[0]), "{table}");
    }

    #[test]
    fn median_averages_the_middle_pair() {
        let two = [Duration::from_micros(10), Duration::from_micros(30)];
        assert_eq!(median(&two), Duration::from_micros(20));

        let four = [10, 20, 40, 90].map(Duration::from_micros);
        assert_eq!(median(&four), Duration::from_micros(30));

        let three = [10, 20, 90].map(Duration::from_micros);
        assert_eq!(median(&three), Duration::from_micros(20));
        assert_eq!(median(&[]), Duration::ZERO);
    }

    #[test]
    fn even_repeat_reports_true_median() {
        let mut bench = Bench::new();
        bench.record("matrix-queue", Duration::from_micros(100));
        bench.record("matrix-queue", Duration::from_micros(300));
        let report = bench.report();
        let op = report.get("matrix-queue").expect("timing");
        assert_eq!(op.min, Duration::from_micros(100));
        assert_eq!(op.median, Duration::from_micros(200));
    }

    #[test]
    fn percentile_uses_nearest_rank() {
        let samples = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10].map(Duration::from_micros);
        assert_eq!(percentile(&samples, 95), Duration::from_micros(10));
        assert_eq!(percentile(&samples, 50), Duration::from_micros(5));
        assert_eq!(percentile(&samples, 250), Duration::from_micros(10));
    }
}
