//! Explicit measurement contexts for benchmarking analyses.
//!
//! Benchmark harnesses like to accumulate per-stage wall-clock totals
//! (reading, transformation, analysis) across repeated runs. Doing that
//! through process-global tables leaks state between test cases, so here the
//! accumulator is a plain value the caller owns and passes around:
//!
//! ```
//! use satfm_rs::measure::Measurements;
//!
//! let mut measurements = Measurements::new();
//! let answer = measurements.time("analysis", || 21 * 2);
//! assert_eq!(answer, 42);
//! assert!(measurements.total("analysis").is_some());
//! ```

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Measures one span of wall-clock time.
#[derive(Debug)]
pub struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self { start: Instant::now() }
    }

    /// Time elapsed so far, without stopping.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Consumes the stopwatch and returns the elapsed time.
    pub fn stop(self) -> Duration {
        self.start.elapsed()
    }
}

/// Caller-owned accumulator of named time spans.
///
/// Repeated recordings under the same name add up, which is what repeated
/// benchmark runs want. Dropping the value discards everything; nothing is
/// shared between instances.
#[derive(Debug, Default, Clone)]
pub struct Measurements {
    totals: BTreeMap<String, Duration>,
}

impl Measurements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `elapsed` to the running total for `name`.
    pub fn record(&mut self, name: impl Into<String>, elapsed: Duration) {
        *self.totals.entry(name.into()).or_default() += elapsed;
    }

    /// Runs `f`, recording its wall-clock time under `name`.
    pub fn time<T>(&mut self, name: impl Into<String>, f: impl FnOnce() -> T) -> T {
        let stopwatch = Stopwatch::start();
        let result = f();
        self.record(name, stopwatch.stop());
        result
    }

    /// The accumulated total for `name`, if anything was recorded.
    pub fn total(&self, name: &str) -> Option<Duration> {
        self.totals.get(name).copied()
    }

    /// All stage totals, in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Duration)> {
        self.totals.iter().map(|(name, &total)| (name.as_str(), total))
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_accumulates() {
        let mut measurements = Measurements::new();
        measurements.record("stage", Duration::from_millis(10));
        measurements.record("stage", Duration::from_millis(5));
        assert_eq!(measurements.total("stage"), Some(Duration::from_millis(15)));
    }

    #[test]
    fn test_unknown_stage_is_none() {
        let measurements = Measurements::new();
        assert_eq!(measurements.total("nope"), None);
        assert!(measurements.is_empty());
    }

    #[test]
    fn test_time_returns_closure_result() {
        let mut measurements = Measurements::new();
        let value = measurements.time("compute", || "done");
        assert_eq!(value, "done");
        assert!(measurements.total("compute").unwrap() >= Duration::ZERO);
    }

    #[test]
    fn test_instances_are_independent() {
        let mut first = Measurements::new();
        first.record("stage", Duration::from_millis(1));
        let second = Measurements::new();
        assert_eq!(second.total("stage"), None);
    }

    #[test]
    fn test_iter_is_name_ordered() {
        let mut measurements = Measurements::new();
        measurements.record("b", Duration::from_millis(1));
        measurements.record("a", Duration::from_millis(1));
        let names: Vec<&str> = measurements.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
