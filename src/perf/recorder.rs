//! Timing and operation counting.

use super::report::{Algorithm, PerformanceReport};
use std::time::Instant;

/// Comparison and swap tallies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpCounts {
    pub comparisons: u64,
    pub swaps: u64,
}

impl OpCounts {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn compare(&mut self) {
        self.comparisons += 1;
    }

    #[inline]
    pub fn swap(&mut self) {
        self.swaps += 1;
    }

    /// Adds another tally into this one.
    pub fn absorb(&mut self, other: OpCounts) {
        self.comparisons += other.comparisons;
        self.swaps += other.swaps;
    }
}

/// Measures one engine call.
///
/// ```
/// use u_warehouse::perf::{Algorithm, OpCounts, PerformanceRecorder};
///
/// let recorder = PerformanceRecorder::start(Algorithm::MergeSort, "sort by name", 4);
/// let mut counts = OpCounts::new();
/// counts.compare();
/// let report = recorder.finish_with_counts(counts);
/// assert_eq!(report.comparisons, Some(1));
/// ```
#[derive(Debug)]
pub struct PerformanceRecorder {
    algorithm: Algorithm,
    operation: String,
    input_size: usize,
    started: Instant,
}

impl PerformanceRecorder {
    /// Starts the clock.
    pub fn start(algorithm: Algorithm, operation: impl Into<String>, input_size: usize) -> Self {
        Self {
            algorithm,
            operation: operation.into(),
            input_size,
            started: Instant::now(),
        }
    }

    /// Stops the clock and reports comparisons and swaps.
    pub fn finish_with_counts(self, counts: OpCounts) -> PerformanceReport {
        self.build(Some(counts.comparisons), Some(counts.swaps))
    }

    /// Stops the clock and reports comparisons only.
    pub fn finish_with_comparisons(self, comparisons: u64) -> PerformanceReport {
        self.build(Some(comparisons), None)
    }

    /// Stops the clock without operation counts.
    pub fn finish(self) -> PerformanceReport {
        self.build(None, None)
    }

    fn build(self, comparisons: Option<u64>, swaps: Option<u64>) -> PerformanceReport {
        let report = PerformanceReport {
            algorithm: self.algorithm,
            operation: self.operation,
            input_size: self.input_size,
            elapsed: self.started.elapsed(),
            comparisons,
            swaps,
        };
        log::debug!("{report}");
        report
    }
}
