//! Immutable performance report.

use std::fmt;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The algorithm that produced a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Algorithm {
    MergeSort,
    QuickSort,
    /// Sort followed by a linear substring scan. Reported as
    /// "Binary Search" for compatibility with existing dashboards.
    SortedScan,
    PrefixHash,
    BestFit,
    Knapsack,
    Dijkstra,
    NearestNeighbor,
}

impl Algorithm {
    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::MergeSort => "Merge Sort",
            Algorithm::QuickSort => "Quick Sort",
            Algorithm::SortedScan => "Binary Search",
            Algorithm::PrefixHash => "Hash Search",
            Algorithm::BestFit => "Best Fit Allocation",
            Algorithm::Knapsack => "Dynamic Programming Knapsack",
            Algorithm::Dijkstra => "Dijkstra",
            Algorithm::NearestNeighbor => "Nearest Neighbor Route",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What one engine call cost.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PerformanceReport {
    pub algorithm: Algorithm,
    /// Human-readable label, e.g. `"sort by quantity"`.
    pub operation: String,
    pub input_size: usize,
    pub elapsed: Duration,
    pub comparisons: Option<u64>,
    pub swaps: Option<u64>,
}

impl PerformanceReport {
    /// Elapsed wall time in fractional milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

impl fmt::Display for PerformanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] n={} in {:.3}ms",
            self.algorithm,
            self.operation,
            self.input_size,
            self.elapsed_ms()
        )?;
        if let Some(c) = self.comparisons {
            write!(f, ", {c} comparisons")?;
        }
        if let Some(s) = self.swaps {
            write!(f, ", {s} swaps")?;
        }
        Ok(())
    }
}
