//! Performance reporting.
//!
//! Every engine call produces a [`PerformanceReport`]: which algorithm ran,
//! on what, over how many inputs, how long it took, and (where the
//! algorithm counts them) how many comparisons and swaps it performed.
//!
//! Counters are never held as engine state. Recursive algorithms thread an
//! [`OpCounts`] accumulator through `&mut`, so concurrent calls on the same
//! engine cannot interfere.

mod recorder;
mod report;

pub use recorder::{OpCounts, PerformanceRecorder};
pub use report::{Algorithm, PerformanceReport};
