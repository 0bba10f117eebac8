//! 0/1 knapsack value optimization.
//!
//! Classic dynamic programming over an `(n + 1) x (capacity + 1)` table.
//! Item weights are rounded **up** to whole capacity units before they
//! index the table, so a 0.3 kg item costs a full unit. Reported
//! `total_weight` still sums the true, unrounded weights.
//!
//! Time and space are O(n * capacity). [`KnapsackConfig::max_table_cells`]
//! caps the table so an oversized capacity fails fast instead of
//! exhausting memory.
//!
//! # References
//!
//! Kellerer, Pferschy & Pisinger (2004), "Knapsack Problems", §2.3

mod config;
mod optimizer;

pub use config::KnapsackConfig;
pub use optimizer::{KnapsackResult, ValueOptimizer};
