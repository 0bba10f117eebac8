//! Sort configuration.

use crate::error::Result;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which sorting algorithm to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SortStrategy {
    /// Stable top-down merge sort.
    #[default]
    Merge,
    /// In-place Lomuto quicksort.
    Quick,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SortOrder {
    #[default]
    Ascending,
    /// Reverses the key comparison. Merge sort stays stable.
    Descending,
}

impl SortOrder {
    pub fn name(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "ascending",
            SortOrder::Descending => "descending",
        }
    }
}

/// Configuration for [`SortEngine`](super::SortEngine).
///
/// ```
/// use u_warehouse::sort::{SortConfig, SortOrder, SortStrategy};
///
/// let config = SortConfig::default()
///     .with_strategy(SortStrategy::Quick)
///     .with_order(SortOrder::Descending);
/// assert_eq!(config.strategy, SortStrategy::Quick);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SortConfig {
    pub strategy: SortStrategy,
    pub order: SortOrder,
}

impl SortConfig {
    pub fn with_strategy(mut self, strategy: SortStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    /// Validates the configuration. Every strategy and order pairs up.
    pub fn validate(&self) -> Result<()> {
        Ok(())
    }
}
