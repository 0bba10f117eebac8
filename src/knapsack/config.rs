//! Knapsack configuration.

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for [`ValueOptimizer`](super::ValueOptimizer).
///
/// ```
/// use u_warehouse::knapsack::KnapsackConfig;
///
/// let config = KnapsackConfig::default().with_max_table_cells(1_000_000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KnapsackConfig {
    /// Upper bound on `(items + 1) * (capacity + 1)`.
    pub max_table_cells: usize,
}

impl Default for KnapsackConfig {
    fn default() -> Self {
        Self {
            max_table_cells: 50_000_000,
        }
    }
}

impl KnapsackConfig {
    pub fn with_max_table_cells(mut self, cells: usize) -> Self {
        self.max_table_cells = cells;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_table_cells == 0 {
            return Err(Error::InvalidConfig(
                "max_table_cells must be positive".into(),
            ));
        }
        Ok(())
    }
}
