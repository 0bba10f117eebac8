//! Error types for u-warehouse.

use crate::model::Location;
use thiserror::Error;

/// Result type alias for u-warehouse operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the boundary of the engines.
///
/// All of these are caller-input errors. None are retried internally.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A start or destination location is not part of the initialized graph.
    #[error("Unknown location: {0}")]
    UnknownLocation(Location),

    /// Knapsack capacity below zero.
    #[error("Capacity must be non-negative, got {0}")]
    NegativeCapacity(i64),

    /// An item carries numbers the engine cannot rank or index.
    #[error("Invalid item '{id}': {reason}")]
    InvalidItem {
        /// Identifier of the offending item.
        id: String,
        /// What is wrong with it.
        reason: String,
    },

    /// The dynamic-programming table would exceed the configured budget.
    #[error("Knapsack table of {cells} cells exceeds the limit of {limit}")]
    TableTooLarge {
        /// Cells the table would need.
        cells: usize,
        /// Configured maximum.
        limit: usize,
    },

    /// Knapsack capacity does not fit an index on this platform.
    #[error("Capacity {0} is too large to index")]
    CapacityTooLarge(i64),

    /// A space unit whose occupancy exceeds its capacity.
    #[error("Space unit '{id}' is over-occupied: {occupied} of {capacity}")]
    OverOccupied {
        /// Identifier of the space unit.
        id: String,
        /// Claimed occupancy.
        occupied: u32,
        /// Capacity of the unit.
        capacity: u32,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    InvalidConfig(String),
}

impl Error {
    pub(crate) fn invalid_item(id: &str, reason: impl Into<String>) -> Self {
        Error::InvalidItem {
            id: id.to_string(),
            reason: reason.into(),
        }
    }
}
