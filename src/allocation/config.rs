//! Allocation configuration.

use crate::error::Result;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How zero-weight items are ranked by value density.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ZeroWeightPolicy {
    /// Positive value over zero weight ranks first (infinite density);
    /// zero value over zero weight ranks as density 0.
    #[default]
    MaxDensity,
    /// Fail with [`Error::InvalidItem`](crate::Error::InvalidItem).
    Reject,
}

/// Configuration for [`SpaceAllocator`](super::SpaceAllocator).
///
/// ```
/// use u_warehouse::allocation::{AllocationConfig, ZeroWeightPolicy};
///
/// let config = AllocationConfig::default().with_zero_weight(ZeroWeightPolicy::Reject);
/// assert_eq!(config.zero_weight, ZeroWeightPolicy::Reject);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AllocationConfig {
    pub zero_weight: ZeroWeightPolicy,
}

impl AllocationConfig {
    pub fn with_zero_weight(mut self, policy: ZeroWeightPolicy) -> Self {
        self.zero_weight = policy;
        self
    }

    /// Validates the configuration. Both zero-weight policies are total.
    pub fn validate(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        assert_eq!(
            AllocationConfig::default().zero_weight,
            ZeroWeightPolicy::MaxDensity
        );
    }

    #[test]
    fn test_validate_ok() {
        for policy in [ZeroWeightPolicy::MaxDensity, ZeroWeightPolicy::Reject] {
            let config = AllocationConfig::default().with_zero_weight(policy);
            assert!(config.validate().is_ok());
        }
    }
}
