//! Search configuration.

use crate::error::{Error, Result};
use crate::model::ItemField;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which search to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SearchStrategy {
    /// Sort by the field, then substring-scan it.
    SortedScan(ItemField),
    /// Exact lookup in the prefix map over the configured fields.
    PrefixHash,
}

/// Configuration for [`SearchIndex`](super::SearchIndex).
///
/// ```
/// use u_warehouse::model::ItemField;
/// use u_warehouse::search::SearchConfig;
///
/// let config = SearchConfig::default().with_prefix_fields(vec![ItemField::Name]);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchConfig {
    /// Fields whose prefixes are indexed for [`SearchStrategy::PrefixHash`].
    pub prefix_fields: Vec<ItemField>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            prefix_fields: vec![ItemField::Name, ItemField::Category, ItemField::Sku],
        }
    }
}

impl SearchConfig {
    pub fn with_prefix_fields(mut self, fields: Vec<ItemField>) -> Self {
        self.prefix_fields = fields;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.prefix_fields.is_empty() {
            return Err(Error::InvalidConfig(
                "prefix_fields must name at least one field".into(),
            ));
        }
        Ok(())
    }
}
