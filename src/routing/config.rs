//! Routing configuration.

use crate::error::{Error, Result};
use crate::model::Location;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Weighted Manhattan metric over (aisle index, shelf, position).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DistanceMetric {
    pub aisle_weight: u64,
    pub shelf_weight: u64,
    pub position_weight: u64,
}

impl Default for DistanceMetric {
    fn default() -> Self {
        Self {
            aisle_weight: 10,
            shelf_weight: 5,
            position_weight: 2,
        }
    }
}

impl DistanceMetric {
    /// Distance between two locations. Symmetric, zero on equal inputs.
    /// Cannot overflow when [`max_distance`](Self::max_distance) is `Some`.
    ///
    /// ```
    /// use u_warehouse::model::Location;
    /// use u_warehouse::routing::DistanceMetric;
    ///
    /// let m = DistanceMetric::default();
    /// // |A-B| = 1 aisle, |1-2| = 1 shelf, |1-1| = 0 positions
    /// assert_eq!(m.distance(&Location::new('A', 1, 1), &Location::new('B', 2, 1)), 15);
    /// ```
    pub fn distance(&self, a: &Location, b: &Location) -> u64 {
        self.aisle_weight * a.aisle_index().abs_diff(b.aisle_index()) as u64
            + self.shelf_weight * a.shelf.abs_diff(b.shelf) as u64
            + self.position_weight * a.position.abs_diff(b.position) as u64
    }

    /// Largest distance any two locations can be apart, or `None` if that
    /// overflows `u64`. Aisle indices span 0..=26; shelves and positions
    /// span the whole `u32` range.
    pub fn max_distance(&self) -> Option<u64> {
        let aisle = self.aisle_weight.checked_mul(26)?;
        let shelf = self.shelf_weight.checked_mul(u32::MAX as u64)?;
        let position = self.position_weight.checked_mul(u32::MAX as u64)?;
        aisle.checked_add(shelf)?.checked_add(position)
    }
}

/// Configuration for [`RoutePlanner`](super::RoutePlanner).
///
/// ```
/// use u_warehouse::routing::{DistanceMetric, RouteConfig};
///
/// let config = RouteConfig::default().with_metric(DistanceMetric {
///     aisle_weight: 20,
///     shelf_weight: 5,
///     position_weight: 1,
/// });
/// assert_eq!(config.metric.aisle_weight, 20);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RouteConfig {
    pub metric: DistanceMetric,

    /// Evaluate the candidate legs of each nearest-neighbor step in
    /// parallel using rayon. Only effective with the `parallel` feature;
    /// results are identical either way.
    pub parallel: bool,
}

impl RouteConfig {
    pub fn with_metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = metric;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.metric.max_distance().is_none() {
            return Err(Error::InvalidConfig(format!(
                "distance metric {:?} can overflow u64",
                self.metric
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_metric_formula() {
        let m = DistanceMetric::default();
        let a = Location::new('A', 1, 1);
        assert_eq!(m.distance(&a, &a), 0);
        assert_eq!(m.distance(&a, &Location::new('C', 4, 6)), 20 + 15 + 10);
    }

    #[test]
    fn test_validate_default() {
        assert!(RouteConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_overflowing_weights() {
        for metric in [
            DistanceMetric {
                aisle_weight: u64::MAX,
                ..DistanceMetric::default()
            },
            DistanceMetric {
                shelf_weight: u64::MAX / 1000,
                ..DistanceMetric::default()
            },
            DistanceMetric {
                aisle_weight: 0,
                shelf_weight: u64::MAX / u32::MAX as u64,
                position_weight: u64::MAX / u32::MAX as u64,
            },
        ] {
            let config = RouteConfig::default().with_metric(metric);
            assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
        }
    }

    #[test]
    fn test_worst_case_distance_fits_when_valid() {
        let metric = DistanceMetric {
            aisle_weight: 1_000,
            shelf_weight: 1_000_000,
            position_weight: 1_000_000,
        };
        assert!(RouteConfig::default().with_metric(metric).validate().is_ok());
        let far = metric.distance(
            &Location::new('A', 0, 0),
            &Location::new('Z', u32::MAX, u32::MAX),
        );
        assert_eq!(metric.max_distance(), Some(26_000 + 2 * 1_000_000 * u32::MAX as u64));
        assert!(far <= metric.max_distance().unwrap());
    }
}
