//! Dense distance graph.

use super::config::DistanceMetric;
use crate::model::Location;
use std::collections::HashMap;

/// Complete graph over a deduplicated location set.
///
/// Node indices follow first appearance in the input. The matrix is
/// symmetric, non-negative, and zero on the diagonal.
#[derive(Debug, Clone)]
pub struct DistanceGraph {
    locations: Vec<Location>,
    index: HashMap<Location, usize>,
    matrix: Vec<u64>,
}

impl DistanceGraph {
    /// Builds the full matrix. O(V²).
    pub fn build(locations: &[Location], metric: &DistanceMetric) -> Self {
        let mut unique = Vec::with_capacity(locations.len());
        let mut index = HashMap::with_capacity(locations.len());
        for &loc in locations {
            if !index.contains_key(&loc) {
                index.insert(loc, unique.len());
                unique.push(loc);
            }
        }

        let n = unique.len();
        let mut matrix = vec![0u64; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = metric.distance(&unique[i], &unique[j]);
                matrix[i * n + j] = d;
                matrix[j * n + i] = d;
            }
        }

        Self {
            locations: unique,
            index,
            matrix,
        }
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Node index of a location, if present.
    pub fn index_of(&self, location: &Location) -> Option<usize> {
        self.index.get(location).copied()
    }

    /// Location of a node.
    ///
    /// # Panics
    ///
    /// Panics if `node >= self.len()`.
    pub fn location(&self, node: usize) -> Location {
        self.locations[node]
    }

    /// All nodes' locations, by index.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Edge weight between two nodes.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[inline]
    pub fn distance(&self, from: usize, to: usize) -> u64 {
        self.matrix[from * self.locations.len() + to]
    }
}
