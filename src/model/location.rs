//! Warehouse coordinates.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A storage coordinate: aisle letter, shelf, and position on the shelf.
///
/// Equality is structural, so a `Location` doubles as a graph-node key in
/// the route planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Location {
    /// Aisle letter (`'A'`, `'B'`, ...).
    pub aisle: char,
    /// Shelf number within the aisle.
    pub shelf: u32,
    /// Position on the shelf.
    pub position: u32,
}

impl Location {
    /// Creates a location.
    pub fn new(aisle: char, shelf: u32, position: u32) -> Self {
        Self {
            aisle,
            shelf,
            position,
        }
    }

    /// 1-based alphabetic index of the aisle letter (`A`/`a` = 1).
    ///
    /// Characters outside `A..=Z` map to 0.
    pub fn aisle_index(&self) -> u32 {
        let upper = self.aisle.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            upper as u32 - 'A' as u32 + 1
        } else {
            0
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::new('A', 1, 1)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.aisle, self.shelf, self.position)
    }
}
