//! Capacity-bounded storage slots.

#[cfg(feature = "serde")]
use crate::error::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A storage slot with a fixed capacity.
///
/// `available == capacity - occupied` holds at all times; the fields are
/// private so only [`SpaceUnit::place`] can move capacity from available
/// to occupied.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "SpaceUnitRecord", into = "SpaceUnitRecord")
)]
pub struct SpaceUnit {
    id: String,
    capacity: u32,
    occupied: u32,
    available: u32,
    assigned_item: Option<String>,
}

impl SpaceUnit {
    /// Creates an empty space.
    pub fn new(id: impl Into<String>, capacity: u32) -> Self {
        Self {
            id: id.into(),
            capacity,
            occupied: 0,
            available: capacity,
            assigned_item: None,
        }
    }

    /// Marks part of the space as already occupied (clamped to capacity).
    pub fn with_occupied(mut self, occupied: u32) -> Self {
        self.occupied = occupied.min(self.capacity);
        self.available = self.capacity - self.occupied;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn occupied(&self) -> u32 {
        self.occupied
    }

    pub fn available(&self) -> u32 {
        self.available
    }

    /// Identifier of the item most recently placed here.
    pub fn assigned_item(&self) -> Option<&str> {
        self.assigned_item.as_deref()
    }

    /// Places `quantity` units of `item_id` into this space.
    ///
    /// Returns `false` and leaves the space untouched when the quantity
    /// does not fit.
    pub fn place(&mut self, item_id: &str, quantity: u32) -> bool {
        if quantity > self.available {
            return false;
        }
        self.occupied += quantity;
        self.available -= quantity;
        self.assigned_item = Some(item_id.to_string());
        true
    }
}

/// Wire form of [`SpaceUnit`]. `available` is written out but recomputed
/// from `capacity - occupied` on the way back in.
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct SpaceUnitRecord {
    id: String,
    capacity: u32,
    occupied: u32,
    #[serde(default, skip_deserializing)]
    available: u32,
    #[serde(default)]
    assigned_item: Option<String>,
}

#[cfg(feature = "serde")]
impl TryFrom<SpaceUnitRecord> for SpaceUnit {
    type Error = Error;

    fn try_from(record: SpaceUnitRecord) -> Result<Self, Error> {
        if record.occupied > record.capacity {
            return Err(Error::OverOccupied {
                id: record.id,
                occupied: record.occupied,
                capacity: record.capacity,
            });
        }
        Ok(Self {
            available: record.capacity - record.occupied,
            id: record.id,
            capacity: record.capacity,
            occupied: record.occupied,
            assigned_item: record.assigned_item,
        })
    }
}

#[cfg(feature = "serde")]
impl From<SpaceUnit> for SpaceUnitRecord {
    fn from(space: SpaceUnit) -> Self {
        Self {
            id: space.id,
            capacity: space.capacity,
            occupied: space.occupied,
            available: space.available,
            assigned_item: space.assigned_item,
        }
    }
}
