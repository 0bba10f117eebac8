//! Inventory item record.

use super::field::{FieldValue, ItemField};
use super::location::Location;
use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An inventory record.
///
/// # Examples
///
/// ```
/// use u_warehouse::model::{Item, ItemField, FieldValue, Location};
///
/// let item = Item::new("ITM-001", "Gaming Mouse")
///     .with_category("Electronics")
///     .with_quantity(45)
///     .with_weight(0.3)
///     .with_value(3599.55)
///     .with_location(Location::new('B', 2, 1));
///
/// assert_eq!(item.field(ItemField::Quantity), FieldValue::Number(45.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Item {
    /// Identifier. Identity for deduplication purposes.
    pub id: String,
    pub name: String,
    pub category: String,
    pub sku: String,
    /// Units on hand. Also the amount of space the item occupies.
    pub quantity: u32,
    pub weight: f64,
    /// Monetary value.
    pub value: f64,
    pub location: Location,
}

impl Item {
    /// Creates an item with empty category/SKU, zero numbers, and the
    /// default location.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: String::new(),
            sku: String::new(),
            quantity: 0,
            weight: 0.0,
            value: 0.0,
            location: Location::default(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = sku.into();
        self
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    /// Reads the selected field.
    pub fn field(&self, field: ItemField) -> FieldValue<'_> {
        match field {
            ItemField::Id => FieldValue::Text(&self.id),
            ItemField::Name => FieldValue::Text(&self.name),
            ItemField::Category => FieldValue::Text(&self.category),
            ItemField::Sku => FieldValue::Text(&self.sku),
            ItemField::Quantity => FieldValue::Number(self.quantity as f64),
            ItemField::Weight => FieldValue::Number(self.weight),
            ItemField::Value => FieldValue::Number(self.value),
        }
    }

    /// Rejects weights and values that are negative or not finite.
    pub(crate) fn check_numbers(&self) -> Result<()> {
        if !self.weight.is_finite() || self.weight < 0.0 {
            return Err(Error::invalid_item(
                &self.id,
                format!("weight must be finite and non-negative, got {}", self.weight),
            ));
        }
        if !self.value.is_finite() || self.value < 0.0 {
            return Err(Error::invalid_item(
                &self.id,
                format!("value must be finite and non-negative, got {}", self.value),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_access() {
        let item = Item::new("I1", "Widget")
            .with_category("Tools")
            .with_sku("W-100")
            .with_quantity(8)
            .with_weight(1.5)
            .with_value(20.0);

        assert_eq!(item.field(ItemField::Id), FieldValue::Text("I1"));
        assert_eq!(item.field(ItemField::Name), FieldValue::Text("Widget"));
        assert_eq!(item.field(ItemField::Category), FieldValue::Text("Tools"));
        assert_eq!(item.field(ItemField::Sku), FieldValue::Text("W-100"));
        assert_eq!(item.field(ItemField::Quantity), FieldValue::Number(8.0));
        assert_eq!(item.field(ItemField::Weight), FieldValue::Number(1.5));
        assert_eq!(item.field(ItemField::Value), FieldValue::Number(20.0));
    }

    #[test]
    fn test_check_numbers() {
        assert!(Item::new("ok", "ok").with_weight(1.0).check_numbers().is_ok());
        assert!(Item::new("w", "w").with_weight(-1.0).check_numbers().is_err());
        assert!(Item::new("n", "n").with_weight(f64::NAN).check_numbers().is_err());
        assert!(Item::new("v", "v")
            .with_value(f64::INFINITY)
            .check_numbers()
            .is_err());
    }
}
