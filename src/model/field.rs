//! Field selection and key normalization.

use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Selects which attribute of an [`Item`](super::Item) an engine reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ItemField {
    Id,
    Name,
    Category,
    Sku,
    Quantity,
    Weight,
    Value,
}

impl ItemField {
    /// Every selectable field, in declaration order.
    pub const ALL: [ItemField; 7] = [
        ItemField::Id,
        ItemField::Name,
        ItemField::Category,
        ItemField::Sku,
        ItemField::Quantity,
        ItemField::Weight,
        ItemField::Value,
    ];

    /// Lowercase field name used in operation labels.
    pub fn name(&self) -> &'static str {
        match self {
            ItemField::Id => "id",
            ItemField::Name => "name",
            ItemField::Category => "category",
            ItemField::Sku => "sku",
            ItemField::Quantity => "quantity",
            ItemField::Weight => "weight",
            ItemField::Value => "value",
        }
    }

    /// Whether the field holds a string.
    pub fn is_text(&self) -> bool {
        matches!(
            self,
            ItemField::Id | ItemField::Name | ItemField::Category | ItemField::Sku
        )
    }
}

impl fmt::Display for ItemField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A borrowed field value as stored on the item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
}

impl FieldValue<'_> {
    /// Normalized ordering key: text is lowercased, numbers are kept raw.
    pub fn sort_key(&self) -> SortKey {
        match self {
            FieldValue::Text(s) => SortKey::Text(s.to_lowercase()),
            FieldValue::Number(n) => SortKey::Number(*n),
        }
    }

    /// Lowercased textual form used by substring and prefix matching.
    pub fn search_text(&self) -> String {
        match self {
            FieldValue::Text(s) => s.to_lowercase(),
            FieldValue::Number(n) => n.to_string(),
        }
    }
}

/// Owned, normalized comparison key.
///
/// Numbers order by [`f64::total_cmp`]; text orders lexicographically on
/// the lowercased string. A number sorts before any text, which only
/// matters for keys drawn from different fields.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SortKey {
    Number(f64),
    Text(String),
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            (SortKey::Number(_), SortKey::Text(_)) => Ordering::Less,
            (SortKey::Text(_), SortKey::Number(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SortKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortKey {}
