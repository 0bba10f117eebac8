//! Prefix map.

use crate::model::{Item, ItemField};
use std::collections::{HashMap, HashSet};

/// Map from every lowercased prefix of the indexed field values to the
/// items (by position) whose value starts with it.
///
/// Each bucket lists an item at most once, keyed on [`Item::id`], in the
/// order items were first seen.
#[derive(Debug, Clone, Default)]
pub struct PrefixIndex {
    buckets: HashMap<String, Vec<usize>>,
}

impl PrefixIndex {
    /// Indexes `fields` of every item. O(total field-value length) prefixes.
    pub fn build(items: &[Item], fields: &[ItemField]) -> Self {
        // Bucket plus the ids already in it; a prefix key is allocated once.
        let mut building: HashMap<String, (Vec<usize>, HashSet<&str>)> = HashMap::new();

        for (idx, item) in items.iter().enumerate() {
            for &field in fields {
                let text = item.field(field).search_text();
                for end in text.char_indices().map(|(i, c)| i + c.len_utf8()) {
                    let prefix = &text[..end];
                    if !building.contains_key(prefix) {
                        building.insert(prefix.to_string(), Default::default());
                    }
                    if let Some((bucket, ids)) = building.get_mut(prefix) {
                        if ids.insert(item.id.as_str()) {
                            bucket.push(idx);
                        }
                    }
                }
            }
        }

        let buckets = building
            .into_iter()
            .map(|(prefix, (bucket, _))| (prefix, bucket))
            .collect();
        Self { buckets }
    }

    /// Item positions whose indexed values start with `term`
    /// (case-insensitive). Empty for anything else, including `""`.
    pub fn get(&self, term: &str) -> &[usize] {
        self.buckets
            .get(&term.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of distinct prefixes stored.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixes_only() {
        let items = vec![Item::new("1", "GameMouse")];
        let index = PrefixIndex::build(&items, &[ItemField::Name]);

        assert_eq!(index.get("g"), &[0]);
        assert_eq!(index.get("GAME"), &[0]);
        assert_eq!(index.get("gamemouse"), &[0]);
        assert!(index.get("mouse").is_empty());
        assert!(index.get("gamemouses").is_empty());
        assert!(index.get("").is_empty());
        assert_eq!(index.len(), "gamemouse".len());
    }

    #[test]
    fn test_dedup_across_fields() {
        // "ca" is a prefix of both name and category; listed once.
        let items = vec![Item::new("1", "Cable").with_category("Cables")];
        let index = PrefixIndex::build(&items, &[ItemField::Name, ItemField::Category]);
        assert_eq!(index.get("ca"), &[0]);
        assert_eq!(index.get("cables"), &[0]);
    }

    #[test]
    fn test_dedup_by_identity() {
        let items = vec![Item::new("same", "Bolt"), Item::new("same", "Bolt")];
        let index = PrefixIndex::build(&items, &[ItemField::Name]);
        assert_eq!(index.get("bolt"), &[0]);
    }

    #[test]
    fn test_multibyte_prefixes() {
        let items = vec![Item::new("1", "Émail")];
        let index = PrefixIndex::build(&items, &[ItemField::Name]);
        assert_eq!(index.get("é"), &[0]);
        assert_eq!(index.get("ÉM"), &[0]);
    }

    #[test]
    fn test_shared_prefixes_across_items() {
        let items = vec![
            Item::new("1", "Box"),
            Item::new("2", "Bolt"),
            Item::new("1", "Bin"),
        ];
        let index = PrefixIndex::build(&items, &[ItemField::Name]);
        // "b" is shared by all three; id "1" is listed once.
        assert_eq!(index.get("b"), &[0, 1]);
        assert_eq!(index.get("bo"), &[0, 1]);
        assert_eq!(index.get("bi"), &[2]);
        // b, bo, box, bol, bolt, bi, bin
        assert_eq!(index.len(), 7);
    }

    #[test]
    fn test_bucket_order_follows_items() {
        let items = vec![
            Item::new("1", "Screw"),
            Item::new("2", "Scanner"),
            Item::new("3", "Bolt"),
        ];
        let index = PrefixIndex::build(&items, &[ItemField::Name]);
        assert_eq!(index.get("sc"), &[0, 1]);
        assert_eq!(index.get("scr"), &[0]);
    }
}
