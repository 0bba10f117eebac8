//! Sort engine.

use super::config::{SortConfig, SortOrder, SortStrategy};
use super::merge::merge_sort_by;
use super::quick::quick_sort_by;
use crate::model::{Item, ItemField};
use crate::perf::{Algorithm, OpCounts, PerformanceRecorder, PerformanceReport};

/// Sorted view of the input plus what it cost.
#[derive(Debug, Clone)]
pub struct SortResult<'a, T = Item> {
    /// References into the caller's slice, in sorted order.
    pub items: Vec<&'a T>,
    pub performance: PerformanceReport,
}

/// Sorts inventory by a selected field.
///
/// # Examples
///
/// ```
/// use u_warehouse::model::{Item, ItemField};
/// use u_warehouse::sort::{SortConfig, SortEngine};
///
/// let items = vec![
///     Item::new("a", "Widget").with_quantity(5),
///     Item::new("b", "Bolt").with_quantity(2),
/// ];
/// let result = SortEngine::new(SortConfig::default()).sort(&items, ItemField::Quantity);
/// assert_eq!(result.items[0].id, "b");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SortEngine {
    config: SortConfig,
}

impl SortEngine {
    pub fn new(config: SortConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SortConfig {
        &self.config
    }

    /// Sorts items by `field`. Text compares case-insensitively, numbers by
    /// raw value.
    pub fn sort<'a>(&self, items: &'a [Item], field: ItemField) -> SortResult<'a> {
        self.sort_by_key(items, &format!("sort by {field}"), |item| {
            item.field(field).sort_key()
        })
    }

    /// Sorts any records by a caller-supplied key accessor.
    ///
    /// Keys are computed once per record before sorting.
    pub fn sort_by_key<'a, T, K, F>(&self, items: &'a [T], label: &str, key: F) -> SortResult<'a, T>
    where
        K: Ord,
        F: Fn(&T) -> K,
    {
        let algorithm = match self.config.strategy {
            SortStrategy::Merge => Algorithm::MergeSort,
            SortStrategy::Quick => Algorithm::QuickSort,
        };
        let recorder = PerformanceRecorder::start(
            algorithm,
            format!("{label} {}", self.config.order.name()),
            items.len(),
        );

        let keys: Vec<K> = items.iter().map(&key).collect();
        let order = self.config.order;
        let cmp = |a: &usize, b: &usize| {
            let ord = keys[*a].cmp(&keys[*b]);
            match order {
                SortOrder::Ascending => ord,
                SortOrder::Descending => ord.reverse(),
            }
        };

        let mut counts = OpCounts::new();
        let indices: Vec<usize> = (0..items.len()).collect();
        let sorted = match self.config.strategy {
            SortStrategy::Merge => merge_sort_by(&indices, &cmp, &mut counts),
            SortStrategy::Quick => {
                let mut indices = indices;
                quick_sort_by(&mut indices, &cmp, &mut counts);
                indices
            }
        };

        SortResult {
            items: sorted.into_iter().map(|i| &items[i]).collect(),
            performance: recorder.finish_with_counts(counts),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inventory() -> Vec<Item> {
        vec![
            Item::new("1", "widget").with_quantity(5),
            Item::new("2", "Apple").with_quantity(2),
            Item::new("3", "banana").with_quantity(5),
            Item::new("4", "Cherry").with_quantity(1),
        ]
    }

    fn ids<'a>(result: &SortResult<'a>) -> Vec<&'a str> {
        result.items.iter().map(|&i| i.id.as_str()).collect()
    }

    #[test]
    fn test_merge_by_name_case_insensitive() {
        let items = inventory();
        let result = SortEngine::default().sort(&items, ItemField::Name);
        assert_eq!(ids(&result), vec!["2", "3", "4", "1"]);
        assert_eq!(result.performance.algorithm, Algorithm::MergeSort);
        assert_eq!(result.performance.operation, "sort by name ascending");
        assert_eq!(result.performance.input_size, 4);
    }

    #[test]
    fn test_merge_stable_on_ties() {
        let items = inventory();
        let result = SortEngine::default().sort(&items, ItemField::Quantity);
        // "1" and "3" tie on quantity 5 and keep input order.
        assert_eq!(ids(&result), vec!["4", "2", "1", "3"]);
    }

    #[test]
    fn test_merge_descending_stays_stable() {
        let items = inventory();
        let engine = SortEngine::new(SortConfig::default().with_order(SortOrder::Descending));
        let result = engine.sort(&items, ItemField::Quantity);
        assert_eq!(ids(&result), vec!["1", "3", "2", "4"]);
    }

    #[test]
    fn test_quick_sorts_by_quantity() {
        let items = inventory();
        let engine = SortEngine::new(SortConfig::default().with_strategy(SortStrategy::Quick));
        let result = engine.sort(&items, ItemField::Quantity);
        let quantities: Vec<u32> = result.items.iter().map(|i| i.quantity).collect();
        assert_eq!(quantities, vec![1, 2, 5, 5]);
        assert_eq!(result.performance.algorithm, Algorithm::QuickSort);
        assert!(result.performance.swaps.is_some());
    }

    #[test]
    fn test_empty_input() {
        let items: Vec<Item> = Vec::new();
        for strategy in [SortStrategy::Merge, SortStrategy::Quick] {
            let engine = SortEngine::new(SortConfig::default().with_strategy(strategy));
            let result = engine.sort(&items, ItemField::Name);
            assert!(result.items.is_empty());
            assert_eq!(result.performance.comparisons, Some(0));
            assert_eq!(result.performance.swaps, Some(0));
        }
    }

    #[test]
    fn test_sort_by_key_on_custom_records() {
        let records = vec![("x", 3), ("y", 1), ("z", 2)];
        let result = SortEngine::default().sort_by_key(&records, "sort by rank", |r| r.1);
        let names: Vec<&str> = result.items.iter().map(|r| r.0).collect();
        assert_eq!(names, vec!["y", "z", "x"]);
    }
}
