//! Search index over a borrowed inventory.

use super::config::{SearchConfig, SearchStrategy};
use super::prefix::PrefixIndex;
use crate::error::Result;
use crate::model::{Item, ItemField};
use crate::perf::{Algorithm, PerformanceRecorder, PerformanceReport};

/// Matching items plus what the search cost.
#[derive(Debug, Clone)]
pub struct SearchResult<'a> {
    pub items: Vec<&'a Item>,
    pub performance: PerformanceReport,
}

/// Searchable view of an inventory.
///
/// The prefix map is built once in [`SearchIndex::new`]; rebuild the index
/// when the inventory changes.
///
/// # Examples
///
/// ```
/// use u_warehouse::model::{Item, ItemField};
/// use u_warehouse::search::{SearchConfig, SearchIndex};
///
/// let items = vec![Item::new("1", "GameMouse")];
/// let index = SearchIndex::new(&items, SearchConfig::default()).unwrap();
///
/// assert_eq!(index.scan("mouse", ItemField::Name).items.len(), 1);
/// assert_eq!(index.lookup("mouse").items.len(), 0);
/// assert_eq!(index.lookup("Game").items.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct SearchIndex<'a> {
    items: &'a [Item],
    prefixes: PrefixIndex,
    config: SearchConfig,
}

impl<'a> SearchIndex<'a> {
    /// Validates the config and builds the prefix map.
    pub fn new(items: &'a [Item], config: SearchConfig) -> Result<Self> {
        config.validate()?;
        let prefixes = PrefixIndex::build(items, &config.prefix_fields);
        log::debug!(
            "prefix index built: {} items, {} prefixes over {:?}",
            items.len(),
            prefixes.len(),
            config.prefix_fields
        );
        Ok(Self {
            items,
            prefixes,
            config,
        })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Number of distinct prefixes in the map.
    pub fn prefix_count(&self) -> usize {
        self.prefixes.len()
    }

    /// Runs the chosen strategy.
    pub fn search(&self, term: &str, strategy: SearchStrategy) -> SearchResult<'a> {
        match strategy {
            SearchStrategy::SortedScan(field) => self.scan(term, field),
            SearchStrategy::PrefixHash => self.lookup(term),
        }
    }

    /// Sorts a copy of the inventory by `field`, then returns, in that
    /// sorted order, every item whose field contains `term`
    /// (case-insensitive). One comparison is counted per item examined.
    pub fn scan(&self, term: &str, field: ItemField) -> SearchResult<'a> {
        let recorder = PerformanceRecorder::start(
            Algorithm::SortedScan,
            format!("search '{term}' in {field}"),
            self.items.len(),
        );

        let mut sorted: Vec<&'a Item> = self.items.iter().collect();
        sorted.sort_by_cached_key(|item| item.field(field).sort_key());

        let needle = term.to_lowercase();
        let mut comparisons = 0u64;
        let mut matches = Vec::new();
        for item in sorted {
            comparisons += 1;
            if item.field(field).search_text().contains(&needle) {
                matches.push(item);
            }
        }

        SearchResult {
            items: matches,
            performance: recorder.finish_with_comparisons(comparisons),
        }
    }

    /// Exact lookup of `term` (lowercased) in the prefix map.
    pub fn lookup(&self, term: &str) -> SearchResult<'a> {
        let recorder = PerformanceRecorder::start(
            Algorithm::PrefixHash,
            format!("lookup '{term}'"),
            self.items.len(),
        );

        let items = self
            .prefixes
            .get(term)
            .iter()
            .map(|&idx| &self.items[idx])
            .collect();

        SearchResult {
            items,
            performance: recorder.finish(),
        }
    }
}
