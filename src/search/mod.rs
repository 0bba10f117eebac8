//! Inventory search.
//!
//! Two strategies with deliberately different match semantics:
//!
//! - **Sorted scan** (reported as "Binary Search"): sorts a copy of the
//!   collection by the field, then walks every element testing
//!   case-insensitive *substring* containment. O(n log n) + O(n); the sort
//!   does not shorten the scan.
//! - **Prefix hash**: a one-time build maps every prefix of every indexed
//!   field value to the items sharing it. Lookup is an exact,
//!   case-insensitive match against that map, so a term only hits when it
//!   is a literal *prefix* of some indexed value. `"mouse"` does not find
//!   `"GameMouse"`; `"game"` does.

mod config;
mod index;
mod prefix;

pub use config::{SearchConfig, SearchStrategy};
pub use index::{SearchIndex, SearchResult};
pub use prefix::PrefixIndex;
