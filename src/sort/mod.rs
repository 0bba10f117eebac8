//! Inventory sorting.
//!
//! Two interchangeable strategies behind one contract:
//!
//! - **Merge sort**: stable, always O(n log n), O(n) auxiliary space.
//!   Equal keys keep their original relative order.
//! - **Quicksort**: Lomuto partitioning with the last element as pivot.
//!   Not stable. O(n log n) on average, O(n²) when partitions are
//!   consistently unbalanced (already-sorted input).
//!
//! Both report comparison and swap counts. Merge sort counts one
//! comparison per merge decision and one swap each time an element is
//! taken from the right run while left elements remain. Quicksort counts
//! one comparison per scanned element and one swap per exchange, pivot
//! placement included.
//!
//! # References
//!
//! Cormen, Leiserson, Rivest & Stein (2009), "Introduction to Algorithms",
//! §2.3 (merge sort) and §7.1 (Lomuto partition)

mod config;
mod engine;
mod merge;
mod quick;

pub use config::{SortConfig, SortOrder, SortStrategy};
pub use engine::{SortEngine, SortResult};
