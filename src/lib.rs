//! Algorithm engines for warehouse inventory.
//!
//! Each engine takes caller-owned collections and returns a result plus a
//! [`PerformanceReport`](perf::PerformanceReport):
//!
//! - **Sort** ([`sort`]): stable merge sort and in-place Lomuto quicksort
//!   over an enum-selected field, with comparison and swap counts.
//! - **Search** ([`search`]): sort-then-substring scan, and an exact
//!   lookup in a prefix map built once over chosen fields.
//! - **Space allocation** ([`allocation`]): greedy best-fit packing of
//!   items, densest first, into capacity-bounded space units mutated in
//!   place.
//! - **Value optimization** ([`knapsack`]): 0/1 knapsack by dynamic
//!   programming with ceiling-rounded weights.
//! - **Route planning** ([`routing`]): distance graph construction, dense
//!   O(V²) Dijkstra, and a nearest-neighbor multi-stop picking route.
//!
//! # Architecture
//!
//! Engines are synchronous and single-threaded. They perform no I/O and
//! persist nothing. Storage, presentation, and algorithm selection belong
//! to the caller. Logging goes through the `log` facade; the crate never
//! installs a logger.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` on data, config, and report types.
//! - `parallel`: rayon-backed candidate evaluation in route planning.

pub mod allocation;
pub mod error;
pub mod knapsack;
pub mod model;
pub mod perf;
pub mod routing;
pub mod search;
pub mod sort;

pub use error::{Error, Result};
