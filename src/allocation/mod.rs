//! Greedy best-fit space allocation.
//!
//! Items are ranked by value density (`value / weight`, highest first,
//! ties in input order). Each item then goes to the candidate space with
//! the smallest non-negative leftover `available - quantity`. Chosen spaces
//! are mutated in place; a space leaves the candidate pool once it is full.
//!
//! This is a single-pass heuristic. It neither maximizes packed value nor
//! minimizes waste: dense items are served first and can starve bulky,
//! low-density ones even when a different order would fit everything.
//!
//! # Exclusive access
//!
//! [`SpaceAllocator::allocate`] takes `&mut [SpaceUnit]`. The borrow rules
//! out any other operation aliasing the same units during allocation;
//! persisting the mutated units is the caller's job.
//!
//! # References
//!
//! Johnson (1974), "Fast Algorithms for Bin Packing"

mod allocator;
mod config;
mod types;

pub use allocator::SpaceAllocator;
pub use config::{AllocationConfig, ZeroWeightPolicy};
pub use types::{Allocation, AllocationResult};
