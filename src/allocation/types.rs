//! Allocation results.

use crate::model::Item;
use crate::perf::PerformanceReport;

/// One item placed into one space.
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation<'a> {
    pub item: &'a Item,
    /// Position of the space in the slice passed to the allocator.
    pub space_index: usize,
    pub space_id: String,
    /// Units placed (the item's quantity).
    pub quantity: u32,
    /// `quantity / space capacity * 100`.
    pub efficiency: f64,
}

/// Outcome of one allocation pass.
#[derive(Debug, Clone)]
pub struct AllocationResult<'a> {
    /// Placements in ranked (value-density) order.
    pub allocations: Vec<Allocation<'a>>,
    /// Items no space could hold, in ranked order.
    pub unallocated: Vec<&'a Item>,
    /// Sum of available capacity over the candidate spaces before the pass.
    pub candidate_capacity: u64,
    pub performance: PerformanceReport,
}

impl AllocationResult<'_> {
    /// Total units placed.
    pub fn allocated_quantity(&self) -> u64 {
        self.allocations.iter().map(|a| a.quantity as u64).sum()
    }

    /// Total value of placed items.
    pub fn total_value(&self) -> f64 {
        self.allocations.iter().map(|a| a.item.value).sum()
    }

    /// Fraction of the candidate capacity consumed by this pass (0.0 - 1.0).
    pub fn utilization(&self) -> f64 {
        if self.candidate_capacity == 0 {
            0.0
        } else {
            self.allocated_quantity() as f64 / self.candidate_capacity as f64
        }
    }
}
