//! Best-fit allocator.

use super::config::{AllocationConfig, ZeroWeightPolicy};
use super::types::{Allocation, AllocationResult};
use crate::error::{Error, Result};
use crate::model::{Item, SpaceUnit};
use crate::perf::{Algorithm, PerformanceRecorder};

/// Places items into space units, densest first, best fit.
///
/// # Examples
///
/// ```
/// use u_warehouse::allocation::{AllocationConfig, SpaceAllocator};
/// use u_warehouse::model::{Item, SpaceUnit};
///
/// let items = vec![Item::new("a", "Drill").with_quantity(4).with_weight(2.0).with_value(100.0)];
/// let mut spaces = vec![SpaceUnit::new("S1", 10), SpaceUnit::new("S2", 5)];
///
/// let result = SpaceAllocator::new(AllocationConfig::default())
///     .allocate(&items, &mut spaces)
///     .unwrap();
///
/// assert_eq!(result.allocations[0].space_id, "S2");
/// assert_eq!(spaces[1].available(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SpaceAllocator {
    config: AllocationConfig,
}

impl SpaceAllocator {
    pub fn new(config: AllocationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AllocationConfig {
        &self.config
    }

    /// Allocates `items` into `spaces`, mutating the chosen spaces.
    ///
    /// Only spaces with available capacity are candidates. All items are
    /// validated before any space is touched, so an error leaves `spaces`
    /// unchanged.
    pub fn allocate<'a>(
        &self,
        items: &'a [Item],
        spaces: &mut [SpaceUnit],
    ) -> Result<AllocationResult<'a>> {
        let recorder = PerformanceRecorder::start(
            Algorithm::BestFit,
            format!("allocate {} items into {} spaces", items.len(), spaces.len()),
            items.len(),
        );

        let mut ranked = Vec::with_capacity(items.len());
        for item in items {
            item.check_numbers()?;
            ranked.push((self.density(item)?, item));
        }
        // Stable: equal densities keep input order.
        ranked.sort_by(|a, b| b.0.total_cmp(&a.0));

        let mut pool: Vec<usize> = (0..spaces.len())
            .filter(|&i| spaces[i].available() > 0)
            .collect();
        let candidate_capacity = pool.iter().map(|&i| spaces[i].available() as u64).sum();

        let mut comparisons = 0u64;
        let mut allocations = Vec::new();
        let mut unallocated = Vec::new();

        for (_, item) in ranked {
            let mut best: Option<(usize, u32)> = None;
            for (pos, &s) in pool.iter().enumerate() {
                comparisons += 1;
                let available = spaces[s].available();
                if available < item.quantity {
                    continue;
                }
                let leftover = available - item.quantity;
                if best.is_none_or(|(_, b)| leftover < b) {
                    best = Some((pos, leftover));
                }
            }

            let Some((pos, _)) = best else {
                unallocated.push(item);
                continue;
            };

            let s = pool[pos];
            let space = &mut spaces[s];
            let placed = space.place(&item.id, item.quantity);
            debug_assert!(placed, "best-fit chose a space that cannot hold the item");
            log::trace!(
                "placed {} x{} in {} ({} left)",
                item.id,
                item.quantity,
                space.id(),
                space.available()
            );
            allocations.push(Allocation {
                item,
                space_index: s,
                space_id: space.id().to_string(),
                quantity: item.quantity,
                efficiency: item.quantity as f64 / space.capacity() as f64 * 100.0,
            });
            if space.available() == 0 {
                pool.remove(pos);
            }
        }

        if !unallocated.is_empty() {
            log::warn!("{} items could not be allocated", unallocated.len());
        }

        Ok(AllocationResult {
            allocations,
            unallocated,
            candidate_capacity,
            performance: recorder.finish_with_comparisons(comparisons),
        })
    }

    /// Value per unit weight, with zero weight handled by policy.
    fn density(&self, item: &Item) -> Result<f64> {
        if item.weight > 0.0 {
            return Ok(item.value / item.weight);
        }
        match self.config.zero_weight {
            ZeroWeightPolicy::MaxDensity => {
                log::warn!("item '{}' has zero weight; ranking by policy", item.id);
                Ok(if item.value > 0.0 { f64::INFINITY } else { 0.0 })
            }
            ZeroWeightPolicy::Reject => Err(Error::invalid_item(
                &item.id,
                "zero weight has no value density",
            )),
        }
    }
}
