//! Dynamic-programming optimizer.

use super::config::KnapsackConfig;
use crate::error::{Error, Result};
use crate::model::Item;
use crate::perf::{Algorithm, PerformanceRecorder, PerformanceReport};

/// Items chosen by the optimizer.
#[derive(Debug, Clone)]
pub struct KnapsackResult<'a> {
    /// Selected items in their original relative order.
    pub selected: Vec<&'a Item>,
    pub total_value: f64,
    /// Sum of the true (unrounded) weights of `selected`.
    pub total_weight: f64,
    pub performance: PerformanceReport,
}

/// Picks the subset of items with maximum value within a weight capacity.
///
/// # Examples
///
/// ```
/// use u_warehouse::knapsack::{KnapsackConfig, ValueOptimizer};
/// use u_warehouse::model::Item;
///
/// let items = vec![
///     Item::new("a", "Laptop").with_weight(0.3).with_value(3599.55),
///     Item::new("b", "Headset").with_weight(0.15).with_value(367.92),
/// ];
/// let optimizer = ValueOptimizer::new(KnapsackConfig::default()).unwrap();
/// let result = optimizer.optimize(&items, 1).unwrap();
///
/// // Both weights round up to 1 unit; only one fits.
/// assert_eq!(result.selected.len(), 1);
/// assert_eq!(result.selected[0].id, "a");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ValueOptimizer {
    config: KnapsackConfig,
}

impl ValueOptimizer {
    pub fn new(config: KnapsackConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &KnapsackConfig {
        &self.config
    }

    /// Solves the 0/1 knapsack over `items` with integer `capacity`.
    ///
    /// Capacity 0 is valid: only items whose weight rounds up to 0 (weight
    /// exactly 0) can be selected. Negative capacity is rejected.
    pub fn optimize<'a>(&self, items: &'a [Item], capacity: i64) -> Result<KnapsackResult<'a>> {
        let recorder = PerformanceRecorder::start(
            Algorithm::Knapsack,
            format!("optimize value within capacity {capacity}"),
            items.len(),
        );

        if capacity < 0 {
            return Err(Error::NegativeCapacity(capacity));
        }
        for item in items {
            item.check_numbers()?;
        }

        let n = items.len();
        let too_large = || Error::CapacityTooLarge(capacity);
        let cap = usize::try_from(capacity).map_err(|_| too_large())?;
        let stride = cap.checked_add(1).ok_or_else(too_large)?;
        let cells = (n + 1).checked_mul(stride).ok_or_else(too_large)?;
        if cells > self.config.max_table_cells {
            return Err(Error::TableTooLarge {
                cells,
                limit: self.config.max_table_cells,
            });
        }

        // Ceiling rounding; out-of-range weights saturate and never fit.
        let weights: Vec<usize> = items.iter().map(|i| i.weight.ceil() as usize).collect();

        let mut table = vec![0.0f64; cells];
        let mut comparisons = 0u64;
        for i in 1..=n {
            let (prev, row) = table.split_at_mut(i * stride);
            let prev = &prev[(i - 1) * stride..];
            let row = &mut row[..stride];
            let (w_i, v_i) = (weights[i - 1], items[i - 1].value);

            for w in 0..stride {
                let exclude = prev[w];
                row[w] = if w_i <= w {
                    comparisons += 1;
                    let include = v_i + prev[w - w_i];
                    if include > exclude {
                        include
                    } else {
                        exclude
                    }
                } else {
                    exclude
                };
            }
        }

        let mut selected = Vec::new();
        let mut total_weight = 0.0;
        let mut w = cap;
        for i in (1..=n).rev() {
            if table[i * stride + w] != table[(i - 1) * stride + w] {
                selected.push(&items[i - 1]);
                w -= weights[i - 1];
                total_weight += items[i - 1].weight;
            }
        }
        selected.reverse();

        let total_value = table[n * stride + cap];
        log::trace!(
            "knapsack picked {} of {} items, value {total_value}",
            selected.len(),
            n
        );

        Ok(KnapsackResult {
            selected,
            total_value,
            total_weight,
            performance: recorder.finish_with_comparisons(comparisons),
        })
    }
}
