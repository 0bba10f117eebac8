//! In-place Lomuto quicksort.

use crate::perf::OpCounts;
use std::cmp::Ordering;

/// Sorts `items` in place.
///
/// Recurses into the smaller partition and loops over the larger one so the
/// stack stays O(log n) even on the O(n²) sorted-input case. The same
/// partitions run as with plain recursion, so the counts are unchanged.
pub(crate) fn quick_sort_by<T, F>(mut items: &mut [T], cmp: &F, counts: &mut OpCounts)
where
    F: Fn(&T, &T) -> Ordering,
{
    while items.len() > 1 {
        let p = partition(items, cmp, counts);
        let (low, rest) = std::mem::take(&mut items).split_at_mut(p);
        let high = &mut rest[1..];
        if low.len() < high.len() {
            quick_sort_by(low, cmp, counts);
            items = high;
        } else {
            quick_sort_by(high, cmp, counts);
            items = low;
        }
    }
}

/// Partitions around the last element and returns its final index.
fn partition<T, F>(items: &mut [T], cmp: &F, counts: &mut OpCounts) -> usize
where
    F: Fn(&T, &T) -> Ordering,
{
    let hi = items.len() - 1;
    let mut i = 0;
    for j in 0..hi {
        counts.compare();
        if cmp(&items[j], &items[hi]) != Ordering::Greater {
            items.swap(i, j);
            counts.swap();
            i += 1;
        }
    }
    items.swap(i, hi);
    counts.swap();
    i
}
