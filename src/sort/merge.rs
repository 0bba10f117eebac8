//! Stable top-down merge sort.

use crate::perf::OpCounts;
use std::cmp::Ordering;

/// Sorts `items` into a new vector.
///
/// The merge takes from the left run whenever `left <= right`, which is
/// what makes the sort stable.
pub(crate) fn merge_sort_by<T, F>(items: &[T], cmp: &F, counts: &mut OpCounts) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items.to_vec();
    }

    let mid = items.len() / 2;
    let left = merge_sort_by(&items[..mid], cmp, counts);
    let right = merge_sort_by(&items[mid..], cmp, counts);
    merge(left, right, cmp, counts)
}

fn merge<T, F>(left: Vec<T>, right: Vec<T>, cmp: &F, counts: &mut OpCounts) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        counts.compare();
        if cmp(l, r) != Ordering::Greater {
            merged.extend(left.next());
        } else {
            // Right element overtakes every remaining left element.
            counts.swap();
            merged.extend(right.next());
        }
    }

    merged.extend(left);
    merged.extend(right);
    merged
}
