//! Dense single-pair Dijkstra.

use super::graph::DistanceGraph;

/// One shortest path between two nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Leg {
    /// Nodes from source to target, both included.
    pub path: Vec<usize>,
    pub distance: u64,
    /// Nodes in the order they were settled.
    pub settled: Vec<usize>,
    pub comparisons: u64,
}

/// Shortest path from `source` to `target`.
///
/// Each round scans every unsettled node for the minimum tentative
/// distance (lowest index wins ties), settles it, and relaxes all other
/// unsettled nodes. Stops as soon as `target` is settled. Returns `None`
/// when `target` is unreachable.
pub(crate) fn shortest_leg(graph: &DistanceGraph, source: usize, target: usize) -> Option<Leg> {
    let n = graph.len();
    let mut dist = vec![u64::MAX; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];
    let mut settled_flag = vec![false; n];
    let mut settled = Vec::new();
    let mut comparisons = 0u64;

    dist[source] = 0;
    for _ in 0..n {
        let mut current: Option<usize> = None;
        for v in 0..n {
            if settled_flag[v] || dist[v] == u64::MAX {
                continue;
            }
            comparisons += 1;
            if current.is_none_or(|u| dist[v] < dist[u]) {
                current = Some(v);
            }
        }
        let Some(u) = current else {
            break;
        };

        settled_flag[u] = true;
        settled.push(u);
        if u == target {
            break;
        }

        for v in 0..n {
            if settled_flag[v] {
                continue;
            }
            comparisons += 1;
            let candidate = dist[u].saturating_add(graph.distance(u, v));
            if candidate < dist[v] {
                dist[v] = candidate;
                prev[v] = Some(u);
            }
        }
    }

    if !settled_flag[target] {
        return None;
    }

    let mut path = vec![target];
    let mut node = target;
    while let Some(p) = prev[node] {
        path.push(p);
        node = p;
    }
    path.reverse();

    Some(Leg {
        path,
        distance: dist[target],
        settled,
        comparisons,
    })
}
