//! Route planner.

use super::config::RouteConfig;
use super::dijkstra::{shortest_leg, Leg};
use super::graph::DistanceGraph;
use crate::error::{Error, Result};
use crate::model::Location;
use crate::perf::{Algorithm, PerformanceRecorder, PerformanceReport};

#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A route through the graph.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PathResult {
    /// Node indices in travel order, starting at the origin.
    pub path: Vec<usize>,
    /// `path` resolved to locations.
    pub route: Vec<Location>,
    pub total_distance: u64,
    /// For a single shortest path: nodes in the order Dijkstra settled
    /// them. For a picking route: the origin followed by each destination
    /// in the order it was reached.
    pub visited: Vec<usize>,
    /// Destinations that could not be reached. Always empty on a complete
    /// graph.
    pub unreachable: Vec<Location>,
    pub performance: PerformanceReport,
}

/// Plans pick routes over a warehouse layout.
///
/// # Examples
///
/// ```
/// use u_warehouse::model::Location;
/// use u_warehouse::routing::{RouteConfig, RoutePlanner};
///
/// let start = Location::new('A', 1, 1);
/// let stops = [Location::new('B', 2, 1), Location::new('A', 1, 2)];
///
/// let mut planner = RoutePlanner::new(RouteConfig::default()).unwrap();
/// planner.initialize_graph(&[start, stops[0], stops[1]]);
///
/// let route = planner.find_optimal_picking_path(&start, &stops).unwrap();
/// assert_eq!(route.route, vec![start, stops[1], stops[0]]);
/// assert_eq!(route.total_distance, 2 + 17);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RoutePlanner {
    config: RouteConfig,
    graph: Option<DistanceGraph>,
}

impl RoutePlanner {
    /// Validates the config and creates a planner with no graph. Every
    /// query fails with [`Error::UnknownLocation`] until
    /// [`initialize_graph`](Self::initialize_graph).
    pub fn new(config: RouteConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            graph: None,
        })
    }

    pub fn config(&self) -> &RouteConfig {
        &self.config
    }

    /// The current graph, if initialized.
    pub fn graph(&self) -> Option<&DistanceGraph> {
        self.graph.as_ref()
    }

    /// Builds the distance graph over `locations`, replacing any previous one.
    pub fn initialize_graph(&mut self, locations: &[Location]) {
        let graph = DistanceGraph::build(locations, &self.config.metric);
        log::debug!(
            "distance graph initialized: {} locations ({} unique)",
            locations.len(),
            graph.len()
        );
        self.graph = Some(graph);
    }

    /// Direct edge weight between two known locations.
    pub fn distance(&self, from: &Location, to: &Location) -> Result<u64> {
        let (graph, from) = self.resolve(from)?;
        let (_, to) = self.resolve(to)?;
        Ok(graph.distance(from, to))
    }

    /// Single-pair shortest path.
    pub fn shortest_path(&self, from: &Location, to: &Location) -> Result<PathResult> {
        let (graph, source) = self.resolve(from)?;
        let (_, target) = self.resolve(to)?;
        let recorder = PerformanceRecorder::start(
            Algorithm::Dijkstra,
            format!("shortest path {from} -> {to}"),
            graph.len(),
        );

        let result = match shortest_leg(graph, source, target) {
            Some(leg) => PathResult {
                route: leg.path.iter().map(|&n| graph.location(n)).collect(),
                path: leg.path,
                total_distance: leg.distance,
                visited: leg.settled,
                unreachable: Vec::new(),
                performance: recorder.finish_with_comparisons(leg.comparisons),
            },
            None => PathResult {
                path: Vec::new(),
                route: Vec::new(),
                total_distance: 0,
                visited: Vec::new(),
                unreachable: vec![*to],
                performance: recorder.finish(),
            },
        };
        Ok(result)
    }

    /// Visits every destination starting from `start`, always moving to
    /// the nearest pending one.
    ///
    /// Ties go to the destination listed first. The route concatenates the
    /// shortest-path legs without repeating the node each leg starts from.
    /// Fails with [`Error::UnknownLocation`] if `start` or any destination
    /// is not in the graph.
    pub fn find_optimal_picking_path(
        &self,
        start: &Location,
        destinations: &[Location],
    ) -> Result<PathResult> {
        let (graph, origin) = self.resolve(start)?;
        let targets = destinations
            .iter()
            .map(|d| self.resolve(d).map(|(_, idx)| idx))
            .collect::<Result<Vec<usize>>>()?;

        let recorder = PerformanceRecorder::start(
            Algorithm::NearestNeighbor,
            format!("picking route from {start} through {} stops", destinations.len()),
            destinations.len(),
        );

        let mut done = vec![false; targets.len()];
        let mut current = origin;
        let mut path = vec![origin];
        let mut visited = vec![origin];
        let mut total_distance = 0u64;
        let mut comparisons = 0u64;

        loop {
            let pending: Vec<usize> = (0..targets.len()).filter(|&k| !done[k]).collect();
            if pending.is_empty() {
                break;
            }

            let legs = self.candidate_legs(graph, current, &targets, &pending);
            let mut nearest: Option<(usize, Leg)> = None;
            for (k, leg) in pending.into_iter().zip(legs) {
                let Some(leg) = leg else {
                    continue;
                };
                comparisons += leg.comparisons + 1;
                if nearest
                    .as_ref()
                    .is_none_or(|(_, best)| leg.distance < best.distance)
                {
                    nearest = Some((k, leg));
                }
            }

            let Some((k, leg)) = nearest else {
                break;
            };
            log::trace!(
                "next stop {} at distance {}",
                graph.location(targets[k]),
                leg.distance
            );
            path.extend_from_slice(&leg.path[1..]);
            total_distance = total_distance.saturating_add(leg.distance);
            done[k] = true;
            current = targets[k];
            visited.push(current);
        }

        let unreachable: Vec<Location> = (0..targets.len())
            .filter(|&k| !done[k])
            .map(|k| destinations[k])
            .collect();
        if !unreachable.is_empty() {
            log::warn!("{} destinations unreachable from {start}", unreachable.len());
        }

        Ok(PathResult {
            route: path.iter().map(|&n| graph.location(n)).collect(),
            path,
            total_distance,
            visited,
            unreachable,
            performance: recorder.finish_with_comparisons(comparisons),
        })
    }

    /// Shortest legs from `current` to each pending destination, in
    /// `pending` order.
    fn candidate_legs(
        &self,
        graph: &DistanceGraph,
        current: usize,
        targets: &[usize],
        pending: &[usize],
    ) -> Vec<Option<Leg>> {
        #[cfg(feature = "parallel")]
        if self.config.parallel {
            return pending
                .par_iter()
                .map(|&k| shortest_leg(graph, current, targets[k]))
                .collect();
        }

        pending
            .iter()
            .map(|&k| shortest_leg(graph, current, targets[k]))
            .collect()
    }

    fn resolve(&self, location: &Location) -> Result<(&DistanceGraph, usize)> {
        self.graph
            .as_ref()
            .and_then(|g| g.index_of(location).map(|idx| (g, idx)))
            .ok_or(Error::UnknownLocation(*location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::DistanceMetric;

    fn loc(aisle: char, shelf: u32, position: u32) -> Location {
        Location::new(aisle, shelf, position)
    }

    fn planner(locations: &[Location]) -> RoutePlanner {
        let mut p = RoutePlanner::new(RouteConfig::default()).unwrap();
        p.initialize_graph(locations);
        p
    }

    #[test]
    fn test_picking_route_nearest_first() {
        let start = loc('A', 1, 1);
        let far = loc('B', 2, 1);
        let near = loc('A', 1, 2);
        let p = planner(&[start, far, near]);

        let result = p.find_optimal_picking_path(&start, &[far, near]).unwrap();
        assert_eq!(result.route, vec![start, near, far]);
        assert_eq!(result.total_distance, 2 + 17);
        assert_eq!(result.visited, vec![0, 2, 1]);
        assert!(result.unreachable.is_empty());
        assert_eq!(result.performance.algorithm, Algorithm::NearestNeighbor);
    }

    #[test]
    fn test_ties_go_to_first_listed() {
        let start = loc('B', 1, 1);
        let left = loc('A', 1, 1);
        let right = loc('C', 1, 1);
        let p = planner(&[start, left, right]);

        let result = p.find_optimal_picking_path(&start, &[right, left]).unwrap();
        assert_eq!(result.route, vec![start, right, left]);
        assert_eq!(result.total_distance, 10 + 20);
    }

    #[test]
    fn test_unknown_locations() {
        let start = loc('A', 1, 1);
        let p = planner(&[start]);
        let missing = loc('Z', 9, 9);

        assert_eq!(
            p.find_optimal_picking_path(&missing, &[]).unwrap_err(),
            Error::UnknownLocation(missing)
        );
        assert_eq!(
            p.find_optimal_picking_path(&start, &[missing]).unwrap_err(),
            Error::UnknownLocation(missing)
        );
        assert!(p.shortest_path(&start, &missing).is_err());
    }

    #[test]
    fn test_uninitialized_planner() {
        let p = RoutePlanner::default();
        let a = loc('A', 1, 1);
        assert_eq!(
            p.find_optimal_picking_path(&a, &[]).unwrap_err(),
            Error::UnknownLocation(a)
        );
    }

    #[test]
    fn test_no_destinations() {
        let start = loc('A', 1, 1);
        let p = planner(&[start]);
        let result = p.find_optimal_picking_path(&start, &[]).unwrap();
        assert_eq!(result.path, vec![0]);
        assert_eq!(result.total_distance, 0);
    }

    #[test]
    fn test_destination_equal_to_start() {
        let start = loc('A', 1, 1);
        let other = loc('A', 2, 1);
        let p = planner(&[start, other]);
        let result = p
            .find_optimal_picking_path(&start, &[other, start])
            .unwrap();
        // Start is at distance 0, so it is "visited" first without moving.
        assert_eq!(result.route, vec![start, other]);
        assert_eq!(result.visited, vec![0, 0, 1]);
        assert_eq!(result.total_distance, 5);
    }

    #[test]
    fn test_reinitialize_replaces_graph() {
        let a = loc('A', 1, 1);
        let b = loc('B', 1, 1);
        let mut p = planner(&[a, b]);
        assert!(p.distance(&a, &b).is_ok());

        p.initialize_graph(&[a]);
        assert_eq!(p.distance(&a, &b).unwrap_err(), Error::UnknownLocation(b));
        assert_eq!(p.graph().map(DistanceGraph::len), Some(1));
    }

    #[test]
    fn test_overflowing_metric_rejected() {
        let metric = DistanceMetric {
            aisle_weight: u64::MAX,
            ..DistanceMetric::default()
        };
        let err = RoutePlanner::new(RouteConfig::default().with_metric(metric)).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_large_valid_metric_builds_graph() {
        let metric = DistanceMetric {
            aisle_weight: 1 << 20,
            shelf_weight: 1 << 20,
            position_weight: 1 << 20,
        };
        let mut p = RoutePlanner::new(RouteConfig::default().with_metric(metric)).unwrap();
        let a = loc('A', 1, 1);
        let c = loc('C', 1, 1);
        p.initialize_graph(&[a, c]);
        assert_eq!(p.distance(&a, &c).unwrap(), 2 << 20);
    }

    #[test]
    fn test_shortest_path_report() {
        let a = loc('A', 1, 1);
        let b = loc('A', 1, 2);
        let p = planner(&[a, b]);
        let result = p.shortest_path(&a, &b).unwrap();
        assert_eq!(result.route, vec![a, b]);
        assert_eq!(result.total_distance, 2);
        assert_eq!(result.performance.algorithm, Algorithm::Dijkstra);
        assert_eq!(result.performance.input_size, 2);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let locations: Vec<Location> = (0..6)
            .flat_map(|a| (1..4).map(move |s| loc((b'A' + a) as char, s, (a as u32 * 7 + s) % 5)))
            .collect();
        let start = locations[0];
        let stops = &locations[1..];

        let mut seq = RoutePlanner::new(RouteConfig::default()).unwrap();
        seq.initialize_graph(&locations);
        let mut par = RoutePlanner::new(RouteConfig::default().with_parallel(true)).unwrap();
        par.initialize_graph(&locations);

        let a = seq.find_optimal_picking_path(&start, stops).unwrap();
        let b = par.find_optimal_picking_path(&start, stops).unwrap();
        assert_eq!(a.path, b.path);
        assert_eq!(a.total_distance, b.total_distance);
    }
}
