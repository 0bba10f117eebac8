//! Pick-route planning over warehouse locations.
//!
//! Two phases:
//!
//! 1. [`RoutePlanner::initialize_graph`] deduplicates a location set and
//!    builds a complete, symmetric [`DistanceGraph`] under a
//!    [`DistanceMetric`] (default `10*aisle + 5*shelf + 2*position`
//!    differences, aisles numbered by alphabet position). Re-initializing
//!    replaces the graph wholesale.
//! 2. Queries: [`RoutePlanner::shortest_path`] runs a dense O(V²)
//!    Dijkstra (linear minimum scan, no heap, stops once the target is
//!    settled); [`RoutePlanner::find_optimal_picking_path`] chains those
//!    legs with a nearest-neighbor heuristic, always travelling to the
//!    closest pending stop. That is a TSP approximation, not an optimal
//!    tour, and costs O(D * V²) for D destinations.
//!
//! Queries take `&self` and may share the planner across threads;
//! initialization takes `&mut self` and is therefore exclusive.
//!
//! # References
//!
//! - Dijkstra (1959), "A Note on Two Problems in Connexion with Graphs"
//! - Rosenkrantz, Stearns & Lewis (1977), "An Analysis of Several
//!   Heuristics for the Traveling Salesman Problem"

mod config;
mod dijkstra;
mod graph;
mod planner;

pub use config::{DistanceMetric, RouteConfig};
pub use graph::DistanceGraph;
pub use planner::{PathResult, RoutePlanner};
