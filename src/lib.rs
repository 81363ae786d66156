//! Shortest distance routing between named locations of a small road network

pub mod collections;
pub mod errors;
pub mod geometry;
pub mod graph;
pub mod graph_algos;
pub mod locator;
pub mod network;
pub mod service;

#[cfg(test)]
mod test_graphs;

pub use errors::{GraphError, LoadError, PathPlannerError};
pub use geometry::Coordinate;
pub use graph::{Graph, GraphBuilder, Node, NodeIndex, Weight};
pub use graph_algos::{PathResult, shortest_path};
pub use service::{RoutePlanner, RouteRequest, RouteResponse};
