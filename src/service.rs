use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::collections::FxIndexMap;
use crate::errors::PathPlannerError;
use crate::geometry::Coordinate;
use crate::graph::{Graph, Weight};
use crate::graph_algos::shortest_path;
use crate::locator::{Locator, NearestLocation};


pub const ALREADY_THERE: &str = "You are already at the destination!";


/// Route query as sent by a client; either field may be missing
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteRequest {
    pub start: Option<String>,
    pub end: Option<String>,
}

impl RouteRequest {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self { start: Some(start.into()), end: Some(end.into()) }
    }
}

/// Stop along a route
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

/// Successful route payload
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteResponse {
    pub success: bool,
    pub path: Vec<Waypoint>,
    pub distance: Weight,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Category of a failed request, for picking a transport status code
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    MissingParameter,
    InvalidLocation,
    NoPath,
    Internal,
}

/// Failed request payload
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: ErrorKind,
}

impl From<&PathPlannerError> for ErrorResponse {
    fn from(error: &PathPlannerError) -> Self {
        let (kind, message) = match error {
            PathPlannerError::MissingParameter(_) => {
                (ErrorKind::MissingParameter, "Start and end locations are required".to_string())
            }
            PathPlannerError::InvalidEndpoint(_) | PathPlannerError::InvalidCoordinate { .. } => {
                (ErrorKind::InvalidLocation, "Invalid location(s) provided".to_string())
            }
            PathPlannerError::NoPathFound { .. } => {
                (ErrorKind::NoPath, "No path found between the locations".to_string())
            }
            other => (ErrorKind::Internal, other.to_string()),
        };
        Self { error: message, kind }
    }
}

/// Nearest location payload
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NearestResponse {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub distance_km: f64,
}

impl From<NearestLocation> for NearestResponse {
    fn from(location: NearestLocation) -> Self {
        Self {
            name: location.name,
            lat: location.coordinate.lat,
            lng: location.coordinate.lng,
            distance_km: location.distance_km,
        }
    }
}


/// Answers location and route queries over a shared, read-only graph
///
/// Cloning is cheap: clones share the graph and can serve queries from
/// any number of threads.
#[derive(Clone)]
pub struct RoutePlanner {
    graph: Arc<Graph>,
    locator: Arc<Locator>,
}

impl RoutePlanner {

    pub fn new(graph: impl Into<Arc<Graph>>) -> Result<Self, PathPlannerError> {
        let graph = graph.into();
        let locator = Arc::new(Locator::new(&graph)?);
        Ok(Self { graph, locator })
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Every location with its coordinate, in definition order
    pub fn locations(&self) -> FxIndexMap<String, Coordinate> {
        self.graph
            .all_nodes()
            .map(|(name, node)| (name.to_string(), node.coordinate))
            .collect()
    }

    /// Shortest route between two named locations
    pub fn route(&self, request: &RouteRequest) -> Result<RouteResponse, PathPlannerError> {
        let start = required(request.start.as_deref(), "start")?;
        let end = required(request.end.as_deref(), "end")?;

        if !self.graph.contains(start) {
            return Err(PathPlannerError::InvalidEndpoint(start.to_string()));
        }
        if !self.graph.contains(end) {
            return Err(PathPlannerError::InvalidEndpoint(end.to_string()));
        }

        if start == end {
            return Ok(RouteResponse {
                success: true,
                path: self.waypoints(&[start.to_string()]),
                distance: 0.0,
                message: Some(ALREADY_THERE.to_string()),
            });
        }

        let result = shortest_path(&self.graph, start, end)?;

        if !result.success {
            debug!("No path from {start} to {end}");
            return Err(PathPlannerError::NoPathFound {
                start: start.to_string(),
                end: end.to_string(),
            });
        }

        Ok(RouteResponse {
            success: true,
            path: self.waypoints(&result.path),
            distance: result.weight,
            message: None,
        })
    }

    /// Location closest to a coordinate
    pub fn nearest(&self, coordinate: Coordinate) -> Result<Option<NearestLocation>, PathPlannerError> {
        self.locator.nearest(&self.graph, coordinate)
    }

    /// Route between the locations nearest to two coordinates
    pub fn route_between(&self, from: Coordinate, to: Coordinate) -> Result<RouteResponse, PathPlannerError> {
        let start = self.snap(from)?;
        let end = self.snap(to)?;
        debug!("Snapped ({}, {}) to {} and ({}, {}) to {}", from.lat, from.lng, start.name, to.lat, to.lng, end.name);

        self.route(&RouteRequest::new(start.name, end.name))
    }

    fn snap(&self, coordinate: Coordinate) -> Result<NearestLocation, PathPlannerError> {
        self.nearest(coordinate)?
            .ok_or(PathPlannerError::InvalidCoordinate { lat: coordinate.lat, lng: coordinate.lng })
    }

    fn waypoints(&self, path: &[String]) -> Vec<Waypoint> {
        path.iter()
            .filter_map(|name| {
                self.graph.get_node(name).map(|node| Waypoint {
                    name: name.clone(),
                    lat: node.coordinate.lat,
                    lng: node.coordinate.lng,
                })
            })
            .collect()
    }
}


/// An absent or empty identifier counts as missing
fn required<'a>(value: Option<&'a str>, field: &'static str) -> Result<&'a str, PathPlannerError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(PathPlannerError::MissingParameter(field)),
    }
}
