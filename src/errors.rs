use thiserror::Error;


/// Errors raised while answering a route query
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathPlannerError {
    #[error("{0} location is required")]
    MissingParameter(&'static str), // caller omitted start or end
    #[error("unknown location: {0}")]
    InvalidEndpoint(String), // identifier is not part of the graph
    #[error("no path found between {start} and {end}")]
    NoPathFound { start: String, end: String },
    #[error("invalid coordinate ({lat}, {lng})")]
    InvalidCoordinate { lat: f64, lng: f64 },
    #[error("kd-tree error: {0}")]
    KdTreeError(String),
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Errors raised while building or reading a graph
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("duplicate location: {0}")]
    DuplicateNode(String),
    #[error("edge {from} -> {to} references unknown location {missing}")]
    DanglingEdge { from: String, to: String, missing: String },
    #[error("edge {from} -> {to} has invalid weight {weight}")]
    InvalidWeight { from: String, to: String, weight: f64 },
    #[error("location {name} has invalid coordinate ({lat}, {lng})")]
    InvalidCoordinate { name: String, lat: f64, lng: f64 },
    #[error("sum of edge weights exceeds the range of f64")]
    WeightOverflow,
    #[error("location not found: {0}")]
    NotFound(String),
}

/// Errors raised while loading a network definition
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid network definition: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Graph(#[from] GraphError),
}


impl From<kdtree::ErrorKind> for PathPlannerError {
    fn from(error: kdtree::ErrorKind) -> Self {
        PathPlannerError::KdTreeError(error.to_string())
    }
}
