use std::{fs, path::Path};

use log::info;
use serde::{Deserialize, Serialize};

use crate::errors::{GraphError, LoadError};
use crate::geometry::Coordinate;
use crate::graph::{Graph, GraphBuilder, Weight};


/// Road network as read from a JSON document
///
/// ```json
/// {
///   "locations": [{ "name": "Swargate", "lat": 18.5006, "lng": 73.8584 }],
///   "roads": [{ "from": "Swargate", "to": "Katraj", "distance": 12, "bidirectional": true }]
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkDefinition {
    pub locations: Vec<LocationDefinition>,
    #[serde(default)]
    pub roads: Vec<RoadDefinition>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LocationDefinition {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoadDefinition {
    pub from: String,
    pub to: String,
    pub distance: Weight,
    #[serde(default)]
    pub bidirectional: bool, // also add to -> from with the same distance
}

impl NetworkDefinition {

    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        info!("Loading network definition from {}", path.display());
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Validate the definition and build the graph
    pub fn build(&self) -> Result<Graph, GraphError> {
        let mut builder = GraphBuilder::new();

        for location in &self.locations {
            builder.add_node(location.name.as_str(), Coordinate::new(location.lat, location.lng));
        }

        for road in &self.roads {
            if road.bidirectional {
                builder.add_road(road.from.as_str(), road.to.as_str(), road.distance);
            } else {
                builder.add_edge(road.from.as_str(), road.to.as_str(), road.distance);
            }
        }

        builder.build()
    }
}


/// Read a JSON network definition and build its graph
pub fn load_graph(path: impl AsRef<Path>) -> Result<Graph, LoadError> {
    let graph = NetworkDefinition::from_path(path)?.build()?;
    Ok(graph)
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TRIANGLE: &str = r#"{
        "locations": [
            { "name": "X", "lat": 18.0, "lng": 73.0 },
            { "name": "Y", "lat": 18.1, "lng": 73.1 },
            { "name": "Z", "lat": 18.2, "lng": 73.2 }
        ],
        "roads": [
            { "from": "X", "to": "Y", "distance": 2 },
            { "from": "Y", "to": "Z", "distance": 3, "bidirectional": true },
            { "from": "X", "to": "Z", "distance": 10 }
        ]
    }"#;

    #[test]
    fn test_parse_and_build() {
        let definition = NetworkDefinition::from_json_str(TRIANGLE).unwrap();
        assert_eq!(definition.locations.len(), 3);
        assert!(!definition.roads[0].bidirectional);
        assert!(definition.roads[1].bidirectional);

        let graph = definition.build().unwrap();
        assert_eq!(graph.len(), 3);
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.neighbors("Z").unwrap().collect::<Vec<_>>(), vec![("Y", 3.0)]);
        assert_eq!(graph.get_node("Y").unwrap().coordinate, Coordinate::new(18.1, 73.1));
    }

    #[test]
    fn test_roads_are_optional() {
        let definition = NetworkDefinition::from_json_str(
            r#"{ "locations": [{ "name": "Solo", "lat": 1.0, "lng": 2.0 }] }"#
        ).unwrap();

        let graph = definition.build().unwrap();
        assert_eq!(graph.len(), 1);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_malformed_json() {
        let result = NetworkDefinition::from_json_str(r#"{ "locations": [{ "name": "X" }] }"#);
        assert!(matches!(result, Err(LoadError::Json(_))));
    }

    #[test]
    fn test_dangling_road() {
        let definition = NetworkDefinition::from_json_str(r#"{
            "locations": [{ "name": "X", "lat": 0.0, "lng": 0.0 }],
            "roads": [{ "from": "X", "to": "Y", "distance": 1.0 }]
        }"#).unwrap();

        assert!(matches!(definition.build(), Err(GraphError::DanglingEdge { .. })));
    }

    #[test]
    fn test_load_graph_from_file() {
        let path = std::env::temp_dir().join(format!("shortest_route_{}.json", std::process::id()));
        fs::File::create(&path).unwrap().write_all(TRIANGLE.as_bytes()).unwrap();

        let graph = load_graph(&path).unwrap();
        assert_eq!(graph.len(), 3);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file() {
        let result = load_graph("/definitely/not/here.json");
        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}
