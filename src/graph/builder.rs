use log::debug;

use super::{Graph, Node, Weight};
use crate::collections::FxIndexMap;
use crate::errors::GraphError;
use crate::geometry::Coordinate;


/// Collects locations and roads, then validates them into a `Graph`
///
/// Validation is deferred to `build` so calls can be chained. Re-adding an
/// edge between the same pair of nodes replaces its weight.
#[derive(Clone, Debug, Default)]
pub struct GraphBuilder {
    nodes: FxIndexMap<String, Coordinate>,
    duplicates: Vec<String>,
    edges: Vec<(String, String, Weight)>,
}

impl GraphBuilder {

    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named location
    pub fn add_node(&mut self, name: impl Into<String>, coordinate: Coordinate) -> &mut Self {
        let name = name.into();
        if self.nodes.contains_key(&name) {
            self.duplicates.push(name);
        } else {
            self.nodes.insert(name, coordinate);
        }
        self
    }

    /// Add a directed edge from -> to
    pub fn add_edge(&mut self, from: impl Into<String>, to: impl Into<String>, weight: Weight) -> &mut Self {
        self.edges.push((from.into(), to.into(), weight));
        self
    }

    /// Add a road usable in both directions with the same weight
    pub fn add_road(&mut self, a: impl Into<String>, b: impl Into<String>, weight: Weight) -> &mut Self {
        let (a, b) = (a.into(), b.into());
        self.add_edge(a.clone(), b.clone(), weight);
        self.add_edge(b, a, weight)
    }

    /// Validate and freeze the graph
    pub fn build(self) -> Result<Graph, GraphError> {
        if let Some(name) = self.duplicates.into_iter().next() {
            return Err(GraphError::DuplicateNode(name));
        }

        let mut nodes: FxIndexMap<String, Node> = FxIndexMap::default();
        for (name, coordinate) in self.nodes {
            if !coordinate.is_valid() {
                return Err(GraphError::InvalidCoordinate {
                    name,
                    lat: coordinate.lat,
                    lng: coordinate.lng,
                });
            }
            nodes.insert(name, Node::new(coordinate));
        }

        for (from, to, weight) in self.edges {
            if !weight.is_finite() || weight < 0.0 {
                return Err(GraphError::InvalidWeight { from, to, weight });
            }

            let Some(to_index) = nodes.get_index_of(&to) else {
                return Err(GraphError::DanglingEdge { missing: to.clone(), from, to });
            };
            let Some(origin) = nodes.get_mut(&from) else {
                return Err(GraphError::DanglingEdge { missing: from.clone(), from, to });
            };

            origin.neighbors.insert(to_index, weight);
        }

        // every path distance is bounded by the total
        let total: Weight = nodes.values().flat_map(|node| node.neighbors.values()).sum();
        if !total.is_finite() {
            return Err(GraphError::WeightOverflow);
        }

        let graph = Graph { nodes };
        debug!("Built graph with {} nodes and {} edges", graph.len(), graph.edge_count());

        Ok(graph)
    }
}
