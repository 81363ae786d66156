mod builder;

pub use builder::GraphBuilder;

use crate::collections::FxIndexMap;
use crate::errors::GraphError;
use crate::geometry::Coordinate;


/// Dense node index, assigned in insertion order when the graph is built
pub type NodeIndex = usize;

/// Edge weight (distance)
/// A built graph keeps the sum of all its weights finite, so no path
/// distance can overflow to infinity
pub type Weight = f64;


/// A named location together with its outgoing edges
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub coordinate: Coordinate,
    neighbors: FxIndexMap<NodeIndex, Weight>, // neighbor index -> edge weight
}

impl Node {

    pub(crate) fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            neighbors: FxIndexMap::default(),
        }
    }

    /// Number of outgoing edges
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }
}


/// Immutable weighted, directed graph of named locations
///
/// Nodes are kept in insertion order, which fixes both the order of
/// `all_nodes` and the `NodeIndex` of every node. Names are only needed at
/// the boundary; the search works on indices.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
    nodes: FxIndexMap<String, Node>,
}

impl Graph {

    /// Lookup a node by name
    pub fn get_node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Outgoing edges of a node as (neighbor name, weight)
    pub fn neighbors(&self, id: &str) -> Result<impl Iterator<Item = (&str, Weight)> + '_, GraphError> {
        let node = self.nodes.get(id)
            .ok_or_else(|| GraphError::NotFound(id.to_string()))?;

        Ok(node.neighbors.iter().filter_map(move |(&index, &weight)| {
            self.name_of(index).map(|name| (name, weight))
        }))
    }

    /// All nodes in insertion order
    pub fn all_nodes(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.nodes.iter().map(|(name, node)| (name.as_str(), node))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn index_of(&self, id: &str) -> Option<NodeIndex> {
        self.nodes.get_index_of(id)
    }

    pub fn name_of(&self, index: NodeIndex) -> Option<&str> {
        self.nodes.get_index(index).map(|(name, _)| name.as_str())
    }

    pub fn node_at(&self, index: NodeIndex) -> Option<&Node> {
        self.nodes.get_index(index).map(|(_, node)| node)
    }

    /// Outgoing edges of a node as (neighbor index, weight)
    /// An unknown index has no edges
    pub fn neighbors_of(&self, index: NodeIndex) -> impl Iterator<Item = (NodeIndex, Weight)> + '_ {
        self.node_at(index)
            .into_iter()
            .flat_map(|node| node.neighbors.iter().map(|(&n, &w)| (n, w)))
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of directed edges
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(Node::degree).sum()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_graph() -> Graph {
        let mut builder = GraphBuilder::new();
        builder
            .add_node("A", Coordinate::new(1.0, 1.0))
            .add_node("B", Coordinate::new(2.0, 2.0))
            .add_node("C", Coordinate::new(3.0, 3.0))
            .add_edge("A", "B", 1.5)
            .add_edge("A", "C", 4.0)
            .add_edge("B", "C", 2.0);
        builder.build().unwrap()
    }

    #[test]
    fn test_get_node() {
        let graph = create_test_graph();

        let b = graph.get_node("B").unwrap();
        assert_eq!(b.coordinate, Coordinate::new(2.0, 2.0));
        assert_eq!(b.degree(), 1);

        assert!(graph.get_node("Z").is_none());
    }

    #[test]
    fn test_neighbors() {
        let graph = create_test_graph();

        let neighbors: Vec<_> = graph.neighbors("A").unwrap().collect();
        assert_eq!(neighbors, vec![("B", 1.5), ("C", 4.0)]);

        // sink node has no outgoing edges
        assert_eq!(graph.neighbors("C").unwrap().count(), 0);
    }

    #[test]
    fn test_neighbors_of_unknown_node() {
        let graph = create_test_graph();

        let result = graph.neighbors("Z").map(|it| it.count());
        assert_eq!(result, Err(GraphError::NotFound("Z".to_string())));
    }

    #[test]
    fn test_all_nodes_keeps_insertion_order() {
        let graph = create_test_graph();

        let names: Vec<_> = graph.all_nodes().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["A", "B", "C"]);

        // stable across calls
        let again: Vec<_> = graph.all_nodes().map(|(name, _)| name).collect();
        assert_eq!(names, again);
    }

    #[test]
    fn test_index_mapping() {
        let graph = create_test_graph();

        assert_eq!(graph.len(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.index_of("C"), Some(2));
        assert_eq!(graph.name_of(1), Some("B"));
        assert_eq!(graph.name_of(3), None);
        assert!(graph.contains("A"));
        assert!(!graph.contains("a"));

        let edges: Vec<_> = graph.neighbors_of(0).collect();
        assert_eq!(edges, vec![(1, 1.5), (2, 4.0)]);
        assert_eq!(graph.neighbors_of(42).count(), 0);
    }

    #[test]
    fn test_empty_graph() {
        let graph = GraphBuilder::new().build().unwrap();
        assert!(graph.is_empty());
        assert_eq!(graph.all_nodes().count(), 0);
    }
}
