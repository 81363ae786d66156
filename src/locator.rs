use kdtree::KdTree;
use kdtree::distance::squared_euclidean as kt_squared_euclidean;

use crate::errors::PathPlannerError;
use crate::geometry::Coordinate;
use crate::graph::{Graph, NodeIndex};


/// Location closest to a queried coordinate
#[derive(Clone, Debug, PartialEq)]
pub struct NearestLocation {
    pub index: NodeIndex,
    pub name: String,
    pub coordinate: Coordinate,
    pub distance_km: f64, // great-circle distance from the query
}


/// Spatial index over the coordinates of a graph's nodes
///
/// The tree compares raw (lat, lng) degrees, which is adequate for picking
/// the closest of a handful of nearby locations. The reported distance is
/// the great-circle distance.
pub struct Locator {
    tree: KdTree<f64, NodeIndex, [f64; 2]>, // stores point -> node index
}

impl Locator {

    pub fn new(graph: &Graph) -> Result<Self, PathPlannerError> {
        let mut tree = KdTree::new(2);
        for (index, (_, node)) in graph.all_nodes().enumerate() {
            tree.add(node.coordinate.as_point(), index)?;
        }
        Ok(Self { tree })
    }

    /// Closest node to a coordinate, None for an empty graph
    pub fn nearest(&self, graph: &Graph, coordinate: Coordinate) -> Result<Option<NearestLocation>, PathPlannerError> {
        if !coordinate.is_valid() {
            return Err(PathPlannerError::InvalidCoordinate { lat: coordinate.lat, lng: coordinate.lng });
        }

        let closest = self.tree.nearest(&coordinate.as_point(), 1, &kt_squared_euclidean)?;

        let Some(&(_, &index)) = closest.first() else {
            return Ok(None);
        };

        let found = graph.name_of(index).zip(graph.node_at(index)).map(|(name, node)| NearestLocation {
            index,
            name: name.to_string(),
            coordinate: node.coordinate,
            distance_km: coordinate.distance_km(&node.coordinate),
        });

        Ok(found)
    }
}
