use crate::errors::PathPlannerError;
use crate::graph::{Graph, NodeIndex, Weight};
use super::trace_path;

use std::{collections::BinaryHeap, cmp::Ordering};
use log::{debug, trace};


/// Outcome of a shortest path query
/// An unreachable end is a regular result: empty path, infinite weight
#[derive(Clone, Debug, PartialEq)]
pub struct PathResult {
    pub path: Vec<String>, // start to end inclusive
    pub weight: Weight,
    pub success: bool, // weight is finite
}

impl PathResult {

    fn found(path: Vec<String>, weight: Weight) -> Self {
        Self { path, weight, success: true }
    }

    fn unreachable() -> Self {
        Self { path: Vec::new(), weight: Weight::INFINITY, success: false }
    }
}


/// Tentative distances and predecessors left behind by a search
#[derive(Debug)]
pub(crate) struct SearchSpace {
    pub distances: Vec<Weight>,
    pub predecessors: Vec<Option<NodeIndex>>,
    pub nodes_settled: usize,
}


/// Identify the shortest path between two named nodes using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
///
/// Both endpoints must exist in the graph, otherwise `InvalidEndpoint` is
/// returned. The search stops as soon as `end` is settled. When several
/// unsettled nodes share the smallest tentative distance, the one with the
/// lowest `NodeIndex` (earliest inserted) is settled first, which decides
/// which of several equally short paths is returned.
pub fn shortest_path(graph: &Graph, start: &str, end: &str) -> Result<PathResult, PathPlannerError> {

    let start_index = graph.index_of(start)
        .ok_or_else(|| PathPlannerError::InvalidEndpoint(start.to_string()))?;
    let end_index = graph.index_of(end)
        .ok_or_else(|| PathPlannerError::InvalidEndpoint(end.to_string()))?;

    if start_index == end_index {
        return Ok(PathResult::found(vec![start.to_string()], 0.0));
    }

    let space = search(graph, start_index, end_index);
    let weight = space.distances[end_index];

    debug!("Settled {} of {} nodes searching {start} -> {end}", space.nodes_settled, graph.len());

    if !weight.is_finite() {
        return Ok(PathResult::unreachable());
    }

    let Some(indices) = trace_path(&space.predecessors, start_index, end_index) else {
        return Ok(PathResult::unreachable());
    };

    let path = indices.into_iter()
        .filter_map(|index| graph.name_of(index).map(str::to_string))
        .collect();

    Ok(PathResult::found(path, weight))
}


/// Settle nodes in order of distance from start until end is settled
/// or nothing reachable is left
pub(crate) fn search(graph: &Graph, start: NodeIndex, end: NodeIndex) -> SearchSpace {

    let num_nodes = graph.len();
    let mut distances = vec![Weight::INFINITY; num_nodes];
    let mut predecessors: Vec<Option<NodeIndex>> = vec![None; num_nodes];
    let mut settled = vec![false; num_nodes];
    let mut nodes_settled = 0;

    // Unsettled nodes with a finite tentative distance
    // Stale entries stay in the heap and are skipped when popped
    let mut queue: BinaryHeap<Candidate> = BinaryHeap::new();

    if start < num_nodes {
        distances[start] = 0.0;
        queue.push(Candidate { distance: 0.0, index: start });
    }

    while let Some(Candidate { distance, index }) = queue.pop() {

        if settled[index] || distance > distances[index] {
            continue;
        }

        settled[index] = true;
        nodes_settled += 1;
        trace!("Settled node {index} at distance {distance}");

        // Non-negative weights: nothing found later can be shorter
        if index == end {
            break;
        }

        for (neighbor, weight) in graph.neighbors_of(index) {
            if settled[neighbor] {
                continue;
            }

            let new_distance = distance + weight;

            if new_distance < distances[neighbor] {
                distances[neighbor] = new_distance;
                predecessors[neighbor] = Some(index);
                queue.push(Candidate { distance: new_distance, index: neighbor });
            }
        }
    }

    SearchSpace { distances, predecessors, nodes_settled }
}


/// Heap entry, ordered so the binary heap pops the smallest distance first
/// and the lowest index among equal distances
#[derive(Debug)]
struct Candidate {
    distance: Weight,
    index: NodeIndex,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other.distance
            .partial_cmp(&self.distance)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.index.cmp(&self.index))
    }
}
impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for Candidate {}
