//! Small graphs shared by the unit tests

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::geometry::Coordinate;
use crate::graph::{Graph, GraphBuilder, NodeIndex, Weight};


fn at(i: usize) -> Coordinate {
    Coordinate::new(18.0 + i as f64 * 0.01, 73.0 + i as f64 * 0.01)
}

/// Builds a graph from node names and directed edges
pub(crate) fn graph_from(names: &[&str], edges: &[(&str, &str, Weight)]) -> Graph {
    let mut builder = GraphBuilder::new();
    for (i, name) in names.iter().enumerate() {
        builder.add_node(*name, at(i));
    }
    for &(from, to, weight) in edges {
        builder.add_edge(from, to, weight);
    }
    builder.build().unwrap()
}

/// X -> Y (2), Y -> Z (3), X -> Z (10)
pub(crate) fn triangle() -> Graph {
    graph_from(
        &["X", "Y", "Z"],
        &[("X", "Y", 2.0), ("Y", "Z", 3.0), ("X", "Z", 10.0)],
    )
}

/// Diamond A -> B -> D and A -> C -> D, with an isolated node W
pub(crate) fn diamond_with_island() -> Graph {
    graph_from(
        &["A", "B", "C", "D", "W"],
        &[("A", "B", 1.0), ("A", "C", 3.0), ("B", "D", 5.0), ("C", "D", 1.0)],
    )
}

/// Random directed graph, deterministic for a given seed
pub(crate) fn random_graph(seed: u64, num_nodes: usize, edge_probability: f64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut builder = GraphBuilder::new();

    let names: Vec<String> = (0..num_nodes).map(|i| format!("n{i}")).collect();
    for (i, name) in names.iter().enumerate() {
        builder.add_node(name.as_str(), at(i));
    }

    for from in &names {
        for to in &names {
            if from != to && rng.random_bool(edge_probability) {
                // whole numbers plus a quarter step keep float sums exact
                let weight = rng.random_range(0..40) as Weight * 0.25;
                builder.add_edge(from.as_str(), to.as_str(), weight);
            }
        }
    }

    builder.build().unwrap()
}

/// Minimum weight over every simple path from start to end, by exhaustive search
/// With non-negative weights the best walk is always a simple path
pub(crate) fn brute_force_distance(graph: &Graph, start: NodeIndex, end: NodeIndex) -> Option<Weight> {
    fn explore(graph: &Graph, node: NodeIndex, end: NodeIndex, cost: Weight, on_path: &mut Vec<bool>, best: &mut Option<Weight>) {
        if node == end {
            if best.is_none_or(|b| cost < b) {
                *best = Some(cost);
            }
            return;
        }
        for (neighbor, weight) in graph.neighbors_of(node) {
            if !on_path[neighbor] {
                on_path[neighbor] = true;
                explore(graph, neighbor, end, cost + weight, on_path, best);
                on_path[neighbor] = false;
            }
        }
    }

    let mut on_path = vec![false; graph.len()];
    on_path[start] = true;
    let mut best = None;
    explore(graph, start, end, 0.0, &mut on_path, &mut best);
    best
}
