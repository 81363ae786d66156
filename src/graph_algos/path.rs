use crate::graph::NodeIndex;

/// Construct the shortest path from the goal node back to the start node
/// Returns the ordered path from start to goal, or None when the
/// predecessor chain of the goal does not lead back to start
/// predecessors: parent of every node on its best known path, None if unset
pub(crate) fn trace_path(predecessors: &[Option<NodeIndex>], start: NodeIndex, goal: NodeIndex) -> Option<Vec<NodeIndex>> {

    let mut path = vec![goal];
    let mut current = goal;

    // Trace back from goal to start
    while let Some(parent) = predecessors.get(current).copied().flatten() {
        // a chain longer than the node count can only be a cycle
        if path.len() > predecessors.len() {
            return None;
        }
        path.push(parent);
        current = parent;
    }

    if current != start {
        return None;
    }

    // The path is in reverse order, so reverse it
    path.reverse();

    Some(path)
}
