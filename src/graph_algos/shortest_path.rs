use crate::graph::NodeIndex;
use super::SearchTree;

/// Construct the shortest path from the goal node back to the start node
/// Returns the ordered path as indices from start to goal
/// The start node is the one entry without a predecessor
pub(crate) fn shortest_path<C>(tree: &SearchTree<C>, goal_index: NodeIndex) -> Vec<NodeIndex> {

    let mut path = vec![goal_index];
    let mut current_index = goal_index;

    // Trace back from goal to start
    while let Some(parent_index) = tree.predecessors[current_index.index()] {
        path.push(parent_index);
        current_index = parent_index;
    }

    // The path is in reverse order, so reverse it
    path.reverse();

    path
}
