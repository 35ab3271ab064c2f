
pub mod dijkstra;
pub mod a_star;
mod shortest_path;

use shortest_path::shortest_path;

use crate::graph::NodeIndex;


/// Result of a successful search
/// nodes: ordered from start to goal, both inclusive
/// cost: sum of edge weights along the path
#[derive(Clone, Debug, PartialEq)]
pub struct Path<N, C> {
    pub nodes: Vec<N>,
    pub cost: C,
}

impl<N, C> Path<N, C> {

    /// Number of edges walked
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}


/// Tables built during a single search
/// Indexed by NodeIndex:
/// - distances: best known cost from the start, None is infinity
/// - predecessors: node each entry was reached from on its best path
/// goal: set when the search stopped by popping the goal node
#[derive(Debug)]
pub(crate) struct SearchTree<C> {
    pub distances: Vec<Option<C>>,
    pub predecessors: Vec<Option<NodeIndex>>,
    pub goal: Option<NodeIndex>,
}
