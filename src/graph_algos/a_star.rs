use crate::errors::Result;
use crate::graph::{Graph, NodeIndex, Weight};
use crate::priority_queue::HeapQueue;
use super::Path;

use std::{
    hash::Hash,
    fmt::Debug,
};



/// A* Algorithm
/// https://en.wikipedia.org/wiki/A*_search_algorithm
impl<N, C> Graph<N, C>
where
    N: Eq + Hash + Clone + Debug,
    C: Weight,
{

    /// From start node, search toward end guided by a heuristic
    /// The Approach has 2 requirements:
    /// 1. The heuristic function must be admissible (never overestimates the true cost to reach end)
    /// 2. A path actually exists between the start and end nodes, otherwise the whole component is explored
    ///
    /// A heuristic that is always zero makes this identical to shortest_path
    pub fn a_star<H>(&self, start: &N, end: &N, heuristic: H) -> Result<Option<Path<N, C>>>
    where
        H: Fn(&N) -> C,
    {
        self.find_path::<HeapQueue<NodeIndex, C>, _>(
            start,
            end,
            |index| heuristic(self.node_at(index)),
            None,
        )
    }
}
