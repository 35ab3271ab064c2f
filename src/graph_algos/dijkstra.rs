use crate::cancel::CancelToken;
use crate::errors::{GraphError, Result};
use crate::graph::{Graph, NodeIndex, Weight};
use crate::priority_queue::{Frontier, HeapQueue, QueueEntry};
use super::{Path, SearchTree, shortest_path};

use std::{fmt::Debug, hash::Hash};
use tracing::{debug, trace};



/// Shortest paths using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
impl<N, C> Graph<N, C>
where
    N: Eq + Hash + Clone + Debug,
    C: Weight,
{

    /// Minimum weight path from start to end, both inclusive
    /// Returns Ok(None) when end cannot be reached from start
    pub fn shortest_path(&self, start: &N, end: &N) -> Result<Option<Vec<N>>> {
        let path = self.shortest_path_with_cost(start, end)?;
        Ok(path.map(|p| p.nodes))
    }

    /// Same as shortest_path, also reporting the total cost
    pub fn shortest_path_with_cost(&self, start: &N, end: &N) -> Result<Option<Path<N, C>>> {
        self.shortest_path_using::<HeapQueue<NodeIndex, C>>(start, end)
    }

    /// Shortest path driven by a caller-chosen frontier queue
    /// Any Frontier gives the same path - only the queue's running time differs
    pub fn shortest_path_using<Q>(&self, start: &N, end: &N) -> Result<Option<Path<N, C>>>
    where
        Q: Frontier<NodeIndex, C> + Default,
    {
        self.find_path::<Q, _>(start, end, |_| C::zero(), None)
    }

    /// Shortest path that stops with Cancelled once the token is triggered
    /// The token is checked once per node popped from the queue
    pub fn shortest_path_cancellable(&self, start: &N, end: &N, token: &CancelToken) -> Result<Option<Vec<N>>> {
        let path = self.find_path::<HeapQueue<NodeIndex, C>, _>(start, end, |_| C::zero(), Some(token))?;
        Ok(path.map(|p| p.nodes))
    }

    /// Every node reachable from start with its smallest cost
    /// Nodes are listed in graph insertion order
    pub fn distances_from(&self, start: &N) -> Result<Vec<(N, C)>> {
        let start_index = self.require(start)?;
        let tree = build_search_tree::<N, C, HeapQueue<NodeIndex, C>, _>(self, start_index, None, |_| C::zero(), None)?;

        let reachable = tree.distances
            .iter()
            .enumerate()
            .filter_map(|(index, cost)| {
                cost.map(|c| (self.node_at(NodeIndex::from_raw(index)).clone(), c))
            })
            .collect();

        Ok(reachable)
    }

    /// Shared entry point for Dijkstra and A*
    /// heuristic: estimate of remaining cost from a node, zero for plain Dijkstra
    #[tracing::instrument(level = "debug", skip_all, fields(start = ?start, end = ?end))]
    pub(crate) fn find_path<Q, H>(&self, start: &N, end: &N, heuristic: H, cancel: Option<&CancelToken>) -> Result<Option<Path<N, C>>>
    where
        Q: Frontier<NodeIndex, C> + Default,
        H: Fn(NodeIndex) -> C,
    {
        let start_index = self.require(start)?;
        let end_index = self.require(end)?;

        let tree = build_search_tree::<N, C, Q, H>(self, start_index, Some(end_index), heuristic, cancel)?;

        let Some(goal_index) = tree.goal else {
            debug!("no path found");
            return Ok(None);
        };

        let nodes: Vec<N> = shortest_path(&tree, goal_index)
            .into_iter()
            .map(|index| self.node_at(index).clone())
            .collect();
        let cost = tree.distances[goal_index.index()].unwrap_or_else(C::zero);

        debug!(hops = nodes.len() - 1, cost = ?cost, "path found");
        Ok(Some(Path { nodes, cost }))
    }
}


/// Traverses the graph best-first from start
/// Priority of a queued node = cost from start + heuristic(node), saturating at the top of C
/// Stops as soon as the goal is popped, or runs until the queue is empty when goal is None
///
/// Stale queue entries are not removed; once a node is visited its later entries are skipped.
pub(crate) fn build_search_tree<N, C, Q, H>(
    graph: &Graph<N, C>,
    start: NodeIndex,
    goal: Option<NodeIndex>,
    heuristic: H,
    cancel: Option<&CancelToken>,
) -> Result<SearchTree<C>>
where
    N: Eq + Hash + Clone + Debug,
    C: Weight,
    Q: Frontier<NodeIndex, C> + Default,
    H: Fn(NodeIndex) -> C,
{
    let node_count = graph.node_count();
    let mut distances: Vec<Option<C>> = vec![None; node_count];
    let mut predecessors: Vec<Option<NodeIndex>> = vec![None; node_count];
    let mut visited = vec![false; node_count];

    // frontier - always expand the least costly node first
    let mut frontier = Q::default();
    distances[start.index()] = Some(C::zero());
    frontier.enqueue(start, heuristic(start));

    let mut expanded = 0usize;

    // guard before every dequeue - the queue is never popped empty
    while !frontier.is_empty() {

        if cancel.is_some_and(CancelToken::is_cancelled) {
            debug!(expanded, "search cancelled");
            return Err(GraphError::Cancelled);
        }

        let QueueEntry { element: current, .. } = frontier.dequeue()?;

        // Check if we've reached the goal
        if goal == Some(current) {
            trace!(expanded, "goal reached");
            return Ok(SearchTree { distances, predecessors, goal: Some(current) });
        }

        // Node already finalized, this is a stale entry
        if visited[current.index()] {
            continue;
        }

        // queued nodes always carry a finite distance
        let Some(current_cost) = distances[current.index()] else {
            continue;
        };

        trace!(node = ?graph.node_at(current), cost = ?current_cost, "expanding node");

        // loop over neighbors
        for &(neighbor, weight) in graph.adjacency(current) {

            // new cost to reach this node = edge cost + node cost
            // a sum that does not fit in C is never an improvement
            let Some(candidate) = current_cost.checked_sum(weight) else {
                trace!(neighbor = ?graph.node_at(neighbor), "cost overflow, edge skipped");
                continue;
            };

            let improved = match distances[neighbor.index()] {
                None => true,
                Some(best) => candidate < best,
            };

            // Only add to the queue if we've found a better path
            if improved {
                distances[neighbor.index()] = Some(candidate);
                predecessors[neighbor.index()] = Some(current);
                frontier.enqueue(neighbor, candidate.saturating_sum(heuristic(neighbor)));
            }
        }

        visited[current.index()] = true;
        expanded += 1;
    }

    trace!(expanded, "frontier exhausted");
    Ok(SearchTree { distances, predecessors, goal: None })
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::priority_queue::SortedQueue;

    // Six node graph
    //   A -4- B -3- E
    //   |         / |
    //   2       3   1
    //   |     /     |
    //   C -2- D -1- F      plus C -4- F
    fn create_test_graph() -> Graph<String, u32> {
        let mut graph = Graph::new();
        for node in ["A", "B", "C", "D", "E", "F"] {
            graph.add_node(node.to_string()).unwrap();
        }

        let edges = [
            ("A", "B", 4), ("A", "C", 2), ("B", "E", 3), ("C", "D", 2),
            ("C", "F", 4), ("D", "E", 3), ("D", "F", 1), ("E", "F", 1),
        ];
        for (a, b, w) in edges {
            graph.add_edge(&a.to_string(), &b.to_string(), w).unwrap();
        }
        graph
    }

    fn names(path: &[&str]) -> Vec<String> {
        path.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_dijkstra_finds_optimal_path() {
        let graph = create_test_graph();

        let path = graph.shortest_path(&"A".to_string(), &"E".to_string()).unwrap();
        assert_eq!(path, Some(names(&["A", "C", "D", "F", "E"])));

        let with_cost = graph.shortest_path_with_cost(&"A".to_string(), &"E".to_string()).unwrap().unwrap();
        assert_eq!(with_cost.cost, 6);
        assert_eq!(with_cost.hops(), 4);
        assert_eq!(graph.path_cost(&with_cost.nodes).unwrap(), 6);
    }

    #[test]
    fn test_path_is_reversible() {
        let graph = create_test_graph();

        let path = graph.shortest_path(&"E".to_string(), &"A".to_string()).unwrap().unwrap();
        assert_eq!(path, names(&["E", "F", "D", "C", "A"]));
    }

    #[test]
    fn test_start_equals_end() {
        let graph = create_test_graph();

        let path = graph.shortest_path_with_cost(&"A".to_string(), &"A".to_string()).unwrap().unwrap();
        assert_eq!(path.nodes, names(&["A"]));
        assert_eq!(path.cost, 0);
        assert_eq!(path.hops(), 0);
    }

    #[test]
    fn test_dijkstra_handles_unreachable_goal() {
        let mut graph = create_test_graph();
        graph.add_node("G".to_string()).unwrap(); // G is not connected

        let result = graph.shortest_path(&"A".to_string(), &"G".to_string()).unwrap();
        assert_eq!(result, None);

        let result = graph.shortest_path(&"G".to_string(), &"A".to_string()).unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn test_unknown_endpoints_are_invalid_references() {
        let graph = create_test_graph();

        let result = graph.shortest_path(&"A".to_string(), &"Z".to_string());
        assert!(matches!(result, Err(GraphError::InvalidReference(_))));

        let result = graph.shortest_path(&"Z".to_string(), &"A".to_string());
        assert!(matches!(result, Err(GraphError::InvalidReference(_))));
    }

    #[test]
    fn test_sorted_queue_gives_same_path() {
        let graph = create_test_graph();

        for start in graph.nodes() {
            for end in graph.nodes() {
                let sorted = graph.shortest_path_using::<SortedQueue<NodeIndex, u32>>(start, end).unwrap();
                let heap = graph.shortest_path_using::<HeapQueue<NodeIndex, u32>>(start, end).unwrap();
                assert_eq!(sorted, heap, "{start} -> {end}");
            }
        }
    }

    #[test]
    fn test_equal_cost_paths_keep_first_relaxation() {
        // Square A-B-D and A-C-D with identical weights
        let mut graph: Graph<&str, u32> = Graph::new();
        for node in ["A", "B", "C", "D"] {
            graph.add_node(node).unwrap();
        }
        graph.add_edge(&"A", &"B", 1).unwrap();
        graph.add_edge(&"A", &"C", 1).unwrap();
        graph.add_edge(&"B", &"D", 1).unwrap();
        graph.add_edge(&"C", &"D", 1).unwrap();

        let path = graph.shortest_path(&"A", &"D").unwrap();
        assert_eq!(path, Some(vec!["A", "B", "D"]));
    }

    #[test]
    fn test_float_weights_and_zero_edges() {
        let mut graph: Graph<u32, f64> = Graph::new();
        for node in 0..4 {
            graph.add_node(node).unwrap();
        }
        graph.add_edge(&0, &1, 0.5).unwrap();
        graph.add_edge(&1, &2, 0.0).unwrap();
        graph.add_edge(&2, &3, 0.25).unwrap();
        graph.add_edge(&0, &3, 1.0).unwrap();

        let path = graph.shortest_path_with_cost(&0, &3).unwrap().unwrap();
        assert_eq!(path.nodes, vec![0, 1, 2, 3]);
        assert!((path.cost - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_parallel_edges_use_lightest() {
        let mut graph: Graph<char, u32> = Graph::new();
        graph.add_node('x').unwrap();
        graph.add_node('y').unwrap();
        graph.add_edge(&'x', &'y', 9).unwrap();
        graph.add_edge(&'x', &'y', 2).unwrap();

        let path = graph.shortest_path_with_cost(&'x', &'y').unwrap().unwrap();
        assert_eq!(path.cost, 2);
    }

    #[test]
    fn test_distances_from_covers_reachable_nodes() {
        let mut graph = create_test_graph();
        graph.add_node("G".to_string()).unwrap();

        let distances = graph.distances_from(&"A".to_string()).unwrap();
        let expected: Vec<(String, u32)> = [("A", 0), ("B", 4), ("C", 2), ("D", 4), ("E", 6), ("F", 5)]
            .into_iter()
            .map(|(n, c)| (n.to_string(), c))
            .collect();
        assert_eq!(distances, expected);
    }

    #[test]
    fn test_cancelled_search() {
        let graph = create_test_graph();
        let token = CancelToken::new();

        // untouched token behaves like a normal search
        let path = graph.shortest_path_cancellable(&"A".to_string(), &"E".to_string(), &token).unwrap();
        assert_eq!(path, Some(names(&["A", "C", "D", "F", "E"])));

        token.cancel();
        let result = graph.shortest_path_cancellable(&"A".to_string(), &"E".to_string(), &token);
        assert_eq!(result, Err(GraphError::Cancelled));
    }

    #[test]
    fn test_overflowing_detour_is_not_taken() {
        // A-B-C sums past u32::MAX, the direct edge still fits
        let mut graph: Graph<&str, u32> = Graph::new();
        for node in ["A", "B", "C"] {
            graph.add_node(node).unwrap();
        }
        graph.add_edge(&"A", &"B", 3_000_000_000).unwrap();
        graph.add_edge(&"B", &"C", 3_000_000_000).unwrap();
        graph.add_edge(&"A", &"C", 4_000_000_000).unwrap();

        let path = graph.shortest_path_with_cost(&"A", &"C").unwrap().unwrap();
        assert_eq!(path.nodes, vec!["A", "C"]);
        assert_eq!(path.cost, 4_000_000_000);

        let path = graph.shortest_path_with_cost(&"B", &"C").unwrap().unwrap();
        assert_eq!(path.nodes, vec!["B", "C"]);
    }

    #[test]
    fn test_unrepresentable_cost_is_unreachable() {
        // the only route to C costs more than u8 can hold
        let mut graph: Graph<char, u8> = Graph::new();
        for node in ['a', 'b', 'c'] {
            graph.add_node(node).unwrap();
        }
        graph.add_edge(&'a', &'b', 200).unwrap();
        graph.add_edge(&'b', &'c', 100).unwrap();

        assert_eq!(graph.shortest_path(&'a', &'c').unwrap(), None);
        assert_eq!(graph.shortest_path(&'b', &'c').unwrap(), Some(vec!['b', 'c']));
    }

    #[test]
    fn test_cancel_midway_stops_search() {
        // long chain 0 - 1 - ... - 49, goal at the far end
        let mut graph: Graph<u32, u32> = Graph::new();
        for node in 0..50 {
            graph.add_node(node).unwrap();
        }
        for node in 0..49 {
            graph.add_edge(&node, &(node + 1), 1).unwrap();
        }
        let start = graph.node_index(&0).unwrap();
        let goal = graph.node_index(&49).unwrap();

        // the heuristic runs once for the start and once per relaxation,
        // so the token flips while the first node is being expanded
        let token = CancelToken::new();
        let calls = std::cell::Cell::new(0);
        let heuristic = |_: NodeIndex| {
            calls.set(calls.get() + 1);
            if calls.get() == 2 {
                token.cancel();
            }
            0
        };

        let result = build_search_tree::<_, _, HeapQueue<NodeIndex, u32>, _>(&graph, start, Some(goal), heuristic, Some(&token));
        assert!(matches!(result, Err(GraphError::Cancelled)));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_cancel_from_another_thread() {
        let mut graph: Graph<u32, u32> = Graph::new();
        for node in 0..4 {
            graph.add_node(node).unwrap();
        }
        graph.add_edge(&0, &1, 1).unwrap();
        graph.add_edge(&1, &2, 1).unwrap();

        let token = CancelToken::new();
        let handle = token.clone();
        std::thread::scope(|scope| {
            scope.spawn(move || handle.cancel());
        });

        let result = graph.shortest_path_cancellable(&0, &2, &token);
        assert_eq!(result, Err(GraphError::Cancelled));
    }

    #[test]
    fn test_search_tree_records_predecessors() {
        let graph = create_test_graph();
        let a = graph.node_index(&"A".to_string()).unwrap();
        let e = graph.node_index(&"E".to_string()).unwrap();

        let tree = build_search_tree::<_, _, HeapQueue<NodeIndex, u32>, _>(&graph, a, Some(e), |_| 0, None).unwrap();
        assert_eq!(tree.goal, Some(e));
        assert_eq!(tree.predecessors[a.index()], None);

        let route: Vec<&String> = shortest_path(&tree, e).into_iter().map(|i| graph.node_at(i)).collect();
        assert_eq!(route, vec!["A", "C", "D", "F", "E"]);
    }
}
