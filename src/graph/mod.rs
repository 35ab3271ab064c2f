use crate::collections::FxIndexMap;
use crate::errors::{GraphError, Result};

use std::{fmt::Debug, hash::Hash};
use num_traits::{CheckedAdd, Zero, ops::saturating::SaturatingAdd};


/// Numeric type usable as an edge weight / path cost
/// Covers both integers and floats - only addition, zero and comparison are needed
pub trait Weight: Zero + PartialOrd + Copy + Debug {

    /// Sum of two costs, None when it does not fit in the type
    fn checked_sum(self, other: Self) -> Option<Self>;

    /// Sum of two costs, clamped to the largest value of the type
    fn saturating_sum(self, other: Self) -> Self;
}

// integers can overflow
macro_rules! integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn checked_sum(self, other: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &other)
                }

                fn saturating_sum(self, other: Self) -> Self {
                    SaturatingAdd::saturating_add(&self, &other)
                }
            }
        )*
    };
}

// floats run off to infinity, which still compares above every finite cost
macro_rules! float_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn checked_sum(self, other: Self) -> Option<Self> {
                    Some(self + other)
                }

                fn saturating_sum(self, other: Self) -> Self {
                    self + other
                }
            }
        )*
    };
}

integer_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
float_weight!(f32, f64);


/// Position of a node in the graph's node arena
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(usize);

impl NodeIndex {
    pub(crate) fn from_raw(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}


/// Weighted undirected graph
/// N: Node - opaque identifier, unique within the graph
/// C: Cost - weight of an edge
///
/// Every node owns an adjacency list of (neighbor index, weight).
/// Edges are stored in both endpoint lists so they can be walked from either side.
#[derive(Clone, Debug)]
pub struct Graph<N, C> {
    nodes: FxIndexMap<N, Vec<(NodeIndex, C)>>,
    edge_count: usize,
}

impl<N, C> Default for Graph<N, C> {
    fn default() -> Self {
        Self {
            nodes: FxIndexMap::default(),
            edge_count: 0,
        }
    }
}

impl<N, C> Graph<N, C>
where
    N: Eq + Hash + Clone + Debug,
    C: Weight,
{

    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate space for `nodes` nodes
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            nodes: FxIndexMap::with_capacity_and_hasher(nodes, Default::default()),
            edge_count: 0,
        }
    }

    /// Register a node with an empty adjacency list
    /// Adding the same node twice is rejected
    pub fn add_node(&mut self, node: N) -> Result<NodeIndex> {
        if self.nodes.contains_key(&node) {
            return Err(GraphError::DuplicateNode(format!("{node:?}")));
        }
        let (index, _) = self.nodes.insert_full(node, Vec::new());
        Ok(NodeIndex(index))
    }

    /// Connect two registered nodes with a non-negative weight
    /// Both directions are recorded; a self-loop is recorded once
    pub fn add_edge(&mut self, a: &N, b: &N, weight: C) -> Result<()> {
        let a_index = self.require(a)?;
        let b_index = self.require(b)?;

        match weight.partial_cmp(&C::zero()) {
            None => return Err(GraphError::InvalidWeight(format!("{weight:?}"))),
            Some(std::cmp::Ordering::Less) => {
                return Err(GraphError::NegativeWeight(format!("{weight:?}")));
            }
            _ => {}
        }

        self.adjacency_mut(a_index).push((b_index, weight));
        if a_index != b_index {
            self.adjacency_mut(b_index).push((a_index, weight));
        }
        self.edge_count += 1;

        Ok(())
    }

    pub fn contains_node(&self, node: &N) -> bool {
        self.nodes.contains_key(node)
    }

    pub fn node_index(&self, node: &N) -> Option<NodeIndex> {
        self.nodes.get_index_of(node).map(NodeIndex)
    }

    /// Node stored at an index, if any
    pub fn node(&self, index: NodeIndex) -> Option<&N> {
        self.nodes.get_index(index.0).map(|(node, _)| node)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges (parallel edges counted separately)
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.nodes.keys()
    }

    /// Neighbors of a node with the weight of the connecting edge
    pub fn neighbors(&self, node: &N) -> Result<impl Iterator<Item = (&N, C)>> {
        let index = self.require(node)?;
        Ok(self.adjacency(index).iter().map(move |&(neighbor, weight)| (self.node_at(neighbor), weight)))
    }

    /// Every undirected edge exactly once as (a, b, weight)
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N, C)> {
        self.nodes.iter().enumerate().flat_map(move |(index, (node, adjacency))| {
            adjacency
                .iter()
                .filter(move |(neighbor, _)| neighbor.0 >= index)
                .map(move |&(neighbor, weight)| (node, self.node_at(neighbor), weight))
        })
    }

    /// Total weight of a path given as consecutive nodes
    /// Where parallel edges exist the lightest one is used
    pub fn path_cost(&self, path: &[N]) -> Result<C> {
        let mut total = C::zero();

        for pair in path.windows(2) {
            let from = self.require(&pair[0])?;
            let to = self.require(&pair[1])?;

            let lightest = self.adjacency(from)
                .iter()
                .filter(|(neighbor, _)| *neighbor == to)
                .map(|&(_, weight)| weight)
                .fold(None, |best: Option<C>, weight| match best {
                    Some(b) if b <= weight => Some(b),
                    _ => Some(weight),
                });

            let Some(weight) = lightest else {
                return Err(GraphError::DisconnectedPath(format!("{:?} and {:?}", pair[0], pair[1])));
            };
            total = total
                .checked_sum(weight)
                .ok_or_else(|| GraphError::CostOverflow(format!("{total:?} + {weight:?}")))?;
        }

        // a lone node still has to exist
        if let [only] = path {
            self.require(only)?;
        }

        Ok(total)
    }

    /// Index of a registered node, InvalidReference otherwise
    pub(crate) fn require(&self, node: &N) -> Result<NodeIndex> {
        self.node_index(node)
            .ok_or_else(|| GraphError::InvalidReference(format!("{node:?}")))
    }

    /// Node for an index handed out by this graph
    pub(crate) fn node_at(&self, index: NodeIndex) -> &N {
        match self.nodes.get_index(index.0) {
            Some((node, _)) => node,
            None => panic!("node index {} does not belong to this graph", index.0),
        }
    }

    pub(crate) fn adjacency(&self, index: NodeIndex) -> &[(NodeIndex, C)] {
        &self.nodes[index.0]
    }

    fn adjacency_mut(&mut self, index: NodeIndex) -> &mut Vec<(NodeIndex, C)> {
        &mut self.nodes[index.0]
    }
}
