//! Shortest paths over weighted undirected graphs
//!
//! ```
//! use waypath::Graph;
//!
//! let mut graph: Graph<&str, u32> = Graph::new();
//! for node in ["A", "B", "C"] {
//!     graph.add_node(node)?;
//! }
//! graph.add_edge(&"A", &"B", 4)?;
//! graph.add_edge(&"A", &"C", 1)?;
//! graph.add_edge(&"C", &"B", 2)?;
//!
//! assert_eq!(graph.shortest_path(&"A", &"B")?, Some(vec!["A", "C", "B"]));
//! # Ok::<(), waypath::GraphError>(())
//! ```

mod collections;
pub mod cancel;
pub mod errors;
pub mod geometry;
pub mod graph;
pub mod graph_algos;
pub mod priority_queue;

pub use cancel::CancelToken;
pub use errors::{GraphError, Result};
pub use graph::{Graph, NodeIndex, Weight};
pub use graph_algos::Path;
pub use priority_queue::{Frontier, HeapQueue, QueueEntry, SortedQueue};
