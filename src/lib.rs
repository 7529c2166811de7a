//! labgraph — a labeled undirected multigraph.
//!
//! Vertices and edges are identified by string labels. Self-loops and
//! parallel edges are allowed. On top of the store sit structural queries
//! (adjacency, degree, loops, parallel edges, completeness) and two
//! spanning-tree traversals (DFS, BFS).

pub mod cli;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{parse_edge_spec, GraphBuilder, Multigraph, TraversalOrder};
pub use types::{Edge, GraphError, GraphResult, Vertex};
