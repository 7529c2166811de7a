//! In-memory multigraph: storage, queries and traversals.

pub mod builder;
pub mod multigraph;
pub mod queries;
pub mod traversal;

pub use builder::{parse_edge_spec, GraphBuilder};
pub use multigraph::Multigraph;
pub use traversal::TraversalOrder;
