//! Error types for the labgraph library.

use thiserror::Error;

/// All errors that can occur while building or querying a graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The vertex label is not present in the graph.
    #[error("Vertex '{0}' not found")]
    InvalidVertex(String),

    /// A vertex with this label already exists.
    #[error("Vertex '{0}' already exists")]
    DuplicateVertex(String),

    /// An edge with this label already exists.
    #[error("Edge '{0}' already exists")]
    DuplicateEdge(String),

    /// An edge description could not be parsed (expected `label:v1:v2`).
    #[error("Invalid edge specification: {0}")]
    InvalidEdgeSpec(String),
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
