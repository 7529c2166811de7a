//! The edge struct.

use serde::Serialize;

/// An undirected, labeled edge between two vertices.
///
/// Endpoints are stored by vertex label. `v1 == v2` is a self-loop. The
/// order of `v1` and `v2` carries no meaning for the graph, only for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    /// Edge label, unique within a graph.
    pub label: String,
    /// First endpoint label.
    pub v1: String,
    /// Second endpoint label.
    pub v2: String,
}

impl Edge {
    /// Create a new edge. Endpoints are not validated until the edge is
    /// inserted into a graph.
    pub fn new(label: impl Into<String>, v1: impl Into<String>, v2: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            v1: v1.into(),
            v2: v2.into(),
        }
    }

    /// Whether both endpoints are the same vertex.
    pub fn is_loop(&self) -> bool {
        self.v1 == self.v2
    }

    /// Whether `vertex` is one of the endpoints.
    pub fn touches(&self, vertex: &str) -> bool {
        self.v1 == vertex || self.v2 == vertex
    }

    /// Whether this edge joins `a` and `b`, in either orientation.
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.v1 == a && self.v2 == b) || (self.v1 == b && self.v2 == a)
    }

    /// The endpoint opposite to `vertex`, or `None` if `vertex` is not an
    /// endpoint. For a self-loop this is `vertex` itself.
    pub fn other_endpoint(&self, vertex: &str) -> Option<&str> {
        if self.v1 == vertex {
            Some(&self.v2)
        } else if self.v2 == vertex {
            Some(&self.v1)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({}-{})", self.label, self.v1, self.v2)
    }
}
