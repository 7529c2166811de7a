//! Core graph structure — labeled vertices + labeled undirected edges.

use indexmap::IndexMap;

use crate::types::{Edge, GraphError, GraphResult, Vertex};

/// An undirected multigraph with labeled vertices and labeled edges.
///
/// Self-loops and parallel edges are allowed. Both maps keep insertion
/// order, which fixes the iteration order of every query and traversal.
/// Equality ignores insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Multigraph {
    /// All vertices, keyed by label.
    vertices: IndexMap<String, Vertex>,
    /// All edges, keyed by label.
    edges: IndexMap<String, Edge>,
}

impl Multigraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether a vertex with this label exists.
    pub fn vertex_exists(&self, label: &str) -> bool {
        self.vertices.contains_key(label)
    }

    /// Whether an edge with this label exists.
    pub fn edge_exists(&self, label: &str) -> bool {
        self.edges.contains_key(label)
    }

    /// Get a vertex by label.
    pub fn get_vertex(&self, label: &str) -> Option<&Vertex> {
        self.vertices.get(label)
    }

    /// Get an edge by label.
    pub fn get_edge(&self, label: &str) -> Option<&Edge> {
        self.edges.get(label)
    }

    /// All vertices, in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values()
    }

    /// All edges, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    /// Add a vertex.
    pub fn add_vertex(&mut self, label: &str) -> GraphResult<()> {
        if self.vertex_exists(label) {
            log::debug!("rejected duplicate vertex {label}");
            return Err(GraphError::DuplicateVertex(label.to_string()));
        }
        self.vertices.insert(label.to_string(), Vertex::new(label));
        Ok(())
    }

    /// Add an edge between two existing vertices.
    pub fn add_edge(&mut self, label: &str, v1: &str, v2: &str) -> GraphResult<()> {
        self.insert_edge(Edge::new(label, v1, v2))
    }

    /// Insert an already constructed edge, e.g. one taken from another graph.
    pub fn insert_edge(&mut self, edge: Edge) -> GraphResult<()> {
        // Validate: both endpoints exist
        for endpoint in [&edge.v1, &edge.v2] {
            if !self.vertex_exists(endpoint) {
                log::debug!("edge {} references unknown vertex {endpoint}", edge.label);
                return Err(GraphError::InvalidVertex(endpoint.clone()));
            }
        }

        // Validate: label is free
        if self.edge_exists(&edge.label) {
            log::debug!("rejected duplicate edge {}", edge.label);
            return Err(GraphError::DuplicateEdge(edge.label));
        }

        self.edges.insert(edge.label.clone(), edge);
        Ok(())
    }

    /// Fail with `InvalidVertex` unless `label` is a vertex of this graph.
    pub(crate) fn require_vertex(&self, label: &str) -> GraphResult<()> {
        if self.vertex_exists(label) {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex(label.to_string()))
        }
    }
}

impl std::fmt::Display for Multigraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let vertices: Vec<&str> = self.vertices.keys().map(String::as_str).collect();
        let edges: Vec<String> = self.edges.values().map(Edge::to_string).collect();
        writeln!(f, "{}", vertices.join(", "))?;
        write!(f, "{}", edges.join(", "))
    }
}
