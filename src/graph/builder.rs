//! Fluent API for building Multigraph instances.

use crate::types::{Edge, GraphError, GraphResult};

use super::Multigraph;

/// Fluent builder for constructing a Multigraph.
///
/// Insertions are applied immediately; the first failure is kept and
/// returned by [`GraphBuilder::build`], later calls become no-ops.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: Multigraph,
    error: Option<GraphError>,
}

impl GraphBuilder {
    /// Create a new builder for an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    fn apply(&mut self, op: impl FnOnce(&mut Multigraph) -> GraphResult<()>) -> &mut Self {
        if self.error.is_none() {
            if let Err(e) = op(&mut self.graph) {
                self.error = Some(e);
            }
        }
        self
    }

    /// Add a vertex.
    pub fn vertex(&mut self, label: &str) -> &mut Self {
        self.apply(|g| g.add_vertex(label))
    }

    /// Add several vertices, in order.
    pub fn vertices<'a>(&mut self, labels: impl IntoIterator<Item = &'a str>) -> &mut Self {
        for label in labels {
            self.vertex(label);
        }
        self
    }

    /// Add an edge between two vertices already added.
    pub fn edge(&mut self, label: &str, v1: &str, v2: &str) -> &mut Self {
        self.apply(|g| g.add_edge(label, v1, v2))
    }

    /// Add an already constructed edge.
    pub fn insert_edge(&mut self, edge: Edge) -> &mut Self {
        self.apply(|g| g.insert_edge(edge))
    }

    /// Build the final Multigraph, leaving the builder empty.
    pub fn build(&mut self) -> GraphResult<Multigraph> {
        let graph = std::mem::take(&mut self.graph);
        match self.error.take() {
            Some(e) => Err(e),
            None => Ok(graph),
        }
    }
}

/// Parse an edge written as `label:v1:v2`.
pub fn parse_edge_spec(spec: &str) -> GraphResult<Edge> {
    let parts: Vec<&str> = spec.split(':').map(str::trim).collect();
    match parts.as_slice() {
        [label, v1, v2] if !label.is_empty() && !v1.is_empty() && !v2.is_empty() => {
            Ok(Edge::new(*label, *v1, *v2))
        }
        _ => Err(GraphError::InvalidEdgeSpec(spec.to_string())),
    }
}
