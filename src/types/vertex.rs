//! The vertex struct.

use serde::Serialize;

/// A vertex, identified solely by its label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Vertex {
    label: String,
}

impl Vertex {
    /// Create a new vertex with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// The vertex label.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl std::fmt::Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}
