//! All data types for the labgraph library.

pub mod edge;
pub mod error;
pub mod vertex;

pub use edge::Edge;
pub use error::{GraphError, GraphResult};
pub use vertex::Vertex;

/// Separator between the two labels of a vertex pair, e.g. `"A-B"`.
pub const PAIR_SEPARATOR: char = '-';
