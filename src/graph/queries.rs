//! Structural queries: adjacency, degree, loops, parallel edges, completeness.

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::types::{GraphResult, PAIR_SEPARATOR};

use super::Multigraph;

/// Order-independent key for an unordered vertex pair.
fn pair_key<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

impl Multigraph {
    /// Every unordered pair of distinct vertices with no edge between them,
    /// formatted as `"A-B"` with `A` inserted before `B`.
    pub fn non_adjacent_pairs(&self) -> BTreeSet<String> {
        let connected: HashSet<(&str, &str)> =
            self.edges().map(|e| pair_key(&e.v1, &e.v2)).collect();
        let labels: Vec<&str> = self.vertices().map(|v| v.label()).collect();

        let mut pairs = BTreeSet::new();
        for (i, &a) in labels.iter().enumerate() {
            for &b in &labels[i + 1..] {
                if !connected.contains(&pair_key(a, b)) {
                    pairs.insert(format!("{a}{PAIR_SEPARATOR}{b}"));
                }
            }
        }
        pairs
    }

    /// Whether any edge is a self-loop.
    pub fn has_loop(&self) -> bool {
        self.edges().any(|e| e.is_loop())
    }

    /// Degree of a vertex. A self-loop counts twice and every parallel edge
    /// counts on its own.
    pub fn degree(&self, vertex: &str) -> GraphResult<usize> {
        self.require_vertex(vertex)?;
        Ok(self
            .edges()
            .map(|e| usize::from(e.v1 == vertex) + usize::from(e.v2 == vertex))
            .sum())
    }

    /// Whether two distinct edges join the same unordered vertex pair.
    pub fn has_parallel_edges(&self) -> bool {
        let mut seen: HashSet<(&str, &str)> = HashSet::new();
        // insert() returns false on the first repeated pair
        self.edges().any(|e| !seen.insert(pair_key(&e.v1, &e.v2)))
    }

    /// Labels of every edge with `vertex` as an endpoint.
    pub fn incident_edges(&self, vertex: &str) -> GraphResult<BTreeSet<String>> {
        self.require_vertex(vertex)?;
        Ok(self
            .edges()
            .filter(|e| e.touches(vertex))
            .map(|e| e.label.clone())
            .collect())
    }

    /// Degree-sequence completeness: every vertex has degree `n - 1`.
    ///
    /// With self-loops or parallel edges this can disagree with
    /// [`Multigraph::is_simple_complete`].
    pub fn is_complete(&self) -> bool {
        let n = self.vertex_count();
        if n == 0 {
            return true;
        }

        let mut degrees: HashMap<&str, usize> = HashMap::with_capacity(n);
        for edge in self.edges() {
            *degrees.entry(edge.v1.as_str()).or_default() += 1;
            *degrees.entry(edge.v2.as_str()).or_default() += 1;
        }

        self.vertices()
            .all(|v| degrees.get(v.label()).copied().unwrap_or(0) == n - 1)
    }

    /// Strict simple-graph completeness: no self-loops and exactly one edge
    /// between every pair of distinct vertices.
    pub fn is_simple_complete(&self) -> bool {
        let n = self.vertex_count();
        !self.has_loop()
            && !self.has_parallel_edges()
            && self.edge_count() == n * n.saturating_sub(1) / 2
    }

    /// Distinct neighbors of `vertex`, in edge insertion order.
    pub fn neighbors(&self, vertex: &str) -> GraphResult<Vec<String>> {
        self.require_vertex(vertex)?;
        let mut result: Vec<String> = Vec::new();
        for edge in self.edges() {
            if let Some(other) = edge.other_endpoint(vertex) {
                if !result.iter().any(|n| n == other) {
                    result.push(other.to_string());
                }
            }
        }
        Ok(result)
    }
}
