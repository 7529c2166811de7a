//! Spanning-tree traversals (DFS, BFS).
//!
//! Both traversals return a fresh [`Multigraph`] holding the tree: new
//! vertices with the source labels and clones of the source edges. The
//! source graph is never modified. Both use explicit stacks/queues, so
//! depth is not bounded by the call stack.

use std::collections::{HashMap, VecDeque};

use crate::types::{Edge, GraphResult};

use super::Multigraph;

/// Order in which a spanning tree is grown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOrder {
    /// Depth-first, incident edges tried in edge-label order.
    DepthFirst,
    /// Breadth-first, incident edges tried in edge insertion order.
    BreadthFirst,
}

/// Incident edges per vertex label, in edge insertion order.
type Incidence<'g> = HashMap<&'g str, Vec<&'g Edge>>;

/// Build the incidence lists in one pass. A self-loop is listed once.
fn incidence(graph: &Multigraph) -> Incidence<'_> {
    let mut index: Incidence<'_> = HashMap::with_capacity(graph.vertex_count());
    for edge in graph.edges() {
        index.entry(edge.v1.as_str()).or_default().push(edge);
        if !edge.is_loop() {
            index.entry(edge.v2.as_str()).or_default().push(edge);
        }
    }
    index
}

/// One level of the DFS stack: a vertex and the incident edges not yet tried.
struct DfsFrame<'g> {
    vertex: &'g str,
    pending: std::vec::IntoIter<&'g Edge>,
}

impl<'g> DfsFrame<'g> {
    fn new(incidence: &Incidence<'g>, vertex: &'g str) -> Self {
        let mut incident = incidence.get(vertex).cloned().unwrap_or_default();
        incident.sort_by(|a, b| a.label.cmp(&b.label));
        Self {
            vertex,
            pending: incident.into_iter(),
        }
    }
}

/// Add `next` and the edge that reached it to the tree.
fn extend_tree(tree: &mut Multigraph, next: &str, edge: &Edge) -> GraphResult<()> {
    log::trace!("tree += {next} via {}", edge.label);
    tree.add_vertex(next)?;
    tree.insert_edge(edge.clone())
}

impl Multigraph {
    /// Depth-first spanning tree of the component containing `root`.
    ///
    /// At every vertex the incident edges are tried in lexicographic order of
    /// their labels; an edge is taken when its far endpoint is not yet in the
    /// tree. Stops as soon as the tree covers every vertex of the graph.
    pub fn dfs(&self, root: &str) -> GraphResult<Multigraph> {
        self.require_vertex(root)?;

        let mut tree = Multigraph::new();
        tree.add_vertex(root)?;

        let incidence = incidence(self);
        let mut stack: Vec<DfsFrame<'_>> = vec![DfsFrame::new(&incidence, root)];

        while tree.vertex_count() < self.vertex_count() {
            let Some(frame) = stack.last_mut() else {
                break;
            };
            let current = frame.vertex;

            match frame.pending.next() {
                Some(edge) => {
                    let Some(next) = edge.other_endpoint(current) else {
                        continue;
                    };
                    if !tree.vertex_exists(next) {
                        extend_tree(&mut tree, next, edge)?;
                        stack.push(DfsFrame::new(&incidence, next));
                    }
                }
                None => {
                    stack.pop();
                }
            }
        }

        log::debug!(
            "dfs from {root}: {} vertices, {} edges",
            tree.vertex_count(),
            tree.edge_count()
        );
        Ok(tree)
    }

    /// Breadth-first spanning tree of the component containing `root`.
    ///
    /// Vertices are expanded in FIFO order. Each expanded vertex scans all of
    /// its incident edges in edge insertion order, in either orientation;
    /// self-loops are skipped.
    pub fn bfs(&self, root: &str) -> GraphResult<Multigraph> {
        self.require_vertex(root)?;

        let mut tree = Multigraph::new();
        tree.add_vertex(root)?;

        let incidence = incidence(self);
        let mut queue: VecDeque<&str> = VecDeque::new();
        queue.push_back(root);

        while let Some(current) = queue.pop_front() {
            if tree.vertex_count() == self.vertex_count() {
                break;
            }

            let incident = incidence.get(current).into_iter().flatten();
            for &edge in incident.filter(|e| !e.is_loop()) {
                let Some(next) = edge.other_endpoint(current) else {
                    continue;
                };
                if tree.vertex_exists(next) {
                    continue;
                }
                extend_tree(&mut tree, next, edge)?;
                queue.push_back(next);
            }
        }

        log::debug!(
            "bfs from {root}: {} vertices, {} edges",
            tree.vertex_count(),
            tree.edge_count()
        );
        Ok(tree)
    }

    /// Spanning tree grown in the given order.
    pub fn spanning_tree(&self, root: &str, order: TraversalOrder) -> GraphResult<Multigraph> {
        match order {
            TraversalOrder::DepthFirst => self.dfs(root),
            TraversalOrder::BreadthFirst => self.bfs(root),
        }
    }
}
