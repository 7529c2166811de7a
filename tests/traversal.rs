//! Spanning-tree traversal tests (DFS, BFS).

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use labgraph::graph::{GraphBuilder, Multigraph, TraversalOrder};
use labgraph::types::GraphError;

// ==================== Helper ====================

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn paraiba() -> Multigraph {
    GraphBuilder::new()
        .vertices(["J", "C", "E", "P", "T", "M", "Z"])
        .edge("a1", "J", "C")
        .edge("a2", "C", "E")
        .edge("a3", "C", "E")
        .edge("a5", "P", "C")
        .edge("a6", "C", "M")
        .edge("a7", "C", "T")
        .edge("a8", "M", "T")
        .edge("a9", "T", "Z")
        .build()
        .unwrap()
}

fn edge_labels(graph: &Multigraph) -> BTreeSet<String> {
    graph.edges().map(|e| e.label.clone()).collect()
}

fn vertex_labels(graph: &Multigraph) -> BTreeSet<String> {
    graph.vertices().map(|v| v.label().to_string()).collect()
}

/// Assert `tree` is a spanning tree of the component of `root` in `source`.
fn assert_spanning_tree(source: &Multigraph, tree: &Multigraph, root: &str, component: usize) {
    assert_eq!(tree.vertex_count(), component);
    assert_eq!(tree.edge_count(), component - 1);
    assert!(tree.vertex_exists(root));
    assert!(!tree.has_loop());

    for edge in tree.edges() {
        assert_eq!(source.get_edge(&edge.label), Some(edge));
    }

    // n - 1 edges and connected means acyclic.
    assert_eq!(tree.bfs(root).unwrap().vertex_count(), tree.vertex_count());
}

// ==================== DFS ====================

#[test]
fn test_dfs_paraiba_from_j() {
    init_logging();
    let graph = paraiba();
    let tree = graph.dfs("J").unwrap();

    assert_spanning_tree(&graph, &tree, "J", 7);
    let expected: BTreeSet<String> = ["a1", "a2", "a5", "a6", "a8", "a9"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(edge_labels(&tree), expected);

    let order: Vec<&str> = tree.vertices().map(|v| v.label()).collect();
    assert_eq!(order, vec!["J", "C", "E", "P", "M", "T", "Z"]);
}

#[test]
fn test_dfs_paraiba_from_z() {
    let graph = paraiba();
    let tree = graph.dfs("Z").unwrap();

    assert_spanning_tree(&graph, &tree, "Z", 7);
    let order: Vec<&str> = tree.edges().map(|e| e.label.as_str()).collect();
    assert_eq!(order, vec!["a9", "a7", "a1", "a2", "a5", "a6"]);
}

#[test]
fn test_dfs_orders_by_edge_label_not_neighbor() {
    // "a10" sorts before "a2", so Z is reached before Y.
    let graph = GraphBuilder::new()
        .vertices(["X", "Y", "Z"])
        .edge("a2", "X", "Y")
        .edge("a10", "X", "Z")
        .edge("b", "Y", "Z")
        .build()
        .unwrap();
    let tree = graph.dfs("X").unwrap();

    let order: Vec<&str> = tree.edges().map(|e| e.label.as_str()).collect();
    assert_eq!(order, vec!["a10", "b"]);
}

#[test]
fn test_dfs_unknown_root() {
    let graph = paraiba();
    assert_eq!(
        graph.dfs("Q"),
        Err(GraphError::InvalidVertex("Q".to_string()))
    );
}

#[test]
fn test_dfs_single_vertex_with_loop() {
    let graph = GraphBuilder::new()
        .vertex("A")
        .edge("l", "A", "A")
        .build()
        .unwrap();
    let tree = graph.dfs("A").unwrap();
    assert_eq!(tree.vertex_count(), 1);
    assert_eq!(tree.edge_count(), 0);
}

#[test]
fn test_dfs_skips_self_loops() {
    let graph = GraphBuilder::new()
        .vertices(["A", "B"])
        .edge("a", "A", "A")
        .edge("b", "B", "A")
        .build()
        .unwrap();
    let tree = graph.dfs("A").unwrap();
    assert_eq!(edge_labels(&tree), BTreeSet::from(["b".to_string()]));
}

#[test]
fn test_dfs_disconnected_stays_in_component() {
    let graph = GraphBuilder::new()
        .vertices(["A", "B", "C", "D"])
        .edge("e1", "A", "B")
        .edge("e2", "C", "D")
        .build()
        .unwrap();
    let tree = graph.dfs("A").unwrap();
    assert_spanning_tree(&graph, &tree, "A", 2);
    assert_eq!(
        vertex_labels(&tree),
        BTreeSet::from(["A".to_string(), "B".to_string()])
    );
}

#[test]
fn test_dfs_long_path_does_not_recurse() {
    let n = 20_000;
    let mut graph = Multigraph::new();
    for i in 0..n {
        graph.add_vertex(&format!("v{i}")).unwrap();
    }
    for i in 1..n {
        graph
            .add_edge(&format!("e{i}"), &format!("v{}", i - 1), &format!("v{i}"))
            .unwrap();
    }
    let tree = graph.dfs("v0").unwrap();
    assert_eq!(tree.vertex_count(), n);
    assert_eq!(tree.edge_count(), n - 1);
}

#[test]
fn test_dfs_leaves_source_untouched() {
    let graph = paraiba();
    let before = graph.clone();
    let _ = graph.dfs("C").unwrap();
    assert_eq!(graph, before);
}

// ==================== BFS ====================

#[test]
fn test_bfs_paraiba_from_j() {
    init_logging();
    let graph = paraiba();
    let tree = graph.bfs("J").unwrap();

    assert_spanning_tree(&graph, &tree, "J", 7);
    let order: Vec<&str> = tree.edges().map(|e| e.label.as_str()).collect();
    assert_eq!(order, vec!["a1", "a2", "a5", "a6", "a7", "a9"]);

    let vertices: Vec<&str> = tree.vertices().map(|v| v.label()).collect();
    assert_eq!(vertices, vec!["J", "C", "E", "P", "M", "T", "Z"]);
}

#[test]
fn test_bfs_follows_edges_in_either_orientation() {
    // Both edges are stored with the newly reached vertex first.
    let graph = GraphBuilder::new()
        .vertices(["A", "B", "C"])
        .edge("x", "B", "A")
        .edge("y", "C", "B")
        .build()
        .unwrap();
    let tree = graph.bfs("A").unwrap();
    assert_spanning_tree(&graph, &tree, "A", 3);
}

#[test]
fn test_bfs_expands_level_by_level() {
    // Root R with children A, B; A has child C, B has child D.
    let graph = GraphBuilder::new()
        .vertices(["R", "A", "B", "C", "D"])
        .edge("ra", "R", "A")
        .edge("rb", "R", "B")
        .edge("ac", "A", "C")
        .edge("bd", "B", "D")
        .edge("cd", "C", "D")
        .build()
        .unwrap();
    let tree = graph.bfs("R").unwrap();

    let order: Vec<&str> = tree.vertices().map(|v| v.label()).collect();
    assert_eq!(order, vec!["R", "A", "B", "C", "D"]);
    assert!(!tree.edge_exists("cd"));
}

#[test]
fn test_bfs_unknown_root() {
    let graph = paraiba();
    assert!(matches!(graph.bfs("Q"), Err(GraphError::InvalidVertex(_))));
}

#[test]
fn test_bfs_disconnected_stays_in_component() {
    let graph = GraphBuilder::new()
        .vertices(["A", "B", "C", "D", "E"])
        .edge("e1", "A", "B")
        .edge("e2", "B", "C")
        .edge("e3", "D", "E")
        .build()
        .unwrap();
    let tree = graph.bfs("E").unwrap();
    assert_spanning_tree(&graph, &tree, "E", 2);
}

#[test]
fn test_spanning_tree_dispatch() {
    let graph = paraiba();
    assert_eq!(
        graph.spanning_tree("J", TraversalOrder::DepthFirst).unwrap(),
        graph.dfs("J").unwrap()
    );
    assert_eq!(
        graph.spanning_tree("J", TraversalOrder::BreadthFirst).unwrap(),
        graph.bfs("J").unwrap()
    );
}

// ==================== Random Graphs ====================

/// Size of the connected component containing `root`, computed through
/// `neighbors` only.
fn component_size(graph: &Multigraph, root: &str) -> usize {
    let mut seen: BTreeSet<String> = BTreeSet::new();
    let mut stack = vec![root.to_string()];
    while let Some(v) = stack.pop() {
        if !seen.insert(v.clone()) {
            continue;
        }
        stack.extend(graph.neighbors(&v).unwrap());
    }
    seen.len()
}

#[test]
fn test_random_graphs_yield_spanning_trees() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(42);

    for round in 0..30 {
        let n = rng.gen_range(1..40);
        let mut graph = Multigraph::new();
        for i in 0..n {
            graph.add_vertex(&format!("v{i}")).unwrap();
        }
        for i in 0..rng.gen_range(0..2 * n) {
            let a = rng.gen_range(0..n);
            let b = rng.gen_range(0..n);
            graph
                .add_edge(&format!("e{i}"), &format!("v{a}"), &format!("v{b}"))
                .unwrap();
        }

        let root = format!("v{}", rng.gen_range(0..n));
        let component = component_size(&graph, &root);

        let dfs = graph.dfs(&root).unwrap();
        assert_spanning_tree(&graph, &dfs, &root, component);

        let bfs = graph.bfs(&root).unwrap();
        assert_spanning_tree(&graph, &bfs, &root, component);

        assert_eq!(vertex_labels(&dfs), vertex_labels(&bfs), "round {round}");
    }
}
