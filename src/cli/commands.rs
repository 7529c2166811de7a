//! CLI command implementations.
//!
//! Every command returns the text to print, either plain text or pretty JSON.

use serde_json::{json, Value};

use crate::graph::{parse_edge_spec, GraphBuilder, Multigraph, TraversalOrder};
use crate::types::GraphResult;

/// Build a graph from vertex labels and `label:v1:v2` edge specifications.
pub fn load_graph(vertices: &[String], edges: &[String]) -> GraphResult<Multigraph> {
    let mut builder = GraphBuilder::new();
    builder.vertices(vertices.iter().map(String::as_str));
    for spec in edges {
        builder.insert_edge(parse_edge_spec(spec)?);
    }
    builder.build()
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}

fn graph_json(graph: &Multigraph) -> Value {
    let vertices: Vec<&str> = graph.vertices().map(|v| v.label()).collect();
    let edges: Vec<_> = graph.edges().collect();
    json!({
        "vertices": vertices,
        "edges": edges,
    })
}

fn join<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|s| s.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Summary of the graph and its structural properties.
pub fn cmd_info(graph: &Multigraph, json: bool) -> GraphResult<String> {
    if json {
        let mut info = graph_json(graph);
        info["vertex_count"] = json!(graph.vertex_count());
        info["edge_count"] = json!(graph.edge_count());
        info["has_loop"] = json!(graph.has_loop());
        info["has_parallel_edges"] = json!(graph.has_parallel_edges());
        info["complete"] = json!(graph.is_complete());
        return Ok(pretty(&info));
    }

    let mut out = String::new();
    out.push_str(&format!("Vertices: {}\n", graph.vertex_count()));
    out.push_str(&format!("Edges: {}\n", graph.edge_count()));
    out.push_str(&format!("Has loop: {}\n", graph.has_loop()));
    out.push_str(&format!("Has parallel edges: {}\n", graph.has_parallel_edges()));
    out.push_str(&format!("Complete: {}\n", graph.is_complete()));
    out.push_str(&graph.to_string());
    Ok(out)
}

/// Pairs of distinct vertices with no edge between them.
pub fn cmd_non_adjacent(graph: &Multigraph, json: bool) -> GraphResult<String> {
    let pairs = graph.non_adjacent_pairs();
    if json {
        Ok(pretty(&json!(pairs)))
    } else {
        Ok(join(&pairs))
    }
}

/// Whether the graph has a self-loop.
pub fn cmd_loops(graph: &Multigraph, json: bool) -> GraphResult<String> {
    let has_loop = graph.has_loop();
    if json {
        Ok(json!({ "has_loop": has_loop }).to_string())
    } else {
        Ok(has_loop.to_string())
    }
}

/// Degree of a vertex.
pub fn cmd_degree(graph: &Multigraph, vertex: &str, json: bool) -> GraphResult<String> {
    let degree = graph.degree(vertex)?;
    if json {
        Ok(json!({ "vertex": vertex, "degree": degree }).to_string())
    } else {
        Ok(degree.to_string())
    }
}

/// Whether the graph has parallel edges.
pub fn cmd_parallel(graph: &Multigraph, json: bool) -> GraphResult<String> {
    let parallel = graph.has_parallel_edges();
    if json {
        Ok(json!({ "has_parallel_edges": parallel }).to_string())
    } else {
        Ok(parallel.to_string())
    }
}

/// Labels of the edges incident to a vertex.
pub fn cmd_incident(graph: &Multigraph, vertex: &str, json: bool) -> GraphResult<String> {
    let edges = graph.incident_edges(vertex)?;
    if json {
        Ok(pretty(&json!({ "vertex": vertex, "edges": edges })))
    } else {
        Ok(join(&edges))
    }
}

/// Completeness check; `strict` requires a simple complete graph.
pub fn cmd_complete(graph: &Multigraph, strict: bool, json: bool) -> GraphResult<String> {
    let complete = if strict {
        graph.is_simple_complete()
    } else {
        graph.is_complete()
    };
    if json {
        Ok(json!({ "complete": complete, "strict": strict }).to_string())
    } else {
        Ok(complete.to_string())
    }
}

/// Distinct neighbors of a vertex.
pub fn cmd_neighbors(graph: &Multigraph, vertex: &str, json: bool) -> GraphResult<String> {
    let neighbors = graph.neighbors(vertex)?;
    if json {
        Ok(pretty(&json!({ "vertex": vertex, "neighbors": neighbors })))
    } else {
        Ok(join(&neighbors))
    }
}

/// Spanning tree rooted at `root`.
pub fn cmd_tree(
    graph: &Multigraph,
    root: &str,
    order: TraversalOrder,
    json: bool,
) -> GraphResult<String> {
    let tree = graph.spanning_tree(root, order)?;
    if json {
        let mut value = graph_json(&tree);
        value["root"] = json!(root);
        Ok(pretty(&value))
    } else {
        Ok(tree.to_string())
    }
}
