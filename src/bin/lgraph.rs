//! CLI entry point for the `lgraph` command-line tool.

use std::process;

use clap::{Parser, Subcommand};

use labgraph::cli::commands;
use labgraph::graph::TraversalOrder;
use labgraph::GraphError;

#[derive(Parser)]
#[command(
    name = "lgraph",
    about = "Structural queries and spanning trees over a labeled multigraph"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// Comma-separated vertex labels, e.g. J,C,E
    #[arg(long, value_delimiter = ',')]
    vertices: Vec<String>,

    /// Comma-separated edges as label:v1:v2, e.g. a1:J:C,a2:C:E
    #[arg(long, value_delimiter = ',')]
    edges: Vec<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize the graph
    Info,
    /// List pairs of vertices with no edge between them
    NonAdjacent,
    /// Report whether any edge is a self-loop
    Loops,
    /// Degree of a vertex
    Degree {
        /// Vertex label
        vertex: String,
    },
    /// Report whether any two edges join the same pair of vertices
    Parallel,
    /// Edges incident to a vertex
    Incident {
        /// Vertex label
        vertex: String,
    },
    /// Report whether the graph is complete
    Complete {
        /// Require a simple complete graph (no loops, one edge per pair)
        #[arg(long)]
        strict: bool,
    },
    /// Distinct neighbors of a vertex
    Neighbors {
        /// Vertex label
        vertex: String,
    },
    /// Depth-first spanning tree
    Dfs {
        /// Root vertex label
        root: String,
    },
    /// Breadth-first spanning tree
    Bfs {
        /// Root vertex label
        root: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let result = commands::load_graph(&cli.vertices, &cli.edges).and_then(|graph| {
        match cli.command {
            Commands::Info => commands::cmd_info(&graph, json),
            Commands::NonAdjacent => commands::cmd_non_adjacent(&graph, json),
            Commands::Loops => commands::cmd_loops(&graph, json),
            Commands::Degree { vertex } => commands::cmd_degree(&graph, &vertex, json),
            Commands::Parallel => commands::cmd_parallel(&graph, json),
            Commands::Incident { vertex } => commands::cmd_incident(&graph, &vertex, json),
            Commands::Complete { strict } => commands::cmd_complete(&graph, strict, json),
            Commands::Neighbors { vertex } => commands::cmd_neighbors(&graph, &vertex, json),
            Commands::Dfs { root } => {
                commands::cmd_tree(&graph, &root, TraversalOrder::DepthFirst, json)
            }
            Commands::Bfs { root } => {
                commands::cmd_tree(&graph, &root, TraversalOrder::BreadthFirst, json)
            }
        }
    });

    match result {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            let code = match &e {
                GraphError::InvalidEdgeSpec(_) => 3,
                GraphError::InvalidVertex(_) => 4,
                GraphError::DuplicateVertex(_) | GraphError::DuplicateEdge(_) => 5,
            };
            process::exit(code);
        }
    }
}
