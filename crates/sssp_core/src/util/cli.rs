use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(author = "Daniel Holzner", version, about, long_about = None)]
struct Cli {
    /// Label of the vertex to start the search from
    source: String,

    /// Path to a .csv edge list with the header `source,target,weight`.
    /// The built-in sample graph is used if omitted
    #[arg(short, long, value_name = "FILE")]
    edges: Option<PathBuf>,

    /// Print the shortest path to this vertex
    #[arg(short, long, value_name = "label")]
    target: Option<String>,

    /// Only print the `n` closest vertices
    #[arg(short, long, value_name = "n")]
    limit: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct Cfg {
    pub edges_file: Option<PathBuf>,
    pub source: String,
    pub target: Option<String>,
    pub limit: Option<usize>,
}

pub fn parse() -> Cfg {
    let cli = Cli::parse();

    Cfg {
        edges_file: cli.edges,
        source: cli.source,
        target: cli.target,
        limit: cli.limit,
    }
}
