//! Interactive shell to query shortest paths on a loaded graph
use std::path::{Path, PathBuf};
use std::time::Instant;

use log::info;
use reedline_repl_rs::clap::{value_parser, Arg, ArgMatches, Command};
use reedline_repl_rs::{Repl, Result};
use sssp_core::{
    prelude::*,
    statistics::{average_degree, max_degree},
    util::test_graphs::generate_sample_graph_owned,
};

/// Print graph info
fn info(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    Ok(Some(format!(
        "Graph has {} vertices and {} edges (average degree {:.2}, max degree {})",
        context.graph.num_vertices(),
        context.graph.num_edges(),
        average_degree(&context.graph),
        max_degree(&context.graph)
    )))
}

fn run_explore(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let src = arg(&args, "src");
    let limit = args.get_one::<usize>("n").copied();

    Ok(Some(
        explore_report(&context.graph, &src, limit).unwrap_or_else(|e| e.to_string()),
    ))
}

fn run_dist(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let src = arg(&args, "src");
    let dst = arg(&args, "dst");

    let mut dijkstra = Dijkstra::new(&context.graph);
    let out = match dijkstra.search(&src, &dst) {
        Ok(Some(sp)) => format!("{}", sp.weight),
        Ok(None) => "No path found".to_string(),
        Err(e) => e.to_string(),
    };
    Ok(Some(out))
}

fn run_path(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let src = arg(&args, "src");
    let dst = arg(&args, "dst");

    Ok(Some(
        path_report(&context.graph, &src, &dst).unwrap_or_else(|e| e.to_string()),
    ))
}

fn measure_explore(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    use rand::seq::IteratorRandom;

    let n = *args.get_one::<usize>("n").unwrap_or(&10);

    // Select n random source vertices
    let mut rng = rand::thread_rng();
    let sources = context
        .graph
        .vertices()
        .cloned()
        .choose_multiple(&mut rng, n);

    let mut res = String::new();
    for src in sources {
        let mut dijkstra = Dijkstra::new(&context.graph);
        if dijkstra.explore(&src).is_err() {
            continue;
        }
        res.push_str(&format!(
            "{}: {} settled in {:?}\n",
            src, dijkstra.stats.nodes_settled, dijkstra.stats.duration
        ));
    }

    Ok(Some(res))
}

fn arg(args: &ArgMatches, name: &str) -> String {
    args.get_one::<String>(name).cloned().unwrap_or_default()
}

/// Distances of the vertices reachable from `src`, closest first.
fn explore_report(
    graph: &Graph<String>,
    src: &String,
    limit: Option<usize>,
) -> sssp_core::error::Result<String> {
    let mut dijkstra = Dijkstra::new(graph);
    let exploration = dijkstra.explore(src)?;

    let mut order = exploration.settle_order().to_vec();
    order.truncate(limit.unwrap_or(order.len()));

    let mut out = String::new();
    for label in order {
        let distance = exploration.distance(&label).unwrap_or(Weight::INFINITY);
        out.push_str(&format!("{}\t{}\n", label, distance));
    }
    out.push_str(&format!(
        "{} of {} vertices reachable\nTook: {:?}",
        exploration.distances().len(),
        graph.num_vertices(),
        dijkstra.stats.duration
    ));
    Ok(out)
}

fn path_report(
    graph: &Graph<String>,
    src: &String,
    dst: &String,
) -> sssp_core::error::Result<String> {
    let mut dijkstra = Dijkstra::new(graph);
    let exploration = dijkstra.explore(src)?;
    let sp = exploration.backtrace(dst)?;

    let mut path = String::new();
    for node in sp.nodes {
        path.push_str(&format!("{}\n", node));
    }
    path.push_str(&format!("Costs: {}\n", sp.weight));
    path.push_str(&format!("Took: {:?}", dijkstra.stats.duration));
    Ok(path)
}

#[derive(Default)]
struct Context {
    graph: Graph<String>,
}

impl Context {
    fn new(graph: Graph<String>) -> Self {
        Self { graph }
    }
}

fn src_arg() -> Arg {
    Arg::new("src").required(true).help("Label of source vertex")
}

fn dst_arg() -> Arg {
    Arg::new("dst")
        .required(true)
        .help("Label of destination vertex")
}

fn main() -> Result<()> {
    env_logger::init();

    // Init Graph
    let now = Instant::now();
    let graph = match std::env::args().nth(1) {
        Some(path_to_csv) => {
            Graph::from_csv(Path::new(&path_to_csv)).expect("Failed to read edge list")
        }
        None => generate_sample_graph_owned(),
    };
    info!("Loaded graph in {:?}", now.elapsed());
    let context = Context::new(graph);

    let mut repl = Repl::new(context)
        .with_name("Pathfinder")
        .with_version("v0.1.0")
        .with_description("Simple REPL to explore shortest paths with Dijkstra's algorithm")
        .with_banner("Welcome to Pathfinder")
        .with_history(PathBuf::from(r".\history"), 100)
        .with_command(Command::new("info").about("Print graph info"), info)
        .with_command(
            Command::new("explore")
                .arg(src_arg())
                .arg(
                    Arg::new("n")
                        .value_parser(value_parser!(usize))
                        .required(false)
                        .help("Number of closest vertices to print"),
                )
                .about("Print the distances of all vertices reachable from `src`"),
            run_explore,
        )
        .with_command(
            Command::new("dist")
                .arg(src_arg())
                .arg(dst_arg())
                .about("Calculate the shortest distance using Dijkstra's algorithm"),
            run_dist,
        )
        .with_command(
            Command::new("path")
                .arg(src_arg())
                .arg(dst_arg())
                .about("Print the shortest path from `src` to `dst`"),
            run_path,
        )
        .with_command(
            Command::new("measure")
                .arg(
                    Arg::new("n")
                        .value_parser(value_parser!(usize))
                        .required(false)
                        .help("Number of random explorations to run"),
                )
                .about("Measure `n` explorations from random sources"),
            measure_explore,
        );

    repl.run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explore_report_lists_closest_first() {
        let g = generate_sample_graph_owned();

        let out = explore_report(&g, &"a".to_string(), Some(2)).unwrap();
        let lines: Vec<_> = out.lines().collect();

        assert_eq!(lines[0], "a\t0");
        assert_eq!(lines[1], "b\t1");
        assert_eq!(lines[2], "6 of 6 vertices reachable");
    }

    #[test]
    fn path_report_shows_route() {
        let g = generate_sample_graph_owned();

        let out = path_report(&g, &"a".to_string(), &"e".to_string()).unwrap();
        assert!(out.starts_with("a\nf\ne\nCosts: 6\n"));
    }

    #[test]
    fn reports_fail_on_unknown_labels() {
        let g = generate_sample_graph_owned();

        assert!(explore_report(&g, &"x".to_string(), None).is_err());
        assert!(path_report(&g, &"a".to_string(), &"x".to_string()).is_err());
    }
}
