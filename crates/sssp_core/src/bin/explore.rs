use sssp_core::{prelude::*, util::cli, util::test_graphs::generate_sample_graph_owned};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cfg = cli::parse();

    let g = match &cfg.edges_file {
        Some(path) => Graph::from_csv(path)?,
        None => generate_sample_graph_owned(),
    };
    g.print_info();

    let mut dijkstra = Dijkstra::new(&g);
    let exploration = dijkstra.explore(&cfg.source)?;

    let mut distances: Vec<(&String, Weight)> = exploration
        .distances()
        .iter()
        .map(|(label, distance)| (label, *distance))
        .collect();
    distances.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(b.0)));

    let limit = cfg.limit.unwrap_or(distances.len());
    for (label, distance) in distances.iter().take(limit) {
        println!("{}\t{}", label, distance);
    }
    println!(
        "{} of {} vertices reachable from {}",
        distances.len(),
        g.num_vertices(),
        cfg.source
    );

    if let Some(target) = &cfg.target {
        let sp = exploration.backtrace(target)?;
        println!("Path: {}", sp.nodes.join(" -> "));
        println!("Costs: {}", sp.weight);
    }

    println!("{}", dijkstra.stats);
    Ok(())
}
