use route_core::error::QueryError;
use route_core::prelude::*;
use route_core::util::cli;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cfg = cli::parse();

    let graph = Graph::from_csv(&cfg.nodes_file, &cfg.edges_file)?;
    graph.print_info();

    let metric: Metric = cfg.metric.parse()?;
    let src = graph
        .node_index(&cfg.from)
        .ok_or_else(|| QueryError::UnknownNode(cfg.from.clone()))?;
    let dst = graph
        .node_index(&cfg.to)
        .ok_or_else(|| QueryError::UnknownNode(cfg.to.clone()))?;

    let mut dijkstra = Dijkstra::new(&graph);
    match dijkstra.search(src, dst, metric)? {
        Some(sp) => {
            let labels: Vec<&str> = sp
                .nodes
                .iter()
                .filter_map(|&n| graph.label(n))
                .collect();
            println!("Shortest path based on {}: {}", metric, labels.join(" -> "));
            println!("Total {}: {}", metric, sp.weight);
            println!("{}", dijkstra.stats);
        }
        None => {
            println!("No available route from {} to {}", cfg.from, cfg.to);
        }
    }

    Ok(())
}
