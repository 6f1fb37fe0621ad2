use std::path::{Path, PathBuf};

use reedline_repl_rs::clap::{value_parser, Arg, ArgMatches, Command};
use reedline_repl_rs::{Repl, Result};
use route_core::error::QueryError;
use route_core::prelude::*;

/// Print graph info
fn info(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    Ok(Some(format!(
        "Graph has {} nodes and {} edges",
        context.graph.nodes.len(),
        context.graph.edges.len()
    )))
}

/// List all node labels
fn nodes(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let mut out = String::new();
    for node in context.graph.nodes() {
        out.push_str(&format!("{}\n", node.label));
    }
    Ok(Some(out))
}

fn run_route(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let from = args.get_one::<String>("from").unwrap();
    let to = args.get_one::<String>("to").unwrap();
    let metric = args
        .get_one::<String>("metric")
        .map(String::as_str)
        .unwrap_or("distance");

    let metric: Metric = match metric.parse() {
        Ok(metric) => metric,
        Err(e) => return Ok(Some(e.to_string())),
    };

    let (src, dst) = match (
        context.graph.node_index(from),
        context.graph.node_index(to),
    ) {
        (Some(src), Some(dst)) => (src, dst),
        (None, _) => return Ok(Some(QueryError::UnknownNode(from.clone()).to_string())),
        (_, None) => return Ok(Some(QueryError::UnknownNode(to.clone()).to_string())),
    };

    let mut dijkstra = Dijkstra::new(&context.graph);
    match dijkstra.search(src, dst, metric) {
        Ok(Some(sp)) => {
            let mut out = String::new();
            for node in &sp.nodes {
                out.push_str(&format!(
                    "{}\n",
                    context.graph.label(*node).unwrap_or("?")
                ));
            }
            out.push_str(&format!("Total {}: {}\n", metric, sp.weight));
            out.push_str(&format!("Took: {:?}", dijkstra.stats.duration));
            Ok(Some(out))
        }
        Ok(None) => Ok(Some(format!("No available route from {} to {}", from, to))),
        Err(e) => Ok(Some(e.to_string())),
    }
}

fn measure_route(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    use rand::Rng;

    let n = *args.get_one::<usize>("n").unwrap_or(&10);

    // Select n random start and end nodes
    let mut rng = rand::thread_rng();
    let num_nodes = context.graph.nodes.len();
    let src_nodes: Vec<_> = (0..n)
        .map(|_| node_index(rng.gen_range(0..num_nodes)))
        .collect();
    let dst_nodes: Vec<_> = (0..n)
        .map(|_| node_index(rng.gen_range(0..num_nodes)))
        .collect();

    let mut res = String::new();
    // Run a query for each pair of nodes
    for (src, dst) in src_nodes.iter().zip(dst_nodes.iter()) {
        let mut dijkstra = Dijkstra::new(&context.graph);
        let sp = dijkstra.search(*src, *dst, Metric::Distance);
        if !matches!(sp, Ok(Some(_))) {
            continue;
        }
        res.push_str(&format!(
            "{} -> {}: {:?}\n",
            context.graph.label(*src).unwrap_or("?"),
            context.graph.label(*dst).unwrap_or("?"),
            dijkstra.stats.duration
        ));
    }

    Ok(Some(res))
}

#[derive(Default)]
struct Context {
    graph: Graph,
}

impl Context {
    fn new(graph: Graph) -> Self {
        Self { graph }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    // Init Graph: CSV pair from argv, or the built-in sample dataset
    let graph = match (std::env::args().nth(1), std::env::args().nth(2)) {
        (Some(nodes_file), Some(edges_file)) => {
            Graph::from_csv(Path::new(&nodes_file), Path::new(&edges_file))
                .expect("Failed to load graph from csv files")
        }
        _ => generate_city_graph(),
    };
    let context = Context::new(graph);

    let mut repl = Repl::new(context)
        .with_name("Routefinder")
        .with_version("v0.1.0")
        .with_description("Simple REPL to query multi-metric shortest routes")
        .with_banner("Welcome to Routefinder")
        .with_history(PathBuf::from(".history"), 100)
        .with_command(Command::new("info").about("Print graph info"), info)
        .with_command(Command::new("nodes").about("List all node labels"), nodes)
        .with_command(
            Command::new("route")
                .arg(
                    Arg::new("from")
                        .required(true)
                        .help("Label of source node"),
                )
                .arg(
                    Arg::new("to")
                        .required(true)
                        .help("Label of destination node"),
                )
                .arg(
                    Arg::new("metric")
                        .required(false)
                        .help("Metric to minimize: distance, time or cost"),
                )
                .about("Calculate the minimum-weight route between two nodes"),
            run_route,
        )
        .with_command(
            Command::new("measure")
                .arg(
                    Arg::new("n")
                        .value_parser(value_parser!(usize))
                        .required(false)
                        .help("Number of random routes to calculate"),
                )
                .about("Measure `n` random route calculations"),
            measure_route,
        );

    repl.run()
}
