//! Minimal example
use route_core::prelude::*;

fn main() {
    // Built-in sample dataset
    let graph = generate_city_graph();

    let src = graph.node_index("Kolkata").expect("Unknown node");
    let dst = graph.node_index("Chennai").expect("Unknown node");

    // Search
    let mut dijkstra = Dijkstra::new(&graph);
    let shortest_path = dijkstra
        .search(src, dst, Metric::Cost)
        .expect("Invalid query")
        .expect("Failed to find path");

    println!("Costs: {}", shortest_path.weight);
}
