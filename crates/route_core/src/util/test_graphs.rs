use crate::{
    edge, node,
    graph::Graph,
};

/// Seven-city airport graph with per-edge (distance, time, cost) weights.
///
/// Every city links to every other, but weights are not symmetric: the
/// return leg of a connection may take longer or cost more. Doubles as the
/// fallback dataset for the demo binary and the repl.
pub fn generate_city_graph() -> Graph {
    let mut g = Graph::new();

    let mumbai = g.add_node(node!("Mumbai", 19.0902, 72.8628));
    let delhi = g.add_node(node!("Delhi", 28.5561, 77.1000));
    let bangalore = g.add_node(node!("Bangalore", 13.1989, 77.7069));
    let kolkata = g.add_node(node!("Kolkata", 22.6536, 88.4451));
    let chennai = g.add_node(node!("Chennai", 12.9822, 80.1642));
    let hyderabad = g.add_node(node!("Hyderabad", 17.2403, 78.4294));
    let pune = g.add_node(node!("Pune", 18.5793, 73.9089));

    g.add_edge(edge!(mumbai => delhi; 1148.0, 145.0, 4352.0));
    g.add_edge(edge!(mumbai => bangalore; 842.0, 110.0, 3188.0));
    g.add_edge(edge!(mumbai => kolkata; 1652.0, 170.0, 4450.0));
    g.add_edge(edge!(mumbai => chennai; 1029.0, 115.0, 5130.0));
    g.add_edge(edge!(mumbai => hyderabad; 623.0, 75.0, 3300.0));
    g.add_edge(edge!(mumbai => pune; 118.0, 60.0, 1050.0));

    g.add_edge(edge!(delhi => mumbai; 1148.0, 150.0, 4200.0));
    g.add_edge(edge!(delhi => bangalore; 1740.0, 165.0, 5000.0));
    g.add_edge(edge!(delhi => kolkata; 1305.0, 130.0, 5015.0));
    g.add_edge(edge!(delhi => chennai; 1756.0, 170.0, 6500.0));
    g.add_edge(edge!(delhi => hyderabad; 1253.0, 130.0, 4050.0));
    g.add_edge(edge!(delhi => pune; 1173.0, 125.0, 6291.0));

    g.add_edge(edge!(bangalore => mumbai; 842.0, 100.0, 3200.0));
    g.add_edge(edge!(bangalore => delhi; 1740.0, 170.0, 5200.0));
    g.add_edge(edge!(bangalore => kolkata; 1561.0, 155.0, 4300.0));
    g.add_edge(edge!(bangalore => chennai; 284.0, 70.0, 1200.0));
    g.add_edge(edge!(bangalore => hyderabad; 560.0, 90.0, 2200.0));
    g.add_edge(edge!(bangalore => pune; 731.0, 95.0, 2800.0));

    g.add_edge(edge!(kolkata => mumbai; 1652.0, 180.0, 4700.0));
    g.add_edge(edge!(kolkata => delhi; 1305.0, 140.0, 5200.0));
    g.add_edge(edge!(kolkata => bangalore; 1561.0, 175.0, 4500.0));
    g.add_edge(edge!(kolkata => chennai; 1694.0, 165.0, 6700.0));
    g.add_edge(edge!(kolkata => hyderabad; 792.0, 100.0, 3200.0));
    g.add_edge(edge!(kolkata => pune; 1694.0, 165.0, 6700.0));

    g.add_edge(edge!(chennai => mumbai; 1029.0, 115.0, 5130.0));
    g.add_edge(edge!(chennai => delhi; 1756.0, 170.0, 6500.0));
    g.add_edge(edge!(chennai => bangalore; 284.0, 70.0, 1200.0));
    g.add_edge(edge!(chennai => kolkata; 1694.0, 165.0, 6700.0));
    g.add_edge(edge!(chennai => hyderabad; 630.0, 90.0, 3100.0));
    g.add_edge(edge!(chennai => pune; 1000.0, 120.0, 5000.0));

    g.add_edge(edge!(hyderabad => mumbai; 623.0, 75.0, 3300.0));
    g.add_edge(edge!(hyderabad => delhi; 1253.0, 130.0, 4050.0));
    g.add_edge(edge!(hyderabad => bangalore; 560.0, 90.0, 2200.0));
    g.add_edge(edge!(hyderabad => kolkata; 792.0, 100.0, 3200.0));
    g.add_edge(edge!(hyderabad => chennai; 630.0, 90.0, 3100.0));
    g.add_edge(edge!(hyderabad => pune; 711.0, 100.0, 3400.0));

    g.add_edge(edge!(pune => mumbai; 118.0, 60.0, 1050.0));
    g.add_edge(edge!(pune => delhi; 1173.0, 125.0, 6291.0));
    g.add_edge(edge!(pune => bangalore; 731.0, 95.0, 2800.0));
    g.add_edge(edge!(pune => kolkata; 1694.0, 165.0, 6700.0));
    g.add_edge(edge!(pune => chennai; 1000.0, 120.0, 5000.0));
    g.add_edge(edge!(pune => hyderabad; 711.0, 100.0, 3400.0));

    g
}

/// Small graph where the best route depends on the metric.
///
/// A -> B -> D     cheap in time and cost
/// A -> C -> D     cheap in distance
/// E               isolated
pub fn generate_simple_graph() -> Graph {
    let mut g = Graph::new();

    let a = g.add_node(node!("A", 0.0, 0.0));
    let b = g.add_node(node!("B", 0.0, 0.0));
    let c = g.add_node(node!("C", 0.0, 0.0));
    let d = g.add_node(node!("D", 0.0, 0.0));
    let _e = g.add_node(node!("E", 0.0, 0.0));

    g.add_edge(edge!(a => b; 10.0, 1.0, 40.0));
    g.add_edge(edge!(b => d; 10.0, 1.0, 40.0));
    g.add_edge(edge!(a => c; 1.0, 5.0, 100.0));
    g.add_edge(edge!(c => d; 1.0, 5.0, 100.0));

    g
}
