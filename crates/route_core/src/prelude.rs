//! Re-exports of the most commonly used items in `route_core`.
pub use crate::error::QueryError;
pub use crate::metric::Metric;

pub use crate::search;
pub use crate::search::dijkstra::Dijkstra;
pub use crate::search::shortest_path::{ShortestPath, ShortestPathTree};

pub use crate::graph::node_index;
pub use crate::graph::Graph;
pub use crate::util::test_graphs::generate_city_graph;
