//! Minimum-weight routing over a small directed graph whose edges carry
//! independent distance, time and cost weights.
//!
//! # Basic usage
//! ```
//! use route_core::prelude::*;
//!
//! // Built-in sample dataset; use `Graph::from_csv` to load your own
//! let graph = generate_city_graph();
//!
//! let src = graph.node_index("Mumbai").unwrap();
//! let dst = graph.node_index("Bangalore").unwrap();
//!
//! let mut dijkstra = Dijkstra::new(&graph);
//! let sp = dijkstra
//!     .search(src, dst, Metric::Distance)
//!     .unwrap()
//!     .expect("no route");
//!
//! assert_eq!(sp.weight, 842.0);
//! ```
pub mod constants;
pub mod error;
pub mod graph;
pub mod metric;
pub mod prelude;
pub mod search;
pub mod statistics;
pub mod util;
