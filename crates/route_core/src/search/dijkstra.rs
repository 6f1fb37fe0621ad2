use std::collections::BinaryHeap;

use log::{debug, info};
use rustc_hash::FxHashMap;

use crate::constants::Weight;
use crate::error::QueryError;
use crate::graph::{Graph, NodeIndex};
use crate::metric::Metric;
use crate::search::shortest_path::{ShortestPath, ShortestPathTree};
use crate::statistics::SearchStats;

/// Frontier entry: a node together with the accumulated weight it was
/// inserted at. Ordering is inverted so `BinaryHeap` acts as a min-heap.
#[derive(Debug)]
pub(crate) struct Candidate {
    pub(crate) node_idx: NodeIndex,
    pub(crate) weight: Weight,
}

impl Candidate {
    pub(crate) fn new(node_idx: NodeIndex, weight: Weight) -> Self {
        Self { node_idx, weight }
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        other.weight.partial_cmp(&self.weight)
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        other.weight == self.weight
    }
}

impl Eq for Candidate {}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .weight
            .partial_cmp(&self.weight)
            .unwrap_or(std::cmp::Ordering::Equal)
    }
}

/// Dijkstra's algorithm over a selectable edge-weight metric.
///
/// Each query is a stateless pure computation over the borrowed graph;
/// identical inputs always yield identical results.
pub struct Dijkstra<'a> {
    pub stats: SearchStats,
    g: &'a Graph,
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Dijkstra {
            g: graph,
            stats: SearchStats::default(),
        }
    }

    /// Computes the full single-source shortest-path tree from `source`
    /// under `metric`, draining the frontier completely. Nodes absent from
    /// the tree are unreachable.
    pub fn compute(
        &mut self,
        source: NodeIndex,
        metric: Metric,
    ) -> Result<ShortestPathTree, QueryError> {
        self.check_node(source)?;

        let node_data = self.run(source, None, metric);

        debug!(
            "Tree from {:?} ({}): {} nodes reached, {} settled",
            source,
            metric,
            node_data.len(),
            self.stats.nodes_settled
        );

        Ok(ShortestPathTree::new(source, node_data))
    }

    /// Point-to-point query: stops as soon as `target` is settled and
    /// reconstructs the path. `Ok(None)` means no route exists.
    pub fn search(
        &mut self,
        source: NodeIndex,
        target: NodeIndex,
        metric: Metric,
    ) -> Result<Option<ShortestPath>, QueryError> {
        self.check_node(source)?;
        self.check_node(target)?;

        if source == target {
            self.stats.init();
            self.stats.nodes_settled += 1;
            self.stats.finish();
            return Ok(Some(ShortestPath::new(vec![source], 0.0)));
        }

        let node_data = self.run(source, Some(target), metric);

        let sp = super::reconstruct_path(target, source, &node_data);
        if let Some(sp) = &sp {
            debug!("Path found: {:?}", sp);
            info!(
                "Path found: {:?}/{} nodes settled",
                self.stats.duration.unwrap(),
                self.stats.nodes_settled
            );
        } else {
            info!(
                "No path found: {:?}/{} nodes settled",
                self.stats.duration.unwrap(),
                self.stats.nodes_settled
            );
        }

        Ok(sp)
    }

    fn run(
        &mut self,
        source: NodeIndex,
        target: Option<NodeIndex>,
        metric: Metric,
    ) -> FxHashMap<NodeIndex, (Weight, Option<NodeIndex>)> {
        self.stats.init();

        let mut node_data: FxHashMap<NodeIndex, (Weight, Option<NodeIndex>)> =
            FxHashMap::default();
        node_data.insert(source, (0.0, None));

        let mut queue = BinaryHeap::new();
        queue.push(Candidate::new(source, 0.0));

        while let Some(Candidate { weight, node_idx }) = queue.pop() {
            // The frontier admits duplicates; skip entries made stale by a
            // cheaper relaxation
            if weight > node_data.get(&node_idx).map_or(Weight::INFINITY, |d| d.0) {
                continue;
            }
            self.stats.nodes_settled += 1;

            if Some(node_idx) == target {
                break;
            }

            for (_, edge) in self.g.neighbors_outgoing(node_idx) {
                let new_weight = weight + edge.weights.get(metric);
                if new_weight
                    < node_data
                        .get(&edge.target)
                        .map_or(Weight::INFINITY, |d| d.0)
                {
                    node_data.insert(edge.target, (new_weight, Some(node_idx)));
                    queue.push(Candidate::new(edge.target, new_weight));
                }
            }
        }
        self.stats.finish();

        node_data
    }

    fn check_node(&self, node: NodeIndex) -> Result<(), QueryError> {
        if self.g.node(node).is_none() {
            return Err(QueryError::UnknownNode(format!("#{}", node.index())));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::node_index;
    use crate::search::{assert_no_path, assert_path};
    use crate::util::test_graphs::{generate_city_graph, generate_simple_graph};

    fn init_log() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn metric_selects_route() {
        // A -> B -> D     cheap in time and cost
        // A -> C -> D     cheap in distance
        // E               isolated
        init_log();
        let g = generate_simple_graph();
        let mut d = Dijkstra::new(&g);

        assert_path(
            vec![0, 2, 3],
            2.0,
            d.search(node_index(0), node_index(3), Metric::Distance).unwrap(),
        );
        assert_path(
            vec![0, 1, 3],
            2.0,
            d.search(node_index(0), node_index(3), Metric::Time).unwrap(),
        );
        assert_path(
            vec![0, 1, 3],
            80.0,
            d.search(node_index(0), node_index(3), Metric::Cost).unwrap(),
        );
    }

    #[test]
    fn unreachable_target() {
        init_log();
        let g = generate_simple_graph();
        let mut d = Dijkstra::new(&g);

        for metric in Metric::ALL {
            // E is isolated in both directions
            assert_no_path(d.search(node_index(0), node_index(4), metric).unwrap());
            assert_no_path(d.search(node_index(4), node_index(0), metric).unwrap());
        }
    }

    #[test]
    fn source_equals_target() {
        let g = generate_simple_graph();
        let mut d = Dijkstra::new(&g);

        assert_path(
            vec![0],
            0.0,
            d.search(node_index(0), node_index(0), Metric::Distance).unwrap(),
        );
    }

    #[test]
    fn unknown_node_fails_fast() {
        let g = generate_simple_graph();
        let mut d = Dijkstra::new(&g);

        let res = d.search(node_index(99), node_index(0), Metric::Distance);
        assert!(matches!(res, Err(QueryError::UnknownNode(_))));

        let res = d.search(node_index(0), node_index(99), Metric::Distance);
        assert!(matches!(res, Err(QueryError::UnknownNode(_))));

        let res = d.compute(node_index(99), Metric::Distance);
        assert!(matches!(res, Err(QueryError::UnknownNode(_))));
    }

    #[test]
    fn city_graph_direct_flight_wins() {
        init_log();
        let g = generate_city_graph();
        let mut d = Dijkstra::new(&g);

        let mumbai = g.node_index("Mumbai").unwrap();
        let bangalore = g.node_index("Bangalore").unwrap();

        // Direct edge 842 beats any 2-hop route (e.g. via Pune: 118 + 731)
        let sp = d.search(mumbai, bangalore, Metric::Distance).unwrap().unwrap();
        assert_eq!(sp.nodes, vec![mumbai, bangalore]);
        assert_eq!(sp.weight, 842.0);
    }

    #[test]
    fn city_graph_stopover_is_cheaper() {
        init_log();
        let g = generate_city_graph();
        let mut d = Dijkstra::new(&g);

        let kolkata = g.node_index("Kolkata").unwrap();
        let chennai = g.node_index("Chennai").unwrap();
        let bangalore = g.node_index("Bangalore").unwrap();

        // Direct edge costs 6700, via Hyderabad 3200 + 3100 = 6300,
        // via Bangalore 4500 + 1200 = 5700
        let sp = d.search(kolkata, chennai, Metric::Cost).unwrap().unwrap();
        assert_eq!(sp.nodes, vec![kolkata, bangalore, chennai]);
        assert_eq!(sp.weight, 5700.0);
    }

    #[test]
    fn city_graph_trivial_roundtrip() {
        let g = generate_city_graph();
        let mut d = Dijkstra::new(&g);

        let delhi = g.node_index("Delhi").unwrap();
        let sp = d.search(delhi, delhi, Metric::Distance).unwrap().unwrap();
        assert_eq!(sp.nodes, vec![delhi]);
        assert_eq!(sp.weight, 0.0);
    }

    #[test]
    fn full_tree_matches_point_to_point() {
        init_log();
        let g = generate_city_graph();
        let mut d = Dijkstra::new(&g);

        let mumbai = g.node_index("Mumbai").unwrap();
        let tree = d.compute(mumbai, Metric::Time).unwrap();

        assert_eq!(tree.weight(mumbai), Some(0.0));
        assert_eq!(tree.reached(), g.nodes.len());

        for target in 0..g.nodes.len() {
            let target = node_index(target);
            let sp = d.search(mumbai, target, Metric::Time).unwrap().unwrap();
            assert_eq!(tree.path_to(target), Some(sp.clone()));
            assert_eq!(tree.weight(target), Some(sp.weight));
        }
    }

    #[test]
    fn identical_queries_are_idempotent() {
        let g = generate_city_graph();
        let mut d = Dijkstra::new(&g);

        let src = g.node_index("Pune").unwrap();
        let dst = g.node_index("Kolkata").unwrap();

        let first = d.search(src, dst, Metric::Cost).unwrap();
        let second = d.search(src, dst, Metric::Cost).unwrap();
        assert_eq!(first, second);

        let tree_a = d.compute(src, Metric::Cost).unwrap();
        let tree_b = d.compute(src, Metric::Cost).unwrap();
        assert_eq!(tree_a, tree_b);
    }

    #[test]
    fn reachability_is_metric_independent() {
        let g = generate_simple_graph();
        let mut d = Dijkstra::new(&g);

        let reached: Vec<usize> = Metric::ALL
            .iter()
            .map(|&m| d.compute(node_index(0), m).unwrap().reached())
            .collect();

        assert_eq!(reached, vec![reached[0]; 3]);
        for metric in Metric::ALL {
            let tree = d.compute(node_index(0), metric).unwrap();
            assert!(!tree.is_reachable(node_index(4)));
        }
    }

    #[test]
    fn random_queries_on_city_graph() {
        init_log();
        let g = generate_city_graph();
        let num_nodes = g.nodes.len();

        let mut runner = proptest::test_runner::TestRunner::default();

        runner
            .run(&(0..num_nodes, 0..num_nodes), |(a, b)| {
                let src = node_index(a);
                let dst = node_index(b);

                for metric in Metric::ALL {
                    let mut dijkstra = Dijkstra::new(&g);
                    let sp = dijkstra
                        .search(src, dst, metric)
                        .unwrap()
                        .expect("city graph is strongly connected");

                    assert!(sp.weight >= 0.0);
                    assert_eq!(sp.source(), Some(src));
                    assert_eq!(sp.target(), Some(dst));

                    // Total weight equals the sum of edge weights along the path
                    let sum: Weight = sp
                        .nodes
                        .windows(2)
                        .map(|w| g.edge_between(w[0], w[1]).unwrap().weights.get(metric))
                        .sum();
                    approx::assert_abs_diff_eq!(sum, sp.weight, epsilon = 1e-9);

                    let tree = dijkstra.compute(src, metric).unwrap();
                    assert_eq!(tree.weight(src), Some(0.0));
                    assert_eq!(tree.path_to(dst), Some(sp));
                }
                Ok(())
            })
            .unwrap();
    }
}
