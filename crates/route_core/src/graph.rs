use std::path::Path;

use anyhow::Context;
use log::debug;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::constants::Weight;
use crate::metric::Metric;

/// Node identifier.
///
/// Indices are dense and only valid for the graph that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub struct NodeIndex(u32);

impl NodeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        NodeIndex(x as u32)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for NodeIndex {
    fn from(ix: u32) -> Self {
        NodeIndex(ix)
    }
}

/// Short version of `NodeIndex::new`
pub fn node_index(index: usize) -> NodeIndex {
    NodeIndex::new(index)
}

/// Edge identifier.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize)]
pub struct EdgeIndex(u32);

impl EdgeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        EdgeIndex(x as u32)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A vertex of the route graph: a unique label plus the coordinates the
/// map-drawing boundary uses to plot it.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Node {
    pub label: String,
    pub lat: f64,
    pub lon: f64,
}

impl Node {
    pub fn new(label: impl Into<String>, lat: f64, lon: f64) -> Self {
        Node {
            label: label.into(),
            lat,
            lon,
        }
    }
}

/// The weights an edge carries, one per [`Metric`].
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct EdgeWeights {
    pub distance: Weight,
    pub time: Weight,
    pub cost: Weight,
}

impl EdgeWeights {
    pub fn new(distance: Weight, time: Weight, cost: Weight) -> Self {
        EdgeWeights {
            distance,
            time,
            cost,
        }
    }

    #[inline]
    pub fn get(&self, metric: Metric) -> Weight {
        match metric {
            Metric::Distance => self.distance,
            Metric::Time => self.time,
            Metric::Cost => self.cost,
        }
    }

    /// All weights finite and non-negative. Required for Dijkstra.
    pub fn is_valid(&self) -> bool {
        Metric::ALL
            .iter()
            .all(|&m| self.get(m).is_finite() && self.get(m) >= 0.0)
    }

    fn min(self, other: Self) -> Self {
        EdgeWeights {
            distance: self.distance.min(other.distance),
            time: self.time.min(other.time),
            cost: self.cost.min(other.cost),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Edge {
    pub source: NodeIndex,
    pub target: NodeIndex,
    pub weights: EdgeWeights,
}

impl Edge {
    pub fn new(source: NodeIndex, target: NodeIndex, weights: EdgeWeights) -> Self {
        Edge {
            source,
            target,
            weights,
        }
    }
}

/// Row shape of the edges CSV: endpoints by label, one column per metric.
#[derive(Debug, Deserialize)]
struct EdgeRecord {
    source: String,
    target: String,
    distance: Weight,
    time: Weight,
    cost: Weight,
}

/// Directed graph with labeled nodes and multi-metric edge weights.
///
/// The adjacency structure is read-only from the search engine's point of
/// view: queries borrow the graph immutably, so concurrent queries over one
/// graph are safe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    edges_out: Vec<Vec<EdgeIndex>>,
    index: FxHashMap<String, NodeIndex>,
}

impl Graph {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            edges_out: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    pub fn with_capacity(num_nodes: usize, num_edges: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(num_nodes),
            edges: Vec::with_capacity(num_edges),
            edges_out: Vec::with_capacity(num_nodes),
            index: FxHashMap::default(),
        }
    }

    /// Adds a new node to the graph.
    ///
    /// **Panics** if a node with the same label already exists.
    ///
    /// Returns the index of the new node.
    pub fn add_node(&mut self, node: Node) -> NodeIndex {
        let node_idx = NodeIndex::new(self.nodes.len());

        assert!(
            !self.index.contains_key(&node.label),
            "Duplicate node label `{}`",
            node.label
        );

        // Create new entry in adjacency list for new node
        self.edges_out.push(Vec::new());
        self.index.insert(node.label.clone(), node_idx);
        self.nodes.push(node);

        node_idx
    }

    /// Add a new `edge` to the graph.
    ///
    /// **Panics** if the source or target node does not exist, or if any
    /// weight is negative or non-finite.
    ///
    /// Returns the index of the new created edge.
    pub fn add_edge(&mut self, edge: Edge) -> EdgeIndex {
        let edge_idx = EdgeIndex::new(self.edges.len());

        assert!(
            edge.source.index() < self.nodes.len(),
            "Source node index ({}) does not exist",
            edge.source.index()
        );
        assert!(
            edge.target.index() < self.nodes.len(),
            "Target node index ({}) does not exist",
            edge.target.index()
        );
        assert!(
            edge.weights.is_valid(),
            "Edge weights must be finite and non-negative: {:?}",
            edge.weights
        );

        // If an edge already exists between source and target, keep the
        // cheaper weight per metric instead of adding a parallel edge
        for &existing in &self.edges_out[edge.source.index()] {
            if self.edges[existing.index()].target == edge.target {
                let merged = self.edges[existing.index()].weights.min(edge.weights);
                self.edges[existing.index()].weights = merged;
                return existing;
            }
        }

        self.edges_out[edge.source.index()].push(edge_idx);
        self.edges.push(edge);

        edge_idx
    }

    pub fn add_edges(&mut self, edges: Vec<Edge>) {
        for edge in edges {
            self.add_edge(edge);
        }
    }

    pub fn node(&self, node_idx: NodeIndex) -> Option<&Node> {
        self.nodes.get(node_idx.index())
    }

    /// Resolves a node label to its index.
    pub fn node_index(&self, label: &str) -> Option<NodeIndex> {
        self.index.get(label).copied()
    }

    pub fn label(&self, node_idx: NodeIndex) -> Option<&str> {
        self.node(node_idx).map(|n| n.label.as_str())
    }

    /// Returns an iterator over all nodes of the graph
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Returns an iterator over all edges of the graph
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    pub fn neighbors_outgoing(
        &self,
        node_idx: NodeIndex,
    ) -> impl Iterator<Item = (EdgeIndex, &Edge)> + '_ {
        self.edges_out[node_idx.index()]
            .iter()
            .map(move |edge_idx| (*edge_idx, &self.edges[edge_idx.index()]))
    }

    /// The edge from `source` to `target`, if one exists.
    pub fn edge_between(&self, source: NodeIndex, target: NodeIndex) -> Option<&Edge> {
        self.neighbors_outgoing(source)
            .map(|(_, edge)| edge)
            .find(|edge| edge.target == target)
    }

    pub fn print_info(&self) {
        println!(
            "Graph:\t#Nodes: {}, #Edges: {}",
            self.nodes.len(),
            self.edges.len()
        );
    }

    /// Builds a graph from a nodes CSV (`label,lat,lon`) and an edges CSV
    /// (`source,target,distance,time,cost` with labels as endpoints).
    pub fn from_csv(path_to_nodes: &Path, path_to_edges: &Path) -> anyhow::Result<Self> {
        let mut g = Graph::new();

        let mut reader = csv::Reader::from_path(path_to_nodes)?;
        for result in reader.deserialize() {
            let node: Node = result.context("Failed to parse Node")?;
            g.add_node(node);
        }
        debug!("Parsed {} nodes from {:?}", g.nodes.len(), path_to_nodes);

        let mut reader = csv::Reader::from_path(path_to_edges)?;
        for result in reader.deserialize() {
            let record: EdgeRecord = result.context("Failed to parse Edge")?;
            let source = g
                .node_index(&record.source)
                .with_context(|| format!("Unknown source node `{}` in edges file", record.source))?;
            let target = g
                .node_index(&record.target)
                .with_context(|| format!("Unknown target node `{}` in edges file", record.target))?;

            let weights = EdgeWeights::new(record.distance, record.time, record.cost);
            anyhow::ensure!(
                weights.is_valid(),
                "Edge {} -> {} carries a negative or non-finite weight",
                record.source,
                record.target
            );

            g.add_edge(Edge::new(source, target, weights));
        }
        debug!("Parsed {} edges from {:?}", g.edges.len(), path_to_edges);

        Ok(g)
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

/// Macro to create an edge carrying (distance, time, cost) weights
///
/// edge!(0 => 1; 3.0, 1.0, 2.0) Returns directed edge
///
/// edge!(0, 1; 3.0, 1.0, 2.0) Returns edges in both directions
#[macro_export]
macro_rules! edge {
    ($source:expr => $target:expr; $distance:expr, $time:expr, $cost:expr) => {
        $crate::graph::Edge::new(
            $source.into(),
            $target.into(),
            $crate::graph::EdgeWeights::new($distance, $time, $cost),
        )
    };
    ($source:expr , $target:expr; $distance:expr, $time:expr, $cost:expr) => {
        vec![
            $crate::graph::Edge::new(
                $source.into(),
                $target.into(),
                $crate::graph::EdgeWeights::new($distance, $time, $cost),
            ),
            $crate::graph::Edge::new(
                $target.into(),
                $source.into(),
                $crate::graph::EdgeWeights::new($distance, $time, $cost),
            ),
        ]
    };
}

/// Macro to create a node with a given label, lat, lon
/// node!("Mumbai", 19.0902, 72.8628)
#[macro_export]
macro_rules! node {
    ($label:expr, $lat:expr, $lon:expr) => {
        $crate::graph::Node::new($label, $lat, $lon)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_from_csv() {
        let graph = Graph::from_csv(
            &Path::new(env!("CARGO_MANIFEST_DIR")).join("test_data/nodes.csv"),
            &Path::new(env!("CARGO_MANIFEST_DIR")).join("test_data/edges.csv"),
        )
        .unwrap();

        assert_eq!(graph.nodes.len(), 7);
        assert_eq!(graph.edges.len(), 42);

        let mumbai = graph.node_index("Mumbai").unwrap();
        let pune = graph.node_index("Pune").unwrap();

        let edge = graph.edge_between(mumbai, pune).unwrap();
        assert_eq!(edge.weights, EdgeWeights::new(118.0, 60.0, 1050.0));

        assert!(graph.node_index("Goa").is_none());
    }

    #[test]
    fn add_duplicate_edges() {
        let mut g = Graph::new();
        let a = g.add_node(Node::new("A", 0.0, 0.0));
        let b = g.add_node(Node::new("B", 0.0, 0.0));

        let edge1 = g.add_edge(edge!(a => b; 2.0, 10.0, 5.0));
        let edge2 = g.add_edge(edge!(a => b; 3.0, 4.0, 5.0));

        // Parallel edge collapses to the per-metric minimum
        assert_eq!(edge1, edge2);
        assert_eq!(g.edges.len(), 1);
        assert_eq!(
            g.edges[edge1.index()].weights,
            EdgeWeights::new(2.0, 4.0, 5.0)
        );
    }

    #[test]
    #[should_panic(expected = "Duplicate node label")]
    fn duplicate_labels_rejected() {
        let mut g = Graph::new();
        g.add_node(Node::new("A", 0.0, 0.0));
        g.add_node(Node::new("A", 1.0, 1.0));
    }

    #[test]
    #[should_panic(expected = "finite and non-negative")]
    fn negative_weights_rejected() {
        let mut g = Graph::new();
        let a = g.add_node(Node::new("A", 0.0, 0.0));
        let b = g.add_node(Node::new("B", 0.0, 0.0));

        g.add_edge(edge!(a => b; -1.0, 1.0, 1.0));
    }

    #[test]
    fn label_resolution() {
        let mut g = Graph::new();
        let a = g.add_node(Node::new("A", 0.0, 0.0));
        let b = g.add_node(Node::new("B", 0.0, 0.0));

        assert_eq!(g.node_index("A"), Some(a));
        assert_eq!(g.node_index("B"), Some(b));
        assert_eq!(g.label(a), Some("A"));
        assert_eq!(g.node_index("C"), None);
    }
}
