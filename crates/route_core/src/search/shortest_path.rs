use rustc_hash::FxHashMap;

use crate::constants::Weight;
use crate::graph::NodeIndex;
use crate::search::reconstruct_path;

#[derive(Debug, PartialEq, Clone)]
pub struct ShortestPath {
    pub nodes: Vec<NodeIndex>,
    pub weight: Weight,
}

impl ShortestPath {
    pub fn new(nodes: Vec<NodeIndex>, weight: Weight) -> Self {
        ShortestPath { nodes, weight }
    }

    pub fn source(&self) -> Option<NodeIndex> {
        self.nodes.first().copied()
    }

    pub fn target(&self) -> Option<NodeIndex> {
        self.nodes.last().copied()
    }
}

/// Result of a full single-source run: best accumulated weight and
/// predecessor per reached node.
///
/// A node without an entry was never reached; its weight is conceptually
/// infinite. The tree borrows nothing, so it can outlive the query that
/// produced it (but not a graph swap: indices are only meaningful for the
/// graph it was computed against).
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathTree {
    source: NodeIndex,
    node_data: FxHashMap<NodeIndex, (Weight, Option<NodeIndex>)>,
}

impl ShortestPathTree {
    pub(crate) fn new(
        source: NodeIndex,
        node_data: FxHashMap<NodeIndex, (Weight, Option<NodeIndex>)>,
    ) -> Self {
        ShortestPathTree { source, node_data }
    }

    pub fn source(&self) -> NodeIndex {
        self.source
    }

    /// Minimum accumulated weight from the source, `None` if unreached.
    pub fn weight(&self, node: NodeIndex) -> Option<Weight> {
        self.node_data.get(&node).map(|(weight, _)| *weight)
    }

    /// Predecessor on the minimum-weight path, `None` for the source
    /// itself and for unreached nodes.
    pub fn predecessor(&self, node: NodeIndex) -> Option<NodeIndex> {
        self.node_data.get(&node).and_then(|(_, prev)| *prev)
    }

    pub fn is_reachable(&self, node: NodeIndex) -> bool {
        self.node_data.contains_key(&node)
    }

    /// Number of nodes reached from the source.
    pub fn reached(&self) -> usize {
        self.node_data.len()
    }

    /// Extracts the concrete path to `target`, `None` if unreached.
    pub fn path_to(&self, target: NodeIndex) -> Option<ShortestPath> {
        reconstruct_path(target, self.source, &self.node_data)
    }
}
