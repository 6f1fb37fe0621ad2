use rustc_hash::FxHashMap;

use crate::constants::Weight;
use crate::graph::NodeIndex;

use self::shortest_path::ShortestPath;

pub mod dijkstra;
pub mod shortest_path;

/// Walks the predecessor map backward from `target` and reverses the
/// collected sequence so it reads source -> target.
///
/// Returns `None` when `target` never entered `node_data`, i.e. it is
/// unreachable from `source`. The walk is only attempted for reached
/// targets, so it always terminates at the source.
pub fn reconstruct_path(
    target: NodeIndex,
    source: NodeIndex,
    node_data: &FxHashMap<NodeIndex, (Weight, Option<NodeIndex>)>,
) -> Option<ShortestPath> {
    let (weight, mut previous) = *node_data.get(&target)?;

    let mut path = vec![target];
    while let Some(prev_node) = previous {
        path.push(prev_node);
        previous = node_data.get(&prev_node)?.1;
    }

    if *path.last()? != source {
        return None;
    }

    path.reverse();
    Some(ShortestPath::new(path, weight))
}

#[cfg(test)]
pub(crate) fn assert_path(nodes: Vec<usize>, weight: Weight, sp: Option<ShortestPath>) {
    let sp = sp.expect("Expected a path");
    assert_eq!(
        nodes,
        sp.nodes.iter().map(|n| n.index()).collect::<Vec<_>>()
    );
    assert_eq!(weight, sp.weight);
}

#[cfg(test)]
pub(crate) fn assert_no_path(sp: Option<ShortestPath>) {
    assert!(sp.is_none(), "Expected no path, got {:?}", sp);
}
