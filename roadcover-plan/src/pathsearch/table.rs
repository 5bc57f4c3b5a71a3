//! Source-to-target shortest path table.

use std::collections::HashMap;

use roadcover_graph::{DiGraph, NodeId};

use super::dijkstra::ShortestPathTree;

/// Shortest path costs and node paths from every source to every target.
///
/// Built once per planning call from one shortest path tree per source;
/// afterwards lookup-only, so its internal iteration order is never
/// observed. Pairs without a connecting path simply have no entry.
#[derive(Clone, Default, Debug)]
pub struct DistanceTable {
    cost: HashMap<(NodeId, NodeId), f64>,
    path: HashMap<(NodeId, NodeId), Vec<NodeId>>,
}

impl DistanceTable {
    /// Compute one shortest path tree per source and keep only the entries
    /// leading to `targets`.
    pub fn build(graph: &DiGraph, sources: &[NodeId], targets: &[NodeId]) -> Self {
        let mut table = DistanceTable::default();
        for &source in sources {
            let tree = ShortestPathTree::build(graph, source);
            for &target in targets {
                if let (Some(cost), Some(path)) = (tree.distance_to(target), tree.path_to(target)) {
                    table.cost.insert((source, target), cost);
                    table.path.insert((source, target), path);
                }
            }
        }
        table
    }

    /// Shortest path cost from `from` to `to`, if tabulated.
    pub fn cost(&self, from: NodeId, to: NodeId) -> Option<f64> {
        self.cost.get(&(from, to)).copied()
    }

    /// Shortest path from `from` to `to` as a node sequence, if tabulated.
    pub fn path(&self, from: NodeId, to: NodeId) -> Option<&[NodeId]> {
        self.path.get(&(from, to)).map(Vec::as_slice)
    }
}
