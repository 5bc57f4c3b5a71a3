//! Single-source shortest path trees.

use std::collections::HashMap;

use log::trace;

use roadcover_graph::{DiGraph, NodeId};

use super::frontier::Frontier;

/// Shortest path tree rooted at one source node.
///
/// Costs are sums of non-negative edge weights. Expansion order and
/// predecessor choice are deterministic for a fixed graph: frontier ties
/// break on the lowest node id, and a predecessor only changes on a strict
/// cost improvement.
#[derive(Clone, Debug)]
pub struct ShortestPathTree {
    source: NodeId,
    cost: HashMap<NodeId, f64>,
    parent: HashMap<NodeId, NodeId>,
}

impl ShortestPathTree {
    /// Run Dijkstra from `source` over the whole graph.
    pub fn build(graph: &DiGraph, source: NodeId) -> Self {
        trace!("building shortest path tree from {}", source);

        let mut cost = HashMap::new();
        let mut parent = HashMap::new();
        let mut frontier = Frontier::new();
        frontier.push(source, 0.0);

        while let Some((node, node_cost)) = frontier.pop() {
            cost.insert(node, node_cost);
            for edge in graph.outgoing(node) {
                if cost.contains_key(&edge.to) {
                    continue;
                }
                if frontier.offer(edge.to, node_cost + edge.weight) {
                    parent.insert(edge.to, node);
                }
            }
        }

        ShortestPathTree { source, cost, parent }
    }

    /// The source node this tree is rooted at.
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Shortest distance from the source, if `node` is reachable.
    pub fn distance_to(&self, node: NodeId) -> Option<f64> {
        self.cost.get(&node).copied()
    }

    /// Shortest path from the source to `node` as a node sequence, inclusive
    /// on both ends, if `node` is reachable.
    pub fn path_to(&self, node: NodeId) -> Option<Vec<NodeId>> {
        if !self.cost.contains_key(&node) {
            return None;
        }
        let mut path = vec![node];
        let mut cur = node;
        while let Some(&prev) = self.parent.get(&cur) {
            path.push(prev);
            cur = prev;
        }
        path.reverse();
        debug_assert_eq!(path.first().copied(), Some(self.source));
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(id: u64) -> NodeId {
        NodeId::new(id)
    }

    fn ring_with_chord() -> DiGraph {
        DiGraph::from_edges(vec![
            (n(1), n(2), 7.0),
            (n(2), n(3), 10.0),
            (n(3), n(4), 11.0),
            (n(4), n(5), 6.0),
            (n(5), n(6), 9.0),
            (n(6), n(1), 14.0),
            (n(1), n(3), 9.0),
            (n(3), n(6), 2.0),
        ])
    }

    #[test]
    fn test_distances() {
        let tree = ShortestPathTree::build(&ring_with_chord(), n(1));
        assert_eq!(tree.source(), n(1));
        assert_eq!(tree.distance_to(n(1)), Some(0.0));
        assert_eq!(tree.distance_to(n(2)), Some(7.0));
        assert_eq!(tree.distance_to(n(3)), Some(9.0));
        assert_eq!(tree.distance_to(n(6)), Some(11.0));
        assert_eq!(tree.distance_to(n(4)), Some(20.0));
        assert_eq!(tree.distance_to(n(99)), None);
    }

    #[test]
    fn test_paths() {
        let tree = ShortestPathTree::build(&ring_with_chord(), n(1));
        assert_eq!(tree.path_to(n(1)), Some(vec![n(1)]));
        assert_eq!(tree.path_to(n(6)), Some(vec![n(1), n(3), n(6)]));
        assert_eq!(tree.path_to(n(4)), Some(vec![n(1), n(3), n(4)]));
        assert_eq!(tree.path_to(n(99)), None);
    }

    #[test]
    fn test_unreachable_target() {
        // 3 has no incoming edge from the component of 1.
        let g = DiGraph::from_edges(vec![(n(1), n(2), 1.0), (n(2), n(1), 1.0), (n(3), n(1), 1.0)]);
        let tree = ShortestPathTree::build(&g, n(1));
        assert_eq!(tree.distance_to(n(3)), None);
        assert_eq!(tree.path_to(n(3)), None);
    }

    #[test]
    fn test_equal_cost_tie_keeps_first_predecessor() {
        // Two cost-2 routes to node 4; the one through the lower id wins.
        let g = DiGraph::from_edges(vec![
            (n(1), n(2), 1.0),
            (n(1), n(3), 1.0),
            (n(2), n(4), 1.0),
            (n(3), n(4), 1.0),
        ]);
        let tree = ShortestPathTree::build(&g, n(1));
        assert_eq!(tree.distance_to(n(4)), Some(2.0));
        assert_eq!(tree.path_to(n(4)), Some(vec![n(1), n(2), n(4)]));
    }

    #[test]
    fn test_parallel_edges_use_cheapest() {
        let g = DiGraph::from_edges(vec![(n(1), n(2), 5.0), (n(1), n(2), 2.0)]);
        let tree = ShortestPathTree::build(&g, n(1));
        assert_eq!(tree.distance_to(n(2)), Some(2.0));
    }
}
