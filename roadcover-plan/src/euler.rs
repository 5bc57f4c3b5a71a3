//! Euler trail extraction (Hierholzer's algorithm).

use std::collections::HashMap;

use roadcover_graph::{DiGraph, Edge, NodeId};

/// An Euler trail: every edge of the planned multigraph exactly once, each
/// edge starting where the previous one ended.
#[derive(Clone, PartialEq, Debug)]
pub struct Trail {
    start: NodeId,
    end: NodeId,
    edges: Vec<Edge>,
}

impl Trail {
    /// First node of the trail.
    pub fn start(&self) -> NodeId {
        self.start
    }

    /// Last node of the trail.
    pub fn end(&self) -> NodeId {
        self.end
    }

    /// The trail's edges in traversal order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of edges traversed.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// `true` for a trail with no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// `true` when the trail returns to its start (Euler circuit).
    pub fn is_circuit(&self) -> bool {
        self.start == self.end
    }

    /// The `(from, to)` pairs handed to the path geometry resolver.
    pub fn node_pairs(&self) -> Vec<(NodeId, NodeId)> {
        self.edges.iter().map(|edge| (edge.from, edge.to)).collect()
    }

    /// Total traversal cost.
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(|edge| edge.weight).sum()
    }
}

/// Consume every edge of `graph` exactly once, starting at `start`.
///
/// Walks unused outgoing edges depth-first over an explicit stack, backing
/// out when a node runs dry; edges enter the trail in reverse pop order,
/// which splices detour loops into the main walk without a separate merge
/// step. The graph must hold an Euler trail from `start`: all nodes
/// balanced, or `start` at +1 with one node at −1.
pub fn extract_trail(graph: &DiGraph, start: NodeId) -> Trail {
    let mut cursor: HashMap<NodeId, usize> = HashMap::new();
    let mut stack: Vec<(NodeId, Option<usize>)> = vec![(start, None)];
    let mut order: Vec<usize> = Vec::with_capacity(graph.edge_count());

    while let Some(&(node, arrived_by)) = stack.last() {
        let outgoing = graph.out_edge_indexes(node);
        let used = cursor.entry(node).or_insert(0);
        if *used < outgoing.len() {
            let index = outgoing[*used];
            *used += 1;
            stack.push((graph.edge(index).to, Some(index)));
        } else {
            stack.pop();
            if let Some(index) = arrived_by {
                order.push(index);
            }
        }
    }
    order.reverse();

    let edges: Vec<Edge> = order.iter().map(|&index| *graph.edge(index)).collect();
    let end = edges.last().map_or(start, |edge| edge.to);

    debug_assert_eq!(edges.len(), graph.edge_count(), "Trail does not cover every edge");
    debug_assert!(edges.first().map_or(true, |edge| edge.from == start), "Trail starts off its start node");
    debug_assert!(edges.windows(2).all(|pair| pair[0].to == pair[1].from), "Trail is not contiguous");
    #[cfg(debug_assertions)]
    {
        let mut seen = vec![false; graph.edge_count()];
        for &index in &order {
            debug_assert!(!seen[index], "Edge {} repeated in trail", index);
            seen[index] = true;
        }
    }

    Trail { start, end, edges }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(id: u64) -> NodeId {
        NodeId::new(id)
    }

    fn assert_valid_trail(trail: &Trail, graph: &DiGraph, start: NodeId) {
        assert_eq!(trail.len(), graph.edge_count());
        assert_eq!(trail.start(), start);
        if let Some(first) = trail.edges().first() {
            assert_eq!(first.from, start);
        }
        if let Some(last) = trail.edges().last() {
            assert_eq!(last.to, trail.end());
        }
        for pair in trail.edges().windows(2) {
            assert_eq!(pair[0].to, pair[1].from);
        }
    }

    #[test]
    fn test_circuit_on_cycle() {
        let g = DiGraph::from_edges(vec![(n(1), n(2), 1.0), (n(2), n(3), 1.0), (n(3), n(1), 1.0)]);
        let trail = extract_trail(&g, n(1));
        assert_valid_trail(&trail, &g, n(1));
        assert!(trail.is_circuit());
        assert_eq!(trail.node_pairs(), vec![(n(1), n(2)), (n(2), n(3)), (n(3), n(1))]);
        assert_eq!(trail.total_weight(), 3.0);
    }

    #[test]
    fn test_figure_eight_splices_detour() {
        // Two loops through node 1; the walk must come back for the second.
        let g = DiGraph::from_edges(vec![
            (n(1), n(2), 1.0),
            (n(2), n(1), 1.0),
            (n(1), n(3), 1.0),
            (n(3), n(1), 1.0),
        ]);
        let trail = extract_trail(&g, n(1));
        assert_valid_trail(&trail, &g, n(1));
        assert!(trail.is_circuit());
    }

    #[test]
    fn test_open_trail() {
        // Semi-Eulerian: starts at 1 (+1), ends at 3 (−1), five edges.
        let g = DiGraph::from_edges(vec![
            (n(1), n(2), 1.0),
            (n(2), n(3), 1.0),
            (n(3), n(4), 1.0),
            (n(4), n(1), 1.0),
            (n(1), n(3), 1.0),
        ]);
        let trail = extract_trail(&g, n(1));
        assert_valid_trail(&trail, &g, n(1));
        assert!(!trail.is_circuit());
        assert_eq!(trail.end(), n(3));
    }

    #[test]
    fn test_parallel_edges_both_traversed() {
        let g = DiGraph::from_edges(vec![(n(1), n(2), 1.0), (n(1), n(2), 2.0), (n(2), n(1), 1.0), (n(2), n(1), 2.0)]);
        let trail = extract_trail(&g, n(1));
        assert_valid_trail(&trail, &g, n(1));
        assert_eq!(trail.len(), 4);
        assert_eq!(trail.total_weight(), 6.0);
    }

    #[test]
    fn test_self_loop_included() {
        let g = DiGraph::from_edges(vec![(n(1), n(2), 1.0), (n(2), n(2), 5.0), (n(2), n(1), 1.0)]);
        let trail = extract_trail(&g, n(1));
        assert_valid_trail(&trail, &g, n(1));
        assert_eq!(trail.len(), 3);
        assert!(trail.is_circuit());
    }

    #[test]
    fn test_edgeless_node() {
        let g = DiGraph::from_edges(Vec::new());
        let trail = extract_trail(&g, n(1));
        assert!(trail.is_empty());
        assert!(trail.is_circuit());
        assert_eq!(trail.start(), n(1));
        assert_eq!(trail.end(), n(1));
    }
}
