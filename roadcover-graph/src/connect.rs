//! Strong connectivity validation.

use std::collections::{HashSet, VecDeque};

use crate::digraph::{DiGraph, NodeId};
use crate::errors::{GraphError, Result};

/// Check that the graph is usable for coverage planning: non-empty and
/// strongly connected.
///
/// Must pass before any imbalance or shortest-path computation, since
/// distances between imbalanced nodes are undefined otherwise.
pub fn check(graph: &DiGraph) -> Result<()> {
    let origin = graph.first_node().ok_or(GraphError::EmptyGraph)?;
    if !fully_reaches(graph, origin) {
        return Err(GraphError::NotStronglyConnected);
    }
    Ok(())
}

/// `true` if every node is reachable from every other via directed paths.
///
/// The empty graph is considered not strongly connected.
pub fn is_strongly_connected(graph: &DiGraph) -> bool {
    match graph.first_node() {
        Some(origin) => fully_reaches(graph, origin),
        None => false,
    }
}

/// Two-pass reachability: everything is reachable from `origin` following
/// edges forward, and everything reaches `origin` (checked by following
/// edges backward).
fn fully_reaches(graph: &DiGraph, origin: NodeId) -> bool {
    let n = graph.node_count();
    reachable_count(graph, origin, false) == n && reachable_count(graph, origin, true) == n
}

fn reachable_count(graph: &DiGraph, origin: NodeId, reverse: bool) -> usize {
    let mut explored = HashSet::new();
    let mut frontier = VecDeque::new();
    explored.insert(origin);
    frontier.push_back(origin);

    while let Some(node) = frontier.pop_front() {
        let neighbors: Vec<NodeId> = if reverse {
            graph.incoming(node).map(|e| e.from).collect()
        } else {
            graph.outgoing(node).map(|e| e.to).collect()
        };
        for next in neighbors {
            if explored.insert(next) {
                frontier.push_back(next);
            }
        }
    }

    explored.len()
}
