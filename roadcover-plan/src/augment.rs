//! Edge duplication along the optimal flow's shortest paths.

use log::debug;

use roadcover_graph::{DiGraph, NodeId};

use crate::flow::Transport;
use crate::pathsearch::DistanceTable;

/// Duplicate, for every unit shipped from `u` to `v`, each base edge along
/// the precomputed shortest path from `u` to `v`. Direction and weight are
/// copied per edge, never aggregated; when parallel base edges span the same
/// path hop, the cheapest one is duplicated so the added weight matches the
/// table's distances. Returns the multigraph the trail is extracted from.
pub fn augment(base: &DiGraph, transport: &Transport, table: &DistanceTable) -> DiGraph {
    let mut out = base.clone();
    for (&(from, to), &units) in &transport.units {
        match table.path(from, to) {
            Some(path) => {
                for _ in 0..units {
                    for hop in path.windows(2) {
                        duplicate_edge(base, &mut out, hop[0], hop[1]);
                    }
                }
            }
            None => debug_assert!(false, "No tabulated path for assigned flow {} -> {}", from, to),
        }
    }
    debug!("augmented graph has {} edges ({} base)", out.edge_count(), base.edge_count());
    debug_assert!(balances_for_trail(&out), "Augmented graph degrees do not balance");
    out
}

fn duplicate_edge(base: &DiGraph, out: &mut DiGraph, from: NodeId, to: NodeId) {
    match base.edge_between(from, to) {
        Some(edge) => out.add_edge(edge.from, edge.to, edge.weight),
        None => debug_assert!(false, "Shortest path hop {} -> {} has no base edge", from, to),
    }
}

/// `true` when either every node balances (circuit) or exactly one node sits
/// at +1 and one at −1 with the rest balanced (open trail).
fn balances_for_trail(graph: &DiGraph) -> bool {
    let mut plus = 0;
    let mut minus = 0;
    for node in graph.nodes() {
        match graph.out_degree(node) as i64 - graph.in_degree(node) as i64 {
            0 => {}
            1 => plus += 1,
            -1 => minus += 1,
            _ => return false,
        }
    }
    plus == minus && plus <= 1
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::BTreeMap;

    fn n(id: u64) -> NodeId {
        NodeId::new(id)
    }

    #[test]
    fn test_empty_transport_copies_base() {
        let base = DiGraph::from_edges(vec![(n(1), n(2), 1.0), (n(2), n(1), 1.0)]);
        let out = augment(&base, &Transport::default(), &DistanceTable::default());
        assert_eq!(out.edge_count(), base.edge_count());
        assert_eq!(out.total_weight(), base.total_weight());
    }

    #[test]
    fn test_duplicates_every_hop_per_unit() {
        // b(1) = +2 and b(3) = −2; one unit shipped 3 → 1 (the other unit
        // stays withheld as the start/end pair) duplicates the path 3, 2, 1.
        let base = DiGraph::from_edges(vec![
            (n(1), n(3), 2.0),
            (n(1), n(3), 2.0),
            (n(1), n(3), 2.0),
            (n(3), n(2), 1.0),
            (n(2), n(1), 1.0),
        ]);
        let table = DistanceTable::build(&base, &[n(3)], &[n(1)]);
        let mut units = BTreeMap::new();
        units.insert((n(3), n(1)), 1);
        let transport = Transport { cost: 2.0, units };

        let out = augment(&base, &transport, &table);
        assert_eq!(out.edge_count(), base.edge_count() + 2);
        assert_eq!(out.total_weight(), base.total_weight() + 2.0);
        // Exactly the start/end surplus remains: +1 at node 1, −1 at node 3.
        assert_eq!(out.out_degree(n(1)) as i64 - out.in_degree(n(1)) as i64, 1);
        assert_eq!(out.out_degree(n(3)) as i64 - out.in_degree(n(3)) as i64, -1);
        assert_eq!(out.out_degree(n(2)), out.in_degree(n(2)));
    }

    #[test]
    fn test_balances_for_trail() {
        let circuit = DiGraph::from_edges(vec![(n(1), n(2), 1.0), (n(2), n(1), 1.0)]);
        assert!(balances_for_trail(&circuit));

        let open = DiGraph::from_edges(vec![(n(1), n(2), 1.0)]);
        assert!(balances_for_trail(&open));

        let skewed = DiGraph::from_edges(vec![(n(1), n(2), 1.0), (n(1), n(2), 1.0)]);
        assert!(!balances_for_trail(&skewed));
    }
}
