//! Degree imbalance analysis.
//!
//! A directed graph holds an Euler circuit iff every node has equal in- and
//! out-degree, and an open Euler trail iff exactly one node is one edge ahead
//! on each side. Anything else needs augmentation: supply nodes are short of
//! outgoing edges, demand nodes are short of incoming ones, and the totals
//! always match since signed imbalances sum to zero over a finite graph.

use std::collections::BTreeMap;

use roadcover_graph::{DiGraph, NodeId};

use crate::errors::{PlanError, Result};

/// Per-node unit capacities, keyed in ascending id order.
pub type CapacityMap = BTreeMap<NodeId, u32>;

/// Outcome of the degree imbalance analysis.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Imbalance {
    /// Every node balances; the graph already holds an Euler circuit.
    Balanced,
    /// Exactly one node at +1 and one at −1; an open Euler trail already
    /// runs from `start` to `end` without augmentation.
    SemiBalanced { start: NodeId, end: NodeId },
    /// General case: `supply` nodes are `b(v) < 0` with capacity `−b(v)`,
    /// `demand` nodes are `b(v) > 0` with capacity `b(v)`.
    Unbalanced { supply: CapacityMap, demand: CapacityMap },
}

/// Compute `b(v) = out_degree(v) − in_degree(v)` for every node in one pass
/// over the edge list and classify the graph.
pub fn analyze(graph: &DiGraph) -> Result<Imbalance> {
    let mut balance: BTreeMap<NodeId, i64> = graph.nodes().map(|node| (node, 0)).collect();
    for edge in graph.edges() {
        *balance.entry(edge.from).or_insert(0) += 1;
        *balance.entry(edge.to).or_insert(0) -= 1;
    }

    let mut supply = CapacityMap::new();
    let mut demand = CapacityMap::new();
    for (&node, &b) in &balance {
        if b < 0 {
            supply.insert(node, (-b) as u32);
        } else if b > 0 {
            demand.insert(node, b as u32);
        }
    }

    let supply_total: u32 = supply.values().sum();
    let demand_total: u32 = demand.values().sum();
    if supply_total != demand_total {
        // Cannot happen for a well-formed graph; signals upstream corruption.
        return Err(PlanError::ImbalanceMismatch { supply: supply_total, demand: demand_total });
    }

    if supply.is_empty() {
        return Ok(Imbalance::Balanced);
    }
    if supply_total == 1 {
        // One unit on each side means a single −1 node and a single +1 node.
        if let (Some(&end), Some(&start)) = (supply.keys().next(), demand.keys().next()) {
            return Ok(Imbalance::SemiBalanced { start, end });
        }
    }
    Ok(Imbalance::Unbalanced { supply, demand })
}
