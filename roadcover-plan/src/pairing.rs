//! Choice of the trail start/end among the imbalanced nodes.
//!
//! One supply unit and one demand unit stay deliberately unmatched: the
//! augmented graph then keeps a single −1 node (the trail end) and a single
//! +1 node (the trail start). Every candidate pair is scored by re-solving
//! the transportation problem on the remaining capacities; with k imbalanced
//! nodes that is O(k²) transportation solves, the dominant cost of the whole
//! planning call.

use log::{trace, warn};

use roadcover_graph::NodeId;

use crate::errors::{PlanError, Result};
use crate::flow;
use crate::imbalance::CapacityMap;
use crate::pathsearch::DistanceTable;

/// Imbalanced node count beyond which the O(k²) pair search gets expensive.
const PAIR_SEARCH_WARN_LIMIT: usize = 64;

/// The chosen start/end pair and the residual configuration it leaves.
#[derive(Clone, PartialEq, Debug)]
pub struct UnmatchedPair {
    /// Trail start: keeps a one-unit surplus of outgoing edges.
    pub start: NodeId,
    /// Trail end: keeps a one-unit surplus of incoming edges.
    pub end: NodeId,
    /// Supply capacities with the end unit withheld.
    pub residual_supply: CapacityMap,
    /// Demand capacities with the start unit withheld.
    pub residual_demand: CapacityMap,
    /// Optimal cost of serving the residual capacities.
    pub residual_cost: f64,
}

/// Try every (end, start) candidate in ascending id order and keep the first
/// strict minimum, so cost ties resolve to the lowest node ids.
pub fn select_unmatched_pair(
    supply: &CapacityMap,
    demand: &CapacityMap,
    table: &DistanceTable,
) -> Result<UnmatchedPair> {
    let k = supply.len() + demand.len();
    if k > PAIR_SEARCH_WARN_LIMIT {
        warn!(
            "{} imbalanced nodes, pair selection needs {} transportation solves",
            k,
            supply.len() * demand.len()
        );
    }

    let mut best: Option<(f64, NodeId, NodeId)> = None;
    for &end in supply.keys() {
        let residual_supply = withhold_unit(supply, end);
        for &start in demand.keys() {
            let residual_demand = withhold_unit(demand, start);
            if let Some(solved) = flow::solve_transport(&residual_supply, &residual_demand, table) {
                trace!("candidate end={} start={}: residual cost {}", end, start, solved.cost);
                match best {
                    Some((best_cost, _, _)) if solved.cost >= best_cost => {}
                    _ => best = Some((solved.cost, end, start)),
                }
            }
        }
    }

    let (residual_cost, end, start) = best.ok_or(PlanError::NoFeasiblePairing)?;
    Ok(UnmatchedPair {
        start,
        end,
        residual_supply: withhold_unit(supply, end),
        residual_demand: withhold_unit(demand, start),
        residual_cost,
    })
}

/// Copy of `map` with one unit removed from `node`, dropping it at zero.
fn withhold_unit(map: &CapacityMap, node: NodeId) -> CapacityMap {
    let mut out = map.clone();
    match out.get_mut(&node) {
        Some(cap) if *cap > 1 => *cap -= 1,
        _ => {
            out.remove(&node);
        }
    }
    out
}
