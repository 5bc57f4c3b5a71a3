//! The full-coverage planning pipeline.
//!
//! Wires the stages together: connectivity validation, imbalance analysis,
//! shortest path tabulation, start/end pair selection, min-cost augmentation
//! and Euler trail extraction. One synchronous call per planning request; no
//! state survives between calls and the result is deterministic for a fixed
//! input graph.

use log::debug;

use roadcover_graph::{connect, DiGraph, GraphError, NodeId};

use crate::augment;
use crate::errors::{PlanError, Result};
use crate::euler::{self, Trail};
use crate::flow;
use crate::imbalance::{self, Imbalance};
use crate::pairing;
use crate::pathsearch::DistanceTable;

/// Edge and weight accounting for a computed plan.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct CoverageStats {
    /// Edges in the input road graph.
    pub base_edge_count: usize,
    /// Edges in the trail: base plus duplicates.
    pub trail_edge_count: usize,
    /// Edges traversed a second time.
    pub duplicated_edge_count: usize,
    /// Total weight of the input edges.
    pub base_weight: f64,
    /// Extra weight added by the duplicated edges.
    pub duplicated_weight: f64,
}

/// A full-coverage route: the Euler trail plus its accounting.
#[derive(Clone, PartialEq, Debug)]
pub struct CoveragePlan {
    pub trail: Trail,
    pub stats: CoverageStats,
}

/// Plan a single trail traversing every edge of `graph` at least once with
/// minimum total added distance.
///
/// The graph must be non-empty and strongly connected; anything else is
/// rejected before any distance is computed. When the graph is already
/// Eulerian the trail is a closed circuit from the lowest node id; when it
/// is already semi-Eulerian the trail runs from the +1 node to the −1 node;
/// otherwise the cheapest edge duplication and start/end pair are chosen
/// together and the trail runs over the augmented multigraph.
pub fn plan_full_coverage(graph: &DiGraph) -> Result<CoveragePlan> {
    connect::check(graph)?;
    debug!("planning full coverage of {} nodes / {} edges", graph.node_count(), graph.edge_count());

    match imbalance::analyze(graph)? {
        Imbalance::Balanced => {
            debug!("graph is Eulerian, extracting a closed circuit");
            let start = graph.first_node().ok_or(GraphError::EmptyGraph)?;
            Ok(finish(graph, graph, start))
        }
        Imbalance::SemiBalanced { start, end } => {
            debug!("graph is semi-Eulerian, trail {} -> {} without augmentation", start, end);
            Ok(finish(graph, graph, start))
        }
        Imbalance::Unbalanced { supply, demand } => {
            debug!("{} supply / {} demand nodes to reconcile", supply.len(), demand.len());

            let sources: Vec<NodeId> = supply.keys().copied().collect();
            let targets: Vec<NodeId> = demand.keys().copied().collect();
            let table = DistanceTable::build(graph, &sources, &targets);

            let pair = pairing::select_unmatched_pair(&supply, &demand, &table)?;
            debug!("trail start {} / end {}, residual cost {}", pair.start, pair.end, pair.residual_cost);

            let transport = flow::solve_transport(&pair.residual_supply, &pair.residual_demand, &table)
                .ok_or(PlanError::NoFeasiblePairing)?;
            let augmented = augment::augment(graph, &transport, &table);
            Ok(finish(graph, &augmented, pair.start))
        }
    }
}

fn finish(base: &DiGraph, augmented: &DiGraph, start: NodeId) -> CoveragePlan {
    let trail = euler::extract_trail(augmented, start);
    let stats = CoverageStats {
        base_edge_count: base.edge_count(),
        trail_edge_count: trail.len(),
        duplicated_edge_count: trail.len() - base.edge_count(),
        base_weight: base.total_weight(),
        duplicated_weight: trail.total_weight() - base.total_weight(),
    };
    debug!(
        "trail of {} edges, {} duplicated (+{} weight)",
        stats.trail_edge_count, stats.duplicated_edge_count, stats.duplicated_weight
    );
    CoveragePlan { trail, stats }
}
