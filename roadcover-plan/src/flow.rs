//! Exact solver for the balanced transportation problem.
//!
//! Supply units are shipped to demand nodes over a complete bipartite arc
//! set whose costs come from the shortest path table. Solved by successive
//! shortest augmenting paths with node potentials, so every search runs on
//! non-negative reduced costs and the final integral assignment is exactly
//! optimal, never an approximation.

use std::collections::BTreeMap;

use log::trace;

use roadcover_graph::NodeId;

use crate::imbalance::CapacityMap;
use crate::pathsearch::{DistanceTable, Frontier};

/// Optimal integral flow assignment.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Transport {
    /// Total shipping cost.
    pub cost: f64,
    /// Units shipped per `(supply, demand)` pair; only positive entries.
    pub units: BTreeMap<(NodeId, NodeId), u32>,
}

/// Residual arc of the internal flow network.
struct Arc {
    to: usize,
    /// Index of the paired reverse arc inside `arcs[to]`.
    rev: usize,
    cap: u32,
    cost: f64,
}

struct Network {
    arcs: Vec<Vec<Arc>>,
}

impl Network {
    fn new(nodes: usize) -> Self {
        Network { arcs: (0..nodes).map(|_| Vec::new()).collect() }
    }

    fn add_arc(&mut self, from: usize, to: usize, cap: u32, cost: f64) {
        let rev_at_to = self.arcs[to].len();
        let rev_at_from = self.arcs[from].len();
        self.arcs[from].push(Arc { to, rev: rev_at_to, cap, cost });
        self.arcs[to].push(Arc { to: from, rev: rev_at_from, cap: 0, cost: -cost });
    }
}

/// Solve the transportation problem exactly: satisfy every supply and demand
/// capacity at minimum total cost.
///
/// Empty supply and demand yield a zero-cost empty assignment. Returns
/// `None` when the totals differ or some units cannot be routed at all
/// (impossible after connectivity validation; checked defensively).
pub fn solve_transport(supply: &CapacityMap, demand: &CapacityMap, table: &DistanceTable) -> Option<Transport> {
    let total: u32 = supply.values().sum();
    if total != demand.values().sum() {
        return None;
    }
    if total == 0 {
        return Some(Transport::default());
    }

    let suppliers: Vec<NodeId> = supply.keys().copied().collect();
    let consumers: Vec<NodeId> = demand.keys().copied().collect();

    // Node layout: suppliers, then consumers, then source and sink.
    let source = suppliers.len() + consumers.len();
    let sink = source + 1;
    let mut net = Network::new(sink + 1);

    for (i, (&supplier, &cap)) in supply.iter().enumerate() {
        net.add_arc(source, i, cap, 0.0);
        for (j, &consumer) in consumers.iter().enumerate() {
            if let Some(cost) = table.cost(supplier, consumer) {
                net.add_arc(i, suppliers.len() + j, total, cost);
            }
        }
    }
    for (j, &cap) in demand.values().enumerate() {
        net.add_arc(suppliers.len() + j, sink, cap, 0.0);
    }

    let mut potential = vec![0.0f64; sink + 1];
    let mut shipped = 0u32;
    while shipped < total {
        let (dist, parent) = shortest_augmenting_path(&net, source, &potential);
        if dist[sink].is_none() {
            return None;
        }
        for (node, reached) in dist.iter().enumerate() {
            if let Some(d) = reached {
                potential[node] += d;
            }
        }

        // Walk back from the sink for the bottleneck, then push it through.
        let mut bottleneck = total - shipped;
        let mut node = sink;
        while node != source {
            let (prev, arc) = parent[node]?;
            bottleneck = bottleneck.min(net.arcs[prev][arc].cap);
            node = prev;
        }
        let mut node = sink;
        while node != source {
            let (prev, arc) = parent[node]?;
            let rev = net.arcs[prev][arc].rev;
            net.arcs[prev][arc].cap -= bottleneck;
            net.arcs[node][rev].cap += bottleneck;
            node = prev;
        }
        shipped += bottleneck;
        trace!("augmented {} units, {} of {} shipped", bottleneck, shipped, total);
    }

    // Read the assignment off the bipartite arcs: flow = capacity consumed.
    let mut transport = Transport::default();
    for (i, &supplier) in suppliers.iter().enumerate() {
        for arc in &net.arcs[i] {
            if arc.to < suppliers.len() || arc.to >= source {
                continue;
            }
            let flow = total - arc.cap;
            if flow > 0 {
                let consumer = consumers[arc.to - suppliers.len()];
                transport.cost += f64::from(flow) * arc.cost;
                transport.units.insert((supplier, consumer), flow);
            }
        }
    }
    Some(transport)
}

/// Dijkstra over reduced costs on the residual network.
///
/// Explores the whole reachable set (no early exit at the sink) so the
/// potentials of every reached node can be updated; nodes that fall out of
/// reach stay out for the rest of the solve, so their stale potentials are
/// never consulted again.
fn shortest_augmenting_path(
    net: &Network,
    source: usize,
    potential: &[f64],
) -> (Vec<Option<f64>>, Vec<Option<(usize, usize)>>) {
    let mut dist: Vec<Option<f64>> = vec![None; net.arcs.len()];
    let mut parent: Vec<Option<(usize, usize)>> = vec![None; net.arcs.len()];
    let mut frontier = Frontier::new();
    frontier.push(source, 0.0);

    while let Some((node, cost)) = frontier.pop() {
        dist[node] = Some(cost);
        for (a, arc) in net.arcs[node].iter().enumerate() {
            if arc.cap == 0 || dist[arc.to].is_some() {
                continue;
            }
            // Round float jitter in the reduced cost up to zero; a genuinely
            // negative residual arc would break the search invariant.
            let mut reduced = arc.cost + potential[node] - potential[arc.to];
            if reduced < 0.0 {
                debug_assert!(reduced > -1e-9, "Negative reduced cost {}", reduced);
                reduced = 0.0;
            }
            if frontier.offer(arc.to, cost + reduced) {
                parent[arc.to] = Some((node, a));
            }
        }
    }

    (dist, parent)
}
