//! Directed road network graph.

use std::collections::BTreeMap;
use std::fmt;

/// Opaque road network node identifier.
///
/// Ids are assigned by an external topology provider (e.g. junction waypoint
/// ids); this crate only ever compares them. The caller keeps the mapping
/// from ids back to real-world waypoints.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct NodeId(u64);

impl NodeId {
    /// New instance.
    pub fn new(id: u64) -> Self {
        NodeId(id)
    }

    /// Raw id value.
    #[inline]
    pub fn value(&self) -> u64 {
        let NodeId(id) = *self;
        id
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Directed edge with a traversal cost.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Edge {
    /// Tail node.
    pub from: NodeId,
    /// Head node.
    pub to: NodeId,
    /// Traversal cost, non-negative and finite (e.g. segment length in meters).
    pub weight: f64,
}

impl Edge {
    /// New instance.
    pub fn new(from: NodeId, to: NodeId, weight: f64) -> Self {
        debug_assert!(weight >= 0.0 && weight.is_finite(), "Bad edge weight {}", weight);
        Edge { from, to, weight }
    }
}

/// Directed graph indexed for adjacency and degree queries.
///
/// Edges are stored in insertion order and addressed by index, so parallel
/// edges between the same ordered node pair stay distinct. The base road
/// graph is expected to be edge-simple, but the augmented multigraph produced
/// by coverage planning shares this representation, duplicates and all.
///
/// Node iteration is sorted by id, which keeps every downstream tie-break
/// reproducible for a fixed input graph.
#[derive(Clone, Default, Debug)]
pub struct DiGraph {
    edges: Vec<Edge>,
    /// Outgoing edge indexes per node; the key set doubles as the node set.
    out_edges: BTreeMap<NodeId, Vec<usize>>,
    /// Incoming edge indexes per node, for reverse traversal.
    in_edges: BTreeMap<NodeId, Vec<usize>>,
}

impl DiGraph {
    /// Create new instance with no nodes and no edges.
    pub fn new() -> Self {
        DiGraph::default()
    }

    /// Build a graph from `(from, to, weight)` triples.
    ///
    /// Nodes are deduplicated; edge multiplicities are preserved as given.
    pub fn from_edges<I: IntoIterator<Item = (NodeId, NodeId, f64)>>(edges: I) -> Self {
        let mut graph = DiGraph::new();
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight);
        }
        graph
    }

    /// Add a directed edge, inserting its endpoints into the node set.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: f64) {
        let index = self.edges.len();
        self.edges.push(Edge::new(from, to, weight));
        self.out_edges.entry(from).or_default().push(index);
        self.out_edges.entry(to).or_default();
        self.in_edges.entry(to).or_default().push(index);
        self.in_edges.entry(from).or_default();
    }

    /// Number of distinct nodes.
    pub fn node_count(&self) -> usize {
        self.out_edges.len()
    }

    /// Number of edges, counting parallel duplicates.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// `true` if the node set is empty.
    pub fn is_empty(&self) -> bool {
        self.out_edges.is_empty()
    }

    /// All nodes in ascending id order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.out_edges.keys().copied()
    }

    /// The lowest node id, if any.
    pub fn first_node(&self) -> Option<NodeId> {
        self.out_edges.keys().next().copied()
    }

    /// `true` if `node` is part of the graph.
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.out_edges.contains_key(&node)
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Edge by index.
    pub fn edge(&self, index: usize) -> &Edge {
        &self.edges[index]
    }

    /// Number of edges leaving `node`.
    pub fn out_degree(&self, node: NodeId) -> usize {
        self.out_edge_indexes(node).len()
    }

    /// Number of edges entering `node`.
    pub fn in_degree(&self, node: NodeId) -> usize {
        self.in_edges.get(&node).map_or(0, Vec::len)
    }

    /// Edges leaving `node`.
    pub fn outgoing(&self, node: NodeId) -> impl Iterator<Item = &Edge> + '_ {
        self.out_edge_indexes(node).iter().map(move |&i| &self.edges[i])
    }

    /// Edges entering `node`.
    pub fn incoming(&self, node: NodeId) -> impl Iterator<Item = &Edge> + '_ {
        let indexes = self.in_edges.get(&node).map_or(&[][..], Vec::as_slice);
        indexes.iter().map(move |&i| &self.edges[i])
    }

    /// Indexes of the edges leaving `node`, in insertion order.
    pub fn out_edge_indexes(&self, node: NodeId) -> &[usize] {
        self.out_edges.get(&node).map_or(&[][..], Vec::as_slice)
    }

    /// The cheapest edge from `from` to `to`, if one exists.
    ///
    /// With parallel edges the first minimal-weight one wins, so the choice
    /// is stable for a fixed graph.
    pub fn edge_between(&self, from: NodeId, to: NodeId) -> Option<&Edge> {
        let mut best: Option<&Edge> = None;
        for edge in self.outgoing(from).filter(|e| e.to == to) {
            match best {
                Some(b) if edge.weight < b.weight => best = Some(edge),
                Some(_) => {}
                None => best = Some(edge),
            }
        }
        best
    }

    /// Sum of all edge weights.
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(|e| e.weight).sum()
    }
}
