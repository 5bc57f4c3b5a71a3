//! Shortest path search in the weighted road graph.

pub use self::dijkstra::ShortestPathTree;
pub use self::table::DistanceTable;

pub(crate) use self::frontier::Frontier;

mod dijkstra;
mod frontier;
mod table;

#[test]
fn test_shortest_path_search() {
    use roadcover_graph::{DiGraph, NodeId};

    let n = NodeId::new;
    let g = DiGraph::from_edges(vec![
        (n(1), n(2), 1.0),
        (n(2), n(1), 1.0),
        (n(2), n(3), 2.0),
        (n(3), n(2), 2.0),
        (n(2), n(4), 4.0),
        (n(4), n(2), 4.0),
        (n(3), n(4), 1.0),
        (n(4), n(3), 1.0),
    ]);
    let tree = ShortestPathTree::build(&g, n(1));
    assert_eq!(tree.distance_to(n(4)), Some(4.0));
    assert_eq!(tree.path_to(n(4)), Some(vec![n(1), n(2), n(3), n(4)]));

    let table = DistanceTable::build(&g, &[n(1)], &[n(4)]);
    assert_eq!(table.cost(n(1), n(4)), Some(4.0));
    assert_eq!(table.path(n(1), n(4)), Some(&[n(1), n(2), n(3), n(4)][..]));
}
