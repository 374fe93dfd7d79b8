//! Minimum spanning tree via Prim's algorithm.
//!
//! The tree is grown from a single root, always taking the cheapest edge
//! that leaves the visited set. Stale frontier entries (edges whose target
//! was reached by a cheaper edge in the meantime) are skipped when popped.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

use tracing::debug;

use super::Graph;
use crate::domain::StopId;

/// Frontier entry: `(weight, from, to)`, ordered by weight first.
type FrontierEdge = (u32, StopId, StopId);

/// Minimum spanning tree of the network, rooted at its lowest stop id.
///
/// If the graph is disconnected, the result only spans the component that
/// contains the root. This is a partial result, not an error; call
/// [`is_connected`](super::is_connected) first when full coverage matters.
///
/// Among equal-weight edges the one taken first depends on heap order, so
/// the tree is *a* minimum spanning tree, not a canonical one.
pub fn minimum_spanning_tree(graph: &Graph) -> Graph {
    match graph.first_stop() {
        Some(root) => minimum_spanning_tree_from(graph, root),
        None => Graph::new(),
    }
}

/// Minimum spanning tree of the component containing `root`.
///
/// Returns an empty graph if `root` is not a stop of `graph`. Otherwise the
/// result contains `root` and has exactly `stops - 1` edges.
pub fn minimum_spanning_tree_from(graph: &Graph, root: StopId) -> Graph {
    let mut tree = Graph::new();
    if !graph.contains(root) {
        return tree;
    }

    let mut visited: HashSet<StopId> = HashSet::new();
    let mut frontier: BinaryHeap<Reverse<FrontierEdge>> = BinaryHeap::new();

    visited.insert(root);
    tree.insert_stop(root);
    extend_frontier(graph, root, &visited, &mut frontier);

    while visited.len() < graph.node_count() {
        let Some(Reverse((weight, from, to))) = frontier.pop() else {
            break;
        };
        if !visited.insert(to) {
            continue;
        }

        tree.insert_edge(from, to, weight);
        extend_frontier(graph, to, &visited, &mut frontier);
    }

    debug!(
        root = %root,
        reached = visited.len(),
        stops = graph.node_count(),
        weight = tree.total_weight(),
        "Spanning tree built"
    );

    tree
}

/// Push every edge from `stop` to a not-yet-visited neighbor.
fn extend_frontier(
    graph: &Graph,
    stop: StopId,
    visited: &HashSet<StopId>,
    frontier: &mut BinaryHeap<Reverse<FrontierEdge>>,
) {
    for &(neighbor, weight) in graph.neighbors(stop) {
        if !visited.contains(&neighbor) {
            frontier.push(Reverse((weight, stop, neighbor)));
        }
    }
}
