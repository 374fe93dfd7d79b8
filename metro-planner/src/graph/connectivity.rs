//! Reachability over the network graph.

use std::collections::HashSet;

use tracing::debug;

use super::Graph;
use crate::domain::StopId;

/// Check whether every stop can reach every other stop.
///
/// An empty graph is reported as disconnected: a network with no stops is
/// not a useful network.
pub fn is_connected(graph: &Graph) -> bool {
    let Some(start) = graph.first_stop() else {
        return false;
    };

    let reached = reachable_from(graph, start);

    debug!(
        reached = reached.len(),
        stops = graph.node_count(),
        "Connectivity check complete"
    );

    reached.len() == graph.node_count()
}

/// Collect every stop reachable from `start`, including `start` itself.
///
/// Uses an explicit stack so long chains of stops cannot exhaust the call
/// stack.
pub fn reachable_from(graph: &Graph, start: StopId) -> HashSet<StopId> {
    let mut visited = HashSet::new();
    let mut stack = vec![start];

    while let Some(stop) = stack.pop() {
        if !visited.insert(stop) {
            continue;
        }
        for &(neighbor, _) in graph.neighbors(stop) {
            if !visited.contains(&neighbor) {
                stack.push(neighbor);
            }
        }
    }

    visited
}
