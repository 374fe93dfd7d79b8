//! Dijkstra's algorithm for the quickest route between two stops.
//!
//! Uses a binary heap without decrease-key: an improved distance is pushed
//! as a new entry and outdated entries are discarded when popped. Requires
//! non-negative weights, which travel times always are.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use tracing::{debug, trace};

use super::Graph;
use crate::domain::{Itinerary, StopId};

/// Find the quickest route from `start` to `end`.
///
/// Returns an empty [`Itinerary`] if `end` cannot be reached. The search
/// stops as soon as `end` is settled. A `start` that is not in the graph has
/// no neighbors, so only `start == end` yields a route.
///
/// Time: O((V + E) log V)
pub fn shortest_path(graph: &Graph, start: StopId, end: StopId) -> Itinerary {
    let mut distances: HashMap<StopId, u64> = HashMap::with_capacity(graph.node_count());
    let mut previous: HashMap<StopId, StopId> = HashMap::with_capacity(graph.node_count());
    let mut queue: BinaryHeap<Reverse<(u64, StopId)>> = BinaryHeap::new();
    let mut settled = 0usize;

    distances.insert(start, 0);
    queue.push(Reverse((0, start)));

    while let Some(Reverse((distance, stop))) = queue.pop() {
        if stop == end {
            debug!(
                start = %start,
                end = %end,
                settled,
                distance,
                "Route found"
            );
            return reconstruct(&distances, &previous, end);
        }

        // Superseded by a shorter distance pushed later
        if distance > best(&distances, stop) {
            continue;
        }
        settled += 1;

        for &(neighbor, weight) in graph.neighbors(stop) {
            let candidate = distance + u64::from(weight);
            if candidate < best(&distances, neighbor) {
                trace!(
                    from = %stop,
                    to = %neighbor,
                    distance = candidate,
                    "Relaxed edge"
                );
                distances.insert(neighbor, candidate);
                previous.insert(neighbor, stop);
                queue.push(Reverse((candidate, neighbor)));
            }
        }
    }

    debug!(start = %start, end = %end, settled, "Destination unreachable");
    Itinerary::empty()
}

/// Best known distance to `stop`, infinite if never reached.
fn best(distances: &HashMap<StopId, u64>, stop: StopId) -> u64 {
    distances.get(&stop).copied().unwrap_or(u64::MAX)
}

/// Walk predecessor links back from `end` and convert the cumulative
/// distances into per-segment durations.
fn reconstruct(
    distances: &HashMap<StopId, u64>,
    previous: &HashMap<StopId, StopId>,
    end: StopId,
) -> Itinerary {
    let mut stops = vec![end];
    let mut cumulative = vec![distances[&end]];

    let mut stop = end;
    while let Some(&prev) = previous.get(&stop) {
        stops.push(prev);
        cumulative.push(distances[&prev]);
        stop = prev;
    }

    stops.reverse();
    cumulative.reverse();

    Itinerary::from_cumulative(stops, cumulative)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Link;
    use crate::graph::{GraphBuilder, build_graph};

    fn links(raw: &[(u32, u32, u32)]) -> Vec<Link> {
        raw.iter().copied().map(Link::from).collect()
    }

    fn ids(raw: &[u32]) -> Vec<StopId> {
        raw.iter().copied().map(StopId).collect()
    }

    fn triangle() -> Graph {
        build_graph(&links(&[(1, 2, 5), (2, 3, 3), (1, 3, 10)]))
    }

    #[test]
    fn indirect_route_beats_direct_link() {
        let it = shortest_path(&triangle(), StopId(1), StopId(3));

        assert_eq!(it.stops, ids(&[1, 2, 3]));
        assert_eq!(it.durations, vec![0, 5, 3]);
        assert_eq!(it.total_duration_secs(), 8);
    }

    #[test]
    fn route_is_symmetric() {
        let it = shortest_path(&triangle(), StopId(3), StopId(1));

        assert_eq!(it.stops, ids(&[3, 2, 1]));
        assert_eq!(it.durations, vec![0, 3, 5]);
    }

    #[test]
    fn start_equals_end() {
        let it = shortest_path(&triangle(), StopId(2), StopId(2));

        assert_eq!(it.stops, ids(&[2]));
        assert_eq!(it.durations, vec![0]);
    }

    #[test]
    fn unreachable_gives_empty_itinerary() {
        let graph = build_graph(&links(&[(1, 2, 1), (3, 4, 1)]));
        let it = shortest_path(&graph, StopId(1), StopId(4));

        assert!(it.is_empty());
        assert!(it.durations.is_empty());
    }

    #[test]
    fn isolated_start_is_unreachable() {
        let graph = GraphBuilder::new()
            .add_stop(StopId(9))
            .add_link(Link::from((1, 2, 1)))
            .build();

        assert!(shortest_path(&graph, StopId(9), StopId(1)).is_empty());
        assert_eq!(shortest_path(&graph, StopId(9), StopId(9)).stops, ids(&[9]));
    }

    #[test]
    fn unknown_start_is_unreachable() {
        assert!(shortest_path(&triangle(), StopId(77), StopId(1)).is_empty());
    }

    #[test]
    fn parallel_edges_use_the_cheapest() {
        let graph = build_graph(&links(&[(1, 2, 9), (1, 2, 4)]));
        let it = shortest_path(&graph, StopId(1), StopId(2));

        assert_eq!(it.durations, vec![0, 4]);
    }

    #[test]
    fn zero_weight_edges() {
        let graph = build_graph(&links(&[(1, 2, 0), (2, 3, 0), (1, 3, 1)]));
        let it = shortest_path(&graph, StopId(1), StopId(3));

        assert_eq!(it.stops, ids(&[1, 2, 3]));
        assert_eq!(it.total_duration_secs(), 0);
    }

    #[test]
    fn stale_entries_are_skipped() {
        // 4 is first queued at distance 100 via 1, then improved to 3 via 2-3.
        let graph = build_graph(&links(&[(1, 4, 100), (1, 2, 1), (2, 3, 1), (3, 4, 1), (4, 5, 1)]));
        let it = shortest_path(&graph, StopId(1), StopId(5));

        assert_eq!(it.stops, ids(&[1, 2, 3, 4, 5]));
        assert_eq!(it.durations, vec![0, 1, 1, 1, 1]);
    }

    #[test]
    fn longer_line() {
        let graph = build_graph(&links(&[
            (1, 2, 60),
            (2, 3, 90),
            (3, 4, 75),
            (2, 5, 120),
            (5, 4, 60),
        ]));
        let it = shortest_path(&graph, StopId(1), StopId(4));

        assert_eq!(it.stops, ids(&[1, 2, 3, 4]));
        assert_eq!(it.durations, vec![0, 60, 90, 75]);
    }
}
