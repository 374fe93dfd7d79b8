//! Adjacency-list graph and its construction from links.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::domain::{Link, StopId};

/// Undirected weighted graph stored as adjacency lists.
///
/// Every link (a, b, w) is stored twice: b appears in a's list and a in b's
/// list. Parallel links between the same pair are kept as separate entries.
/// Stops iterate in ascending id order.
///
/// A `Graph` cannot be modified once built; use [`GraphBuilder`] or
/// [`build_graph`] to make one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: BTreeMap<StopId, Vec<(StopId, u32)>>,
}

impl Graph {
    /// An empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stops.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    /// Sum of the weights of all undirected edges.
    pub fn total_weight(&self) -> u64 {
        let twice: u64 = self
            .adjacency
            .values()
            .flatten()
            .map(|&(_, weight)| u64::from(weight))
            .sum();
        twice / 2
    }

    /// Returns true if the graph has no stops.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns true if `stop` is a node of the graph.
    pub fn contains(&self, stop: StopId) -> bool {
        self.adjacency.contains_key(&stop)
    }

    /// Neighbors of `stop` with the weight of each connecting edge.
    ///
    /// Returns an empty slice for stops that are not in the graph.
    pub fn neighbors(&self, stop: StopId) -> &[(StopId, u32)] {
        self.adjacency.get(&stop).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The lowest stop id, used wherever an algorithm needs an arbitrary
    /// starting node.
    pub fn first_stop(&self) -> Option<StopId> {
        self.adjacency.keys().next().copied()
    }

    /// All stops in ascending order.
    pub fn stops(&self) -> impl Iterator<Item = StopId> + '_ {
        self.adjacency.keys().copied()
    }

    /// All stops with their adjacency lists, in ascending stop order.
    pub fn iter(&self) -> impl Iterator<Item = (StopId, &[(StopId, u32)])> {
        self.adjacency
            .iter()
            .map(|(stop, neighbors)| (*stop, neighbors.as_slice()))
    }

    pub(crate) fn insert_stop(&mut self, stop: StopId) {
        self.adjacency.entry(stop).or_default();
    }

    /// Record an undirected edge in both adjacency lists.
    pub(crate) fn insert_edge(&mut self, a: StopId, b: StopId, weight: u32) {
        self.adjacency.entry(a).or_default().push((b, weight));
        self.adjacency.entry(b).or_default().push((a, weight));
    }
}

/// Serializes as an ordered list of `[stop, [[neighbor, weight], ...]]` pairs.
impl Serialize for Graph {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.adjacency.iter())
    }
}

/// Builder for creating graphs.
///
/// Provides a fluent API for adding links and isolated stops.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    inner: Graph,
}

impl GraphBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a stop, even if no link touches it.
    pub fn add_stop(mut self, stop: StopId) -> Self {
        self.inner.insert_stop(stop);
        self
    }

    /// Add an undirected link.
    pub fn add_link(mut self, link: Link) -> Self {
        self.inner.insert_edge(link.from, link.to, link.duration);
        self
    }

    /// Add every link from an iterator.
    pub fn add_links<'a>(mut self, links: impl IntoIterator<Item = &'a Link>) -> Self {
        for link in links {
            self.inner.insert_edge(link.from, link.to, link.duration);
        }
        self
    }

    /// Build the graph.
    pub fn build(self) -> Graph {
        self.inner
    }
}

/// Build an adjacency-list graph from a flat list of links.
///
/// An empty slice gives an empty graph. Duplicate links are preserved as
/// parallel edges.
pub fn build_graph(links: &[Link]) -> Graph {
    let graph = GraphBuilder::new().add_links(links).build();

    debug!(
        links = links.len(),
        stops = graph.node_count(),
        "Built network graph"
    );

    graph
}
