//! Planner facade over the graph engine.

use tracing::{debug, info};

use crate::domain::{Itinerary, StopId};
use crate::graph::{Graph, build_graph, is_connected, minimum_spanning_tree, shortest_path};
use crate::network::{Network, search};

use super::config::PlannerConfig;
use super::dto::MapResponse;
use super::error::PlannerError;

/// Answers routing questions about a metro network.
///
/// The graph is rebuilt from the full link list for every query, so each
/// answer works on its own graph value.
pub struct Planner {
    network: Network,
    config: PlannerConfig,
}

impl Planner {
    /// Create a new planner.
    pub fn new(network: Network, config: PlannerConfig) -> Self {
        Self { network, config }
    }

    /// The underlying network data.
    pub fn network(&self) -> &Network {
        &self.network
    }

    /// The planner configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Build a fresh graph from the network links.
    pub fn graph(&self) -> Graph {
        build_graph(&self.network.links)
    }

    /// Quickest route between two stops given as raw request parameters.
    ///
    /// Both ids must be positive integers naming stops of the network. An
    /// unreachable destination is not an error: it gives an empty itinerary.
    pub fn itinerary(&self, start: &str, end: &str) -> Result<Itinerary, PlannerError> {
        let graph = self.graph();
        let start = parse_endpoint(&graph, start)?;
        let end = parse_endpoint(&graph, end)?;

        let itinerary = shortest_path(&graph, start, end);

        info!(
            start = %start,
            end = %end,
            stops = itinerary.len(),
            total_secs = itinerary.total_duration_secs(),
            "Computed itinerary"
        );

        Ok(itinerary)
    }

    /// Whether every stop can reach every other stop.
    pub fn is_connected(&self) -> bool {
        is_connected(&self.graph())
    }

    /// Stops, full network and minimum spanning tree for drawing the map.
    ///
    /// On a disconnected network the spanning tree only covers the
    /// component of the lowest stop id.
    pub fn map(&self) -> MapResponse {
        let graph = self.graph();
        let tree = minimum_spanning_tree(&graph);

        debug!(
            stops = graph.node_count(),
            edges = graph.edge_count(),
            tree_edges = tree.edge_count(),
            "Built network map"
        );

        MapResponse {
            stops: self.network.stops.clone(),
            adjacency_lists: graph,
            minimum_spanning_tree: tree,
        }
    }

    /// Ids of stops whose name matches `name`, ignoring case, accents and
    /// punctuation. At most `search_limit` results.
    pub fn search_stops(&self, name: &str) -> Result<Vec<StopId>, PlannerError> {
        if name.trim().is_empty() {
            return Err(PlannerError::MissingQuery);
        }

        let mut found = search(&self.network.stops, name);
        found.truncate(self.config.search_limit);

        debug!(query = name, results = found.len(), "Searched stops");

        Ok(found)
    }
}

/// Parse an itinerary endpoint and check it is a stop of the graph.
fn parse_endpoint(graph: &Graph, raw: &str) -> Result<StopId, PlannerError> {
    let stop = StopId::parse(raw).map_err(|_| PlannerError::InvalidParameters)?;
    if !graph.contains(stop) {
        return Err(PlannerError::InvalidParameters);
    }
    Ok(stop)
}
