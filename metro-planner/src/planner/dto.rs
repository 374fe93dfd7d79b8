//! Response objects in the planner's JSON wire format.

use serde::Serialize;

use crate::domain::{Itinerary, Stop, StopId};
use crate::graph::Graph;

use super::PlannerError;

/// Response for an itinerary query.
#[derive(Debug, Serialize)]
pub struct ItineraryResponse {
    /// The computed route; empty when the destination is unreachable
    pub itinerary: Itinerary,
}

/// Response for the connectivity check.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectivityResponse {
    /// Whether every stop can reach every other stop
    pub is_connected: bool,
}

/// Network overview used to draw the map.
///
/// Graphs serialize as ordered `[stop, [[neighbor, weight], ...]]` pairs.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapResponse {
    /// All stops with their metadata
    pub stops: Vec<Stop>,

    /// The full network
    pub adjacency_lists: Graph,

    /// Minimum spanning tree of the network
    pub minimum_spanning_tree: Graph,
}

/// Response for a stop name search.
#[derive(Debug, Serialize)]
pub struct SearchStopsResponse {
    /// Matching stop ids
    pub stops: Vec<StopId>,
}

/// Error body returned for rejected requests.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

impl From<&PlannerError> for ErrorResponse {
    fn from(err: &PlannerError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Link;
    use crate::graph::{build_graph, minimum_spanning_tree};

    #[test]
    fn itinerary_response_shape() {
        let response = ItineraryResponse {
            itinerary: Itinerary::empty(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"itinerary":{"stops":[],"durations":[]}}"#);
    }

    #[test]
    fn connectivity_response_is_camel_case() {
        let json = serde_json::to_string(&ConnectivityResponse { is_connected: true }).unwrap();
        assert_eq!(json, r#"{"isConnected":true}"#);
    }

    #[test]
    fn map_response_shape() {
        let graph = build_graph(&[Link::from((1, 2, 5)), Link::from((2, 3, 3)), Link::from((1, 3, 10))]);
        let response = MapResponse {
            stops: Vec::new(),
            minimum_spanning_tree: minimum_spanning_tree(&graph),
            adjacency_lists: graph,
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["stops"], serde_json::json!([]));
        assert_eq!(
            value["adjacencyLists"],
            serde_json::json!([[1, [[2, 5], [3, 10]]], [2, [[1, 5], [3, 3]]], [3, [[2, 3], [1, 10]]]])
        );
        assert_eq!(value["minimumSpanningTree"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn error_response_from_planner_error() {
        let body = ErrorResponse::from(&PlannerError::MissingQuery);
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"error":"Search query parameter 'name' is required."}"#);
    }
}
