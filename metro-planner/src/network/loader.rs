//! Loading the metro network from a JSON file.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::error::NetworkError;
use super::names::normalize;
use crate::domain::{Link, Stop, StopId};

/// The raw metro network: stop metadata plus the links between stops.
///
/// JSON shape:
///
/// ```json
/// {
///   "stops": [{ "id": 1, "name": "La Défense", "line": "1", "isTerminal": true }],
///   "links": [{ "from": 1, "to": 2, "duration": 90 }]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Network {
    /// Stop metadata. Optional; the graph is built from links alone.
    #[serde(default)]
    pub stops: Vec<Stop>,

    /// Links between stops, durations in seconds.
    pub links: Vec<Link>,
}

impl Network {
    /// Create a network from already-loaded parts.
    pub fn new(stops: Vec<Stop>, links: Vec<Link>) -> Self {
        Self { stops, links }
    }

    /// Load and validate a network file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, NetworkError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let network = Self::from_json(&contents)?;

        info!(
            path = %path.display(),
            stops = network.stops.len(),
            links = network.links.len(),
            "Loaded metro network"
        );

        Ok(network)
    }

    /// Parse and validate a network from a JSON string.
    ///
    /// Stops without a `plainName` get one derived from their display name.
    pub fn from_json(json: &str) -> Result<Self, NetworkError> {
        let mut network: Network = serde_json::from_str(json)?;
        network.validate()?;

        for stop in &mut network.stops {
            if stop.plain_name.is_empty() {
                stop.plain_name = normalize(&stop.name);
            }
        }

        Ok(network)
    }

    /// Look up a stop's metadata by id.
    pub fn stop(&self, id: StopId) -> Option<&Stop> {
        self.stops.iter().find(|s| s.id == id)
    }

    /// Reject links that can never refer to a real stop.
    fn validate(&self) -> Result<(), NetworkError> {
        for (index, link) in self.links.iter().enumerate() {
            if link.from.get() == 0 || link.to.get() == 0 {
                return Err(NetworkError::InvalidLink {
                    index,
                    message: "stop id 0 is reserved".to_string(),
                });
            }
        }

        if self.links.is_empty() {
            warn!("Network has no links; every query will be unreachable");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "stops": [
            { "id": 1, "name": "Châtelet", "line": "1" },
            { "id": 2, "name": "Louvre - Rivoli", "plainName": "louvre", "line": "1" },
            { "id": 3, "name": "Palais Royal", "line": "1", "isTerminal": true }
        ],
        "links": [
            { "from": 1, "to": 2, "duration": 60 },
            { "from": 2, "to": 3, "duration": 75 }
        ]
    }"#;

    #[test]
    fn parse_sample() {
        let network = Network::from_json(SAMPLE).unwrap();

        assert_eq!(network.stops.len(), 3);
        assert_eq!(network.links.len(), 2);
        assert_eq!(network.links[0], Link::from((1, 2, 60)));
    }

    #[test]
    fn plain_name_is_derived_when_missing() {
        let network = Network::from_json(SAMPLE).unwrap();

        assert_eq!(network.stop(StopId(1)).unwrap().plain_name, "chatelet");
        assert_eq!(network.stop(StopId(2)).unwrap().plain_name, "louvre");
        assert_eq!(network.stop(StopId(3)).unwrap().plain_name, "palaisroyal");
    }

    #[test]
    fn stops_are_optional() {
        let network = Network::from_json(r#"{ "links": [] }"#).unwrap();
        assert!(network.stops.is_empty());
        assert!(network.links.is_empty());
    }

    #[test]
    fn links_are_required() {
        let err = Network::from_json(r#"{ "stops": [] }"#).unwrap_err();
        assert!(matches!(err, NetworkError::Json(_)));
    }

    #[test]
    fn reject_zero_stop_id() {
        let err = Network::from_json(r#"{ "links": [{ "from": 0, "to": 2, "duration": 5 }] }"#)
            .unwrap_err();
        assert!(matches!(err, NetworkError::InvalidLink { index: 0, .. }));
    }

    #[test]
    fn reject_negative_duration() {
        let err = Network::from_json(r#"{ "links": [{ "from": 1, "to": 2, "duration": -5 }] }"#)
            .unwrap_err();
        assert!(matches!(err, NetworkError::Json(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let network = Network::load(file.path()).unwrap();
        assert_eq!(network.stops.len(), 3);
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Network::load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, NetworkError::Io(_)));
    }
}
