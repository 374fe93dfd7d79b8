//! Stop metadata.

use serde::{Deserialize, Serialize};

use super::StopId;

/// Position of a stop on the network map.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A metro stop as served to clients.
///
/// The same physical station appears once per line it serves, each with its
/// own [`StopId`]. None of this is needed by the graph engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stop {
    /// Unique identifier for the stop
    pub id: StopId,

    /// Display name (e.g. "Châtelet")
    pub name: String,

    /// Normalized name used for search. Filled from `name` when empty.
    #[serde(default)]
    pub plain_name: String,

    /// Metro line (e.g. "7bis")
    pub line: String,

    /// Whether this stop is a terminus of its line
    #[serde(default)]
    pub is_terminal: bool,

    /// Branch number for lines that fork
    #[serde(default)]
    pub branch: u8,

    /// Position on the map
    #[serde(default)]
    pub position: Position,
}
