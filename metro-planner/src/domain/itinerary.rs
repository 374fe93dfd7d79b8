//! Computed routes between two stops.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use super::StopId;

/// An ordered path between two stops with the travel time of each segment.
///
/// `durations[0]` is always zero (the cost of reaching the start from
/// itself) and `durations[i]` is the time from `stops[i - 1]` to `stops[i]`.
/// An empty itinerary means the destination is unreachable.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Itinerary {
    /// Stops from start to end, inclusive.
    pub stops: Vec<StopId>,

    /// Per-segment travel time in seconds, same length as `stops`.
    pub durations: Vec<u64>,
}

impl Itinerary {
    /// The "no route" itinerary.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build an itinerary from stops and their cumulative distance from the
    /// start, converting the distances to per-segment durations.
    pub(crate) fn from_cumulative(stops: Vec<StopId>, cumulative: Vec<u64>) -> Self {
        debug_assert_eq!(stops.len(), cumulative.len());

        let durations = cumulative
            .iter()
            .enumerate()
            .map(|(i, &dist)| if i == 0 { dist } else { dist - cumulative[i - 1] })
            .collect();

        Self { stops, durations }
    }

    /// Returns true if no route was found.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Number of stops on the route, including both ends.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// First stop, if any.
    pub fn origin(&self) -> Option<StopId> {
        self.stops.first().copied()
    }

    /// Last stop, if any.
    pub fn destination(&self) -> Option<StopId> {
        self.stops.last().copied()
    }

    /// Total travel time in seconds.
    pub fn total_duration_secs(&self) -> u64 {
        self.durations.iter().sum()
    }

    /// Total travel time.
    pub fn total_duration(&self) -> Duration {
        let secs = i64::try_from(self.total_duration_secs()).unwrap_or(i64::MAX);
        Duration::seconds(secs.min(i64::MAX / 1000))
    }

    /// Iterate over consecutive `(from, to, seconds)` segments.
    pub fn segments(&self) -> impl Iterator<Item = (StopId, StopId, u64)> + '_ {
        self.stops
            .windows(2)
            .zip(self.durations.iter().skip(1))
            .map(|(pair, &secs)| (pair[0], pair[1], secs))
    }
}
