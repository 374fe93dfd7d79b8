//! Raw edge records between stops.

use serde::{Deserialize, Serialize};

use super::StopId;

/// A direct connection between two stops.
///
/// Links are undirected: a link from A to B can be travelled from B to A
/// at the same cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// One end of the link.
    pub from: StopId,

    /// The other end of the link.
    pub to: StopId,

    /// Travel time in seconds.
    pub duration: u32,
}

impl Link {
    /// Create a new link.
    pub fn new(from: StopId, to: StopId, duration: u32) -> Self {
        Self { from, to, duration }
    }

    /// Returns true if the link connects a stop to itself.
    pub fn is_loop(&self) -> bool {
        self.from == self.to
    }
}

impl From<(u32, u32, u32)> for Link {
    fn from((from, to, duration): (u32, u32, u32)) -> Self {
        Link::new(StopId(from), StopId(to), duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_tuple() {
        let link = Link::from((1, 2, 90));
        assert_eq!(link.from, StopId(1));
        assert_eq!(link.to, StopId(2));
        assert_eq!(link.duration, 90);
        assert!(!link.is_loop());
    }

    #[test]
    fn loop_detection() {
        assert!(Link::from((4, 4, 0)).is_loop());
    }

    #[test]
    fn deserialize_wire_shape() {
        let link: Link = serde_json::from_str(r#"{"from": 3, "to": 7, "duration": 120}"#).unwrap();
        assert_eq!(link, Link::from((3, 7, 120)));
    }
}
