//! Stop identifier type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid stop identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stop id: {reason}")]
pub struct InvalidStopId {
    reason: &'static str,
}

/// Identifier of a stop in the metro network.
///
/// The graph engine attaches no meaning to the number; names, lines and
/// positions live on [`Stop`](super::Stop). Ordering is numeric, which the
/// engine relies on for deterministic traversal order.
///
/// # Examples
///
/// ```
/// use metro_planner::domain::StopId;
///
/// let id = StopId::parse("42").unwrap();
/// assert_eq!(id.get(), 42);
///
/// // Zero is never a valid stop
/// assert!(StopId::parse("0").is_err());
///
/// // Neither is anything non-numeric
/// assert!(StopId::parse("Bastille").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StopId(pub u32);

impl StopId {
    /// Parse a stop identifier from user input.
    ///
    /// The input must be a positive decimal integer; surrounding whitespace
    /// is ignored.
    pub fn parse(s: &str) -> Result<Self, InvalidStopId> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(InvalidStopId {
                reason: "must not be empty",
            });
        }

        if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidStopId {
                reason: "must be a decimal integer",
            });
        }

        let value: u32 = trimmed.parse().map_err(|_| InvalidStopId {
            reason: "out of range",
        })?;

        if value == 0 {
            return Err(InvalidStopId {
                reason: "must be positive",
            });
        }

        Ok(StopId(value))
    }

    /// Returns the raw numeric identifier.
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopId({})", self.0)
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
