//! Planner error types.
//!
//! The graph engine never fails; these errors cover requests that are
//! rejected before reaching it.

/// Errors returned for invalid planner requests.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlannerError {
    /// Itinerary endpoints are not valid stops of the network
    #[error("Both 'start' and 'end' parameters must be valid stop IDs.")]
    InvalidParameters,

    /// Stop search called without a name
    #[error("Search query parameter 'name' is required.")]
    MissingQuery,
}
