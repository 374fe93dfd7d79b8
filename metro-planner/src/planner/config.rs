//! Planner configuration.

/// Default log filter when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Configuration parameters for the planner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Maximum number of stops returned by a name search.
    pub search_limit: usize,

    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(search_limit: usize, log_filter: impl Into<String>) -> Self {
        Self {
            search_limit,
            log_filter: log_filter.into(),
        }
    }

    /// Set the search limit.
    pub fn with_search_limit(mut self, search_limit: usize) -> Self {
        self.search_limit = search_limit;
        self
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            search_limit: 10,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}
