//! Metro route planner.
//!
//! Sits between callers and the graph engine: validates request
//! parameters, rebuilds the network graph for each query, and shapes the
//! results into the JSON wire format.

mod config;
mod dto;
mod error;
mod service;

pub use config::{DEFAULT_LOG_FILTER, PlannerConfig};
pub use dto::{
    ConnectivityResponse, ErrorResponse, ItineraryResponse, MapResponse, SearchStopsResponse,
};
pub use error::PlannerError;
pub use service::Planner;
