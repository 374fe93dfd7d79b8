//! Metro network data: stops, links, and stop name search.
//!
//! This is the data-access side of the planner. It loads the network from
//! a JSON file and answers name lookups; it knows nothing about routing.

mod error;
mod loader;
mod names;

pub use error::NetworkError;
pub use loader::Network;
pub use names::{normalize, search};
