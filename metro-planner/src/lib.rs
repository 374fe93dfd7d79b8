//! Metro network route planner.
//!
//! Answers three questions about a fixed metro network: what is the quickest
//! route between two stops, what does a minimum spanning tree of the network
//! look like, and can every stop reach every other stop.

pub mod domain;
pub mod graph;
pub mod network;
pub mod planner;
