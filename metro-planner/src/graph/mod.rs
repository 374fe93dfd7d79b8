//! In-memory graph engine for the metro network.
//!
//! A [`Graph`] is built once from the flat list of links and then read by
//! three independent algorithms:
//!
//! - [`is_connected`]: iterative depth-first reachability check
//! - [`minimum_spanning_tree`]: Prim's algorithm
//! - [`shortest_path`]: Dijkstra's algorithm with route reconstruction
//!
//! None of them mutate the graph, so a single graph can be shared freely
//! between readers.

mod builder;
mod connectivity;
mod shortest_path;
mod spanning_tree;


pub use builder::{Graph, GraphBuilder, build_graph};
pub use connectivity::{is_connected, reachable_from};
pub use shortest_path::shortest_path;
pub use spanning_tree::{minimum_spanning_tree, minimum_spanning_tree_from};
