//! Domain types for the metro planner.
//!
//! Identifiers are validated at construction time, so code that receives a
//! [`StopId`] can trust it. Records coming from the network file
//! ([`Stop`], [`Link`]) are plain data.

mod itinerary;
mod link;
mod stop;
mod stop_id;

pub use itinerary::Itinerary;
pub use link::Link;
pub use stop::{Position, Stop};
pub use stop_id::{InvalidStopId, StopId};
