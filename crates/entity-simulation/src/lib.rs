//! # Entity Simulation Engine
//!
//! Sequential CPU N-body stepping over an ordered list of entities, with text
//! and structured snapshots and JSON scenario loading.

pub mod params;
pub mod scenario;
pub mod simulation;
pub mod snapshot;

pub use params::*;
pub use scenario::*;
pub use simulation::*;
pub use snapshot::*;
