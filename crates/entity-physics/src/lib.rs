//! # Entity Physics
//!
//! Point-mass entities and the pairwise force laws acting between them:
//! gravity, electrostatics, and two residual short-range forces.

pub mod constants;
pub mod entity;
pub mod forces;

pub use constants::*;
pub use entity::*;
pub use forces::*;
