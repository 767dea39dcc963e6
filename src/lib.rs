//! 2D N-body microkernel
//!
//! Point-mass entities under gravity, electrostatics and two residual
//! short-range forces, stepped with semi-implicit Euler inside a reflecting
//! square box.
//!
//! ```
//! use microverse::{Entity, Simulator};
//!
//! let mut sim = Simulator::new();
//! sim.add(Entity::new("A", 0.0, 0.0, 5.0));
//! sim.add(Entity::new("B", 10.0, 0.0, 5.0));
//! sim.step(1);
//!
//! assert!(sim.entities()[0].vx() > 0.0);
//! assert!(sim.snapshot().starts_with("t=1.0  Entities=2"));
//! ```

pub use entity_physics::*;
pub use entity_simulation::*;
