//! Read-only views of simulator state
//!
//! The text form is one header line `t=<t>  Entities=<count>` followed by one
//! indented line per entity with space-separated `key=value` tokens.

use std::fmt;

use entity_physics::Entity;
use serde::{Deserialize, Serialize};

/// Kinematic and physical state of one entity at capture time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityState {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub mass: f64,
    pub charge: f64,
}

impl From<&Entity> for EntityState {
    fn from(e: &Entity) -> Self {
        Self {
            name: e.name().to_owned(),
            x: e.x(),
            y: e.y(),
            vx: e.vx(),
            vy: e.vy(),
            mass: e.mass(),
            charge: e.charge(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub time: f64,
    pub dt: f64,
    /// Number of entities in the simulator, even when `entities` is truncated
    pub entity_count: usize,
    pub entities: Vec<EntityState>,
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "t={:?}  Entities={}", self.time, self.entity_count)?;
        for e in &self.entities {
            writeln!(
                f,
                "  {}  x={:?} y={:?} vx={:?} vy={:?}",
                e.name, e.x, e.y, e.vx, e.vy
            )?;
        }
        Ok(())
    }
}
