//! Scenario descriptions for building a [`Simulator`]
//!
//! A scenario is a parameter block plus the initial entity list, loadable from
//! JSON:
//!
//! ```json
//! {
//!   "params": { "dt": 10.0 },
//!   "entities": [
//!     { "name": "Sun",   "x": 5000.0, "y": 5000.0, "mass": 2e30 },
//!     { "name": "Earth", "x": 5000.0, "y": 5500.0, "mass": 6e24, "vx": 1.0 },
//!     { "name": "Electron", "x": 5002.0, "y": 5000.0, "mass": 9.1e-31, "charge": -1.6e-19 }
//!   ]
//! }
//! ```
//!
//! Omitted parameters take their defaults; omitted charge, spin and velocity
//! are zero.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use entity_physics::Entity;
use glam::DVec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::{SimulationParams, Simulator};

/// Initial state of one entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySpec {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub mass: f64,
    #[serde(default)]
    pub charge: f64,
    #[serde(default)]
    pub spin: f64,
    #[serde(default)]
    pub vx: f64,
    #[serde(default)]
    pub vy: f64,
}

impl EntitySpec {
    pub fn build(&self) -> Entity {
        let mut entity = Entity::new(self.name.clone(), self.x, self.y, self.mass)
            .with_charge(self.charge)
            .with_spin(self.spin);
        entity.set_velocity(DVec2::new(self.vx, self.vy));
        entity
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub params: SimulationParams,
    #[serde(default)]
    pub entities: Vec<EntitySpec>,
}

impl Scenario {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid scenario JSON")
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario {}", path.display()))?;
        let scenario: Self = serde_json::from_str(&text)
            .with_context(|| format!("invalid scenario JSON in {}", path.display()))?;
        log::info!(
            "Loaded scenario {} ({} entities)",
            path.display(),
            scenario.entities.len()
        );
        Ok(scenario)
    }

    /// Seeded random cloud of bodies spread over the whole box.
    ///
    /// Roughly one in ten bodies carries a small charge of either sign. The
    /// same seed always gives the same scenario.
    pub fn random_cloud(count: usize, seed: u64, area: f64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut entities = Vec::with_capacity(count);

        for i in 0..count {
            let x = rng.random::<f64>() * area;
            let y = rng.random::<f64>() * area;
            let mass = rng.random_range(1.0..1.0e3);

            let charge = if rng.random::<f64>() < 0.1 {
                let sign = if rng.random::<bool>() { 1.0 } else { -1.0 };
                sign * rng.random_range(1.0e-10..1.0e-8)
            } else {
                0.0
            };

            entities.push(EntitySpec {
                name: format!("body-{i}"),
                x,
                y,
                mass,
                charge,
                spin: 0.0,
                vx: 0.0,
                vy: 0.0,
            });
        }

        log::info!("✓ Generated {} entities (seed {})", count, seed);

        Self {
            params: SimulationParams {
                area,
                ..Default::default()
            },
            entities,
        }
    }

    pub fn into_simulator(self) -> Simulator {
        let mut sim = Simulator::with_params(self.params);
        for spec in &self.entities {
            sim.add(spec.build());
        }
        sim
    }
}
