//! Point bodies and their physical properties

use std::fmt;

use glam::DVec2;

use crate::constants::RADIUS_SCALE;

/// A simulated point body
///
/// Velocity always starts at rest. `radius` is derived from the mass once, at
/// construction, and does not follow later changes to `mass`.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub(crate) name: String,
    pub(crate) position: DVec2,
    pub(crate) velocity: DVec2,
    pub(crate) mass: f64,
    pub(crate) charge: f64,
    /// Stored for callers, no force law reads it
    pub(crate) spin: f64,
    pub(crate) radius: f64,
}

impl Entity {
    /// Create a neutral, spinless entity at rest
    pub fn new(name: impl Into<String>, x: f64, y: f64, mass: f64) -> Self {
        let entity = Self {
            name: name.into(),
            position: DVec2::new(x, y),
            velocity: DVec2::ZERO,
            mass,
            charge: 0.0,
            spin: 0.0,
            radius: mass.cbrt() * RADIUS_SCALE,
        };
        if !entity.has_positive_mass() {
            log::warn!("entity {} created with unusable mass {}", entity.name, mass);
        }
        entity
    }

    pub fn with_charge(mut self, charge: f64) -> Self {
        self.charge = charge;
        self
    }

    pub fn with_spin(mut self, spin: f64) -> Self {
        self.spin = spin;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn position(&self) -> DVec2 {
        self.position
    }

    pub fn set_position(&mut self, position: DVec2) {
        self.position = position;
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn velocity(&self) -> DVec2 {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: DVec2) {
        self.velocity = velocity;
    }

    pub fn vx(&self) -> f64 {
        self.velocity.x
    }

    pub fn vy(&self) -> f64 {
        self.velocity.y
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Change the inertial mass. The radius keeps its construction-time value.
    pub fn set_mass(&mut self, mass: f64) {
        self.mass = mass;
    }

    /// False for zero, negative and NaN masses
    pub fn has_positive_mass(&self) -> bool {
        self.mass > 0.0
    }

    pub fn charge(&self) -> f64 {
        self.charge
    }

    pub fn set_charge(&mut self, charge: f64) {
        self.charge = charge;
    }

    pub fn spin(&self) -> f64 {
        self.spin
    }

    pub fn set_spin(&mut self, spin: f64) {
        self.spin = spin;
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }

    pub fn momentum(&self) -> DVec2 {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.length_squared()
    }

    pub fn distance_to(&self, other: &Entity) -> f64 {
        self.position.distance(other.position)
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity({}, m={:?}, q={:?})", self.name, self.mass, self.charge)
    }
}
