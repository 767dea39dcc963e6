//! Physical constants for the entity simulation
//!
//! SI values for the long-range laws. The residual-force parameters are
//! tuning defaults rather than measured quantities.

/// Gravitational constant (m³ kg⁻¹ s⁻²)
pub const G: f64 = 6.67430e-11;

/// Coulomb constant k = 1/(4πε₀) (N m² C⁻²)
pub const K: f64 = 8.9875517923e9;

/// Reduced Planck constant (J s)
pub const HBAR: f64 = 1.054571817e-34;

/// Value of π used by the Casimir law.
/// Kept at five decimals so results match existing runs bit for bit.
pub const CASIMIR_PI: f64 = 3.14159;

/// Added to r or r² before any division so coincident entities stay finite
pub const EPSILON: f64 = 1e-9;

/// Yukawa coupling strength
pub const YUKAWA_ALPHA: f64 = 1e-10;

/// Yukawa screening (inverse range)
pub const YUKAWA_MU: f64 = 1e-4;

/// Fraction of velocity removed by drag each step
pub const DRAG_COEFF: f64 = 1e-5;

/// radius = cbrt(mass) * RADIUS_SCALE
pub const RADIUS_SCALE: f64 = 0.1;

/// Speed retained by a velocity component after a wall bounce
pub const RESTITUTION: f64 = 0.9;
