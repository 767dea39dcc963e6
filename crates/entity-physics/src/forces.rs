//! Pairwise force laws
//!
//! Each law adds the force exerted on `a` by `b` into a running accumulator.
//! Nothing is overwritten, so calling a law twice counts the pair twice.
//!
//! All laws project along the displacement `b - a`. A positive magnitude pulls
//! `a` toward `b`. For Coulomb this means a positive charge product (like
//! charges) attracts; that convention is kept as-is for compatibility with
//! existing runs and is not standard electrostatics.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::entity::Entity;

/// Which laws take part in a pair interaction, and their tunable parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForceParams {
    pub gravity: bool,
    pub coulomb: bool,
    pub yukawa: bool,
    pub casimir: bool,
    pub yukawa_alpha: f64,
    pub yukawa_mu: f64,
}

impl Default for ForceParams {
    fn default() -> Self {
        Self {
            gravity: true,
            coulomb: true,
            yukawa: true,
            casimir: true,
            yukawa_alpha: YUKAWA_ALPHA,
            yukawa_mu: YUKAWA_MU,
        }
    }
}

/// Newtonian gravity
/// F = G * m1 * m2 / r²
pub fn gravity(a: &Entity, b: &Entity, acc: &mut DVec2) {
    let d = b.position - a.position;
    let r2 = d.length_squared() + EPSILON;
    let f = G * a.mass * b.mass / r2;
    let inv_r = 1.0 / r2.sqrt();
    *acc += f * d * inv_r;
}

/// Electrostatic force
/// F = K * q1 * q2 / r², signed by the charge product along `b - a`
pub fn coulomb(a: &Entity, b: &Entity, acc: &mut DVec2) {
    let d = b.position - a.position;
    let r2 = d.length_squared() + EPSILON;
    let f = K * a.charge * b.charge / r2;
    let inv_r = 1.0 / r2.sqrt();
    *acc += f * d * inv_r;
}

/// Screened residual force with the default coupling
pub fn yukawa(a: &Entity, b: &Entity, acc: &mut DVec2) {
    yukawa_with(a, b, acc, YUKAWA_ALPHA, YUKAWA_MU);
}

/// Screened residual force (Yukawa)
/// F = alpha * exp(-mu * r) / r²
pub fn yukawa_with(a: &Entity, b: &Entity, acc: &mut DVec2, alpha: f64, mu: f64) {
    let d = b.position - a.position;
    let r = d.length() + EPSILON;
    let f = alpha * (-mu * r).exp() / (r * r);
    *acc += f * d / r;
}

/// Short-range residual force (simplified Casimir)
/// F = -ħπ / (240 r⁴), directed away from `b`
pub fn casimir(a: &Entity, b: &Entity, acc: &mut DVec2) {
    let d = b.position - a.position;
    let r = d.length() + EPSILON;
    let f = -HBAR * CASIMIR_PI / (240.0 * r.powf(4.0));
    *acc += f * d / r;
}

/// Linear velocity damping with the default coefficient
pub fn drag(a: &mut Entity) {
    drag_with(a, DRAG_COEFF);
}

/// Linear velocity damping: v -= coeff * v
///
/// Acts on velocity directly rather than through the force accumulator.
pub fn drag_with(a: &mut Entity, coeff: f64) {
    a.velocity -= coeff * a.velocity;
}

/// Add every enabled law for the pair (a, b), in the order
/// gravity, coulomb, yukawa, casimir
pub fn accumulate(a: &Entity, b: &Entity, acc: &mut DVec2, params: &ForceParams) {
    if params.gravity {
        gravity(a, b, acc);
    }
    if params.coulomb {
        coulomb(a, b, acc);
    }
    if params.yukawa {
        yukawa_with(a, b, acc, params.yukawa_alpha, params.yukawa_mu);
    }
    if params.casimir {
        casimir(a, b, acc);
    }
}
