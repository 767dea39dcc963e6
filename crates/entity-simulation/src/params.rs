//! Simulation parameters for runtime tuning

use entity_physics::{ForceParams, DRAG_COEFF, RESTITUTION};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    /// Time step per sub-step
    pub dt: f64,
    /// Side length of the square region [0, area] x [0, area]
    pub area: f64,

    pub drag: bool,
    pub drag_coeff: f64,

    /// Velocity factor kept on a wall bounce (the component is also negated)
    pub restitution: f64,

    pub forces: ForceParams,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            dt: 1.0,
            area: 10000.0,
            drag: true,
            drag_coeff: DRAG_COEFF,
            restitution: RESTITUTION,
            forces: ForceParams::default(),
        }
    }
}
