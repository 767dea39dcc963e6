//! CPU N-body stepping loop
//!
//! Entities are updated one at a time in insertion order. Each entity's net
//! force is computed from the current state of all others, including ones
//! already moved earlier in the same sub-step, and the entity is integrated
//! immediately. Reordering this loop or batching the force pass changes the
//! numbers.

use entity_physics::{forces, Entity};
use glam::DVec2;

use crate::snapshot::{EntityState, Snapshot};
use crate::SimulationParams;

#[derive(Debug, Clone, Default)]
pub struct Simulator {
    entities: Vec<Entity>,
    params: SimulationParams,
    time: f64,
}

impl Simulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(params: SimulationParams) -> Self {
        Self {
            entities: Vec::new(),
            params,
            time: 0.0,
        }
    }

    /// Append an entity. It is visited after every entity added before it.
    pub fn add(&mut self, entity: Entity) {
        log::debug!("adding {} as entity #{}", entity, self.entities.len());
        self.entities.push(entity);
    }

    /// Advance the simulation by `steps` sub-steps of `dt` each
    pub fn step(&mut self, steps: u32) {
        for _ in 0..steps {
            self.sub_step();
        }
    }

    fn sub_step(&mut self) {
        let params = self.params;

        for i in 0..self.entities.len() {
            let force = net_force(&self.entities, i, &params);
            integrate(&mut self.entities[i], force, &params);
        }

        self.time += params.dt;
        log::trace!("t={} entities={}", self.time, self.entities.len());
    }

    /// Text report of the current state. Calling it never changes the state.
    pub fn snapshot(&self) -> String {
        self.state(None).to_string()
    }

    /// Structured report, optionally limited to the first `max_entities`
    pub fn state(&self, max_entities: Option<usize>) -> Snapshot {
        let take = max_entities.unwrap_or(self.entities.len());
        Snapshot {
            time: self.time,
            dt: self.params.dt,
            entity_count: self.entities.len(),
            entities: self.entities.iter().take(take).map(EntityState::from).collect(),
        }
    }

    pub fn dt(&self) -> f64 {
        self.params.dt
    }

    pub fn set_dt(&mut self, dt: f64) {
        self.params.dt = dt;
    }

    pub fn area(&self) -> f64 {
        self.params.area
    }

    pub fn set_area(&mut self, area: f64) {
        self.params.area = area;
    }

    /// Elapsed simulation time
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut SimulationParams {
        &mut self.params
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Mutable access to every entity. A slice, so entities can be rewritten
    /// in place but not added, removed or reordered.
    pub fn entities_mut(&mut self) -> &mut [Entity] {
        &mut self.entities
    }

    pub fn entity(&self, index: usize) -> Option<&Entity> {
        self.entities.get(index)
    }

    pub fn entity_mut(&mut self, index: usize) -> Option<&mut Entity> {
        self.entities.get_mut(index)
    }

    pub fn total_momentum(&self) -> DVec2 {
        self.entities.iter().map(Entity::momentum).sum()
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.entities.iter().map(Entity::kinetic_energy).sum()
    }
}

/// Sum of all pair forces on entity `i`
fn net_force(entities: &[Entity], i: usize, params: &SimulationParams) -> DVec2 {
    let a = &entities[i];
    let mut acc = DVec2::ZERO;
    for (j, b) in entities.iter().enumerate() {
        if j == i {
            continue;
        }
        forces::accumulate(a, b, &mut acc, &params.forces);
    }
    acc
}

/// Semi-implicit Euler update followed by drag and wall reflection
fn integrate(e: &mut Entity, force: DVec2, params: &SimulationParams) {
    let dt = params.dt;

    // Zero mass yields inf/NaN here and is left to propagate
    let velocity = e.velocity() + force / e.mass() * dt;
    e.set_velocity(velocity);
    e.set_position(e.position() + velocity * dt);

    if params.drag {
        forces::drag_with(e, params.drag_coeff);
    }

    reflect(e, params.area, params.restitution);
}

/// Flip and damp each velocity component whose coordinate is outside
/// [0, area]. The position itself is left where it is.
fn reflect(e: &mut Entity, area: f64, restitution: f64) {
    let p = e.position();
    let mut v = e.velocity();
    if p.x < 0.0 || p.x > area {
        v.x *= -restitution;
    }
    if p.y < 0.0 || p.y > area {
        v.y *= -restitution;
    }
    e.set_velocity(v);
}
