//! Sun, Earth and an electron, printed every ten steps
//!
//! Run with `RUST_LOG=debug` to see entities being added.

use entity_physics::Entity;
use entity_simulation::Simulator;

fn main() {
    env_logger::init();

    let mut sim = Simulator::new();
    sim.add(Entity::new("Sun", 5000.0, 5000.0, 2e30));
    sim.add(Entity::new("Earth", 5000.0, 5500.0, 6e24));
    sim.add(Entity::new("Electron", 5002.0, 5000.0, 9.1e-31).with_charge(-1.6e-19));
    sim.set_dt(10.0);

    for _ in 0..10 {
        sim.step(10);
        println!("{}", sim.snapshot());
    }

    log::info!("kinetic energy after {} s: {:e} J", sim.time(), sim.kinetic_energy());
}
