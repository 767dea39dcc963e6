use approx::assert_relative_eq;
use entity_physics::{Entity, G};
use entity_simulation::{Scenario, SimulationParams, Simulator};
use glam::DVec2;

fn two_body(drag: bool) -> Simulator {
    let mut sim = Simulator::with_params(SimulationParams {
        drag,
        ..Default::default()
    });
    sim.add(Entity::new("A", 0.0, 0.0, 5.0));
    sim.add(Entity::new("B", 10.0, 0.0, 5.0));
    sim
}

// ==================================================================================
// Pair interaction
// ==================================================================================

#[test]
fn test_two_bodies_fall_toward_each_other() {
    let mut sim = two_body(true);

    sim.step(1);

    let a = &sim.entities()[0];
    let b = &sim.entities()[1];
    assert!(a.vx() > 0.0);
    assert!(b.vx() < 0.0);
    assert_relative_eq!(a.vx(), -b.vx(), max_relative = 1e-9);
    assert_eq!(a.vy(), 0.0);
    assert_eq!(b.vy(), 0.0);
}

#[test]
fn test_two_body_momentum_balances() {
    let mut sim = two_body(false);

    sim.step(1);

    let p = sim.total_momentum();
    let scale = sim.entities()[0].momentum().length();
    assert!(p.length() <= scale * 1e-9, "net momentum {p}");
}

#[test]
fn test_gravity_dominates_two_body_pull() {
    let mut params = SimulationParams {
        drag: false,
        ..Default::default()
    };
    params.forces.yukawa = false;
    params.forces.casimir = false;

    let mut sim = Simulator::with_params(params);
    sim.add(Entity::new("A", 0.0, 0.0, 5.0));
    sim.add(Entity::new("B", 10.0, 0.0, 5.0));
    sim.step(1);

    // a = G m / r², dt = 1
    assert_relative_eq!(sim.entities()[0].vx(), G * 5.0 / 100.0, max_relative = 1e-9);
}

// ==================================================================================
// Boundary reflection
// ==================================================================================

#[test]
fn test_outside_entity_reverses_without_clamping() {
    let mut sim = Simulator::with_params(SimulationParams {
        drag: false,
        ..Default::default()
    });
    let area = sim.area();
    let mut e = Entity::new("runaway", area + 5.0, 5.0, 1.0);
    e.set_velocity(DVec2::new(2.0, 0.0));
    sim.add(e);

    sim.step(1);

    let e = &sim.entities()[0];
    assert!(e.x() > area);
    assert_eq!(e.x(), area + 7.0);
    assert_eq!(e.vx(), 2.0 * -0.9);
    assert_eq!(e.vy(), 0.0);
}

#[test]
fn test_outside_entity_with_drag() {
    let mut sim = Simulator::new();
    let area = sim.area();
    let mut e = Entity::new("runaway", area + 5.0, 5.0, 1.0);
    e.set_velocity(DVec2::new(2.0, 0.0));
    sim.add(e);

    sim.step(1);

    assert_relative_eq!(sim.entities()[0].vx(), -1.8 * (1.0 - 1e-5), max_relative = 1e-12);
}

#[test]
fn test_reflection_independent_of_overshoot() {
    let mut sim = Simulator::with_params(SimulationParams {
        drag: false,
        area: 100.0,
        ..Default::default()
    });
    let mut near = Entity::new("near", -0.5, 50.0, 1.0);
    near.set_velocity(DVec2::new(-3.0, 0.0));
    let mut far = Entity::new("far", -1.0e6, 50.0, 1.0);
    far.set_velocity(DVec2::new(-3.0, 0.0));
    // Only Coulomb stays on, and both entities are neutral
    sim.params_mut().forces.gravity = false;
    sim.params_mut().forces.yukawa = false;
    sim.params_mut().forces.casimir = false;
    sim.add(near);
    sim.add(far);

    sim.step(1);

    assert_eq!(sim.entities()[0].vx(), -3.0 * -0.9);
    assert_eq!(sim.entities()[1].vx(), -3.0 * -0.9);
}

// ==================================================================================
// Snapshots
// ==================================================================================

#[test]
fn test_snapshot_counts_every_add() {
    let mut sim = Simulator::new();
    for i in 0..4 {
        sim.add(Entity::new(format!("e{i}"), 100.0 * (i + 1) as f64, 100.0, 1.0));
        assert!(sim.snapshot().starts_with(&format!("t=0.0  Entities={}\n", i + 1)));
    }

    sim.step(3);

    let snap = sim.snapshot();
    assert!(snap.starts_with("t=3.0  Entities=4\n"));
    assert_eq!(snap.lines().count(), 5);
}

#[test]
fn test_snapshot_is_idempotent() {
    let mut sim = two_body(true);
    sim.step(2);

    let first = sim.snapshot();
    let second = sim.snapshot();

    assert_eq!(first, second);
}

#[test]
fn test_snapshot_lines_follow_insertion_order() {
    let mut sim = Simulator::new();
    sim.add(Entity::new("Zeta", 1.0, 2.0, 1.0));
    sim.add(Entity::new("Alpha", 3.0, 4.0, 1.0));

    let snap = sim.snapshot();
    let lines: Vec<_> = snap.lines().collect();

    assert_eq!(lines[1], "  Zeta  x=1.0 y=2.0 vx=0.0 vy=0.0");
    assert_eq!(lines[2], "  Alpha  x=3.0 y=4.0 vx=0.0 vy=0.0");
}

#[test]
fn test_identical_runs_are_reproducible() {
    let mut a = Scenario::random_cloud(30, 11, 1000.0).into_simulator();
    let mut b = Scenario::random_cloud(30, 11, 1000.0).into_simulator();

    a.step(20);
    b.step(20);

    assert_eq!(a.snapshot(), b.snapshot());
}

// ==================================================================================
// Solar scenario
// ==================================================================================

#[test]
fn test_solar_scenario_runs() {
    let json = r#"{
        "params": { "dt": 10.0 },
        "entities": [
            { "name": "Sun", "x": 5000.0, "y": 5000.0, "mass": 2e30 },
            { "name": "Earth", "x": 5000.0, "y": 5500.0, "mass": 6e24 }
        ]
    }"#;
    let mut sim = Scenario::from_json_str(json).unwrap().into_simulator();

    sim.step(10);

    assert_relative_eq!(sim.time(), 100.0);
    for e in sim.entities() {
        assert!(e.position().is_finite(), "{} left the finite range", e.name());
    }
    assert!(sim.snapshot().contains("Entities=2"));
}

#[test]
fn test_bindings_minimal_run() {
    let mut sim = Simulator::new();
    sim.add(Entity::new("A", 1000.0, 1000.0, 1e5));
    sim.add(Entity::new("B", 1005.0, 1000.0, 1e5));
    sim.set_dt(0.1);

    sim.step(5);

    assert!(sim.snapshot().contains("Entities=2"));
}
