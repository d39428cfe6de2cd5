//! Integration tests for the simulation controller's speed and animation
//! controls.

use approx::assert_relative_eq;

use orrery::registry::{BodyId, BodyRegistry, EARTH_ROTATIONAL_PERIOD};
use orrery::types::{Simulation, ROTATION_STEP};

#[test]
fn speed_up_is_a_no_op_at_the_upper_clamp() {
    let mut sim = Simulation::default();
    let mut registry = BodyRegistry::new();
    registry.get_mut(BodyId::Earth).orbital_period = 0.0049;
    let speed_before = sim.orbital_speed();
    let rotation_before = registry.get(BodyId::Earth).rotational_period;

    sim.speed_up(registry.get_mut(BodyId::Earth));

    assert_eq!(registry.get(BodyId::Earth).orbital_period, 0.0049);
    assert_eq!(registry.get(BodyId::Earth).rotational_period, rotation_before);
    assert_eq!(sim.orbital_speed(), speed_before);
}

#[test]
fn speed_up_steps_by_one_ten_thousandth() {
    let mut sim = Simulation::default();
    let mut registry = BodyRegistry::new();
    assert_eq!(registry.get(BodyId::Earth).orbital_period, 0.0025);

    sim.speed_up(registry.get_mut(BodyId::Earth));

    assert_relative_eq!(registry.get(BodyId::Earth).orbital_period, 0.0026);
    assert_relative_eq!(sim.orbital_speed(), 0.0026);
    assert_relative_eq!(
        registry.get(BodyId::Earth).rotational_period,
        EARTH_ROTATIONAL_PERIOD + ROTATION_STEP
    );
}

#[test]
fn speed_down_is_a_no_op_at_the_lower_clamp() {
    let mut sim = Simulation::default();
    let mut registry = BodyRegistry::new();
    registry.get_mut(BodyId::Earth).orbital_period = 0.0001;
    let speed_before = sim.orbital_speed();

    sim.speed_down(registry.get_mut(BodyId::Earth));

    assert_eq!(registry.get(BodyId::Earth).orbital_period, 0.0001);
    assert_eq!(sim.orbital_speed(), speed_before);
}

#[test]
fn speed_down_steps_by_one_ten_thousandth() {
    let mut sim = Simulation::default();
    let mut registry = BodyRegistry::new();

    sim.speed_down(registry.get_mut(BodyId::Earth));

    assert_relative_eq!(registry.get(BodyId::Earth).orbital_period, 0.0024);
    assert_relative_eq!(sim.orbital_speed(), 0.0024);
    assert_relative_eq!(
        registry.get(BodyId::Earth).rotational_period,
        EARTH_ROTATIONAL_PERIOD - ROTATION_STEP
    );
}

#[test]
fn speed_steps_round_trip() {
    let mut sim = Simulation::default();
    let mut registry = BodyRegistry::new();

    sim.speed_up(registry.get_mut(BodyId::Earth));
    sim.speed_down(registry.get_mut(BodyId::Earth));

    assert_relative_eq!(registry.get(BodyId::Earth).orbital_period, 0.0025);
    assert_relative_eq!(sim.orbital_speed(), 0.0025);
    assert_relative_eq!(
        registry.get(BodyId::Earth).rotational_period,
        EARTH_ROTATIONAL_PERIOD
    );
}

#[test]
fn animation_toggle_round_trips() {
    let mut sim = Simulation::default();
    assert!(sim.animation_enabled());

    sim.set_animation_enabled(false);
    assert!(!sim.animation_enabled());

    sim.toggle_animation();
    assert!(sim.animation_enabled());
}
