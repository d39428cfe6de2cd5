//! Headless Bevy integration tests.
//!
//! These verify the simulation resources and the tick system without a GPU
//! or window.

use bevy::math::DMat4;
use bevy::prelude::*;

use orrery::registry::{BodyId, BodyRegistry};
use orrery::sim::SimPlugin;
use orrery::types::{RenderSync, Simulation};

fn create_minimal_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(SimPlugin);
    app
}

/// Everything that must stay frozen while animation is disabled.
#[derive(PartialEq, Debug)]
struct BodySnapshot {
    rotation: f64,
    orbital_angle: f64,
    location: DMat4,
    world: DMat4,
}

fn snapshot(registry: &BodyRegistry, id: BodyId) -> BodySnapshot {
    let body = registry.get(id);
    BodySnapshot {
        rotation: body.rotation,
        orbital_angle: body.orbital_angle,
        location: body.location,
        world: body.world,
    }
}

#[test]
fn registry_resource_initializes() {
    let mut app = create_minimal_app();
    app.update();

    let registry = app.world().resource::<BodyRegistry>();
    assert_eq!(registry.len(), 10);
    assert_eq!(registry.get(BodyId::Earth).id, BodyId::Earth);
}

#[test]
fn ticks_advance_orbit_angles() {
    let mut app = create_minimal_app();
    for _ in 0..3 {
        app.update();
    }

    let registry = app.world().resource::<BodyRegistry>();
    assert!(registry.get(BodyId::Earth).orbital_angle < 0.0);
    assert!(registry.get(BodyId::Pluto).orbital_angle < 0.0);
    assert!(registry.sun().rotation > 0.0);
}

#[test]
fn disabled_animation_freezes_state_bit_for_bit() {
    let mut app = create_minimal_app();

    // Let the system run a little, then freeze it.
    for _ in 0..3 {
        app.update();
    }
    app.world_mut()
        .resource_mut::<Simulation>()
        .set_animation_enabled(false);

    let before: Vec<BodySnapshot> = BodyId::UPDATE_ORDER
        .iter()
        .map(|&id| snapshot(app.world().resource::<BodyRegistry>(), id))
        .collect();
    let sun_before = app.world().resource::<BodyRegistry>().sun().clone();

    for _ in 0..5 {
        app.update();
    }

    let registry = app.world().resource::<BodyRegistry>();
    for (id, old) in BodyId::UPDATE_ORDER.iter().zip(&before) {
        assert_eq!(&snapshot(registry, *id), old, "{} drifted while frozen", id.name());
    }
    assert_eq!(registry.sun().rotation, sun_before.rotation);
    assert_eq!(registry.sun().world, sun_before.world);
}

#[test]
fn tick_marks_render_state_dirty() {
    let mut app = create_minimal_app();
    app.world_mut().resource_mut::<RenderSync>().clear();

    app.update();

    assert!(app.world().resource::<RenderSync>().is_dirty());
}

#[test]
fn frozen_ticks_leave_the_dirty_flag_alone() {
    let mut app = create_minimal_app();
    app.world_mut()
        .resource_mut::<Simulation>()
        .set_animation_enabled(false);
    app.world_mut().resource_mut::<RenderSync>().clear();

    for _ in 0..3 {
        app.update();
    }

    assert!(!app.world().resource::<RenderSync>().is_dirty());
}
