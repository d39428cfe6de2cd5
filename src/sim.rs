//! Simulation controller: the per-frame tick driving the orbit integrator.

use bevy::prelude::*;

use crate::registry::BodyRegistry;
use crate::types::{RenderSync, SimSet, Simulation};

/// Plugin providing the animation tick and the shared ordering sets.
pub struct SimPlugin;

impl Plugin for SimPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BodyRegistry>()
            .init_resource::<Simulation>()
            .init_resource::<RenderSync>()
            .configure_sets(Update, (SimSet::Input, SimSet::Tick, SimSet::Sync).chain())
            .add_systems(Update, tick_bodies.in_set(SimSet::Tick));
    }
}

/// Advance every body by this frame's elapsed time, then flag the render
/// state for re-upload.
///
/// When animation is disabled nothing runs: no partial updates, body state
/// stays bit for bit unchanged until re-enabled.
pub fn tick_bodies(
    mut registry: ResMut<BodyRegistry>,
    sim: Res<Simulation>,
    mut sync: ResMut<RenderSync>,
    time: Res<Time>,
) {
    if !sim.animation_enabled() {
        return;
    }

    registry.advance_all(time.delta_secs_f64());
    sync.mark_dirty();
}
