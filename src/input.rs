//! Keyboard shortcuts for simulation control.

use bevy::app::AppExit;
use bevy::prelude::*;

use crate::registry::{BodyId, BodyRegistry};
use crate::types::{SimSet, Simulation};

/// Plugin providing keyboard input handling.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, keyboard_shortcuts.in_set(SimSet::Input));
    }
}

/// Space toggles animation, G and H step the speed, Escape quits.
fn keyboard_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    mut sim: ResMut<Simulation>,
    mut registry: ResMut<BodyRegistry>,
    mut exit: MessageWriter<AppExit>,
) {
    if keys.just_pressed(KeyCode::Space) {
        sim.toggle_animation();
        info!(
            "Animation {}",
            if sim.animation_enabled() { "enabled" } else { "disabled" }
        );
    }

    if keys.just_pressed(KeyCode::KeyG) {
        sim.speed_up(registry.get_mut(BodyId::Earth));
    }

    if keys.just_pressed(KeyCode::KeyH) {
        sim.speed_down(registry.get_mut(BodyId::Earth));
    }

    if keys.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}
