//! Orrery - Animated Solar System Model
//!
//! A desktop application animating a scaled solar system: bodies orbit the
//! Sun on tilted spin axes while a fly camera and on-screen controls let
//! the user pause, speed up, and slow down the whole model.

use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use orrery::camera::CameraPlugin;
use orrery::input::InputPlugin;
use orrery::registry::BodyRegistry;
use orrery::render::RenderPlugin;
use orrery::sim::SimPlugin;
use orrery::types::Simulation;
use orrery::ui::UiPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .add_plugins(EguiPlugin::default())
        // Insert resources before plugins that depend on them
        .insert_resource(BodyRegistry::default())
        .insert_resource(Simulation::default())
        // Add simulation plugins
        .add_plugins((SimPlugin, CameraPlugin, InputPlugin, RenderPlugin, UiPlugin))
        .run();
}
