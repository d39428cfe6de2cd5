//! Control and help overlay in the top-left corner.

use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::registry::{BodyId, BodyRegistry};
use crate::types::Simulation;

/// System that renders the controls panel: frame stats, key bindings, the
/// animation toggle, and the current orbital speed readout.
pub fn controls_panel(
    mut contexts: EguiContexts,
    mut sim: ResMut<Simulation>,
    mut registry: ResMut<BodyRegistry>,
    time: Res<Time>,
    diagnostics: Res<DiagnosticsStore>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Window::new("Controls")
        .fixed_pos(egui::pos2(10.0, 10.0))
        .resizable(false)
        .show(ctx, |ui| {
            let fps = diagnostics
                .get(&FrameTimeDiagnosticsPlugin::FPS)
                .and_then(|diagnostic| diagnostic.smoothed())
                .unwrap_or(0.0);
            ui.label(format!(
                "Frame Rate: {fps:.1}    Total Elapsed Time: {:.1}",
                time.elapsed_secs()
            ));

            ui.label("Camera (WASD + Left-Click-Mouse-Look)");

            let state = if sim.animation_enabled() {
                "Enabled"
            } else {
                "Disabled"
            };
            if ui
                .button(format!("Toggle Animation (Space): {state}"))
                .clicked()
            {
                sim.toggle_animation();
            }

            ui.horizontal(|ui| {
                ui.label(format!(
                    "Speed Up (G) and Slow Down (H): {:.4}",
                    sim.orbital_speed()
                ));
                if ui.button("+").clicked() {
                    sim.speed_up(registry.get_mut(BodyId::Earth));
                }
                if ui.button("\u{2212}").clicked() {
                    sim.speed_down(registry.get_mut(BodyId::Earth));
                }
            });
        });
}
