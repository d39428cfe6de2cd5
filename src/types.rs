//! Shared simulation resources, constants, and system ordering sets.

use bevy::prelude::*;

use crate::registry::{BodyState, EARTH_ORBITAL_PERIOD};

/// Amount added to or removed from Earth's orbital period per speed step.
pub const SPEED_STEP: f64 = 0.0001;

/// Upper clamp for Earth's orbital period. Stepping past this is a silent
/// no-op.
pub const MAX_ORBITAL_PERIOD: f64 = 0.005;

/// Lower clamp for Earth's orbital period.
pub const MIN_ORBITAL_PERIOD: f64 = 0.0001;

/// Amount added to or removed from Earth's rotational period per speed step.
pub const ROTATION_STEP: f64 = std::f64::consts::PI / 26.0;

/// Update-schedule ordering: input and camera first, then the body tick,
/// then render synchronization. Within one frame every `advance` completes
/// before the synchronizer reads any world matrix.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimSet {
    Input,
    Tick,
    Sync,
}

/// Global animation state and the user-facing speed readout.
#[derive(Resource, Clone, Debug)]
pub struct Simulation {
    animation_enabled: bool,
    /// Display mirror of Earth's orbital period, shown in the overlay.
    orbital_speed: f64,
}

impl Default for Simulation {
    fn default() -> Self {
        Self {
            animation_enabled: true,
            orbital_speed: EARTH_ORBITAL_PERIOD,
        }
    }
}

impl Simulation {
    pub fn animation_enabled(&self) -> bool {
        self.animation_enabled
    }

    pub fn set_animation_enabled(&mut self, enabled: bool) {
        self.animation_enabled = enabled;
    }

    pub fn toggle_animation(&mut self) {
        self.animation_enabled = !self.animation_enabled;
    }

    /// Read-only speed value for UI display.
    pub fn orbital_speed(&self) -> f64 {
        self.orbital_speed
    }

    /// Speed the whole system up by one step, adjusting Earth's periods and
    /// the mirrored readout together. Silently does nothing at the upper
    /// clamp.
    pub fn speed_up(&mut self, earth: &mut BodyState) {
        if earth.orbital_period + SPEED_STEP < MAX_ORBITAL_PERIOD {
            self.orbital_speed += SPEED_STEP;
            earth.orbital_period += SPEED_STEP;
            earth.rotational_period += ROTATION_STEP;
        }
    }

    /// Slow the whole system down by one step. Silently does nothing at the
    /// lower clamp.
    pub fn speed_down(&mut self, earth: &mut BodyState) {
        if earth.orbital_period - SPEED_STEP >= MIN_ORBITAL_PERIOD {
            self.orbital_speed -= SPEED_STEP;
            earth.orbital_period -= SPEED_STEP;
            earth.rotational_period -= ROTATION_STEP;
        }
    }
}

/// Dirty flag for render-facing state.
///
/// Set by a simulation tick or a camera view/projection change, cleared once
/// the synchronizer has pushed fresh matrices. Never set by the draw pass.
#[derive(Resource, Clone, Debug)]
pub struct RenderSync {
    dirty: bool,
}

impl Default for RenderSync {
    fn default() -> Self {
        // Dirty at startup so the first frame uploads everything.
        Self { dirty: true }
    }
}

impl RenderSync {
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn clear(&mut self) {
        self.dirty = false;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{BodyId, BodyRegistry};

    #[test]
    fn toggle_flips_the_flag() {
        let mut sim = Simulation::default();
        assert!(sim.animation_enabled());
        sim.toggle_animation();
        assert!(!sim.animation_enabled());
        sim.toggle_animation();
        assert!(sim.animation_enabled());
    }

    #[test]
    fn orbital_speed_mirrors_earth_period() {
        let mut sim = Simulation::default();
        let mut registry = BodyRegistry::new();
        sim.speed_up(registry.get_mut(BodyId::Earth));
        assert_eq!(sim.orbital_speed(), registry.get(BodyId::Earth).orbital_period);
        sim.speed_down(registry.get_mut(BodyId::Earth));
        assert_eq!(sim.orbital_speed(), registry.get(BodyId::Earth).orbital_period);
    }

    #[test]
    fn render_sync_starts_dirty() {
        let mut sync = RenderSync::default();
        assert!(sync.is_dirty());
        sync.clear();
        assert!(!sync.is_dirty());
        sync.mark_dirty();
        assert!(sync.is_dirty());
    }
}
