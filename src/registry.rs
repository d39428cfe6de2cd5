//! Celestial body registry: the fixed set of bodies, their canonical
//! parameters, and their mutable simulation state.
//!
//! All parameters are expressed relative to Earth's values, which double as
//! the master clock for every other body (see `kinematics`).

use bevy::math::{DMat4, DVec3};
use bevy::prelude::*;

/// Earth's canonical orbital period coefficient. This is the value the speed
/// controls adjust, and the scale factor applied to every other body's orbit.
pub const EARTH_ORBITAL_PERIOD: f64 = 0.0025;

/// Earth's canonical rotational period coefficient (radians of spin per
/// elapsed second at base speed).
pub const EARTH_ROTATIONAL_PERIOD: f64 = std::f64::consts::PI;

/// Earth's orbital distance from the Sun, in scene units.
pub const EARTH_ORBITAL_DISTANCE: f64 = 40.0;

/// Earth's uniform render scale.
pub const EARTH_SCALE: f64 = 0.4;

/// Earth's axial tilt in radians.
pub const EARTH_AXIAL_TILT: f64 = 23.5 / 90.0;

/// Color map for the Sun.
pub const SUN_COLOR_MAP: &str = "textures/sun.png";

/// Flat black specular map shared by bodies without meaningful reflection.
pub const NO_REFLECTION_MAP: &str = "textures/no_reflection.png";

/// Identifier for the orbiting bodies in the model (the Sun is tracked
/// separately as the central light source).
///
/// Declaration order is the fixed per-tick update order: the Moon comes
/// right after Earth so its offset base is Earth's already-updated location.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyId {
    Mercury,
    Venus,
    Earth,
    Moon,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl BodyId {
    /// Deterministic per-tick update order for every body.
    pub const UPDATE_ORDER: [BodyId; 10] = [
        BodyId::Mercury,
        BodyId::Venus,
        BodyId::Earth,
        BodyId::Moon,
        BodyId::Mars,
        BodyId::Jupiter,
        BodyId::Saturn,
        BodyId::Uranus,
        BodyId::Neptune,
        BodyId::Pluto,
    ];

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            BodyId::Mercury => "Mercury",
            BodyId::Venus => "Venus",
            BodyId::Earth => "Earth",
            BodyId::Moon => "Moon",
            BodyId::Mars => "Mars",
            BodyId::Jupiter => "Jupiter",
            BodyId::Saturn => "Saturn",
            BodyId::Uranus => "Uranus",
            BodyId::Neptune => "Neptune",
            BodyId::Pluto => "Pluto",
        }
    }
}

/// What a body revolves around.
///
/// An explicit relation instead of a same-object comparison: `Origin` means
/// the body circles the global origin (where the Sun sits), `Body` means it
/// circles another body's current location.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrbitTarget {
    Origin,
    Body(BodyId),
}

/// One celestial body: static parameters plus mutable simulation state.
#[derive(Clone, Debug)]
pub struct BodyState {
    pub id: BodyId,
    pub target: OrbitTarget,

    /// Orbit advance per tick, as a coefficient of Earth's (Earth holds the
    /// absolute value).
    pub orbital_period: f64,
    /// Spin rate coefficient, scaled by Earth's for every body but Earth.
    pub rotational_period: f64,
    /// Radius of the circular orbit around the satellite target, scene units.
    pub orbital_distance: f64,
    /// Axial tilt in radians, applied as a secondary spin axis.
    pub axial_tilt: f64,
    /// Uniform render scale.
    pub scale: f64,

    pub color_map: &'static str,
    pub specular_map: &'static str,

    /// Accumulated spin angle in radians. Grows without bound; no wrapping.
    pub rotation: f64,
    /// Accumulated orbit angle in radians. Decreases without bound.
    pub orbital_angle: f64,
    /// Local transform carrying only the body's current orbit translation.
    pub location: DMat4,
    /// Derived world transform: scale, spin, tilt, then location.
    pub world: DMat4,
}

impl BodyState {
    fn new(
        id: BodyId,
        target: OrbitTarget,
        color_map: &'static str,
        orbital_period: f64,
        orbital_distance: f64,
        rotational_period: f64,
        axial_tilt: f64,
        scale: f64,
    ) -> Self {
        Self {
            id,
            target,
            orbital_period,
            rotational_period,
            orbital_distance,
            axial_tilt,
            scale,
            color_map,
            specular_map: NO_REFLECTION_MAP,
            rotation: 0.0,
            orbital_angle: 0.0,
            location: DMat4::IDENTITY,
            world: DMat4::from_scale(DVec3::splat(scale)),
        }
    }

    /// Current orbit translation, read out of the location transform.
    pub fn translation(&self) -> DVec3 {
        self.location.w_axis.truncate()
    }
}

/// The Sun: a non-orbiting light source at the origin with its own spin.
#[derive(Clone, Debug)]
pub struct SunState {
    /// Accumulated spin angle in radians.
    pub rotation: f64,
    /// Uniform render scale.
    pub scale: f64,
    /// Derived world transform (spin then scale, no translation).
    pub world: DMat4,
}

impl Default for SunState {
    fn default() -> Self {
        Self {
            rotation: 0.0,
            scale: 1.0,
            world: DMat4::IDENTITY,
        }
    }
}

/// Canonical parameters for a body, relative to Earth's values.
fn body_defaults(id: BodyId) -> BodyState {
    match id {
        BodyId::Mercury => BodyState::new(
            id,
            OrbitTarget::Origin,
            "textures/mercury.png",
            1.0 / 0.241,
            EARTH_ORBITAL_DISTANCE * 0.387,
            1.0 / 58.646,
            0.01 / 90.0,
            EARTH_SCALE * 0.382,
        ),
        BodyId::Venus => BodyState::new(
            id,
            OrbitTarget::Origin,
            "textures/venus.png",
            1.0 / 0.615,
            EARTH_ORBITAL_DISTANCE * 0.723,
            1.0 / 243.01,
            177.4 / 90.0,
            EARTH_SCALE * 0.949,
        ),
        BodyId::Earth => {
            let mut earth = BodyState::new(
                id,
                OrbitTarget::Origin,
                "textures/earth.png",
                EARTH_ORBITAL_PERIOD,
                EARTH_ORBITAL_DISTANCE,
                EARTH_ROTATIONAL_PERIOD,
                EARTH_AXIAL_TILT,
                EARTH_SCALE,
            );
            // The only body with a meaningful reflection layer.
            earth.specular_map = "textures/earth_specular.png";
            earth
        }
        BodyId::Moon => BodyState::new(
            id,
            OrbitTarget::Body(BodyId::Earth),
            "textures/moon.png",
            365.0 / 27.3,
            EARTH_ORBITAL_DISTANCE * 0.08,
            1.0,
            6.7 / 90.0,
            EARTH_SCALE / 4.0,
        ),
        BodyId::Mars => BodyState::new(
            id,
            OrbitTarget::Origin,
            "textures/mars.png",
            1.0 / 1.88,
            EARTH_ORBITAL_DISTANCE * 1.523,
            1.0 / 1.0257,
            25.2 / 90.0,
            EARTH_SCALE * 0.532,
        ),
        BodyId::Jupiter => BodyState::new(
            id,
            OrbitTarget::Origin,
            "textures/jupiter.png",
            1.0 / 11.86,
            EARTH_ORBITAL_DISTANCE * 5.205,
            1.0 / 0.4097,
            3.1 / 90.0,
            EARTH_SCALE * 11.19,
        ),
        BodyId::Saturn => BodyState::new(
            id,
            OrbitTarget::Origin,
            "textures/saturn.png",
            1.0 / 29.42,
            EARTH_ORBITAL_DISTANCE * 9.582,
            1.0 / 0.4264,
            26.7 / 90.0,
            EARTH_SCALE * 9.26,
        ),
        BodyId::Uranus => BodyState::new(
            id,
            OrbitTarget::Origin,
            "textures/uranus.png",
            1.0 / 83.75,
            EARTH_ORBITAL_DISTANCE * 19.2,
            1.0 / 0.7167,
            97.8 / 90.0,
            EARTH_SCALE * 4.01,
        ),
        BodyId::Neptune => BodyState::new(
            id,
            OrbitTarget::Origin,
            "textures/neptune.png",
            1.0 / 163.72,
            EARTH_ORBITAL_DISTANCE * 30.05,
            1.0 / 0.67125,
            28.3 / 90.0,
            EARTH_SCALE * 3.88,
        ),
        BodyId::Pluto => BodyState::new(
            id,
            OrbitTarget::Origin,
            "textures/pluto.png",
            1.0 / 247.93,
            EARTH_ORBITAL_DISTANCE * 39.48,
            1.0 / 6.3874,
            122.5 / 90.0,
            EARTH_SCALE * 0.18,
        ),
    }
}

/// Resource owning every body in update order, plus the Sun.
///
/// This is the single source of truth for body state: orbit path generation,
/// the per-tick update, and render synchronization all iterate the same
/// ordered collection.
#[derive(Resource, Clone, Debug)]
pub struct BodyRegistry {
    bodies: Vec<BodyState>,
    sun: SunState,
}

impl Default for BodyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl BodyRegistry {
    /// Build the registry with the canonical parameter table.
    pub fn new() -> Self {
        Self {
            bodies: BodyId::UPDATE_ORDER
                .iter()
                .map(|&id| body_defaults(id))
                .collect(),
            sun: SunState::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Bodies in update order.
    pub fn iter(&self) -> impl Iterator<Item = &BodyState> {
        self.bodies.iter()
    }

    pub fn get(&self, id: BodyId) -> &BodyState {
        // The registry is built from UPDATE_ORDER, so the discriminant is
        // the index.
        &self.bodies[id as usize]
    }

    pub fn get_mut(&mut self, id: BodyId) -> &mut BodyState {
        &mut self.bodies[id as usize]
    }

    pub(crate) fn bodies_mut(&mut self) -> &mut [BodyState] {
        &mut self.bodies
    }

    pub fn sun(&self) -> &SunState {
        &self.sun
    }

    pub(crate) fn sun_mut(&mut self) -> &mut SunState {
        &mut self.sun
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_follows_update_order() {
        let registry = BodyRegistry::new();
        let ids: Vec<BodyId> = registry.iter().map(|b| b.id).collect();
        assert_eq!(ids, BodyId::UPDATE_ORDER);
    }

    #[test]
    fn only_the_moon_orbits_another_body() {
        let registry = BodyRegistry::new();
        for body in registry.iter() {
            match body.id {
                BodyId::Moon => assert_eq!(body.target, OrbitTarget::Body(BodyId::Earth)),
                _ => assert_eq!(body.target, OrbitTarget::Origin),
            }
        }
    }

    #[test]
    fn earth_carries_the_canonical_base_values() {
        let registry = BodyRegistry::new();
        let earth = registry.get(BodyId::Earth);
        assert_eq!(earth.orbital_period, EARTH_ORBITAL_PERIOD);
        assert_eq!(earth.rotational_period, EARTH_ROTATIONAL_PERIOD);
        assert_eq!(earth.orbital_distance, EARTH_ORBITAL_DISTANCE);
        assert_eq!(earth.scale, EARTH_SCALE);
    }

    #[test]
    fn bodies_start_at_rest_with_identity_location() {
        let registry = BodyRegistry::new();
        for body in registry.iter() {
            assert_eq!(body.rotation, 0.0);
            assert_eq!(body.orbital_angle, 0.0);
            assert_eq!(body.location, DMat4::IDENTITY);
        }
        assert_eq!(registry.sun().world, DMat4::IDENTITY);
    }
}
