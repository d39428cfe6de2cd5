//! Orbit integrator: advances each body's spin and orbit angles and
//! recomposes its world transform from the mandated operator chain.
//!
//! Earth is the time base. Every other body's increments are multiplied by
//! Earth's current coefficients, so the speed controls (which only touch
//! Earth) change the pace of the whole system.

use bevy::math::{DMat4, DVec3, DVec4};

use crate::registry::{BodyId, BodyRegistry, BodyState, OrbitTarget};

/// Divisor applied to Earth's rotational period for the Sun's per-tick spin.
const SUN_SPIN_DIVISOR: f64 = 1000.0;

/// Snapshot of a satellite target taken at call time: its current orbit
/// translation and orbit angle. Not a stored back-pointer.
#[derive(Clone, Copy, Debug)]
pub struct TargetFrame {
    pub translation: DVec3,
    pub orbital_angle: f64,
}

impl TargetFrame {
    pub fn of(body: &BodyState) -> Self {
        Self {
            translation: body.translation(),
            orbital_angle: body.orbital_angle,
        }
    }
}

/// Earth's current period coefficients, the master clock multipliers.
#[derive(Clone, Copy, Debug)]
pub struct EarthClock {
    pub orbital_period: f64,
    pub rotational_period: f64,
}

impl EarthClock {
    pub fn of(earth: &BodyState) -> Self {
        Self {
            orbital_period: earth.orbital_period,
            rotational_period: earth.rotational_period,
        }
    }
}

/// Advance one body by `elapsed_seconds`.
///
/// `target` is the satellite target's frame captured for this call, or `None`
/// when the body circles the origin. The steps run in a fixed order:
///
/// 1. Spin: `rotation += elapsed * rotational_period`, additionally scaled by
///    Earth's rotational period for every body but Earth.
/// 2. World transform from the *previous* location: scale first, then spin
///    about Y, then axial tilt about Z, then the location translation.
/// 3. Orbit angle: `orbital_angle -= orbital_period`, scaled by Earth's
///    orbital period for every body but Earth. Per tick, not per second.
/// 4. New orbit translation written into the location transform. The origin
///    case negates the offset while the satellite case adds it; the
///    asymmetry is deliberate and pinned by a regression test.
///
/// Pure arithmetic, no failure modes. The world matrix keeps the previous
/// tick's translation, while a body reading this one later in the same tick
/// sees the freshly written location.
pub fn advance(
    body: &mut BodyState,
    target: Option<&TargetFrame>,
    clock: &EarthClock,
    elapsed_seconds: f64,
) {
    let is_earth = body.id == BodyId::Earth;

    // Earth's own increments are not scaled by itself.
    let rotation_rate = if is_earth {
        body.rotational_period
    } else {
        body.rotational_period * clock.rotational_period
    };
    body.rotation += elapsed_seconds * rotation_rate;

    body.world = body.location
        * DMat4::from_rotation_z(body.axial_tilt)
        * DMat4::from_rotation_y(body.rotation)
        * DMat4::from_scale(DVec3::splat(body.scale));

    let orbit_step = if is_earth {
        body.orbital_period
    } else {
        body.orbital_period * clock.orbital_period
    };
    body.orbital_angle -= orbit_step;

    let offset = match target {
        Some(frame) => {
            // Circle the target's current location, phased by both angles.
            let theta = body.orbital_angle + frame.orbital_angle;
            frame.translation
                + DVec3::new(
                    body.orbital_distance * theta.cos(),
                    0.0,
                    body.orbital_distance * theta.sin(),
                )
        }
        None => {
            let theta = body.orbital_angle;
            DVec3::new(
                -body.orbital_distance * theta.cos(),
                0.0,
                -body.orbital_distance * theta.sin(),
            )
        }
    };

    // Location only ever carries translation; leave the rest untouched.
    body.location.w_axis = DVec4::new(offset.x, offset.y, offset.z, 1.0);
}

/// Compose the Sun's world transform from its spin and scale.
pub fn sun_world(rotation: f64, scale: f64) -> DMat4 {
    DMat4::from_scale(DVec3::splat(scale)) * DMat4::from_rotation_y(rotation)
}

impl BodyRegistry {
    /// Advance every body in update order, then the Sun's spin.
    ///
    /// Bodies earlier in the order are fully advanced before later ones read
    /// them, so the Moon's offset base is Earth's post-advance location.
    pub fn advance_all(&mut self, elapsed_seconds: f64) {
        for index in 0..self.len() {
            let clock = EarthClock::of(self.get(BodyId::Earth));
            let body_target = self.bodies_mut()[index].target;
            let target = match body_target {
                OrbitTarget::Origin => None,
                OrbitTarget::Body(id) => Some(TargetFrame::of(self.get(id))),
            };
            advance(
                &mut self.bodies_mut()[index],
                target.as_ref(),
                &clock,
                elapsed_seconds,
            );
        }

        let spin_step = self.get(BodyId::Earth).rotational_period / SUN_SPIN_DIVISOR;
        let sun = self.sun_mut();
        sun.rotation += spin_step;
        sun.world = sun_world(sun.rotation, sun.scale);
    }
}
