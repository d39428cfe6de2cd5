//! Rendering systems for the solar-system model: bodies, orbit paths,
//! backdrop, and the state synchronizer feeding them.

mod background;
pub mod bodies;
pub mod material;
pub mod orbits;
pub mod sync;

use bevy::pbr::MaterialPlugin;
use bevy::prelude::*;

use self::background::BackgroundPlugin;
use self::bodies::CelestialBodyPlugin;
use self::material::PointLitMaterial;
use self::orbits::OrbitPathPlugin;
use self::sync::sync_render_state;
use crate::types::SimSet;

pub use self::bodies::BodyVisual;
pub use self::material::{PointLitParams, SPECULAR_POWER};
pub use self::orbits::{build_orbit_path_mesh, orbit_ring_points, OrbitMeshError, ORBIT_SEGMENTS};

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(MaterialPlugin::<PointLitMaterial>::default())
            .add_plugins((CelestialBodyPlugin, OrbitPathPlugin, BackgroundPlugin))
            .add_systems(Update, sync_render_state.in_set(SimSet::Sync));
    }
}
