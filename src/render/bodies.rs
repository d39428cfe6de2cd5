//! Celestial body spawning: one shared sphere mesh, one point-light
//! material per body, light parameters fixed at startup.

use bevy::prelude::*;

use crate::registry::{BodyId, BodyRegistry, NO_REFLECTION_MAP, SUN_COLOR_MAP};
use crate::render::material::PointLitMaterial;

/// Radius of the Sun's light, in scene units. Fixed at initialization.
pub const LIGHT_RADIUS: f32 = 12_000.0;

/// Which simulated body a spawned entity renders.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyVisual {
    Sun,
    Planet(BodyId),
}

/// Plugin spawning the Sun and every orbiting body.
pub struct CelestialBodyPlugin;

impl Plugin for CelestialBodyPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_solar_system);
    }
}

/// Spawn all bodies with their materials and initial transforms.
///
/// Every body shares one unit sphere; per-body scale lives in the world
/// matrix. Light position and radius are set once here and never touched
/// again.
fn spawn_solar_system(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<PointLitMaterial>>,
    registry: Res<BodyRegistry>,
) {
    // Shared unit sphere with a UV wrap for the equirectangular body maps.
    let sphere = meshes.add(Sphere::new(1.0).mesh().uv(64, 32));

    let mut sun_material = PointLitMaterial::new(
        asset_server.load(SUN_COLOR_MAP),
        asset_server.load(NO_REFLECTION_MAP),
    );
    sun_material.set_light_position(Vec3::ZERO);
    sun_material.set_light_radius(LIGHT_RADIUS);
    sun_material.set_ambient_color(Vec4::new(1.0, 1.0, 1.0, 0.0));
    commands.spawn((
        Mesh3d(sphere.clone()),
        MeshMaterial3d(materials.add(sun_material)),
        Transform::from_matrix(registry.sun().world.as_mat4()),
        BodyVisual::Sun,
    ));

    for body in registry.iter() {
        let mut material = PointLitMaterial::new(
            asset_server.load(body.color_map),
            asset_server.load(body.specular_map),
        );
        material.set_light_position(Vec3::ZERO);
        material.set_light_radius(LIGHT_RADIUS);

        commands.spawn((
            Mesh3d(sphere.clone()),
            MeshMaterial3d(materials.add(material)),
            Transform::from_matrix(body.world.as_mat4()),
            BodyVisual::Planet(body.id),
        ));
    }

    info!("Spawned the Sun and {} orbiting bodies", registry.len());
}
