//! Space backdrop: a far shell of emissive stars around the scene.

use bevy::prelude::*;
use rand::Rng;

/// Number of background stars.
const STAR_COUNT: usize = 500;

/// Plugin providing the starfield backdrop.
pub struct BackgroundPlugin;

impl Plugin for BackgroundPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_starfield);
    }
}

/// Spawn stars on a distant shell, well outside the outermost orbit and
/// inside the camera's far plane.
fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let star_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        emissive: LinearRgba::WHITE * 0.5,
        unlit: true,
        ..default()
    });

    let star_mesh = meshes.add(Sphere::new(1.2));

    let mut rng = rand::thread_rng();

    for _ in 0..STAR_COUNT {
        let direction = Vec3::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        );
        if direction.length_squared() < 1e-4 {
            continue;
        }

        let distance = rng.gen_range(2500.0..4000.0);
        let scale = rng.gen_range(0.5..1.5);

        commands.spawn((
            Mesh3d(star_mesh.clone()),
            MeshMaterial3d(star_material.clone()),
            Transform::from_translation(direction.normalize() * distance)
                .with_scale(Vec3::splat(scale)),
        ));
    }

    info!("Spawned {STAR_COUNT} background stars");
}
