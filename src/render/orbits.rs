//! Orbit path visualization: one closed polyline per origin-orbiting body,
//! precomputed once at startup into a single line mesh.
//!
//! Paths are idealized circles derived from each body's static orbital
//! distance. They are never regenerated and do not follow the live orbit
//! angle.

use bevy::prelude::*;
use bevy::asset::RenderAssetUsages;
use bevy::mesh::Indices;
use bevy::render::render_resource::PrimitiveTopology;

use crate::registry::{BodyRegistry, OrbitTarget};

/// Segments per orbit ring. High enough to read as a smooth circle.
pub const ORBIT_SEGMENTS: usize = 10_000;

/// Warm off-white shared by every orbit line.
pub const ORBIT_COLOR: Color = Color::srgb(0.961, 0.871, 0.702);

/// Failure modes for orbit mesh construction.
///
/// These surface as fatal startup errors; there is no degraded mode with
/// partial paths.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum OrbitMeshError {
    #[error("orbit rings need at least two segments, got {0}")]
    TooFewSegments(usize),

    #[error("no bodies to build orbit paths for")]
    NoBodies,
}

/// Sample a circle of the given radius in the orbital plane.
///
/// Point `j` sits at angle `2π·j/segments`; the ring closes back to point 0.
pub fn orbit_ring_points(distance: f64, segments: usize) -> Vec<bevy::math::DVec3> {
    (0..segments)
        .map(|j| {
            let theta = j as f64 * std::f64::consts::TAU / segments as f64;
            bevy::math::DVec3::new(distance * theta.cos(), 0.0, distance * theta.sin())
        })
        .collect()
}

/// Build the single orbit path mesh for every body that circles the origin.
///
/// Vertices are laid out body-major (all of one body's ring, then the next)
/// so the whole set draws from one buffer; the index list closes each ring
/// into a loop.
pub fn build_orbit_path_mesh(
    registry: &BodyRegistry,
    segments: usize,
) -> Result<Mesh, OrbitMeshError> {
    if segments < 2 {
        return Err(OrbitMeshError::TooFewSegments(segments));
    }

    let ringed: Vec<_> = registry
        .iter()
        .filter(|body| body.target == OrbitTarget::Origin)
        .collect();
    if ringed.is_empty() {
        return Err(OrbitMeshError::NoBodies);
    }

    let mut positions: Vec<[f32; 3]> = Vec::with_capacity(ringed.len() * segments);
    let mut indices: Vec<u32> = Vec::with_capacity(ringed.len() * segments * 2);

    for (ring, body) in ringed.iter().enumerate() {
        let base = (ring * segments) as u32;
        for point in orbit_ring_points(body.orbital_distance, segments) {
            positions.push(point.as_vec3().to_array());
        }
        for j in 0..segments as u32 {
            indices.push(base + j);
            indices.push(base + (j + 1) % segments as u32);
        }
    }

    let mut mesh = Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_indices(Indices::U32(indices));
    Ok(mesh)
}

/// Plugin building and spawning the orbit path mesh once at startup.
pub struct OrbitPathPlugin;

impl Plugin for OrbitPathPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_orbit_paths);
    }
}

fn spawn_orbit_paths(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    registry: Res<BodyRegistry>,
) {
    let mesh = match build_orbit_path_mesh(&registry, ORBIT_SEGMENTS) {
        Ok(mesh) => mesh,
        Err(err) => panic!("orbit path construction failed: {err}"),
    };

    let material = materials.add(StandardMaterial {
        base_color: ORBIT_COLOR,
        unlit: true,
        ..default()
    });

    commands.spawn((Mesh3d(meshes.add(mesh)), MeshMaterial3d(material)));

    info!("Built orbit paths at {ORBIT_SEGMENTS} segments per ring");
}
