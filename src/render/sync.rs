//! Render-state synchronization between the simulation and the GPU
//! materials.
//!
//! On a dirty frame the synchronizer recomputes every body's transposed
//! world and world-view-projection matrices and pushes them into that
//! body's material. Camera-position shading parameters refresh whenever the
//! camera moves, independent of the general dirty flag.

use bevy::prelude::*;

use crate::camera::{CameraEvent, MainCamera};
use crate::registry::BodyRegistry;
use crate::render::bodies::BodyVisual;
use crate::render::material::PointLitMaterial;
use crate::types::RenderSync;

/// Push simulation state into render-facing materials and transforms.
///
/// Runs after the body tick so every world matrix it reads is final for the
/// frame. Clears the dirty flag once done; drawing never sets it again.
pub fn sync_render_state(
    mut sync: ResMut<RenderSync>,
    mut camera_events: MessageReader<CameraEvent>,
    registry: Res<BodyRegistry>,
    camera_query: Query<(&Transform, &Camera), With<MainCamera>>,
    mut materials: ResMut<Assets<PointLitMaterial>>,
    mut body_query: Query<
        (&BodyVisual, &MeshMaterial3d<PointLitMaterial>, &mut Transform),
        Without<MainCamera>,
    >,
) {
    let mut camera_moved = false;
    for event in camera_events.read() {
        match event {
            CameraEvent::ViewChanged | CameraEvent::ProjectionChanged => sync.mark_dirty(),
            CameraEvent::Moved => camera_moved = true,
        }
    }

    let Ok((camera_transform, camera)) = camera_query.single() else {
        return;
    };

    if camera_moved {
        let position = camera_transform.translation;
        for (_, handle, _) in body_query.iter() {
            if let Some(material) = materials.get_mut(&handle.0) {
                material.update_camera_position(position);
            }
        }
    }

    if !sync.is_dirty() {
        return;
    }

    let view = camera_transform.to_matrix().inverse();
    let view_projection = camera.clip_from_view() * view;

    for (visual, handle, mut transform) in body_query.iter_mut() {
        let world = match visual {
            BodyVisual::Sun => registry.sun().world,
            BodyVisual::Planet(id) => registry.get(*id).world,
        }
        .as_mat4();

        if let Some(material) = materials.get_mut(&handle.0) {
            material.update_transforms((view_projection * world).transpose(), world.transpose());
        }

        // Mirror the world matrix onto the entity so culling sees the body
        // where the shader puts it.
        *transform = Transform::from_matrix(world);
    }

    sync.clear();
}
