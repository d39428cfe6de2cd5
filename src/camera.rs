//! First-person fly camera for viewing the solar system.
//!
//! WASD moves along the camera's local axes, holding the left mouse button
//! looks around. Change detection publishes synchronous camera events that
//! the render synchronizer subscribes to.

use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;

use crate::types::SimSet;

/// Initial camera position, pulled back and above the ecliptic.
pub const INITIAL_POSITION: Vec3 = Vec3::new(0.0, 20.0, 80.0);

/// Movement speed in scene units per second.
pub const MOVE_SPEED: f32 = 40.0;

/// Mouse-look sensitivity in radians per pixel.
pub const LOOK_SENSITIVITY: f32 = 0.003;

/// Pitch clamp keeping the camera short of straight up or down.
pub const MAX_PITCH: f32 = 1.54;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Synchronous notification that some camera dependency changed this frame.
///
/// View and projection changes invalidate the uploaded transforms; movement
/// additionally refreshes camera-position shading parameters.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraEvent {
    ViewChanged,
    ProjectionChanged,
    Moved,
}

/// Plugin providing the fly camera and its change events.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<CameraEvent>()
            .add_systems(Startup, setup_camera)
            .add_systems(
                Update,
                (camera_look, camera_move, publish_camera_events)
                    .chain()
                    .in_set(SimSet::Input),
            );
    }
}

/// Spawn the main camera looking at the Sun.
fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: std::f32::consts::FRAC_PI_4,
            near: 0.1,
            far: 10_000.0,
            ..default()
        }),
        Transform::from_translation(INITIAL_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
    ));
}

/// Mouse look while the left button is held.
fn camera_look(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    if !mouse_buttons.pressed(MouseButton::Left) {
        return;
    }
    if mouse_motion.delta == Vec2::ZERO {
        return;
    }

    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };

    let delta = mouse_motion.delta * LOOK_SENSITIVITY;
    let (yaw, pitch, _roll) = transform.rotation.to_euler(EulerRot::YXZ);
    let yaw = yaw - delta.x;
    let pitch = (pitch - delta.y).clamp(-MAX_PITCH, MAX_PITCH);
    transform.rotation = Quat::from_euler(EulerRot::YXZ, yaw, pitch, 0.0);
}

/// WASD movement along the camera's local axes.
fn camera_move(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };

    let mut direction = Vec3::ZERO;
    if keys.pressed(KeyCode::KeyW) {
        direction += *transform.forward();
    }
    if keys.pressed(KeyCode::KeyS) {
        direction += *transform.back();
    }
    if keys.pressed(KeyCode::KeyA) {
        direction += *transform.left();
    }
    if keys.pressed(KeyCode::KeyD) {
        direction += *transform.right();
    }

    if direction != Vec3::ZERO {
        transform.translation += direction.normalize() * MOVE_SPEED * time.delta_secs();
    }
}

/// Turn camera change detection into explicit events for subscribers.
///
/// A transform change moves the view matrix and the camera position at once,
/// so it publishes both notifications.
fn publish_camera_events(
    camera_query: Query<(Ref<Transform>, Ref<Projection>), With<MainCamera>>,
    mut events: MessageWriter<CameraEvent>,
) {
    let Ok((transform, projection)) = camera_query.single() else {
        return;
    };

    if transform.is_changed() {
        events.write(CameraEvent::ViewChanged);
        events.write(CameraEvent::Moved);
    }
    if projection.is_changed() {
        events.write(CameraEvent::ProjectionChanged);
    }
}
