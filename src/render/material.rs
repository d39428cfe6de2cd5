//! Point-light material shared by every celestial body.
//!
//! The uniform block carries pre-transposed world and world-view-projection
//! matrices pushed by the render synchronizer, plus the light and camera
//! parameters the shader needs for Phong shading. The shader multiplies
//! row vectors against the transposed matrices.

use bevy::asset::Asset;
use bevy::prelude::*;
use bevy::reflect::TypePath;
use bevy::render::render_resource::*;
use bevy::shader::ShaderRef;

/// Vertex and fragment stages live in the same file.
pub const SHADER_PATH: &str = "shaders/point_lit.wgsl";

/// Default specular sharpness.
pub const SPECULAR_POWER: f32 = 25.0;

/// Uniform block mirrored by the WGSL side.
#[derive(ShaderType, Clone, Copy, Debug)]
#[repr(C)]
pub struct PointLitParams {
    /// Transposed world * view-projection product.
    pub world_view_projection: Mat4,
    /// Transposed world transform, used for normals and world positions.
    pub world: Mat4,
    pub camera_position: Vec4,
    pub light_position: Vec4,
    pub ambient_color: Vec4,
    pub light_radius: f32,
    pub specular_power: f32,
    /// Keeps the block at a 16-byte multiple.
    pub _padding: Vec2,
}

impl Default for PointLitParams {
    fn default() -> Self {
        Self {
            world_view_projection: Mat4::IDENTITY,
            world: Mat4::IDENTITY,
            camera_position: Vec4::new(0.0, 0.0, 0.0, 1.0),
            light_position: Vec4::new(0.0, 0.0, 0.0, 1.0),
            // No ambient term by default; the Sun overrides this to white so
            // it reads as self-lit.
            ambient_color: Vec4::new(0.0, 0.0, 0.0, 1.0),
            light_radius: 1.0,
            specular_power: SPECULAR_POWER,
            _padding: Vec2::ZERO,
        }
    }
}

/// Material for a body lit by a single point light, with a color map and a
/// specular map.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct PointLitMaterial {
    #[uniform(0)]
    pub params: PointLitParams,
    #[texture(1)]
    #[sampler(2)]
    pub color_map: Handle<Image>,
    #[texture(3)]
    #[sampler(4)]
    pub specular_map: Handle<Image>,
}

impl PointLitMaterial {
    pub fn new(color_map: Handle<Image>, specular_map: Handle<Image>) -> Self {
        Self {
            params: PointLitParams::default(),
            color_map,
            specular_map,
        }
    }

    /// Push fresh transform matrices, already transposed by the caller.
    pub fn update_transforms(&mut self, world_view_projection: Mat4, world: Mat4) {
        self.params.world_view_projection = world_view_projection;
        self.params.world = world;
    }

    /// Refresh the camera position used for specular highlights.
    pub fn update_camera_position(&mut self, position: Vec3) {
        self.params.camera_position = position.extend(1.0);
    }

    pub fn set_light_position(&mut self, position: Vec3) {
        self.params.light_position = position.extend(1.0);
    }

    pub fn set_light_radius(&mut self, radius: f32) {
        self.params.light_radius = radius;
    }

    pub fn set_ambient_color(&mut self, color: Vec4) {
        self.params.ambient_color = color;
    }
}

impl Material for PointLitMaterial {
    fn vertex_shader() -> ShaderRef {
        SHADER_PATH.into()
    }

    fn fragment_shader() -> ShaderRef {
        SHADER_PATH.into()
    }

    fn alpha_mode(&self) -> AlphaMode {
        AlphaMode::Opaque
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_update_replaces_both_matrices() {
        let mut material = PointLitMaterial::new(Handle::default(), Handle::default());
        let wvp = Mat4::from_translation(Vec3::X);
        let world = Mat4::from_translation(Vec3::Y);
        material.update_transforms(wvp, world);
        assert_eq!(material.params.world_view_projection, wvp);
        assert_eq!(material.params.world, world);
    }

    #[test]
    fn positions_are_stored_as_points() {
        let mut material = PointLitMaterial::new(Handle::default(), Handle::default());
        material.update_camera_position(Vec3::new(1.0, 2.0, 3.0));
        material.set_light_position(Vec3::new(4.0, 5.0, 6.0));
        assert_eq!(material.params.camera_position.w, 1.0);
        assert_eq!(material.params.light_position.w, 1.0);
    }
}
