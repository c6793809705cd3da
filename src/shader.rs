//! The shader uniform bridge seam and the shared shader contract keys.
//!
//! The scene layer never inspects shader source. Everything it wants the
//! active program to know — transforms, colors, sampler units, material and
//! light parameters — goes through [`UniformWriter`] as a named-key write.
//! The key strings form a fixed contract with the host's shader programs and
//! live in the [`uniform`] module rather than as ad-hoc literals.

use cgmath::{Matrix4, Vector2, Vector3, Vector4};

/// Typed named-key uniform writes destined for the active shader program.
///
/// Implemented by the host application on top of whatever graphics API it
/// uses. Writes are fire-and-forget: an unknown key is the host's problem
/// and must not panic.
pub trait UniformWriter {
    fn set_bool(&mut self, name: &str, value: bool);
    fn set_int(&mut self, name: &str, value: i32);
    fn set_float(&mut self, name: &str, value: f32);
    fn set_vec2(&mut self, name: &str, value: Vector2<f32>);
    fn set_vec3(&mut self, name: &str, value: Vector3<f32>);
    fn set_vec4(&mut self, name: &str, value: Vector4<f32>);
    fn set_mat4(&mut self, name: &str, value: Matrix4<f32>);
    /// Point a sampler uniform at a texture unit index.
    fn set_sampler(&mut self, name: &str, unit: u32);
}

/// The uniform names shared between this crate and the host's shaders.
pub mod uniform {
    pub const MODEL: &str = "model";
    pub const OBJECT_COLOR: &str = "objectColor";
    pub const OBJECT_TEXTURE: &str = "objectTexture";
    pub const TEXTURE2: &str = "texture2";
    pub const USE_TEXTURE: &str = "bUseTexture";
    pub const USE_LIGHTING: &str = "bUseLighting";
    pub const BLEND_TEXTURE: &str = "bBlendTexture";
    pub const MIX_FACTOR: &str = "bMixFactor";
    pub const UV_SCALE: &str = "UVscale";
    pub const MATERIAL_DIFFUSE: &str = "material.diffuseColor";
    pub const MATERIAL_SPECULAR: &str = "material.specularColor";
    pub const MATERIAL_SHININESS: &str = "material.shininess";

    /// Key for a field of the indexed point-light uniform array.
    pub fn point_light(index: usize, field: &str) -> String {
        format!("pointLights[{index}].{field}")
    }

    /// Key for a field of the spotlight uniform struct.
    pub fn spot_light(field: &str) -> String {
        format!("spotLight.{field}")
    }
}
