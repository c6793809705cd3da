//! Scene light records and their one-time uniform application.
//!
//! The rig supports up to [`MAX_POINT_LIGHTS`] point lights plus one
//! spotlight. Lights are configured once during scene preparation and never
//! mutated per frame; `apply` pushes every record to the shader bridge under
//! the indexed `pointLights[i].*` / `spotLight.*` contract keys.

use cgmath::{Deg, Rad, Vector3};

use crate::shader::{UniformWriter, uniform};

/// Number of point-light slots in the shader contract.
pub const MAX_POINT_LIGHTS: usize = 2;

/// Distance attenuation coefficients of a light.
///
/// The default (1, 0, 0) leaves a light unattenuated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Attenuation {
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,
}

impl Default for Attenuation {
    fn default() -> Self {
        Self {
            constant: 1.0,
            linear: 0.0,
            quadratic: 0.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub position: Vector3<f32>,
    pub ambient: Vector3<f32>,
    pub diffuse: Vector3<f32>,
    pub specular: Vector3<f32>,
    pub attenuation: Attenuation,
    pub active: bool,
}

/// A spotlight cone. Cone angles are authored in degrees and written to the
/// shader as cosines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpotLight {
    pub position: Vector3<f32>,
    pub direction: Vector3<f32>,
    pub ambient: Vector3<f32>,
    pub diffuse: Vector3<f32>,
    pub specular: Vector3<f32>,
    pub attenuation: Attenuation,
    pub cutoff_degrees: f32,
    pub outer_cutoff_degrees: f32,
    pub active: bool,
}

/// The full light configuration of a scene.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LightRig {
    pub point_lights: Vec<PointLight>,
    pub spot_light: Option<SpotLight>,
}

impl LightRig {
    /// Push the whole rig to the shader bridge.
    ///
    /// Also enables custom lighting via `bUseLighting`; without it the host's
    /// shaders render the scene unlit.
    pub fn apply(&self, shader: &mut dyn UniformWriter) {
        shader.set_bool(uniform::USE_LIGHTING, true);

        for (index, light) in self
            .point_lights
            .iter()
            .take(MAX_POINT_LIGHTS)
            .enumerate()
        {
            shader.set_vec3(&uniform::point_light(index, "position"), light.position);
            shader.set_vec3(&uniform::point_light(index, "ambient"), light.ambient);
            shader.set_vec3(&uniform::point_light(index, "diffuse"), light.diffuse);
            shader.set_vec3(&uniform::point_light(index, "specular"), light.specular);
            shader.set_float(
                &uniform::point_light(index, "constant"),
                light.attenuation.constant,
            );
            shader.set_float(
                &uniform::point_light(index, "linear"),
                light.attenuation.linear,
            );
            shader.set_float(
                &uniform::point_light(index, "quadratic"),
                light.attenuation.quadratic,
            );
            shader.set_bool(&uniform::point_light(index, "bActive"), light.active);
        }

        if let Some(spot) = &self.spot_light {
            shader.set_vec3(&uniform::spot_light("position"), spot.position);
            shader.set_vec3(&uniform::spot_light("direction"), spot.direction);
            shader.set_vec3(&uniform::spot_light("ambient"), spot.ambient);
            shader.set_vec3(&uniform::spot_light("diffuse"), spot.diffuse);
            shader.set_vec3(&uniform::spot_light("specular"), spot.specular);
            shader.set_float(&uniform::spot_light("constant"), spot.attenuation.constant);
            shader.set_float(&uniform::spot_light("linear"), spot.attenuation.linear);
            shader.set_float(
                &uniform::spot_light("quadratic"),
                spot.attenuation.quadratic,
            );
            shader.set_float(
                &uniform::spot_light("cutOff"),
                Rad::from(Deg(spot.cutoff_degrees)).0.cos(),
            );
            shader.set_float(
                &uniform::spot_light("outerCutOff"),
                Rad::from(Deg(spot.outer_cutoff_degrees)).0.cos(),
            );
            shader.set_bool(&uniform::spot_light("bActive"), spot.active);
        }
    }
}
