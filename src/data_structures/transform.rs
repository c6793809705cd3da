//! Per-object transform parameters and model-matrix composition.

use cgmath::{Deg, Matrix4, Vector3};

/// Scale, per-axis rotation in degrees, and world position of one object.
///
/// Ephemeral: recomputed into a model matrix for every draw, never persisted
/// between frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub scale: Vector3<f32>,
    pub rotation_degrees: Vector3<f32>,
    pub position: Vector3<f32>,
}

impl Transform {
    pub fn new(
        scale: Vector3<f32>,
        rotation_degrees: Vector3<f32>,
        position: Vector3<f32>,
    ) -> Self {
        Self {
            scale,
            rotation_degrees,
            position,
        }
    }

    /// Compose the model matrix as translate · rotZ · rotY · rotX · scale.
    ///
    /// The composition order is part of the scene contract: the authored
    /// transform values assume scale first, then X/Y/Z rotation, then
    /// translation, and reordering changes the rendered image.
    pub fn matrix(&self) -> Matrix4<f32> {
        let scale =
            Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z);
        let rotation_x = Matrix4::from_angle_x(Deg(self.rotation_degrees.x));
        let rotation_y = Matrix4::from_angle_y(Deg(self.rotation_degrees.y));
        let rotation_z = Matrix4::from_angle_z(Deg(self.rotation_degrees.z));
        let translation = Matrix4::from_translation(self.position);

        translation * rotation_z * rotation_y * rotation_x * scale
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            scale: Vector3::new(1.0, 1.0, 1.0),
            rotation_degrees: Vector3::new(0.0, 0.0, 0.0),
            position: Vector3::new(0.0, 0.0, 0.0),
        }
    }
}
