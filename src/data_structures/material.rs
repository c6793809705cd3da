//! Named material presets and their lookup table.

use cgmath::Vector3;

/// A surface material preset: diffuse/specular color and shininess exponent.
///
/// Immutable once defined; referenced from scene objects by tag.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub tag: String,
    pub diffuse: Vector3<f32>,
    pub specular: Vector3<f32>,
    pub shininess: f32,
}

impl Material {
    pub fn new(
        tag: impl Into<String>,
        diffuse: Vector3<f32>,
        specular: Vector3<f32>,
        shininess: f32,
    ) -> Self {
        Self {
            tag: tag.into(),
            diffuse,
            specular,
            shininess,
        }
    }
}

/// Ordered list of material presets.
///
/// `define` appends without deduplication; `find` scans front to back, so a
/// duplicate tag shadows every later entry with the same tag.
#[derive(Default)]
pub struct MaterialTable {
    materials: Vec<Material>,
}

impl MaterialTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    pub fn define(&mut self, material: Material) {
        self.materials.push(material);
    }

    /// First material defined under `tag`, if any. An empty table reports
    /// not-found without scanning.
    pub fn find(&self, tag: &str) -> Option<&Material> {
        if self.materials.is_empty() {
            return None;
        }
        self.materials.iter().find(|material| material.tag == tag)
    }
}
