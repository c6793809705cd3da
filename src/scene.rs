//! Scene descriptions, one-time preparation and the per-frame draw loop.
//!
//! A [`SceneDescription`] is a declarative bundle of everything a still
//! scene needs: texture files to load, material presets, the light rig and
//! the ordered object list. [`Scene`] holds the prepared state (texture
//! registry, material table, loaded mesh kinds) and walks the object list
//! once per frame, applying shader state and issuing draws through the
//! collaborator traits.
//!
//! # Lifecycle
//!
//! 1. `Scene::prepare()` runs once at startup: materials → lights →
//!    textures (load + bind) → mesh geometry preload
//! 2. `Scene::render()` runs once per frame over the fixed object list
//! 3. `Scene::destroy()` releases all GPU textures at teardown

use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, ensure};
use cgmath::{Vector2, Vector4};

use crate::data_structures::light::LightRig;
use crate::data_structures::material::{Material, MaterialTable};
use crate::data_structures::texture::{
    TextureRegistry, TextureUploader, WrapMode, write_sampler,
};
use crate::data_structures::transform::Transform;
use crate::mesh::{MeshKind, MeshProvider};
use crate::resources::texture::load_texture;
use crate::shader::{UniformWriter, uniform};

/// One texture file to load during preparation.
#[derive(Clone, Debug)]
pub struct TextureFile {
    pub path: PathBuf,
    pub tag: String,
    pub wrap: WrapMode,
}

/// How an object's surface is shaded.
#[derive(Clone, Debug)]
pub enum Paint {
    /// Flat RGBA color, texturing disabled.
    Color(Vector4<f32>),
    /// A single registered texture.
    Texture(String),
    /// Two registered textures mixed in the fragment shader. `mix` is the
    /// weight of the second texture: 0 shows only the first, 1 only the
    /// second.
    Blend {
        first: String,
        second: String,
        mix: f32,
    },
}

/// One entry of the declarative draw list.
#[derive(Clone, Debug)]
pub struct SceneObject {
    pub name: &'static str,
    pub mesh: MeshKind,
    pub transform: Transform,
    pub uv_scale: Vector2<f32>,
    pub paint: Paint,
    pub material: String,
}

/// Everything needed to prepare and render one still scene.
///
/// The object list is authored data, not derived state: its order is the
/// draw order, which matters for the depth/blend result whenever translucent
/// colors are involved.
#[derive(Clone, Debug, Default)]
pub struct SceneDescription {
    pub textures: Vec<TextureFile>,
    pub materials: Vec<Material>,
    pub lights: LightRig,
    pub objects: Vec<SceneObject>,
}

impl SceneDescription {
    /// Mesh kinds used by the object list, deduplicated in first-use order.
    pub fn mesh_kinds(&self) -> Vec<MeshKind> {
        let mut seen = HashSet::new();
        self.objects
            .iter()
            .map(|object| object.mesh)
            .filter(|kind| seen.insert(*kind))
            .collect()
    }
}

/// Prepared scene state: the texture registry, material table and the set of
/// mesh kinds that have geometry loaded.
///
/// Tables are mutated during [`prepare`](Self::prepare) only and read-only
/// afterwards.
#[derive(Default)]
pub struct Scene {
    textures: TextureRegistry,
    materials: MaterialTable,
    loaded_meshes: HashSet<MeshKind>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn textures(&self) -> &TextureRegistry {
        &self.textures
    }

    pub fn materials(&self) -> &MaterialTable {
        &self.materials
    }

    /// One-time scene setup: materials, lights, textures, mesh geometry.
    ///
    /// A texture that fails to load is logged and skipped; the scene still
    /// prepares, and the missing tag surfaces as a render error if an object
    /// references it. There is no rollback on partial failure.
    pub fn prepare(
        &mut self,
        desc: &SceneDescription,
        gpu: &mut dyn TextureUploader,
        shader: &mut dyn UniformWriter,
        meshes: &mut dyn MeshProvider,
    ) -> Result<()> {
        for material in &desc.materials {
            self.materials.define(material.clone());
        }

        desc.lights.apply(shader);

        for file in &desc.textures {
            if let Err(err) = load_texture(&file.path, &file.tag, file.wrap, &mut self.textures, gpu)
            {
                log::warn!("skipping texture {:?}: {err:#}", file.tag);
            }
        }
        self.textures.bind_all(gpu);

        for kind in desc.mesh_kinds() {
            meshes.load(kind);
            self.loaded_meshes.insert(kind);
        }

        Ok(())
    }

    /// Draw every object of the description, in list order.
    ///
    /// Per object: model matrix, paint, UV tiling, material, draw call. An
    /// unresolved texture or material tag aborts the frame with an error
    /// naming the object rather than sampling garbage.
    pub fn render(
        &self,
        desc: &SceneDescription,
        shader: &mut dyn UniformWriter,
        meshes: &mut dyn MeshProvider,
    ) -> Result<()> {
        for object in &desc.objects {
            self.set_transformations(shader, &object.transform);
            match &object.paint {
                Paint::Color(color) => self.set_shader_color(shader, *color),
                Paint::Texture(tag) => self
                    .set_shader_texture(shader, tag)
                    .with_context(|| format!("object {:?}", object.name))?,
                Paint::Blend { first, second, mix } => self
                    .set_two_textures(shader, first, second, *mix)
                    .with_context(|| format!("object {:?}", object.name))?,
            }
            self.set_texture_uv_scale(shader, object.uv_scale);
            self.set_shader_material(shader, &object.material)
                .with_context(|| format!("object {:?}", object.name))?;

            ensure!(
                self.loaded_meshes.contains(&object.mesh),
                "object {:?} draws {:?} but its geometry was never loaded",
                object.name,
                object.mesh
            );
            meshes.draw(object.mesh);
        }
        Ok(())
    }

    /// Release all GPU textures held by the scene. Safe to call on a scene
    /// that never prepared or whose texture loads all failed.
    pub fn destroy(&mut self, gpu: &mut dyn TextureUploader) {
        self.textures.release_all(gpu);
    }

    /// Push the model matrix composed from `transform`.
    pub fn set_transformations(&self, shader: &mut dyn UniformWriter, transform: &Transform) {
        shader.set_mat4(uniform::MODEL, transform.matrix());
    }

    /// Shade the next draw with a flat RGBA color, disabling texturing.
    pub fn set_shader_color(&self, shader: &mut dyn UniformWriter, color: Vector4<f32>) {
        shader.set_bool(uniform::USE_TEXTURE, false);
        shader.set_bool(uniform::BLEND_TEXTURE, false);
        shader.set_vec4(uniform::OBJECT_COLOR, color);
    }

    /// Shade the next draw with a single registered texture.
    pub fn set_shader_texture(&self, shader: &mut dyn UniformWriter, tag: &str) -> Result<()> {
        shader.set_bool(uniform::USE_TEXTURE, true);
        shader.set_bool(uniform::BLEND_TEXTURE, false);
        write_sampler(&self.textures, shader, uniform::OBJECT_TEXTURE, tag)
    }

    /// Shade the next draw by mixing two registered textures. `mix` is the
    /// weight of the second texture.
    pub fn set_two_textures(
        &self,
        shader: &mut dyn UniformWriter,
        first: &str,
        second: &str,
        mix: f32,
    ) -> Result<()> {
        shader.set_float(uniform::MIX_FACTOR, mix);
        shader.set_bool(uniform::USE_TEXTURE, true);
        shader.set_bool(uniform::BLEND_TEXTURE, true);
        write_sampler(&self.textures, shader, uniform::OBJECT_TEXTURE, first)?;
        write_sampler(&self.textures, shader, uniform::TEXTURE2, second)
    }

    /// Push the UV tiling scale for the next draw.
    pub fn set_texture_uv_scale(&self, shader: &mut dyn UniformWriter, uv_scale: Vector2<f32>) {
        shader.set_vec2(uniform::UV_SCALE, uv_scale);
    }

    /// Resolve a material by tag and push its parameters.
    pub fn set_shader_material(&self, shader: &mut dyn UniformWriter, tag: &str) -> Result<()> {
        let material = self
            .materials
            .find(tag)
            .ok_or_else(|| anyhow!("no material defined under tag {tag:?}"))?;
        shader.set_vec3(uniform::MATERIAL_DIFFUSE, material.diffuse);
        shader.set_vec3(uniform::MATERIAL_SPECULAR, material.specular);
        shader.set_float(uniform::MATERIAL_SHININESS, material.shininess);
        Ok(())
    }
}
