//! tableau
//!
//! A small scene-description layer for preparing and rendering a static 3D
//! still-life scene. The crate owns the texture registry, material table,
//! light rig and the declarative per-object draw list; the actual graphics
//! API is reached through three collaborator traits (shader uniform bridge,
//! texture uploader, mesh provider) so the whole crate can run and be tested
//! headless.
//!
//! High-level modules
//! - `data_structures`: scene data models (textures, materials, transforms, lights)
//! - `mesh`: procedural mesh kinds and the mesh provider seam
//! - `resources`: image decoding and texture loading into the registry
//! - `scene`: scene descriptions, one-time preparation and the per-frame draw loop
//! - `shader`: the uniform bridge seam and the shared shader contract keys
//! - `still_life`: the hand-authored bread-and-butter reference composition
//!

pub mod data_structures;
pub mod mesh;
pub mod resources;
pub mod scene;
pub mod shader;
pub mod still_life;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::*;
