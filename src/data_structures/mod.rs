//! Scene data models: textures, materials, transforms and lights.
//!
//! - `texture` holds the tag-to-handle texture registry and the uploader seam
//! - `material` holds the ordered material preset table
//! - `transform` holds per-object transform parameters and the model matrix
//! - `light` holds the point/spot light records and their uniform application

pub mod light;
pub mod material;
pub mod texture;
pub mod transform;
