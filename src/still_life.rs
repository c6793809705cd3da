//! The bread-and-butter still-life reference composition.
//!
//! Everything in here is authored data matching a specific finished image:
//! the texture manifest, the material presets, the three-light rig and the
//! fourteen-object draw list. The transform values and draw order are not
//! meant to be refactored; translucent objects in particular depend on the
//! order they are drawn in.

use std::path::Path;

use cgmath::{Vector3, vec2, vec3, vec4};

use crate::data_structures::light::{Attenuation, LightRig, PointLight, SpotLight};
use crate::data_structures::material::Material;
use crate::data_structures::texture::WrapMode;
use crate::data_structures::transform::Transform;
use crate::mesh::MeshKind;
use crate::scene::{Paint, SceneDescription, SceneObject, TextureFile};

/// The still-life scene with texture files resolved under `texture_dir`.
pub fn description(texture_dir: impl AsRef<Path>) -> SceneDescription {
    SceneDescription {
        textures: textures(texture_dir.as_ref()),
        materials: materials(),
        lights: lights(),
        objects: objects(),
    }
}

/// The texture manifest. `water` is loaded but not referenced by any object;
/// it still occupies a texture unit. Only the skull artwork uses mirrored
/// tiling.
pub fn textures(dir: &Path) -> Vec<TextureFile> {
    let file = |name: &str, tag: &str, wrap| TextureFile {
        path: dir.join(name),
        tag: tag.to_owned(),
        wrap,
    };
    vec![
        file("table_cloth.jpg", "cloth", WrapMode::Repeat),
        file("bottle_lid.jpg", "bottleLid", WrapMode::Repeat),
        file("bread.jpg", "breadTop", WrapMode::Repeat),
        file("butter.jpg", "butter", WrapMode::Repeat),
        file("cracks.jpg", "cracks", WrapMode::Repeat),
        file("orange.jpg", "orange", WrapMode::Repeat),
        file("bread_side.jpg", "breadSide", WrapMode::Repeat),
        file("skull_artwork.jpg", "skull", WrapMode::MirroredRepeat),
        file("wall.jpg", "wall", WrapMode::Repeat),
        file("water.jpg", "water", WrapMode::Repeat),
    ]
}

pub fn materials() -> Vec<Material> {
    vec![
        // Very dark base with a strong highlight for glossy plastic
        Material::new("shinyPlastic", vec3(0.1, 0.1, 0.1), vec3(0.9, 0.9, 0.9), 100.0),
        // Neutral, weak highlight, flat appearance
        Material::new("flatPlastic", vec3(0.5, 0.5, 0.5), vec3(0.2, 0.2, 0.2), 5.0),
        // White base, near-mirror highlight
        Material::new("glass", vec3(1.0, 1.0, 1.0), vec3(0.95, 0.95, 0.95), 120.0),
        // Light brown, soft matte crust
        Material::new("bread", vec3(0.9, 0.7, 0.4), vec3(0.1, 0.1, 0.1), 2.0),
        // Muted vinyl with a polished but not glossy sheen
        Material::new("tableCloth", vec3(0.2, 0.3, 0.4), vec3(0.7, 0.7, 0.7), 50.0),
        // Warm matte wallpaper
        Material::new("wall", vec3(0.8, 0.7, 0.6), vec3(0.1, 0.1, 0.1), 3.0),
        // Bright orange skin with a subtle natural shine
        Material::new("orange", vec3(0.9, 0.5, 0.1), vec3(0.3, 0.3, 0.3), 10.0),
    ]
}

/// A warm red point light, a cool blue point light, and an overhead
/// spotlight pointing straight down.
pub fn lights() -> LightRig {
    LightRig {
        point_lights: vec![
            PointLight {
                position: vec3(-7.0, 2.0, 6.0),
                ambient: vec3(0.6, 0.5, 0.4),
                diffuse: vec3(0.8, 0.4, 0.1),
                specular: vec3(0.9, 0.5, 0.2),
                attenuation: Attenuation::default(),
                active: true,
            },
            PointLight {
                position: vec3(8.0, 2.0, -6.0),
                ambient: vec3(0.05, 0.05, 0.2),
                diffuse: vec3(0.2, 0.4, 1.0),
                specular: vec3(0.3, 0.6, 1.0),
                attenuation: Attenuation::default(),
                active: true,
            },
        ],
        spot_light: Some(SpotLight {
            position: vec3(-2.0, 10.0, 0.0),
            direction: vec3(0.0, -1.0, 0.0),
            ambient: vec3(1.0, 0.9, 0.8),
            diffuse: vec3(1.5, 1.3, 1.2),
            specular: vec3(1.5, 1.3, 1.2),
            attenuation: Attenuation {
                constant: 1.0,
                linear: 0.1,
                quadratic: 0.03,
            },
            cutoff_degrees: 45.0,
            outer_cutoff_degrees: 60.0,
            active: true,
        }),
    }
}

/// The fourteen-object draw list. Single-textured objects go through the
/// blend path with the same tag twice and a mix of zero, matching the
/// two-sampler fragment shader this scene was composed against.
pub fn objects() -> Vec<SceneObject> {
    let transform = |scale: Vector3<f32>, rotation: Vector3<f32>, position: Vector3<f32>| {
        Transform::new(scale, rotation, position)
    };
    let blend = |first: &str, second: &str, mix: f32| Paint::Blend {
        first: first.to_owned(),
        second: second.to_owned(),
        mix,
    };

    vec![
        SceneObject {
            name: "table cloth",
            mesh: MeshKind::Plane,
            transform: transform(vec3(20.0, 1.0, 10.0), vec3(0.0, 0.0, 0.0), vec3(0.0, 0.0, 0.0)),
            uv_scale: vec2(4.0, 4.0),
            paint: blend("cloth", "skull", 0.3),
            material: "tableCloth".to_owned(),
        },
        SceneObject {
            name: "backdrop",
            mesh: MeshKind::Plane,
            transform: transform(vec3(20.0, 1.0, 10.0), vec3(90.0, 0.0, 0.0), vec3(0.0, 10.0, -10.0)),
            uv_scale: vec2(3.0, 3.0),
            paint: blend("wall", "skull", 0.5),
            material: "wall".to_owned(),
        },
        SceneObject {
            name: "bread loaf",
            mesh: MeshKind::Box,
            transform: transform(vec3(5.0, 3.0, 3.0), vec3(0.0, 0.0, 0.0), vec3(-4.0, 1.0, 4.0)),
            uv_scale: vec2(1.0, 1.0),
            paint: blend("breadSide", "breadSide", 0.0),
            material: "bread".to_owned(),
        },
        SceneObject {
            name: "bread heel",
            mesh: MeshKind::Cylinder,
            transform: transform(vec3(1.8, 4.8, 1.0), vec3(90.0, 90.0, 0.0), vec3(-6.2, 3.0, 4.2)),
            uv_scale: vec2(1.0, 1.0),
            paint: blend("breadTop", "breadTop", 0.0),
            material: "bread".to_owned(),
        },
        SceneObject {
            name: "butter tub",
            mesh: MeshKind::Cylinder,
            transform: transform(vec3(1.5, 2.0, 1.5), vec3(0.0, 0.0, 0.0), vec3(7.0, 0.0, 4.0)),
            uv_scale: vec2(2.0, 1.0),
            paint: blend("butter", "butter", 0.0),
            material: "glass".to_owned(),
        },
        SceneObject {
            name: "butter tub lid",
            mesh: MeshKind::Cylinder,
            transform: transform(vec3(1.5, 0.1, 1.5), vec3(0.0, 0.0, 0.0), vec3(7.0, 2.0, 4.0)),
            uv_scale: vec2(1.0, 1.0),
            paint: Paint::Color(vec4(1.0, 1.0, 0.8, 1.0)),
            material: "glass".to_owned(),
        },
        SceneObject {
            name: "butter dish base",
            mesh: MeshKind::TaperedCylinder,
            transform: transform(vec3(1.0, 0.5, 1.0), vec3(0.0, 0.0, 0.0), vec3(7.0, 2.0, 4.0)),
            uv_scale: vec2(1.0, 1.0),
            paint: Paint::Color(vec4(1.0, 1.0, 0.8, 1.0)),
            material: "glass".to_owned(),
        },
        SceneObject {
            name: "butter dish top",
            mesh: MeshKind::TaperedCylinder,
            transform: transform(vec3(1.0, 0.5, 1.0), vec3(180.0, 0.0, 0.0), vec3(7.0, 3.0, 4.0)),
            uv_scale: vec2(1.0, 1.0),
            paint: Paint::Color(vec4(1.0, 1.0, 0.8, 1.0)),
            material: "glass".to_owned(),
        },
        SceneObject {
            name: "orange",
            mesh: MeshKind::Sphere,
            transform: transform(vec3(1.5, 1.0, 1.5), vec3(0.0, 0.0, 0.0), vec3(1.0, 1.0, 7.0)),
            uv_scale: vec2(1.0, 1.0),
            paint: blend("orange", "cracks", 0.2),
            material: "orange".to_owned(),
        },
        SceneObject {
            name: "orange stem",
            mesh: MeshKind::Cylinder,
            transform: transform(vec3(0.1, 0.2, 0.1), vec3(0.0, 0.0, 0.0), vec3(1.0, 2.0, 7.0)),
            uv_scale: vec2(1.0, 1.0),
            paint: Paint::Color(vec4(0.5, 0.3, 0.2, 1.0)),
            material: "bread".to_owned(),
        },
        SceneObject {
            name: "bottle body",
            mesh: MeshKind::Cylinder,
            transform: transform(vec3(1.5, 5.0, 1.5), vec3(0.0, 0.0, 0.0), vec3(4.0, 0.5, 0.0)),
            uv_scale: vec2(1.0, 1.0),
            paint: Paint::Color(vec4(0.8, 0.8, 0.8, 0.6)),
            material: "shinyPlastic".to_owned(),
        },
        SceneObject {
            name: "bottle shoulder",
            mesh: MeshKind::TaperedCylinder,
            transform: transform(vec3(1.5, 0.5, 1.5), vec3(0.0, 0.0, 0.0), vec3(4.0, 5.5, 0.0)),
            uv_scale: vec2(1.0, 1.0),
            paint: Paint::Color(vec4(0.8, 0.8, 0.8, 0.6)),
            material: "shinyPlastic".to_owned(),
        },
        SceneObject {
            name: "bottle cap",
            mesh: MeshKind::Cylinder,
            transform: transform(vec3(1.0, 0.5, 0.5), vec3(0.0, 0.0, 0.0), vec3(4.0, 6.0, 0.1)),
            uv_scale: vec2(1.0, 1.0),
            paint: blend("bottleLid", "bottleLid", 0.0),
            material: "flatPlastic".to_owned(),
        },
        SceneObject {
            name: "bottle ring",
            mesh: MeshKind::Torus,
            transform: transform(vec3(1.0, 0.4, 0.8), vec3(0.0, 0.0, 0.0), vec3(3.0, 6.0, 0.0)),
            uv_scale: vec2(1.0, 1.0),
            paint: Paint::Color(vec4(1.0, 0.8, 0.0, 1.0)),
            material: "flatPlastic".to_owned(),
        },
    ]
}
