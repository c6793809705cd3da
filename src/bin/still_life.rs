//! Headless demo: prepares and renders the still-life scene against
//! console-logging collaborators. Placeholder texture files are generated
//! into a temp directory so the full load path runs without real assets.
//!
//! Run with `RUST_LOG=debug` to see every uniform write.

use std::{env, fs, path::Path};

use anyhow::Result;
use cgmath::{Matrix4, Vector2, Vector3, Vector4};
use image::{Rgb, RgbImage};
use tableau::data_structures::texture::{PixelData, TextureHandle, TextureUploader, WrapMode};
use tableau::mesh::{MeshKind, MeshProvider};
use tableau::scene::Scene;
use tableau::shader::UniformWriter;
use tableau::still_life;

struct ConsoleShader;

impl UniformWriter for ConsoleShader {
    fn set_bool(&mut self, name: &str, value: bool) {
        log::debug!("uniform {name} = {value}");
    }
    fn set_int(&mut self, name: &str, value: i32) {
        log::debug!("uniform {name} = {value}");
    }
    fn set_float(&mut self, name: &str, value: f32) {
        log::debug!("uniform {name} = {value}");
    }
    fn set_vec2(&mut self, name: &str, value: Vector2<f32>) {
        log::debug!("uniform {name} = {value:?}");
    }
    fn set_vec3(&mut self, name: &str, value: Vector3<f32>) {
        log::debug!("uniform {name} = {value:?}");
    }
    fn set_vec4(&mut self, name: &str, value: Vector4<f32>) {
        log::debug!("uniform {name} = {value:?}");
    }
    fn set_mat4(&mut self, name: &str, value: Matrix4<f32>) {
        log::debug!("uniform {name} = {value:?}");
    }
    fn set_sampler(&mut self, name: &str, unit: u32) {
        log::debug!("sampler {name} -> unit {unit}");
    }
}

struct ConsoleGpu {
    next_handle: u32,
}

impl TextureUploader for ConsoleGpu {
    fn upload(&mut self, pixels: &PixelData, wrap: WrapMode) -> TextureHandle {
        let handle = TextureHandle(self.next_handle);
        self.next_handle += 1;
        log::debug!(
            "upload {}x{} {:?} ({wrap:?}) -> {handle:?}",
            pixels.width,
            pixels.height,
            pixels.channels
        );
        handle
    }
    fn bind(&mut self, unit: u32, handle: TextureHandle) {
        log::debug!("bind unit {unit} -> {handle:?}");
    }
    fn release(&mut self, handle: TextureHandle) {
        log::debug!("release {handle:?}");
    }
}

struct ConsoleMeshes;

impl MeshProvider for ConsoleMeshes {
    fn load(&mut self, kind: MeshKind) {
        log::debug!("load mesh {kind:?}");
    }
    fn draw(&mut self, kind: MeshKind) {
        log::debug!("draw mesh {kind:?}");
    }
}

fn write_placeholder_textures(dir: &Path) -> Result<()> {
    for (index, file) in still_life::textures(dir).iter().enumerate() {
        let shade = 40 + 20 * index as u8;
        let img = RgbImage::from_pixel(8, 8, Rgb([shade, shade / 2, 255 - shade]));
        img.save(&file.path)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let texture_dir = env::temp_dir().join("tableau-still-life");
    fs::create_dir_all(&texture_dir)?;
    write_placeholder_textures(&texture_dir)?;

    let desc = still_life::description(&texture_dir);
    let mut scene = Scene::new();
    let mut shader = ConsoleShader;
    let mut gpu = ConsoleGpu { next_handle: 1 };
    let mut meshes = ConsoleMeshes;

    scene.prepare(&desc, &mut gpu, &mut shader, &mut meshes)?;
    scene.render(&desc, &mut shader, &mut meshes)?;
    scene.destroy(&mut gpu);

    println!(
        "rendered {} objects with {} textures",
        desc.objects.len(),
        desc.textures.len()
    );
    Ok(())
}
