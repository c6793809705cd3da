//! Stub collaborators and image fixtures shared by the integration tests.

#![allow(dead_code)]

use std::path::Path;

use cgmath::{Matrix4, Vector2, Vector3, Vector4};
use image::{GrayImage, Luma, Rgb, RgbImage, Rgba, RgbaImage};
use tableau::data_structures::texture::{
    ChannelLayout, PixelData, TextureHandle, TextureUploader, WrapMode,
};
use tableau::mesh::{MeshKind, MeshProvider};
use tableau::shader::UniformWriter;

/// One recorded uniform write.
#[derive(Clone, Debug, PartialEq)]
pub enum Write {
    Bool(String, bool),
    Int(String, i32),
    Float(String, f32),
    Vec2(String, Vector2<f32>),
    Vec3(String, Vector3<f32>),
    Vec4(String, Vector4<f32>),
    Mat4(String, Matrix4<f32>),
    Sampler(String, u32),
}

/// Uniform bridge that records every write in order.
#[derive(Default)]
pub struct RecordingShader {
    pub writes: Vec<Write>,
}

impl RecordingShader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_bool(&self, name: &str) -> Option<bool> {
        self.writes.iter().rev().find_map(|w| match w {
            Write::Bool(n, v) if n == name => Some(*v),
            _ => None,
        })
    }

    pub fn last_float(&self, name: &str) -> Option<f32> {
        self.writes.iter().rev().find_map(|w| match w {
            Write::Float(n, v) if n == name => Some(*v),
            _ => None,
        })
    }

    pub fn last_vec2(&self, name: &str) -> Option<Vector2<f32>> {
        self.writes.iter().rev().find_map(|w| match w {
            Write::Vec2(n, v) if n == name => Some(*v),
            _ => None,
        })
    }

    pub fn last_vec3(&self, name: &str) -> Option<Vector3<f32>> {
        self.writes.iter().rev().find_map(|w| match w {
            Write::Vec3(n, v) if n == name => Some(*v),
            _ => None,
        })
    }

    pub fn last_vec4(&self, name: &str) -> Option<Vector4<f32>> {
        self.writes.iter().rev().find_map(|w| match w {
            Write::Vec4(n, v) if n == name => Some(*v),
            _ => None,
        })
    }

    pub fn last_mat4(&self, name: &str) -> Option<Matrix4<f32>> {
        self.writes.iter().rev().find_map(|w| match w {
            Write::Mat4(n, v) if n == name => Some(*v),
            _ => None,
        })
    }

    pub fn last_sampler(&self, name: &str) -> Option<u32> {
        self.writes.iter().rev().find_map(|w| match w {
            Write::Sampler(n, v) if n == name => Some(*v),
            _ => None,
        })
    }
}

impl UniformWriter for RecordingShader {
    fn set_bool(&mut self, name: &str, value: bool) {
        self.writes.push(Write::Bool(name.to_owned(), value));
    }
    fn set_int(&mut self, name: &str, value: i32) {
        self.writes.push(Write::Int(name.to_owned(), value));
    }
    fn set_float(&mut self, name: &str, value: f32) {
        self.writes.push(Write::Float(name.to_owned(), value));
    }
    fn set_vec2(&mut self, name: &str, value: Vector2<f32>) {
        self.writes.push(Write::Vec2(name.to_owned(), value));
    }
    fn set_vec3(&mut self, name: &str, value: Vector3<f32>) {
        self.writes.push(Write::Vec3(name.to_owned(), value));
    }
    fn set_vec4(&mut self, name: &str, value: Vector4<f32>) {
        self.writes.push(Write::Vec4(name.to_owned(), value));
    }
    fn set_mat4(&mut self, name: &str, value: Matrix4<f32>) {
        self.writes.push(Write::Mat4(name.to_owned(), value));
    }
    fn set_sampler(&mut self, name: &str, unit: u32) {
        self.writes.push(Write::Sampler(name.to_owned(), unit));
    }
}

/// One recorded GPU upload.
#[derive(Clone, Debug)]
pub struct Upload {
    pub handle: TextureHandle,
    pub width: u32,
    pub height: u32,
    pub channels: ChannelLayout,
    pub wrap: WrapMode,
}

/// Texture uploader that issues sequential handles and records all calls.
pub struct StubGpu {
    next_handle: u32,
    pub uploads: Vec<Upload>,
    pub binds: Vec<(u32, TextureHandle)>,
    pub released: Vec<TextureHandle>,
}

impl StubGpu {
    pub fn new() -> Self {
        Self {
            next_handle: 1,
            uploads: Vec::new(),
            binds: Vec::new(),
            released: Vec::new(),
        }
    }
}

impl TextureUploader for StubGpu {
    fn upload(&mut self, pixels: &PixelData, wrap: WrapMode) -> TextureHandle {
        let handle = TextureHandle(self.next_handle);
        self.next_handle += 1;
        self.uploads.push(Upload {
            handle,
            width: pixels.width,
            height: pixels.height,
            channels: pixels.channels,
            wrap,
        });
        handle
    }

    fn bind(&mut self, unit: u32, handle: TextureHandle) {
        self.binds.push((unit, handle));
    }

    fn release(&mut self, handle: TextureHandle) {
        self.released.push(handle);
    }
}

/// Mesh provider that records loads and draws.
#[derive(Default)]
pub struct StubMeshes {
    pub loads: Vec<MeshKind>,
    pub draws: Vec<MeshKind>,
}

impl StubMeshes {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MeshProvider for StubMeshes {
    fn load(&mut self, kind: MeshKind) {
        self.loads.push(kind);
    }
    fn draw(&mut self, kind: MeshKind) {
        self.draws.push(kind);
    }
}

pub fn write_rgb_png(path: &Path, width: u32, height: u32) {
    RgbImage::from_pixel(width, height, Rgb([200, 120, 40]))
        .save(path)
        .expect("failed to write RGB fixture");
}

pub fn write_rgba_png(path: &Path, width: u32, height: u32) {
    RgbaImage::from_pixel(width, height, Rgba([200, 120, 40, 128]))
        .save(path)
        .expect("failed to write RGBA fixture");
}

pub fn write_gray_png(path: &Path, width: u32, height: u32) {
    GrayImage::from_pixel(width, height, Luma([99]))
        .save(path)
        .expect("failed to write grayscale fixture");
}
