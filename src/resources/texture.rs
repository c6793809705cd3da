//! Image decoding and texture loading into the registry.

use std::path::Path;

use anyhow::{Context, Result, bail, ensure};
use image::GenericImageView;

use crate::data_structures::texture::{
    ChannelLayout, MAX_TEXTURE_UNITS, PixelData, TextureRegistry, TextureUploader, WrapMode,
};

/// Decode the image at `path` into upload-ready pixel data.
///
/// Images are flipped vertically on load to match the rendering API's
/// texture coordinate convention. Only 3-channel (RGB) and 4-channel (RGBA)
/// images are supported; anything else is an error before any GPU resource
/// is allocated.
pub fn decode(path: &Path) -> Result<PixelData> {
    let img = image::open(path)
        .with_context(|| format!("could not load image {}", path.display()))?;
    let channel_count = img.color().channel_count();
    let img = img.flipv();
    let (width, height) = img.dimensions();

    let (channels, bytes) = match channel_count {
        3 => (ChannelLayout::Rgb, img.to_rgb8().into_raw()),
        4 => (ChannelLayout::Rgba, img.to_rgba8().into_raw()),
        other => bail!(
            "image {} has {other} channels, only 3 (RGB) and 4 (RGBA) are supported",
            path.display()
        ),
    };

    Ok(PixelData {
        width,
        height,
        channels,
        bytes,
    })
}

/// Decode the image at `path`, upload it with `wrap`, and register the
/// resulting handle under `tag`.
///
/// The new entry's position in the registry becomes its texture unit once
/// [`TextureRegistry::bind_all`] runs. Capacity and tag uniqueness are
/// checked before the decode so a failure never leaks a GPU resource.
pub fn load_texture(
    path: &Path,
    tag: &str,
    wrap: WrapMode,
    registry: &mut TextureRegistry,
    gpu: &mut dyn TextureUploader,
) -> Result<()> {
    ensure!(
        registry.len() < MAX_TEXTURE_UNITS,
        "texture unit limit of {MAX_TEXTURE_UNITS} reached, cannot load {}",
        path.display()
    );
    ensure!(
        !registry.contains(tag),
        "texture tag {tag:?} is already registered"
    );

    let pixels = decode(path)?;
    log::info!(
        "loaded image {}: {}x{}, {:?}",
        path.display(),
        pixels.width,
        pixels.height,
        pixels.channels
    );

    let handle = gpu.upload(&pixels, wrap);
    registry.insert(tag, handle);
    Ok(())
}
