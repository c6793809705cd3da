//! The texture registry and the GPU texture uploader seam.
//!
//! The registry owns the mapping from a human-readable tag to an uploaded
//! GPU texture handle. Its one structural invariant: registration order is
//! stable and an entry's position *is* its bound texture unit, so
//! [`TextureRegistry::find_handle`] and [`TextureRegistry::find_unit`] always
//! agree on ordinal position for the same tag.

use crate::shader::UniformWriter;

/// Upper bound on registry size, matching the common hardware limit of
/// simultaneously bound texture units.
pub const MAX_TEXTURE_UNITS: usize = 16;

/// Opaque GPU texture resource ID issued by the host's [`TextureUploader`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

/// Texture coordinate wrap mode requested at upload time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WrapMode {
    Repeat,
    MirroredRepeat,
}

/// Channel layout of decoded pixel data. Only 3- and 4-channel images are
/// supported; anything else is rejected before reaching the uploader.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelLayout {
    Rgb,
    Rgba,
}

/// Decoded, vertically flipped pixel data ready for GPU upload.
#[derive(Clone, Debug)]
pub struct PixelData {
    pub width: u32,
    pub height: u32,
    pub channels: ChannelLayout,
    pub bytes: Vec<u8>,
}

/// Host-side GPU texture operations.
///
/// `upload` creates a new texture resource from pixel data with the given
/// wrap mode, linear filtering and generated mipmaps; the texture may be
/// bound during the upload but is left unbound afterwards. `bind` attaches a
/// handle to a texture unit for sampler recall; `release` frees the resource.
pub trait TextureUploader {
    fn upload(&mut self, pixels: &PixelData, wrap: WrapMode) -> TextureHandle;
    fn bind(&mut self, unit: u32, handle: TextureHandle);
    fn release(&mut self, handle: TextureHandle);
}

struct TextureEntry {
    tag: String,
    handle: TextureHandle,
}

/// Ordered tag-to-handle table owning all GPU textures of a scene.
///
/// Entries are appended by [`crate::resources::texture::load_texture`] and
/// bulk-released at teardown; nothing is destroyed individually. Lookup by
/// tag is the only access path rendering code uses.
#[derive(Default)]
pub struct TextureRegistry {
    entries: Vec<TextureEntry>,
}

impl TextureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.entries.iter().any(|entry| entry.tag == tag)
    }

    /// Append a new entry. Capacity and tag uniqueness are checked by the
    /// loading path before the GPU resource is created.
    pub(crate) fn insert(&mut self, tag: &str, handle: TextureHandle) {
        debug_assert!(self.entries.len() < MAX_TEXTURE_UNITS);
        debug_assert!(!self.contains(tag));
        self.entries.push(TextureEntry {
            tag: tag.to_owned(),
            handle,
        });
    }

    /// Handle of the texture registered under `tag`, first match.
    pub fn find_handle(&self, tag: &str) -> Option<TextureHandle> {
        self.entries
            .iter()
            .find(|entry| entry.tag == tag)
            .map(|entry| entry.handle)
    }

    /// Texture unit the texture registered under `tag` is bound to. The unit
    /// index equals the entry's registration order.
    pub fn find_unit(&self, tag: &str) -> Option<u32> {
        self.entries
            .iter()
            .position(|entry| entry.tag == tag)
            .map(|index| index as u32)
    }

    /// Bind every registered texture to its texture unit for recall by
    /// shader samplers.
    pub fn bind_all(&self, gpu: &mut dyn TextureUploader) {
        for (unit, entry) in self.entries.iter().enumerate() {
            gpu.bind(unit as u32, entry.handle);
        }
    }

    /// Release every GPU resource held by the registry. Safe on an empty
    /// registry; the registry is empty afterwards.
    pub fn release_all(&mut self, gpu: &mut dyn TextureUploader) {
        for entry in self.entries.drain(..) {
            gpu.release(entry.handle);
        }
    }
}

/// Point `sampler` at the unit of the texture registered under `tag`.
pub(crate) fn write_sampler(
    registry: &TextureRegistry,
    shader: &mut dyn UniformWriter,
    sampler: &str,
    tag: &str,
) -> anyhow::Result<()> {
    let unit = registry
        .find_unit(tag)
        .ok_or_else(|| anyhow::anyhow!("no texture registered under tag {tag:?}"))?;
    shader.set_sampler(sampler, unit);
    Ok(())
}
