use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context;

use crate::foundation::{
    error::{ChartResult, DataClockError},
    math::mul_unorm8,
};

/// Decoded texture in premultiplied RGBA8.
#[derive(Clone, Debug, PartialEq)]
pub struct Texture {
    pub width: u32,
    pub height: u32,
    pub rgba8_premul: Arc<Vec<u8>>,
}

impl Texture {
    pub fn from_premul_rgba8(width: u32, height: u32, data: Vec<u8>) -> ChartResult<Self> {
        let expected = (width as usize) * (height as usize) * 4;
        if data.len() != expected || expected == 0 {
            return Err(DataClockError::texture(format!(
                "expected {expected} bytes for a {width}x{height} texture, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            rgba8_premul: Arc::new(data),
        })
    }

    /// Nearest-neighbour lookup with clamp-to-edge addressing. Returns premultiplied
    /// channels in `0..=1`; non-finite coordinates sample transparent black.
    pub fn sample(&self, u: f64, v: f64) -> [f32; 4] {
        if !u.is_finite() || !v.is_finite() {
            return [0.0; 4];
        }
        let x = ((u.clamp(0.0, 1.0) * f64::from(self.width)) as u32)
            .min(self.width.saturating_sub(1));
        let y = ((v.clamp(0.0, 1.0) * f64::from(self.height)) as u32)
            .min(self.height.saturating_sub(1));
        let idx = ((y as usize) * (self.width as usize) + x as usize) * 4;
        let Some(px) = self.rgba8_premul.get(idx..idx + 4) else {
            return [0.0; 4];
        };
        [
            f32::from(px[0]) / 255.0,
            f32::from(px[1]) / 255.0,
            f32::from(px[2]) / 255.0,
            f32::from(px[3]) / 255.0,
        ]
    }
}

/// Resolves texture resource keys. Implementations own any caching.
pub trait TextureSource {
    fn load(&self, key: &str) -> ChartResult<Texture>;
}

/// Loads textures from image files relative to a root directory.
#[derive(Clone, Debug)]
pub struct FileTextureSource {
    root: PathBuf,
}

impl FileTextureSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl TextureSource for FileTextureSource {
    fn load(&self, key: &str) -> ChartResult<Texture> {
        let path = self.root.join(key);
        let bytes =
            std::fs::read(&path).with_context(|| format!("read texture '{}'", path.display()))?;
        decode_texture(&bytes)
    }
}

/// Decode encoded image bytes and convert to premultiplied RGBA8.
pub fn decode_texture(bytes: &[u8]) -> ChartResult<Texture> {
    let dyn_img = image::load_from_memory(bytes).context("decode texture from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut data = rgba.into_raw();
    premultiply(&mut data);
    Texture::from_premul_rgba8(width, height, data)
}

fn premultiply(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let alpha = px[3];
        for c in &mut px[..3] {
            *c = mul_unorm8(*c, alpha);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/chart/texture.rs"]
mod tests;
