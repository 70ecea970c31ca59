use std::collections::BTreeMap;

use crate::{
    foundation::core::{BoundingBox, Tint},
    foundation::math::clamp,
    path::polar::PolarScale,
};

/// Allowed range for `samples`.
pub const SAMPLES_RANGE: (u32, u32) = (3, 5000);
/// Allowed range for `subdivisions`.
pub const SUBDIVISIONS_RANGE: (u32, u32) = (0, 10);

/// How a chart mesh blends over what is already drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlendMode {
    #[default]
    Normal,
    Add,
}

/// Custom GLSL pair. Either half falls back to the built-in source when absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ShaderSource {
    pub vertex: Option<String>,
    pub fragment: Option<String>,
}

/// Chart construction options, usually deserialized from a JSON document.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    /// Resample the contour to this many points (clamped to `3..=5000`).
    pub samples: Option<u32>,
    /// Chaikin iterations before resampling (clamped to `0..=10`).
    pub subdivisions: Option<u32>,
    /// Radius of the inner contour. Setting it turns the chart into a ring.
    pub center_offset: Option<f64>,
    /// Inner contour follows the outer one at `outer - center_offset`.
    pub relative_offset: bool,
    /// Texture-space bounds shared across charts; auto-fit when absent.
    pub bounding_box: Option<BoundingBox>,
    /// Texture resource key. Its presence selects the textured variant.
    pub texture: Option<String>,
    pub tint: Option<Tint>,
    pub shader: Option<ShaderSource>,
    pub blend_mode: BlendMode,
    pub label: Option<String>,
    pub scale: PolarScale,
    /// Extra uniform values forwarded untouched to the shader.
    pub uniforms: BTreeMap<String, Vec<f32>>,
}

impl ChartOptions {
    pub(crate) fn clamped_samples(&self) -> Option<usize> {
        self.samples.map(|s| {
            clamp(
                f64::from(s),
                f64::from(SAMPLES_RANGE.0),
                f64::from(SAMPLES_RANGE.1),
            ) as usize
        })
    }

    pub(crate) fn clamped_subdivisions(&self) -> Option<usize> {
        self.subdivisions.map(|s| {
            clamp(
                f64::from(s),
                f64::from(SUBDIVISIONS_RANGE.0),
                f64::from(SUBDIVISIONS_RANGE.1),
            ) as usize
        })
    }

    /// Ring charts have an inner contour; everything else is a filled fan.
    pub fn is_ring(&self) -> bool {
        self.center_offset.is_some() || self.relative_offset
    }
}

#[cfg(test)]
#[path = "../../tests/unit/chart/options.rs"]
mod tests;
