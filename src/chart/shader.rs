//! Built-in shader sources and the uniform block a chart mesh exposes.
//!
//! The CPU preview in [`crate::render`] mirrors the fragment logic below, so changes to
//! the mask computation must be made in both places.

use std::collections::BTreeMap;

use crate::{chart::options::ShaderSource, foundation::core::Tint};

/// Width of the smoothstep edge of the radial mask, as a fraction of a revolution.
pub const RADIAL_MASK_FEATHER: f64 = 0.002;

pub const DEFAULT_VERTEX_SHADER: &str = r#"#version 300 es
precision mediump float;

in vec2 aPosition;
in float aNormalizedValue;
in float aValue;
in vec2 aUv;

out vec2 vPosition;
out float vNormalizedValue;
out float vValue;
out vec2 vUv;

uniform mat3 uProjectionMatrix;
uniform mat3 uWorldTransformMatrix;
uniform mat3 uTransformMatrix;

void main() {
    vPosition = aPosition;
    vNormalizedValue = aNormalizedValue;
    vValue = aValue;
    vUv = aUv;

    mat3 mvp = uProjectionMatrix * uWorldTransformMatrix * uTransformMatrix;
    gl_Position = vec4((mvp * vec3(aPosition, 1.0)).xy, 0.0, 1.0);
}
"#;

pub const FLAT_FRAGMENT_SHADER: &str = r#"#version 300 es
#define PI 3.1415926538
#define FEATHER 0.002
precision highp float;

in vec2 vPosition;
in float vNormalizedValue;
in float vValue;
in vec2 vUv;

out vec4 fragColor;

uniform vec4 uTint;
uniform vec2 uRadialMask;

float radialMask(vec2 p) {
    float a = atan(p.y, p.x) + PI * 0.5;
    float t = fract(a / (2.0 * PI));
    return smoothstep(uRadialMask.x - FEATHER, uRadialMask.x, t)
        * (1.0 - smoothstep(uRadialMask.y, uRadialMask.y + FEATHER, t));
}

void main() {
    float mask = radialMask(vPosition);
    fragColor = vec4(uTint.rgb, uTint.a * mask);
}
"#;

pub const TEXTURED_FRAGMENT_SHADER: &str = r#"#version 300 es
#define PI 3.1415926538
#define FEATHER 0.002
precision highp float;

in vec2 vPosition;
in float vNormalizedValue;
in float vValue;
in vec2 vUv;

out vec4 fragColor;

uniform sampler2D uTexture;
uniform vec4 uTint;
uniform vec2 uRadialMask;

float radialMask(vec2 p) {
    float a = atan(p.y, p.x) + PI * 0.5;
    float t = fract(a / (2.0 * PI));
    return smoothstep(uRadialMask.x - FEATHER, uRadialMask.x, t)
        * (1.0 - smoothstep(uRadialMask.y, uRadialMask.y + FEATHER, t));
}

void main() {
    vec4 color = texture(uTexture, vUv) * uTint;
    fragColor = vec4(color.rgb, color.a * radialMask(vPosition));
}
"#;

/// Which built-in fragment source a mesh starts from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadingVariant {
    Flat,
    Textured,
}

/// Resolved vertex/fragment pair.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ShaderProgram {
    pub vertex: String,
    pub fragment: String,
}

impl ShaderProgram {
    pub fn resolve(variant: ShadingVariant, custom: Option<&ShaderSource>) -> Self {
        let default_fragment = match variant {
            ShadingVariant::Flat => FLAT_FRAGMENT_SHADER,
            ShadingVariant::Textured => TEXTURED_FRAGMENT_SHADER,
        };
        let custom = custom.cloned().unwrap_or_default();
        Self {
            vertex: custom
                .vertex
                .unwrap_or_else(|| DEFAULT_VERTEX_SHADER.to_string()),
            fragment: custom
                .fragment
                .unwrap_or_else(|| default_fragment.to_string()),
        }
    }
}

/// Uniform values written to the shader.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Uniforms {
    pub tint: [f32; 4],
    /// Revealed slice `[start, end]` as fractions of a revolution from the top.
    pub radial_mask: [f32; 2],
    pub extra: BTreeMap<String, Vec<f32>>,
}

impl Uniforms {
    pub fn new(tint: Option<Tint>, extra: BTreeMap<String, Vec<f32>>) -> Self {
        Self {
            tint: tint.unwrap_or_default().normalized(),
            radial_mask: [0.0, 1.0],
            extra,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/chart/shader.rs"]
mod tests;
