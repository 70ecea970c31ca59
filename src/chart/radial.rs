use std::sync::Arc;

use crate::{
    chart::{
        options::{BlendMode, ChartOptions},
        shader::{ShaderProgram, ShadingVariant, Uniforms},
        texture::{Texture, TextureSource},
    },
    foundation::{
        core::{BoundingBox, Series},
        error::ChartResult,
    },
    geometry::{
        fan::build_fan_geometry,
        mesh::{MeshAttributes, MeshBuffers},
        ring::build_ring_geometry,
        uv::{bounds_of, uv_for_positions},
    },
    path::{
        polar::{polar_path_to_series, series_to_polar_path_scaled},
        resample::resample_closed,
        subdivide::subdivide_closed,
    },
};

/// Lifecycle of a [`RadialChart`]. Transitions only move forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartState {
    Constructing,
    GeometryReady,
    Meshed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeometryKind {
    Fan,
    Ring,
}

/// Geometry produced once per chart.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ChartGeometry {
    pub kind: GeometryKind,
    pub mesh: MeshBuffers,
    pub attributes: MeshAttributes,
    /// Bounds the UVs were projected from.
    pub bounds: BoundingBox,
    /// Radii of the processed outer contour.
    pub outer: Series,
    /// Radii of the inner contour; empty for fan charts.
    pub inner: Series,
}

/// Drawable state handed to the renderer once shading is resolved.
#[derive(Clone, Debug)]
pub struct ChartMesh {
    pub variant: ShadingVariant,
    pub program: ShaderProgram,
    pub uniforms: Uniforms,
    pub blend_mode: BlendMode,
    pub texture: Option<Arc<Texture>>,
}

/// Polar path -> subdivision -> resampling -> radii -> fan/ring -> attributes.
#[tracing::instrument(skip(values, options), fields(len = values.len()))]
pub fn build_chart_geometry(values: &[f64], options: &ChartOptions) -> ChartResult<ChartGeometry> {
    let mut path = series_to_polar_path_scaled(values, options.scale);
    if let Some(iterations) = options.clamped_subdivisions() {
        path = subdivide_closed(&path, iterations);
    }
    if let Some(samples) = options.clamped_samples() {
        path = resample_closed(&path, samples);
    }
    let outer = polar_path_to_series(&path);

    let (kind, mesh, inner, normalized_value, value) = if options.is_ring() {
        let offset = options.center_offset.unwrap_or(0.0);
        let inner: Series = if options.relative_offset {
            outer.iter().map(|v| v - offset).collect()
        } else {
            vec![offset; outer.len()]
        };
        let mesh = build_ring_geometry(&outer, &inner)?;

        let n = outer.len();
        let mut normalized = Vec::with_capacity(n * 4);
        let mut value = Vec::with_capacity(n * 4);
        for i in 0..n {
            let next = if i + 1 < n { i + 1 } else { 0 };
            normalized.extend_from_slice(&[0.0, 1.0, 1.0, 0.0]);
            value.extend_from_slice(&[
                inner[i] as f32,
                outer[i] as f32,
                outer[next] as f32,
                inner[next] as f32,
            ]);
        }
        (GeometryKind::Ring, mesh, inner, normalized, value)
    } else {
        let mesh = build_fan_geometry(&outer);

        let n = outer.len();
        let mut normalized = Vec::with_capacity(n * 3);
        let mut value = Vec::with_capacity(n * 3);
        for i in 0..n {
            let next = if i + 1 < n { i + 1 } else { 0 };
            normalized.extend_from_slice(&[0.0, 1.0, 1.0]);
            value.extend_from_slice(&[0.0, outer[i] as f32, outer[next] as f32]);
        }
        (GeometryKind::Fan, mesh, Vec::new(), normalized, value)
    };

    let bounds = options
        .bounding_box
        .unwrap_or_else(|| bounds_of(mesh.vertices()));
    let uv = uv_for_positions(&mesh.positions, bounds);

    tracing::debug!(
        ?kind,
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "built chart geometry"
    );

    Ok(ChartGeometry {
        kind,
        mesh,
        attributes: MeshAttributes {
            normalized_value,
            value,
            uv,
        },
        bounds,
        outer,
        inner,
    })
}

/// A radial chart: immutable geometry plus a mesh that is attached once shading is known.
///
/// Flat charts are meshed during construction. Textured charts wait in
/// [`ChartState::GeometryReady`] until their texture is resolved exactly once.
#[derive(Clone, Debug)]
pub struct RadialChart {
    options: ChartOptions,
    state: ChartState,
    geometry: ChartGeometry,
    mesh: Option<ChartMesh>,
}

impl RadialChart {
    /// Build geometry and, for untextured charts, the flat mesh.
    ///
    /// Geometry errors abort construction.
    #[tracing::instrument(skip(values, options), fields(len = values.len(), label = options.label.as_deref()))]
    pub fn new(values: &[f64], options: ChartOptions) -> ChartResult<Self> {
        let geometry = build_chart_geometry(values, &options)?;
        let mut chart = Self {
            options,
            state: ChartState::Constructing,
            geometry,
            mesh: None,
        };
        chart.state = ChartState::GeometryReady;

        if chart.options.texture.is_none() {
            chart.attach_mesh(ShadingVariant::Flat, None);
        }
        Ok(chart)
    }

    pub fn state(&self) -> ChartState {
        self.state
    }

    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    pub fn label(&self) -> Option<&str> {
        self.options.label.as_deref()
    }

    pub fn geometry(&self) -> &ChartGeometry {
        &self.geometry
    }

    pub fn mesh(&self) -> Option<&ChartMesh> {
        self.mesh.as_ref()
    }

    /// Texture key still waiting to be resolved, if any.
    pub fn pending_texture(&self) -> Option<&str> {
        match self.state {
            ChartState::Meshed => None,
            _ => self.options.texture.as_deref(),
        }
    }

    /// Complete the textured variant with the outcome of a texture load.
    ///
    /// A failed load is returned to the caller and leaves the chart geometry-only; there
    /// is no retry. Calls after the mesh exists are ignored.
    pub fn resolve_texture(&mut self, loaded: ChartResult<Texture>) -> ChartResult<()> {
        if self.state == ChartState::Meshed {
            tracing::debug!("texture already resolved; ignoring");
            return Ok(());
        }
        let texture = loaded?;
        tracing::debug!(
            width = texture.width,
            height = texture.height,
            "texture resolved"
        );
        self.attach_mesh(ShadingVariant::Textured, Some(Arc::new(texture)));
        Ok(())
    }

    /// Load the pending texture through `source` and attach the textured mesh.
    pub fn load_texture(&mut self, source: &dyn TextureSource) -> ChartResult<()> {
        let Some(key) = self.pending_texture().map(str::to_owned) else {
            return Ok(());
        };
        let loaded = source.load(&key);
        self.resolve_texture(loaded)
    }

    /// Reveal only the angular slice `[start, end]` (fractions of a revolution, clockwise
    /// from the top). Ignored until the chart has a mesh.
    pub fn set_radial_mask(&mut self, start: f32, end: f32) {
        match self.mesh.as_mut() {
            Some(mesh) => mesh.uniforms.radial_mask = [start, end],
            None => tracing::debug!(start, end, "radial mask set before mesh; ignoring"),
        }
    }

    pub fn radial_mask(&self) -> Option<[f32; 2]> {
        self.mesh.as_ref().map(|m| m.uniforms.radial_mask)
    }

    fn attach_mesh(&mut self, variant: ShadingVariant, texture: Option<Arc<Texture>>) {
        self.mesh = Some(ChartMesh {
            variant,
            program: ShaderProgram::resolve(variant, self.options.shader.as_ref()),
            uniforms: Uniforms::new(self.options.tint, self.options.uniforms.clone()),
            blend_mode: self.options.blend_mode,
            texture,
        });
        self.state = ChartState::Meshed;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/chart/radial.rs"]
mod tests;
