//! Software preview of chart meshes.
//!
//! Chart space is centered on the frame and scaled by [`PreviewOpts::scale`]; Y points
//! down in both. Fragment colour follows the built-in fragment shaders: the tint (or a
//! texture lookup multiplied by the tint) with alpha scaled by the radial mask.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::{
    chart::{
        radial::{ChartMesh, RadialChart},
        shader::{RADIAL_MASK_FEATHER, ShadingVariant},
    },
    foundation::{
        core::Point,
        error::{ChartResult, DataClockError},
        math::smoothstep,
    },
    geometry::mesh::{MeshAttributes, MeshBuffers},
    render::composite::{PremulRgba8, blend, unpremultiply},
};

/// RGBA8 frame. `data` is premultiplied when `premultiplied` is set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

impl FrameRGBA {
    pub fn pixel(&self, x: u32, y: u32) -> Option<PremulRgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + x as usize) * 4;
        let px = self.data.get(idx..idx + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Straight-alpha image suitable for PNG encoding.
    pub fn to_image(&self) -> ChartResult<image::RgbaImage> {
        let straight = if self.premultiplied {
            self.data
                .chunks_exact(4)
                .flat_map(|px| unpremultiply([px[0], px[1], px[2], px[3]]))
                .collect()
        } else {
            self.data.clone()
        };
        image::RgbaImage::from_raw(self.width, self.height, straight)
            .ok_or_else(|| DataClockError::validation("frame buffer does not match its size"))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PreviewOpts {
    pub width: u32,
    pub height: u32,
    /// Pixels per chart unit.
    pub scale: f64,
    pub background: PremulRgba8,
}

impl Default for PreviewOpts {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            scale: 1.0,
            background: [0, 0, 0, 0],
        }
    }
}

/// Alpha factor of the radial mask at `p` for the revealed slice `[start, end]`.
///
/// The fragment angle is measured clockwise from the top and normalized to `[0, 1)`.
/// Both edges are feathered over [`RADIAL_MASK_FEATHER`].
pub fn radial_mask_factor(p: Point, start: f64, end: f64) -> f64 {
    let angle = p.y.atan2(p.x) + FRAC_PI_2;
    let t = (angle / TAU).rem_euclid(1.0);
    smoothstep(start - RADIAL_MASK_FEATHER, start, t)
        * (1.0 - smoothstep(end, end + RADIAL_MASK_FEATHER, t))
}

/// Draw a single chart.
pub fn rasterize(chart: &RadialChart, opts: &PreviewOpts) -> ChartResult<FrameRGBA> {
    render_charts(&[chart], opts)
}

/// Draw charts back to front, each blended with its own blend mode.
///
/// Charts without a mesh (textures still pending) are skipped.
#[tracing::instrument(skip(charts, opts), fields(count = charts.len(), width = opts.width, height = opts.height))]
pub fn render_charts(charts: &[&RadialChart], opts: &PreviewOpts) -> ChartResult<FrameRGBA> {
    if opts.width == 0 || opts.height == 0 {
        return Err(DataClockError::validation("preview size must be non-zero"));
    }
    if !(opts.scale.is_finite() && opts.scale > 0.0) {
        return Err(DataClockError::validation(
            "preview scale must be a positive finite number",
        ));
    }

    let px_count = (opts.width as usize) * (opts.height as usize);
    let mut data = Vec::with_capacity(px_count * 4);
    for _ in 0..px_count {
        data.extend_from_slice(&opts.background);
    }
    let mut frame = FrameRGBA {
        width: opts.width,
        height: opts.height,
        data,
        premultiplied: true,
    };

    for chart in charts {
        let Some(mesh) = chart.mesh() else {
            tracing::debug!(label = chart.label(), "chart has no mesh yet; skipping");
            continue;
        };
        let geom = chart.geometry();
        draw_mesh(&mut frame, opts, &geom.mesh, &geom.attributes, mesh);
    }
    Ok(frame)
}

struct Raster<'a> {
    opts: &'a PreviewOpts,
    attributes: &'a MeshAttributes,
    mesh: &'a ChartMesh,
}

impl Raster<'_> {
    fn to_screen(&self, p: Point) -> Point {
        Point::new(
            p.x * self.opts.scale + f64::from(self.opts.width) * 0.5,
            p.y * self.opts.scale + f64::from(self.opts.height) * 0.5,
        )
    }

    fn to_chart(&self, sx: f64, sy: f64) -> Point {
        Point::new(
            (sx - f64::from(self.opts.width) * 0.5) / self.opts.scale,
            (sy - f64::from(self.opts.height) * 0.5) / self.opts.scale,
        )
    }

    fn shade(&self, p: Point, uv: (f64, f64)) -> PremulRgba8 {
        let [tr, tg, tb, ta] = self.mesh.uniforms.tint;
        let [start, end] = self.mesh.uniforms.radial_mask;
        let mask = radial_mask_factor(p, f64::from(start), f64::from(end)) as f32;

        let premul = match (self.mesh.variant, self.mesh.texture.as_deref()) {
            (ShadingVariant::Textured, Some(tex)) => {
                let [r, g, b, a] = tex.sample(uv.0, uv.1);
                [r * tr * mask, g * tg * mask, b * tb * mask, a * ta * mask]
            }
            _ => {
                let a = ta * mask;
                [tr * a, tg * a, tb * a, a]
            }
        };
        premul.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
    }

    fn uv(&self, idx: u32) -> (f64, f64) {
        self.attributes
            .uv_at(idx as usize)
            .map_or((0.0, 0.0), |(u, v)| (f64::from(u), f64::from(v)))
    }
}

fn draw_mesh(
    frame: &mut FrameRGBA,
    opts: &PreviewOpts,
    buffers: &MeshBuffers,
    attributes: &MeshAttributes,
    mesh: &ChartMesh,
) {
    let raster = Raster {
        opts,
        attributes,
        mesh,
    };

    for tri in buffers.indices.chunks_exact(3) {
        let (Some(a), Some(b), Some(c)) = (
            buffers.vertex(tri[0] as usize),
            buffers.vertex(tri[1] as usize),
            buffers.vertex(tri[2] as usize),
        ) else {
            continue;
        };
        let corners = [
            (raster.to_screen(a), raster.uv(tri[0])),
            (raster.to_screen(b), raster.uv(tri[1])),
            (raster.to_screen(c), raster.uv(tri[2])),
        ];
        fill_triangle(frame, &raster, corners);
    }
}

fn edge(a: Point, b: Point, p: Point) -> f64 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

/// Pixels exactly on an edge belong to one side only, so shared edges are not
/// blended twice.
fn owns_edge(a: Point, b: Point) -> bool {
    let dy = b.y - a.y;
    dy > 0.0 || (dy == 0.0 && b.x < a.x)
}

fn fill_triangle(frame: &mut FrameRGBA, raster: &Raster<'_>, corners: [(Point, (f64, f64)); 3]) {
    let [(mut p0, mut uv0), (p1, uv1), (mut p2, mut uv2)] = corners;
    let mut area = edge(p0, p1, p2);
    if !area.is_finite() || area == 0.0 {
        return;
    }
    if area < 0.0 {
        std::mem::swap(&mut p0, &mut p2);
        std::mem::swap(&mut uv0, &mut uv2);
        area = -area;
    }

    let max_x = f64::from(frame.width - 1);
    let max_y = f64::from(frame.height - 1);
    let x0 = p0.x.min(p1.x).min(p2.x).floor().max(0.0);
    let x1 = p0.x.max(p1.x).max(p2.x).ceil().min(max_x);
    let y0 = p0.y.min(p1.y).min(p2.y).floor().max(0.0);
    let y1 = p0.y.max(p1.y).max(p2.y).ceil().min(max_y);
    if x0 > x1 || y0 > y1 {
        return;
    }

    let inside = |w: f64, a: Point, b: Point| w > 0.0 || (w == 0.0 && owns_edge(a, b));

    for y in (y0 as u32)..=(y1 as u32) {
        for x in (x0 as u32)..=(x1 as u32) {
            let p = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
            let w0 = edge(p1, p2, p);
            let w1 = edge(p2, p0, p);
            let w2 = edge(p0, p1, p);
            if !(inside(w0, p1, p2) && inside(w1, p2, p0) && inside(w2, p0, p1)) {
                continue;
            }

            let (b0, b1, b2) = (w0 / area, w1 / area, w2 / area);
            let uv = (
                b0 * uv0.0 + b1 * uv1.0 + b2 * uv2.0,
                b0 * uv0.1 + b1 * uv1.1 + b2 * uv2.1,
            );
            let src = raster.shade(raster.to_chart(p.x, p.y), uv);

            let idx = ((y as usize) * (frame.width as usize) + x as usize) * 4;
            let dst = &mut frame.data[idx..idx + 4];
            let out = blend([dst[0], dst[1], dst[2], dst[3]], src, raster.mesh.blend_mode);
            dst.copy_from_slice(&out);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
