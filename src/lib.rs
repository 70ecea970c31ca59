//! dataclock turns numeric series into radial "data clock" geometry.
//!
//! Values are placed on a circle (index 0 at the top, advancing clockwise), optionally
//! smoothed and resampled, and then triangulated into a filled fan or a ring between two
//! contours. A [`RadialChart`] owns that geometry together with the shading state a
//! renderer needs: shader sources, uniforms, an optional texture and a runtime radial
//! mask.
//!
//! # Pipeline overview
//!
//! 1. **Prepare values**: [`scale_series_group`], [`aggregate_time_series`] and friends
//! 2. **Map to a path**: [`series_to_polar_path`], then [`subdivide_closed`] and
//!    [`resample_closed`]
//! 3. **Triangulate**: [`build_fan_geometry`] / [`build_ring_geometry`] plus UVs
//! 4. **Draw**: hand the [`ChartGeometry`] and [`ChartMesh`] to a GPU renderer, or
//!    preview it with [`rasterize`]
//!
//! Geometry is plain `f32`/`u32` buffers; chart space is Y-down with the origin at the
//! dial center.
#![forbid(unsafe_code)]

pub(crate) mod chart;
pub(crate) mod dial;
pub(crate) mod foundation;
pub(crate) mod geometry;
pub(crate) mod path;
pub(crate) mod render;
pub(crate) mod series;

pub use crate::foundation::core::{BoundingBox, Path, Point, Rect, Series, Tint, Vec2};
pub use crate::foundation::error::{ChartResult, DataClockError};
pub use crate::foundation::math::{clamp, remap, smoothstep};

pub use crate::series::aggregate::{
    Aggregation, AggregationConfig, AggregationPeriod, Bucket, aggregate_time_series,
    aggregate_time_series_with_bounds, daily_to_monthly, hourly_to_daily, quarter_to_hourly,
};
pub use crate::series::noise::polar_noise_values;
pub use crate::series::ops::{
    MinMax, add_series, day, extract_period, extract_period_default, log_transform, min_max,
    normalize, remap_series, scale, scale_series_group, scale_series_group_unit, week,
};

pub use crate::path::polar::{
    ANGLE_OFFSET, PolarScale, polar_path_to_series, sample_angle, series_to_polar_path,
    series_to_polar_path_scaled, value_to_polar, value_to_polar_scaled,
};
pub use crate::path::resample::{closed_length, resample_closed};
pub use crate::path::simplify::simplify_closed;
pub use crate::path::subdivide::subdivide_closed;

pub use crate::geometry::fan::build_fan_geometry;
pub use crate::geometry::mesh::{MeshAttributes, MeshBuffers};
pub use crate::geometry::ring::build_ring_geometry;
pub use crate::geometry::uv::{bounds_of, project_uv, uv_for_positions};

pub use crate::chart::options::{
    BlendMode, ChartOptions, SAMPLES_RANGE, SUBDIVISIONS_RANGE, ShaderSource,
};
pub use crate::chart::radial::{
    ChartGeometry, ChartMesh, ChartState, GeometryKind, RadialChart, build_chart_geometry,
};
pub use crate::chart::shader::{
    DEFAULT_VERTEX_SHADER, FLAT_FRAGMENT_SHADER, RADIAL_MASK_FEATHER, ShaderProgram,
    ShadingVariant, TEXTURED_FRAGMENT_SHADER, Uniforms,
};
pub use crate::chart::texture::{FileTextureSource, Texture, TextureSource, decode_texture};

pub use crate::dial::hands::{HandRotations, hand_rotations};
pub use crate::dial::index::{IndexPlacement, index_placements};

pub use crate::render::composite::{PremulRgba8, blend, composite_layer, unpremultiply};
pub use crate::render::cpu::{FrameRGBA, PreviewOpts, radial_mask_factor, rasterize, render_charts};
