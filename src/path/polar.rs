//! Value <-> polar coordinate mapping.
//!
//! Sample `i` of `n` sits at angle `i * 2π/n - π/2`: index 0 points up and indices
//! advance clockwise in a Y-down coordinate space. UV mapping, radial masking and hand
//! rotation all assume this convention.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::{
    foundation::core::{Path, Point, Series},
    series::ops::log_transform,
};

/// Angle of sample index 0.
pub const ANGLE_OFFSET: f64 = -FRAC_PI_2;

/// Radius transform applied before placing a value on the circle.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PolarScale {
    #[default]
    Linear,
    Log {
        base: f64,
    },
}

impl PolarScale {
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Linear => value,
            Self::Log { base } => log_transform(value, base),
        }
    }
}

/// Angle of sample `index` out of `total`. `total == 0` yields NaN.
#[inline]
pub fn sample_angle(index: usize, total: usize) -> f64 {
    let step = TAU / total as f64;
    step * index as f64 + ANGLE_OFFSET
}

pub fn value_to_polar(value: f64, index: usize, total: usize) -> Point {
    let angle = sample_angle(index, total);
    Point::new(angle.cos() * value, angle.sin() * value)
}

pub fn value_to_polar_scaled(value: f64, index: usize, total: usize, scale: PolarScale) -> Point {
    value_to_polar(scale.apply(value), index, total)
}

pub fn series_to_polar_path(values: &[f64]) -> Path {
    series_to_polar_path_scaled(values, PolarScale::Linear)
}

pub fn series_to_polar_path_scaled(values: &[f64], scale: PolarScale) -> Path {
    let n = values.len();
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| value_to_polar_scaled(v, i, n, scale))
        .collect()
}

/// Radius of every point. Angles are discarded.
pub fn polar_path_to_series(path: &[Point]) -> Series {
    path.iter().map(|p| p.x.hypot(p.y)).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/path/polar.rs"]
mod tests;
