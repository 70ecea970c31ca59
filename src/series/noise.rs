use std::f64::consts::TAU;

use noise::{NoiseFn, Simplex};

use crate::foundation::{core::Series, math::clamp};

/// Synthetic series from 2D simplex noise sampled around a circle.
///
/// Sample `i` reads the noise field at angle `i * 2π / count` on a circle of `radius`
/// centred on the origin, so the series wraps smoothly from its last value to its first.
/// Larger radii give rougher series. Values lie in `[-1, 1]` and the same `seed` always
/// yields the same series.
pub fn polar_noise_values(count: usize, radius: f64, seed: u32) -> Series {
    if count == 0 {
        return Vec::new();
    }

    let field = Simplex::new(seed);
    let step = TAU / count as f64;
    (0..count)
        .map(|i| {
            let (sin, cos) = (step * i as f64).sin_cos();
            clamp(field.get([radius * cos, radius * sin]), -1.0, 1.0)
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/series/noise.rs"]
mod tests;
