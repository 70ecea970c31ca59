/// Bound `value` to `[min, max]`.
///
/// Evaluated as `min(max(value, min), max)`, so inverted bounds return `max`
/// instead of panicking like [`f64::clamp`].
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Linear map from `[src_low, src_high]` to `[dst_low, dst_high]`.
///
/// Values outside the source range extrapolate. An empty source range divides
/// by zero and yields an infinity or NaN.
#[inline]
pub fn remap(value: f64, src_low: f64, src_high: f64, dst_low: f64, dst_high: f64) -> f64 {
    dst_low + ((dst_high - dst_low) * (value - src_low)) / (src_high - src_low)
}

/// Hermite step with GLSL `smoothstep` semantics.
#[inline]
pub fn smoothstep(edge0: f64, edge1: f64, x: f64) -> f64 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Product of two 8-bit unit values (`255` is `1.0`), rounded to nearest.
#[inline]
pub(crate) fn mul_unorm8(x: u8, y: u8) -> u8 {
    ((u32::from(x) * u32::from(y) + 127) / 255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
