use crate::foundation::{
    core::{BoundingBox, Point},
    math::remap,
};

/// Tight axis-aligned bounds of `points`. Empty input gives a zero rect at the origin.
pub fn bounds_of(points: impl IntoIterator<Item = Point>) -> BoundingBox {
    let mut iter = points.into_iter();
    let Some(first) = iter.next() else {
        return BoundingBox::ZERO;
    };
    iter.fold(BoundingBox::from_points(first, first), |acc, p| {
        BoundingBox::new(
            acc.x0.min(p.x),
            acc.y0.min(p.y),
            acc.x1.max(p.x),
            acc.y1.max(p.y),
        )
    })
}

/// Project a vertex into `[0, 1]²` texture space of `bounds`.
///
/// Zero-width or zero-height bounds propagate NaN/inf like [`remap`].
#[inline]
pub fn project_uv(p: Point, bounds: BoundingBox) -> (f64, f64) {
    (
        remap(p.x, bounds.x0, bounds.x1, 0.0, 1.0),
        remap(p.y, bounds.y0, bounds.y1, 0.0, 1.0),
    )
}

/// UV pairs for a flat `x, y` position buffer.
pub fn uv_for_positions(positions: &[f32], bounds: BoundingBox) -> Vec<f32> {
    let mut out = Vec::with_capacity(positions.len());
    for xy in positions.chunks_exact(2) {
        let (u, v) = project_uv(
            Point::new(f64::from(xy[0]), f64::from(xy[1])),
            bounds,
        );
        out.push(u as f32);
        out.push(v as f32);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/uv.rs"]
mod tests;
