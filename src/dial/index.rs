use std::f64::consts::TAU;

use crate::foundation::core::{Point, Vec2};

/// Where one index mark sits on the dial.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct IndexPlacement {
    pub index: usize,
    /// Clockwise rotation from the top, in radians. Marks are drawn rotated by this.
    pub rotation: f64,
    /// Anchor relative to the dial center (Y-down).
    pub position: Point,
}

/// Evenly spaced marks around a dial of `radius`, pulled inward by `offset`.
///
/// Mark `i` is the point `(0, -(radius - offset))` rotated clockwise by
/// `i * 2π / count`, so mark 0 sits at the top. `count == 0` gives no marks.
pub fn index_placements(count: usize, radius: f64, offset: f64) -> Vec<IndexPlacement> {
    if count == 0 {
        return Vec::new();
    }

    let distance = radius - offset;
    let step = TAU / count as f64;
    (0..count)
        .map(|index| {
            let rotation = step * index as f64;
            let (sin, cos) = rotation.sin_cos();
            IndexPlacement {
                index,
                rotation,
                position: Point::ORIGIN + Vec2::new(distance * sin, -distance * cos),
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/dial/index.rs"]
mod tests;
