pub use kurbo::{Point, Rect, Vec2};

/// Ordered numeric samples; index order carries meaning (usually hours).
pub type Series = Vec<f64>;

/// Closed path: the last point implicitly connects back to the first.
pub type Path = Vec<Point>;

/// Rectangle used to project chart coordinates into texture space.
pub type BoundingBox = Rect;

/// Straight (non-premultiplied) RGBA tint. Colour channels are 0..=255, alpha is 0..=1.
///
/// Missing channels default to full intensity when normalized.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Tint {
    pub r: Option<f64>,
    pub g: Option<f64>,
    pub b: Option<f64>,
    pub a: Option<f64>,
}

impl Tint {
    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: Some(r),
            g: Some(g),
            b: Some(b),
            a: Some(a),
        }
    }

    /// Shader-ready `[r, g, b, a]` in `0..=1`.
    pub fn normalized(self) -> [f32; 4] {
        fn channel(c: Option<f64>, div: f64) -> f32 {
            c.map_or(1.0, |v| (v / div) as f32)
        }

        [
            channel(self.r, 255.0),
            channel(self.g, 255.0),
            channel(self.b, 255.0),
            channel(self.a, 1.0),
        ]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
