use crate::foundation::core::{Path, Point};

/// Chaikin corner cutting on a closed path, applied `iterations` times.
///
/// Every edge `p[i] -> p[i+1]` (the closing edge included) is replaced by its points at
/// `¼` and `¾`, in edge order starting with the first edge. The point count doubles per
/// iteration and the output stays implicitly closed. Paths with fewer than 3 points are
/// returned unchanged.
pub fn subdivide_closed(path: &[Point], iterations: usize) -> Path {
    let mut pts = path.to_vec();
    if pts.len() < 3 {
        return pts;
    }

    for _ in 0..iterations {
        pts = chaikin_pass(&pts);
    }
    pts
}

fn chaikin_pass(pts: &[Point]) -> Path {
    let n = pts.len();
    let mut out = Vec::with_capacity(n * 2);
    for (i, &cur) in pts.iter().enumerate() {
        let next = pts[(i + 1) % n];
        out.push(cur.lerp(next, 0.25));
        out.push(cur.lerp(next, 0.75));
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/path/subdivide.rs"]
mod tests;
