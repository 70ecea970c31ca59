use crate::foundation::core::{Path, Point};

/// Douglas-Peucker simplification of a closed path.
///
/// The path is closed through its first point, simplified as a polyline with
/// tolerance `epsilon`, and the duplicated closing point is dropped again.
/// `epsilon <= 0` keeps every point.
pub fn simplify_closed(path: &[Point], epsilon: f64) -> Path {
    if path.len() < 3 || epsilon <= 0.0 {
        return path.to_vec();
    }

    let mut closed = path.to_vec();
    closed.push(path[0]);

    let mut keep = vec![false; closed.len()];
    keep[0] = true;
    keep[closed.len() - 1] = true;
    mark_kept(&closed, 0, closed.len() - 1, epsilon, &mut keep);

    let mut out: Path = closed
        .iter()
        .zip(&keep)
        .filter_map(|(p, &k)| k.then_some(*p))
        .collect();
    out.pop();
    out
}

// Iterative to keep stack depth flat on long paths.
fn mark_kept(pts: &[Point], first: usize, last: usize, epsilon: f64, keep: &mut [bool]) {
    let mut stack = vec![(first, last)];
    while let Some((a, b)) = stack.pop() {
        if b <= a + 1 {
            continue;
        }

        let mut max_dist = 0.0;
        let mut max_idx = a;
        for (i, p) in pts.iter().enumerate().take(b).skip(a + 1) {
            let d = segment_distance(*p, pts[a], pts[b]);
            if d > max_dist {
                max_dist = d;
                max_idx = i;
            }
        }

        if max_dist > epsilon {
            keep[max_idx] = true;
            stack.push((a, max_idx));
            stack.push((max_idx, b));
        }
    }
}

fn segment_distance(p: Point, a: Point, b: Point) -> f64 {
    let ab = b - a;
    let len2 = ab.hypot2();
    if len2 == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len2).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

#[cfg(test)]
#[path = "../../tests/unit/path/simplify.rs"]
mod tests;
