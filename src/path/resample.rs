use crate::foundation::core::{Path, Point};

/// Redistribute `count` points evenly by arc length along a closed path.
///
/// The closing edge counts toward the perimeter. Output point `k` sits at distance
/// `k * L / count` from the first input point, so the first output equals the first
/// input. Empty input or `count == 0` gives an empty path; a zero-length path repeats
/// its only location.
pub fn resample_closed(path: &[Point], count: usize) -> Path {
    if path.is_empty() || count == 0 {
        return Vec::new();
    }

    let n = path.len();
    // cumulative[i] = arc length at the start of edge i (edge n-1 closes the loop).
    let mut cumulative = Vec::with_capacity(n + 1);
    let mut total = 0.0;
    cumulative.push(0.0);
    for i in 0..n {
        total += path[i].distance(path[(i + 1) % n]);
        cumulative.push(total);
    }

    if total <= 0.0 || !total.is_finite() {
        return vec![path[0]; count];
    }

    let step = total / count as f64;
    let mut out = Vec::with_capacity(count);
    let mut edge = 0usize;
    for k in 0..count {
        let d = step * k as f64;
        while edge + 1 < n && cumulative[edge + 1] <= d {
            edge += 1;
        }

        let a = path[edge];
        let b = path[(edge + 1) % n];
        let len = cumulative[edge + 1] - cumulative[edge];
        if len <= 0.0 {
            out.push(a);
            continue;
        }
        let t = ((d - cumulative[edge]) / len).clamp(0.0, 1.0);
        out.push(a.lerp(b, t));
    }
    out
}

/// Total length of the closed path, closing edge included.
pub fn closed_length(path: &[Point]) -> f64 {
    let n = path.len();
    (0..n).map(|i| path[i].distance(path[(i + 1) % n])).sum()
}

#[cfg(test)]
#[path = "../../tests/unit/path/resample.rs"]
mod tests;
