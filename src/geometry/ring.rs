use crate::{
    foundation::{
        core::Point,
        error::{ChartResult, DataClockError},
    },
    geometry::mesh::MeshBuffers,
    path::polar::series_to_polar_path,
};

/// Quad strip between an outer and an inner contour.
///
/// Both series are mapped to polar paths independently, so index `i` lands on the same
/// angle in both and the lengths must match. Quad `i` is `inner[i], outer[i], outer[i+1],
/// inner[i+1]`, split into triangles `0,1,2` and `0,2,3`.
pub fn build_ring_geometry(outer: &[f64], inner: &[f64]) -> ChartResult<MeshBuffers> {
    ring_from_contours(&series_to_polar_path(outer), &series_to_polar_path(inner))
}

pub(crate) fn ring_from_contours(outer: &[Point], inner: &[Point]) -> ChartResult<MeshBuffers> {
    if outer.len() != inner.len() {
        return Err(DataClockError::length_mismatch(
            "outer and inner contours must have the same number of values",
            outer.len(),
            inner.len(),
        ));
    }

    let n = outer.len();
    let mut mesh = MeshBuffers::with_capacity(n * 4, n * 2);
    for i in 0..n {
        let next = if i + 1 < n { i + 1 } else { 0 };

        mesh.push_vertex(inner[i]);
        mesh.push_vertex(outer[i]);
        mesh.push_vertex(outer[next]);
        mesh.push_vertex(inner[next]);

        let base = (i * 4) as u32;
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    Ok(mesh)
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/ring.rs"]
mod tests;
