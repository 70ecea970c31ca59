use crate::{
    foundation::core::Point,
    geometry::mesh::MeshBuffers,
    path::polar::series_to_polar_path,
};

/// Filled disc-sector mesh: one triangle `(center, p[i], p[i+1])` per sample.
pub fn build_fan_geometry(values: &[f64]) -> MeshBuffers {
    fan_from_contour(&series_to_polar_path(values))
}

pub(crate) fn fan_from_contour(contour: &[Point]) -> MeshBuffers {
    let n = contour.len();
    let mut mesh = MeshBuffers::with_capacity(n * 3, n);
    for i in 0..n {
        let next = if i + 1 < n { i + 1 } else { 0 };

        mesh.push_vertex(Point::ORIGIN);
        mesh.push_vertex(contour[i]);
        mesh.push_vertex(contour[next]);

        let base = (i * 3) as u32;
        mesh.indices.extend_from_slice(&[base, base + 1, base + 2]);
    }
    mesh
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/fan.rs"]
mod tests;
