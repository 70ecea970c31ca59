use crate::foundation::core::Point;

/// GPU-ready triangle buffers.
///
/// `positions` holds `x, y` pairs; `indices` holds three vertex indices per triangle.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MeshBuffers {
    pub positions: Vec<f32>,
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    pub fn with_capacity(vertices: usize, triangles: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertices * 2),
            indices: Vec::with_capacity(triangles * 3),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 2
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn vertex(&self, idx: usize) -> Option<Point> {
        let x = *self.positions.get(idx * 2)?;
        let y = *self.positions.get(idx * 2 + 1)?;
        Some(Point::new(f64::from(x), f64::from(y)))
    }

    pub fn vertices(&self) -> impl Iterator<Item = Point> + '_ {
        self.positions
            .chunks_exact(2)
            .map(|c| Point::new(f64::from(c[0]), f64::from(c[1])))
    }

    /// Corner points of every triangle, in index order.
    pub fn triangles(&self) -> impl Iterator<Item = [Point; 3]> + '_ {
        self.indices.chunks_exact(3).filter_map(|tri| {
            Some([
                self.vertex(tri[0] as usize)?,
                self.vertex(tri[1] as usize)?,
                self.vertex(tri[2] as usize)?,
            ])
        })
    }

    pub(crate) fn push_vertex(&mut self, p: Point) {
        self.positions.push(p.x as f32);
        self.positions.push(p.y as f32);
    }
}

/// Per-vertex attributes that accompany a chart mesh.
///
/// `normalized_value` is 0 on inner (or center) vertices and 1 on outer vertices.
/// `value` is the radius the vertex was placed at. `uv` holds `u, v` pairs.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MeshAttributes {
    pub normalized_value: Vec<f32>,
    pub value: Vec<f32>,
    pub uv: Vec<f32>,
}

impl MeshAttributes {
    pub fn uv_at(&self, idx: usize) -> Option<(f32, f32)> {
        Some((*self.uv.get(idx * 2)?, *self.uv.get(idx * 2 + 1)?))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/mesh.rs"]
mod tests;
