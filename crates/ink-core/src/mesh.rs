use glam::Vec2;

/// Builds a flat triangle list tiling `[-1, 1]²` with an `n × n` grid of
/// cells, each split into a lower-left and an upper-right triangle.
///
/// Output is `12·n²` floats: cell-major, row-major, triangle 1 then
/// triangle 2, each triangle as three `(x, y)` pairs. The sequence doubles
/// as the indexing domain for the per-vertex simulation fields.
pub fn subdivide_vertices(subdivisions: u32) -> Vec<f32> {
    let step = 2.0 / subdivisions as f32;
    let mut triangles = Vec::with_capacity((subdivisions * subdivisions * 12) as usize);
    for i in 0..subdivisions {
        for j in 0..subdivisions {
            let x = -1.0 + j as f32 * step;
            let y = -1.0 + i as f32 * step;
            triangles.extend_from_slice(&[x, y, x + step, y, x, y + step]);
            triangles.extend_from_slice(&[x + step, y, x, y + step, x + step, y + step]);
        }
    }
    triangles
}

/// Screen-space UV for every mesh vertex: x maps `[-1,1] → [0,1]` and y is
/// flipped so `v = 0` is the top edge, matching pointer coordinates.
pub fn vertex_uvs(vertices: &[f32]) -> Vec<Vec2> {
    vertices
        .chunks_exact(2)
        .map(|pair| Vec2::new((pair[0] + 1.0) * 0.5, 1.0 - (pair[1] + 1.0) * 0.5))
        .collect()
}
