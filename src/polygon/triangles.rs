// Copyright 2025 Lars Brubaker
// License: SGI Free Software License B (MIT-compatible)
//
// Triangle output written by the per-monotone-polygon triangulation.

use super::{PolygonData, Triangle, VertIdx};

impl PolygonData {
    /// Append a triangle. No orientation or degeneracy check is made.
    pub fn add_triangle(&mut self, v1: VertIdx, v2: VertIdx, v3: VertIdx) {
        self.triangles.push([v1, v2, v3]);
    }

    pub fn clear_triangles(&mut self) {
        self.triangles.clear();
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Flat index buffer: three vertex ids per triangle.
    pub fn triangle_indices(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }
}
