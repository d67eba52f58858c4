// Copyright 2025 Lars Brubaker
// Shared test utilities for polychain tests.

#![allow(dead_code)]

use polychain::{PolygonData, Real, SegIdx, VertIdx};

/// Points of a convex ring on a circle of `radius`, CCW, at the given angles
/// in degrees (must be strictly increasing and below 360).
pub fn circle_ring(degrees: &[u32], radius: Real) -> Vec<(Real, Real)> {
    degrees
        .iter()
        .map(|&d| {
            let rad = (d as Real).to_radians();
            (radius * rad.cos(), radius * rad.sin())
        })
        .collect()
}

/// Origin vertices along the monotone cycle starting at `start`.
pub fn mono_cycle_vertices(pd: &PolygonData, start: SegIdx) -> Vec<VertIdx> {
    pd.mono_cycle(start)
        .map(|s| pd.segments()[s as usize].from)
        .collect()
}

/// Origin vertices along the boundary chain starting at `start`.
pub fn boundary_vertices(pd: &PolygonData, start: SegIdx) -> Vec<VertIdx> {
    pd.boundary_cycle(start)
        .map(|s| pd.segments()[s as usize].from)
        .collect()
}

/// Fan-split the convex CCW chain whose vertices are `first..first + n` by
/// diagonals from `first` to every non-adjacent vertex. Returns the polygon
/// indices produced by each split.
pub fn fan_decompose(pd: &mut PolygonData, first: VertIdx, n: u32) -> Vec<usize> {
    let mut produced = Vec::new();
    for k in 2..n.saturating_sub(1) {
        let new_poly = pd
            .split_polygon_chain(0, first, first + k)
            .expect("fan split failed");
        produced.push(new_poly);
    }
    produced
}

/// Emit one triangle per 3-cycle among the monotone sub-polygons.
/// Returns the number of monotone sub-polygons that were not triangles.
pub fn emit_triangle_pieces(pd: &mut PolygonData) -> usize {
    let view: &PolygonData = pd;
    let pieces: Vec<Vec<VertIdx>> = view
        .mono_sub_polys()
        .iter()
        .map(|&s| mono_cycle_vertices(view, s))
        .collect();
    let mut skipped = 0;
    for verts in pieces {
        if let &[a, b, c] = verts.as_slice() {
            pd.add_triangle(a, b, c);
        } else {
            skipped += 1;
        }
    }
    skipped
}

/// Signed area of a triangle given by vertex ids.
pub fn triangle_signed_area(pd: &PolygonData, tri: [VertIdx; 3]) -> Real {
    let p = |v: VertIdx| pd.vertices()[v as usize].point;
    let (a, b, c) = (p(tri[0]), p(tri[1]), p(tri[2]));
    0.5 * ((b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y))
}

/// Signed area of a simple ring given as (x, y) pairs.
pub fn ring_signed_area(ring: &[(Real, Real)]) -> Real {
    let n = ring.len();
    let mut area = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        area += ring[i].0 * ring[j].1 - ring[j].0 * ring[i].1;
    }
    area * 0.5
}
