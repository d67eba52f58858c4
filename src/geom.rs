// Copyright 2025 Lars Brubaker
// License: SGI Free Software License B (MIT-compatible)
//
// Geometric predicates used by the polygon chain bookkeeping.
//
// Every coordinate comparison goes through a Tolerance band so that nearly
// coincident points are treated as equal. The ordering used everywhere is
// y first, then x ("above/below, then left/right").

use std::cmp::Ordering;

pub type Real = f64;

/// 2D point.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    pub x: Real,
    pub y: Real,
}

impl Point {
    #[inline]
    pub const fn new(x: Real, y: Real) -> Self {
        Point { x, y }
    }
}

impl From<(Real, Real)> for Point {
    #[inline]
    fn from((x, y): (Real, Real)) -> Self {
        Point { x, y }
    }
}

impl From<[Real; 2]> for Point {
    #[inline]
    fn from([x, y]: [Real; 2]) -> Self {
        Point { x, y }
    }
}

/// Numeric tolerance band applied to coordinate differences.
///
/// A difference `d` counts as positive when `d > eps_p`, as negative when
/// `d < eps_n`, and as zero otherwise.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tolerance {
    pub eps_p: Real,
    pub eps_n: Real,
}

/// Default band half-width: 2^-43.
pub const DEFAULT_EPSILON: Real = 1.0 / 8_796_093_022_208.0;

impl Tolerance {
    /// Symmetric band `[-eps, eps]`.
    pub fn new(eps: Real) -> Self {
        let eps = eps.abs();
        Tolerance { eps_p: eps, eps_n: -eps }
    }

    #[inline]
    fn sign(&self, d: Real) -> Ordering {
        if d > self.eps_p {
            Ordering::Greater
        } else if d < self.eps_n {
            Ordering::Less
        } else {
            Ordering::Equal
        }
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance::new(DEFAULT_EPSILON)
    }
}

/// Lexicographic comparison of `a` against `b`: y first, then x.
pub fn compare_pts_yx(a: Point, b: Point, tol: &Tolerance) -> Ordering {
    match tol.sign(a.y - b.y) {
        Ordering::Equal => tol.sign(a.x - b.x),
        ord => ord,
    }
}

/// Returns true if both coordinates of `a` and `b` differ by less than `eps_p`.
#[inline]
pub fn verts_equal(a: Point, b: Point, tol: &Tolerance) -> bool {
    (a.x - b.x).abs() < tol.eps_p && (a.y - b.y).abs() < tol.eps_p
}

/// Contribution of the directed edge `from -> to` to the shoelace double area.
/// Summed over a closed ring the result is positive for CCW (y-up) rings.
#[inline]
pub fn edge_double_area(from: Point, to: Point) -> Real {
    (from.x - to.x) * (from.y + to.y)
}

/// Monotone measure of the CCW angle from `vertex->from` to `vertex->to`,
/// mapped onto [0, 4) without inverse trigonometry:
///   left turn (cross >= 0):  1 - cos(theta)   in [0, 2)
///   right turn (cross < 0):  3 + cos(theta)   in [2, 4)
pub fn map_angle(vertex: Point, from: Point, to: Point) -> Real {
    let (ax, ay) = (from.x - vertex.x, from.y - vertex.y);
    let (bx, by) = (to.x - vertex.x, to.y - vertex.y);
    let dot = ax * bx + ay * by;
    let cross = ax * by - bx * ay;
    let cosine = dot / (ax * ax + ay * ay).sqrt() / (bx * bx + by * by).sqrt();
    if cross >= 0.0 {
        1.0 - cosine
    } else {
        3.0 + cosine
    }
}
