// Copyright 2025 Lars Brubaker
// License: SGI Free Software License B (MIT-compatible)
//
// Polygon chain data: vertices, boundary segments, monotone sub-polygons and
// the triangle list produced from them.
//
// Design:
//   - Vertices and segments live in append-only arenas and are addressed by
//     u32 handles. INVALID (u32::MAX) is the null handle.
//   - Every segment carries two independent cyclic doubly-linked relations:
//       prev/next    the original polygon chain (fixed at creation, changed
//                    only by reverse_polygon_chain)
//       mprev/mnext  the monotone sub-polygon boundary (copied from prev/next
//                    by init_mono_chains, re-spliced by split_polygon_chain)
//   - Diagonal segments have no boundary links and chain_id == INVALID.
//   - Vertex ids equal their arena handle and are used as triangle indices.

mod monotone;
mod triangles;


use std::cmp::Ordering;

use crate::arena::{Arena, INVALID};
use crate::error::PolygonError;
use crate::geom::{compare_pts_yx, edge_double_area, verts_equal, Point, Real, Tolerance};

/// Index into PolygonData::vertices
pub type VertIdx = u32;
/// Index into PolygonData::segments
pub type SegIdx = u32;
/// Identifier of an original polygon chain
pub type ChainId = u32;
/// Three vertex ids, in the order they were added.
pub type Triangle = [VertIdx; 3];

/// One entry of a vertex's outgoing-segment fan.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OutSeg {
    /// Outgoing segment.
    pub seg: SegIdx,
    /// Other end of the outgoing segment.
    pub vert_to: VertIdx,
}

#[derive(Clone, Debug)]
pub struct Vertex {
    pub id: VertIdx,
    pub point: Point,
    /// Entry 0 is the original boundary segment leaving this vertex; further
    /// entries are diagonals in insertion order. Empty until init_mono_chains.
    pub out_segs: Vec<OutSeg>,
}

#[derive(Clone, Debug)]
pub struct Segment {
    pub chain_id: ChainId,
    pub from: VertIdx,
    pub to: VertIdx,
    /// `to` lies after `from` in y-then-x order.
    pub upward: bool,
    /// Previous segment of the original chain.
    pub prev: SegIdx,
    /// Next segment of the original chain.
    pub next: SegIdx,
    /// Previous segment of the monotone sub-polygon.
    pub mprev: SegIdx,
    /// Next segment of the monotone sub-polygon.
    pub mnext: SegIdx,
}

impl Default for Segment {
    fn default() -> Self {
        Self {
            chain_id: INVALID,
            from: INVALID,
            to: INVALID,
            upward: false,
            prev: INVALID,
            next: INVALID,
            mprev: INVALID,
            mnext: INVALID,
        }
    }
}

/// Which of the two segment relations a cycle walk follows.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Link {
    Boundary,
    Monotone,
}

/// Walks one cycle of segments starting at (and including) `start`.
///
/// The walk stops when it gets back to `start`, reaches an INVALID link, or
/// has produced as many items as there are segments, so a corrupted topology
/// never loops forever.
pub struct CycleIter<'a> {
    segs: &'a [Segment],
    start: SegIdx,
    cur: SegIdx,
    link: Link,
    remaining: usize,
}

impl<'a> CycleIter<'a> {
    fn new(segs: &'a [Segment], start: SegIdx, link: Link) -> Self {
        let cur = if (start as usize) < segs.len() { start } else { INVALID };
        CycleIter {
            segs,
            start,
            cur,
            link,
            remaining: segs.len(),
        }
    }
}

impl Iterator for CycleIter<'_> {
    type Item = SegIdx;

    fn next(&mut self) -> Option<SegIdx> {
        if self.cur == INVALID || self.remaining == 0 {
            return None;
        }
        let here = self.cur;
        let seg = &self.segs[here as usize];
        let succ = match self.link {
            Link::Boundary => seg.next,
            Link::Monotone => seg.mnext,
        };
        self.cur = if succ == self.start || (succ as usize) >= self.segs.len() {
            INVALID
        } else {
            succ
        };
        self.remaining -= 1;
        Some(here)
    }
}

/// Vertex/segment arena plus the monotone sub-polygon and triangle lists.
pub struct PolygonData {
    verts: Arena<Vertex>,
    segs: Arena<Segment>,
    next_chain_id: ChainId,
    /// Per original chain: is the winding order ok?
    chain_order_ok: Vec<bool>,
    /// One segment per monotone sub-polygon (on its mnext cycle).
    mono_sub_polys: Vec<SegIdx>,
    triangles: Vec<Triangle>,
    tol: Tolerance,
}

impl PolygonData {
    pub fn new() -> Self {
        Self::with_tolerance(Tolerance::default())
    }

    pub fn with_tolerance(tol: Tolerance) -> Self {
        PolygonData {
            verts: Arena::new(),
            segs: Arena::new(),
            next_chain_id: 0,
            chain_order_ok: Vec::new(),
            mono_sub_polys: Vec::new(),
            triangles: Vec::new(),
            tol,
        }
    }

    /// Build from several rings at once. Degenerate rings are skipped.
    pub fn from_chains<I, R, P>(chains: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[P]>,
        P: Into<Point> + Copy,
    {
        Self::from_chains_with_tolerance(chains, Tolerance::default())
    }

    pub fn from_chains_with_tolerance<I, R, P>(chains: I, tol: Tolerance) -> Self
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[P]>,
        P: Into<Point> + Copy,
    {
        let mut data = Self::with_tolerance(tol);
        for ring in chains {
            data.add_polygon_chain(ring.as_ref());
        }
        data
    }

    // ──────────────────────────────── Accessors ─────────────────────────────────

    pub fn tolerance(&self) -> Tolerance {
        self.tol
    }

    pub fn vertices(&self) -> &[Vertex] {
        self.verts.as_slice()
    }

    pub fn vertex(&self, v: VertIdx) -> Option<&Vertex> {
        self.verts.get(v)
    }

    pub fn segments(&self) -> &[Segment] {
        self.segs.as_slice()
    }

    pub fn segment(&self, s: SegIdx) -> Option<&Segment> {
        self.segs.get(s)
    }

    pub fn first_segment(&self) -> Option<SegIdx> {
        if self.segs.is_empty() {
            None
        } else {
            Some(0)
        }
    }

    pub fn mono_sub_polys(&self) -> &[SegIdx] {
        &self.mono_sub_polys
    }

    /// Number of polygon chains added so far.
    pub fn chain_count(&self) -> u32 {
        self.next_chain_id
    }

    /// One flag per chain: false if the chain was ever reversed or marked wrong.
    pub fn chain_order(&self) -> &[bool] {
        &self.chain_order_ok
    }

    pub fn set_chain_order_wrong(&mut self, chain_id: ChainId) {
        match self.chain_order_ok.get_mut(chain_id as usize) {
            Some(flag) => *flag = false,
            None => tracing::warn!("set_chain_order_wrong: unknown chain {chain_id}"),
        }
    }

    /// Iterate the original chain containing `start`, following `next`.
    pub fn boundary_cycle(&self, start: SegIdx) -> CycleIter<'_> {
        CycleIter::new(self.segs.as_slice(), start, Link::Boundary)
    }

    /// Iterate the monotone sub-polygon containing `start`, following `mnext`.
    pub fn mono_cycle(&self, start: SegIdx) -> CycleIter<'_> {
        CycleIter::new(self.segs.as_slice(), start, Link::Monotone)
    }

    #[inline]
    fn point(&self, v: VertIdx) -> Point {
        self.verts[v].point
    }

    /// Compare two vertices in y-then-x order under this data's tolerance.
    pub fn compare_verts(&self, a: VertIdx, b: VertIdx) -> Ordering {
        compare_pts_yx(self.point(a), self.point(b), &self.tol)
    }

    // ─────────────────────────────── Chain builder ──────────────────────────────

    /// Add a closed ring. Returns the number of segments added, or 0 if fewer
    /// than three distinct vertices remain after merging duplicates.
    pub fn add_polygon_chain<P: Into<Point> + Copy>(&mut self, points: &[P]) -> usize {
        match self.try_add_polygon_chain(points) {
            Ok(n) => n,
            Err(err) => {
                tracing::warn!("add_polygon_chain: {err}");
                0
            }
        }
    }

    /// Like `add_polygon_chain` but reports a rejected ring as an error.
    /// Nothing is modified on error.
    pub fn try_add_polygon_chain<P: Into<Point> + Copy>(
        &mut self,
        points: &[P],
    ) -> Result<usize, PolygonError> {
        let ring = self.retained_points(points);
        if ring.len() < 3 {
            return Err(PolygonError::DegenerateRing {
                retained: ring.len(),
            });
        }

        let n = ring.len() as u32;
        let chain_id = self.next_chain_id;
        let first_vert = self.verts.len() as VertIdx;
        let first_seg = self.segs.len() as SegIdx;

        self.verts.alloc_all(ring.iter().enumerate().map(|(i, &point)| Vertex {
            id: first_vert + i as u32,
            point,
            out_segs: Vec::new(),
        }));

        // Segment i runs from vertex i to vertex i+1; the last one closes the ring.
        for i in 0..n {
            let j = (i + 1) % n;
            let upward = compare_pts_yx(ring[j as usize], ring[i as usize], &self.tol)
                == Ordering::Greater;
            self.segs.alloc(Segment {
                chain_id,
                from: first_vert + i,
                to: first_vert + j,
                upward,
                prev: first_seg + (i + n - 1) % n,
                next: first_seg + j,
                ..Segment::default()
            });
        }

        if self.mono_sub_polys.is_empty() {
            self.mono_sub_polys.push(first_seg);
        }
        self.chain_order_ok.push(true);
        self.next_chain_id += 1;

        tracing::debug!(
            "add_polygon_chain: chain {chain_id} with {n} segments (first segment {first_seg})"
        );
        Ok(n as usize)
    }

    /// Drop consecutive near-duplicates and a closing point equal to the first.
    fn retained_points<P: Into<Point> + Copy>(&self, points: &[P]) -> Vec<Point> {
        let mut ring: Vec<Point> = Vec::with_capacity(points.len());
        for &p in points {
            let p = p.into();
            match ring.last() {
                Some(&last) if verts_equal(last, p, &self.tol) => {}
                _ => ring.push(p),
            }
        }
        if ring.len() > 1 && verts_equal(ring[ring.len() - 1], ring[0], &self.tol) {
            ring.pop();
        }
        ring
    }

    // ──────────────────────────────── Winding ───────────────────────────────────

    /// Winding order of the chain containing `start`, from the shoelace area.
    pub fn is_clockwise(&self, start: SegIdx) -> bool {
        let double_area: Real = self
            .boundary_cycle(start)
            .map(|s| {
                let seg = &self.segs[s];
                edge_double_area(self.point(seg.from), self.point(seg.to))
            })
            .sum();
        double_area < 0.0
    }

    /// Reverse the direction of the chain containing `start` in place and mark
    /// its winding order as wrong. The mark is not cleared by reversing again.
    pub fn reverse_polygon_chain(&mut self, start: SegIdx) {
        let chain_id = match self.segs.get(start) {
            Some(seg) => seg.chain_id,
            None => return,
        };
        self.set_chain_order_wrong(chain_id);

        let mut front = start;
        let mut remaining = self.segs.len();
        loop {
            let seg = &mut self.segs[front];
            std::mem::swap(&mut seg.next, &mut seg.prev);
            std::mem::swap(&mut seg.from, &mut seg.to);
            seg.upward = !seg.upward;
            // continue with the old next
            front = seg.prev;
            remaining -= 1;
            if front == start || remaining == 0 || (front as usize) >= self.segs.len() {
                break;
            }
        }
        tracing::debug!("reverse_polygon_chain: chain {chain_id} reversed");
    }
}

impl Default for PolygonData {
    fn default() -> Self {
        Self::new()
    }
}
