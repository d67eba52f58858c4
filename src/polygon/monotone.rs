// Copyright 2025 Lars Brubaker
// License: SGI Free Software License B (MIT-compatible)
//
// Subdivision of the polygon chains into monotone sub-polygons.
//
// A monotone sub-polygon is a cycle of segments linked by mprev/mnext. The
// cycles start out as copies of the original chains and are split by adding
// diagonals, each diagonal being a pair of opposite segments.

use std::cmp::Ordering;

use super::{OutSeg, PolygonData, SegIdx, Segment, VertIdx};
use crate::arena::INVALID;
use crate::error::PolygonError;
use crate::geom::map_angle;

impl PolygonData {
    /// Copy the chain links into the monotone links and reset each vertex's
    /// outgoing fan to its original segment. Call once, after all chains are
    /// added and their winding repaired, before the first split.
    pub fn init_mono_chains(&mut self) {
        for v in self.verts.iter_mut() {
            v.out_segs.clear();
        }
        for s in 0..self.segs.len() as SegIdx {
            let seg = &mut self.segs[s];
            seg.mprev = seg.prev;
            seg.mnext = seg.next;
            if seg.chain_id == INVALID {
                continue;
            }
            let (from, to) = (seg.from, seg.to);
            self.verts[from].out_segs.push(OutSeg { seg: s, vert_to: to });
        }
        if !self.segs.is_empty() {
            self.mono_sub_polys.clear();
            self.mono_sub_polys.push(0);
        }
        tracing::debug!(
            "init_mono_chains: {} segments, {} vertices",
            self.segs.len(),
            self.verts.len()
        );
    }

    /// The outgoing segment of `a` that lies next to the right of the
    /// direction a->b, i.e. the one with the smallest CCW angle from it to a->b.
    /// Returns None if `a` has no outgoing segments.
    pub fn next_right_out_segment(&self, a: VertIdx, b: VertIdx) -> Option<OutSeg> {
        let pa = self.verts.get(a)?.point;
        let pb = self.verts.get(b)?.point;

        let mut seg_right = None;
        let mut min_angle = 4.0; // 360 degrees
        for out in &self.verts[a].out_segs {
            let angle = map_angle(pa, self.point(out.vert_to), pb);
            if angle < min_angle {
                min_angle = angle;
                seg_right = Some(*out);
            }
        }
        seg_right
    }

    /// Split the monotone sub-polygon `curr_poly` by the diagonal (v0, v1).
    ///
    /// v0 and v1 must both lie on that sub-polygon and be given in CCW order
    /// with respect to it; neither is checked. Two segments v0->v1 and v1->v0
    /// are added. The slot `curr_poly` keeps one half, the other half is
    /// appended and its index returned.
    ///
    /// Returns None without modifying anything if either vertex has no
    /// outgoing segment (init_mono_chains not run, or unknown vertex).
    pub fn split_polygon_chain(
        &mut self,
        curr_poly: usize,
        v0: VertIdx,
        v1: VertIdx,
    ) -> Option<usize> {
        let seg_out_v0 = self.next_right_out_segment(v0, v1)?.seg;
        let seg_out_v1 = self.next_right_out_segment(v1, v0)?.seg;

        let prev_v0 = self.segs[seg_out_v0].mprev;
        let prev_v1 = self.segs[seg_out_v1].mprev;
        if prev_v0 == INVALID || prev_v1 == INVALID {
            return None;
        }

        let new_org = self.segs.len() as SegIdx; // v0 -> v1
        let new_sym = new_org + 1; // v1 -> v0
        let up = self.compare_verts(v1, v0);

        self.segs.alloc(Segment {
            from: v0,
            to: v1,
            upward: up == Ordering::Greater,
            mprev: prev_v0,
            mnext: seg_out_v1,
            ..Segment::default()
        });
        self.segs.alloc(Segment {
            from: v1,
            to: v0,
            upward: up == Ordering::Less,
            mprev: prev_v1,
            mnext: seg_out_v0,
            ..Segment::default()
        });

        self.segs[prev_v0].mnext = new_org;
        self.segs[prev_v1].mnext = new_sym;
        self.segs[seg_out_v0].mprev = new_sym;
        self.segs[seg_out_v1].mprev = new_org;

        self.verts[v0].out_segs.push(OutSeg { seg: new_org, vert_to: v1 });
        self.verts[v1].out_segs.push(OutSeg { seg: new_sym, vert_to: v0 });

        match self.mono_sub_polys.get_mut(curr_poly) {
            Some(slot) => *slot = seg_out_v1,
            None => {
                tracing::warn!(
                    "split_polygon_chain: polygon index {curr_poly} out of range ({} known)",
                    self.mono_sub_polys.len()
                );
                self.mono_sub_polys.push(seg_out_v1);
            }
        }
        self.mono_sub_polys.push(seg_out_v0);

        let new_poly = self.mono_sub_polys.len() - 1;
        tracing::debug!(
            "split_polygon_chain: diagonal {v0}-{v1} (segments {new_org}/{new_sym}), \
             polygon {curr_poly} -> new polygon {new_poly}"
        );
        Some(new_poly)
    }

    /// Reduce the monotone sub-polygon list to one entry per distinct cycle,
    /// each pointing at the segment leaving the cycle's topmost vertex.
    /// Returns the number of distinct monotone sub-polygons.
    pub fn normalize_monotone_chains(&mut self) -> usize {
        self.mono_sub_polys = self.unique_monotone_chains_max();
        tracing::debug!(
            "normalize_monotone_chains: {} monotone sub-polygons",
            self.mono_sub_polys.len()
        );
        self.mono_sub_polys.len()
    }

    fn unique_monotone_chains_max(&self) -> Vec<SegIdx> {
        let mut visited = vec![false; self.segs.len()];
        let mut unique = Vec::with_capacity(self.mono_sub_polys.len());

        'polys: for &start in &self.mono_sub_polys {
            let Some(first) = self.segs.get(start) else {
                continue;
            };
            let mut pos_max = start;
            let mut ymax_vert = first.from;
            for s in self.mono_cycle(start) {
                if visited[s as usize] {
                    // the whole cycle came from an earlier entry
                    continue 'polys;
                }
                visited[s as usize] = true;
                let from = self.segs[s].from;
                if self.compare_verts(from, ymax_vert) == Ordering::Greater {
                    ymax_vert = from;
                    pos_max = s;
                }
            }
            unique.push(pos_max);
        }
        unique
    }

    /// Check that every segment's mnext/mprev are mutual inverses, which makes
    /// the monotone links a set of closed cycles. Not called by any operation.
    pub fn check_mono_links(&self) -> Result<(), PolygonError> {
        let segs = self.segs.as_slice();
        for (s, seg) in segs.iter().enumerate() {
            let s = s as SegIdx;
            match segs.get(seg.mnext as usize) {
                None => return Err(PolygonError::OpenMonoCycle { segment: s }),
                Some(next) if next.mprev != s => {
                    return Err(PolygonError::BrokenMonoLink { segment: s })
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}
