// polychain: polygon chain bookkeeping for monotone decomposition
// Copyright 2025 Lars Brubaker
// License: SGI Free Software License B (MIT-compatible)

pub mod arena;
pub mod error;
pub mod geom;
pub mod polygon;

pub use arena::INVALID;
pub use error::PolygonError;
pub use geom::{compare_pts_yx, Point, Real, Tolerance};
pub use polygon::{
    ChainId, CycleIter, Link, OutSeg, PolygonData, SegIdx, Segment, Triangle, VertIdx, Vertex,
};
