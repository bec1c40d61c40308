//! Exact projective geometry in PQ² (homogeneous coordinates).
//!
//! Purpose
//! - Give segment intersection a total answer: crossing lines meet in a
//!   finite point, parallel lines meet at infinity, identical lines are
//!   reported as coincident.
//!
//! Notes
//! - Supports are 3-vectors ordered `(w, x, y)` for points and `(c0, c1, c2)`
//!   for lines `c0 + c1·x + c2·y = 0`, so incidence is a plain dot product
//!   and both joins and meets are cross products.
//! - `Segment::intersection` is the meet of the supporting lines, so its
//!   point may lie outside the segments; `Segment::bounded_intersection`
//!   keeps only points on both. Overlapping colinear segments are `Empty`
//!   for both; `Segment::clipped_intersection` resolves that case.

mod intersect;
mod types;

pub use intersect::SegmentIntersection;
pub use types::{LineIntersection, ProjectiveLine, ProjectivePoint};

#[cfg(test)]
mod tests;
