//! Oriented segments.

use std::fmt;

use num_traits::Signed;

use super::types::{Point, Vector};
use crate::error::GeometryError;
use crate::rational::Rational;

/// Oriented segment `p0 → p1` in Q².
///
/// Invariant: `p0 != p1` (checked in [`Segment::new`]).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Segment {
    p0: Point,
    p1: Point,
}

impl Segment {
    /// Fails with `DegenerateSegment` when both endpoints coincide.
    pub fn new(p0: Point, p1: Point) -> Result<Self, GeometryError> {
        if p0 == p1 {
            return Err(GeometryError::DegenerateSegment);
        }
        Ok(Self { p0, p1 })
    }

    #[inline]
    pub fn p0(&self) -> &Point {
        &self.p0
    }
    #[inline]
    pub fn p1(&self) -> &Point {
        &self.p1
    }
    #[inline]
    pub fn into_points(self) -> (Point, Point) {
        (self.p0, self.p1)
    }

    /// The vector `v` such that `p1 = p0 + v`.
    #[inline]
    pub fn vec(&self) -> Vector {
        Vector::from_points(&self.p0, &self.p1)
    }

    /// Same support, opposite orientation.
    #[inline]
    pub fn reversed(&self) -> Segment {
        Segment {
            p0: self.p1.clone(),
            p1: self.p0.clone(),
        }
    }

    /// True iff `p` lies on the line through the segment.
    #[inline]
    pub fn aligned_with_point(&self, p: &Point) -> bool {
        self.vec().colinear_to(&Vector::from_points(&self.p0, p))
    }

    /// True iff both endpoints of `s` lie on the line through `self`.
    #[inline]
    pub fn aligned_with_segment(&self, s: &Segment) -> bool {
        self.aligned_with_point(&s.p0) && self.aligned_with_point(&s.p1)
    }

    /// True iff `p` lies on the closed segment.
    ///
    /// `p` is aligned and the vectors from each endpoint towards `p` point in
    /// opposite directions (or one of them is zero).
    pub fn contains(&self, p: &Point) -> bool {
        self.aligned_with_point(p)
            && !Vector::from_points(&self.p0, p)
                .dot(&Vector::from_points(&self.p1, p))
                .is_positive()
    }

    /// The affine combination `p0 + t (p1 - p0)`.
    #[inline]
    pub fn point_at(&self, t: &Rational) -> Point {
        self.p0.translate(&self.vec().scale(t))
    }

    /// Parameter `t` with `point_at(t) == p`, if `p` is aligned.
    pub fn parameter_of(&self, p: &Point) -> Option<Rational> {
        if !self.aligned_with_point(p) {
            return None;
        }
        let v = self.vec();
        // v != 0 by the segment invariant.
        Some(Vector::from_points(&self.p0, p).dot(&v) / v.dot(&v))
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} -> {}]", self.p0, self.p1)
    }
}
