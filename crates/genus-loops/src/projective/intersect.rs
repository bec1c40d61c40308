//! Segment/segment intersection through projective lines.

use num_traits::{One, Zero};

use super::types::{LineIntersection, ProjectiveLine};
use crate::affine::{Point, Segment};
use crate::rational::Rational;

/// Result of intersecting two segments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SegmentIntersection {
    Empty,
    Point(Point),
    Segment(Segment),
}

impl SegmentIntersection {
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, SegmentIntersection::Empty)
    }
    #[inline]
    pub fn point(self) -> Option<Point> {
        if let SegmentIntersection::Point(p) = self {
            Some(p)
        } else {
            None
        }
    }
}

impl Segment {
    /// Intersect the supporting lines of two segments.
    ///
    /// - Crossing supports: their common point, wherever it lies. It may be
    ///   outside both segments; see [`Segment::bounded_intersection`].
    /// - Parallel supports (meet at infinity): `Empty`.
    /// - Same support: `Empty`. Overlaps of colinear segments are not
    ///   resolved here; see [`Segment::clipped_intersection`].
    pub fn intersection(&self, other: &Segment) -> SegmentIntersection {
        let l0 = ProjectiveLine::from_segment(self);
        let l1 = ProjectiveLine::from_segment(other);
        match l0.intersection(&l1) {
            LineIntersection::Coincident(_) => SegmentIntersection::Empty,
            LineIntersection::Point(pp) => pp
                .to_point()
                .map_or(SegmentIntersection::Empty, SegmentIntersection::Point),
        }
    }

    /// [`Segment::intersection`] restricted to points on both closed
    /// segments.
    pub fn bounded_intersection(&self, other: &Segment) -> SegmentIntersection {
        match self.intersection(other) {
            SegmentIntersection::Point(p) if self.contains(&p) && other.contains(&p) => {
                SegmentIntersection::Point(p)
            }
            _ => SegmentIntersection::Empty,
        }
    }

    /// Like [`Segment::bounded_intersection`], but colinear segments yield
    /// their bounded overlap: `Empty`, a touching `Point`, or the overlap `Segment`
    /// oriented like `self`.
    pub fn clipped_intersection(&self, other: &Segment) -> SegmentIntersection {
        if !self.aligned_with_segment(other) {
            return self.bounded_intersection(other);
        }
        let (Some(t0), Some(t1)) = (self.parameter_of(other.p0()), self.parameter_of(other.p1()))
        else {
            return SegmentIntersection::Empty;
        };
        let (lo, hi) = if t0 <= t1 { (t0, t1) } else { (t1, t0) };
        let lo = lo.max(Rational::zero());
        let hi = hi.min(Rational::one());
        if lo > hi {
            SegmentIntersection::Empty
        } else if lo == hi {
            SegmentIntersection::Point(self.point_at(&lo))
        } else {
            match Segment::new(self.point_at(&lo), self.point_at(&hi)) {
                Ok(s) => SegmentIntersection::Segment(s),
                Err(_) => SegmentIntersection::Point(self.point_at(&lo)),
            }
        }
    }
}
