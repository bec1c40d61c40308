//! Homogeneous points and lines.

use std::fmt;

use num_traits::{One, Zero};

use crate::affine::{Point, Segment, Vector};
use crate::error::GeometryError;
use crate::rational::Rational;

/// A 3-vector of Q³ used as the coordinate support of projective elements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Support3 {
    pub a: Rational,
    pub b: Rational,
    pub c: Rational,
}

impl Support3 {
    #[inline]
    fn new(a: Rational, b: Rational, c: Rational) -> Self {
        Self { a, b, c }
    }

    /// Cross product, each component being a 2×2 determinant.
    fn cross(&self, s: &Support3) -> Support3 {
        let minor = |a0: &Rational, a1: &Rational, b0: &Rational, b1: &Rational| {
            Vector::new(a0.clone(), a1.clone()).det(&Vector::new(b0.clone(), b1.clone()))
        };
        Support3::new(
            minor(&self.b, &self.c, &s.b, &s.c),
            minor(&self.c, &self.a, &s.c, &s.a),
            minor(&self.a, &self.b, &s.a, &s.b),
        )
    }

    #[inline]
    fn dot(&self, s: &Support3) -> Rational {
        &self.a * &s.a + &self.b * &s.b + &self.c * &s.c
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.a.is_zero() && self.b.is_zero() && self.c.is_zero()
    }
}

/// A point of PQ² in homogeneous coordinates `(x : y : w)`.
///
/// Invariant: the three coordinates are not all zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectivePoint {
    x: Rational,
    y: Rational,
    w: Rational,
}

impl ProjectivePoint {
    pub fn new(x: Rational, y: Rational, w: Rational) -> Result<Self, GeometryError> {
        if x.is_zero() && y.is_zero() && w.is_zero() {
            return Err(GeometryError::DegenerateProjectiveElement);
        }
        Ok(Self { x, y, w })
    }

    /// Lift an affine point with `w = 1`.
    #[inline]
    pub fn from_point(p: &Point) -> Self {
        Self {
            x: p.x.clone(),
            y: p.y.clone(),
            w: Rational::one(),
        }
    }

    #[inline]
    pub fn x(&self) -> &Rational {
        &self.x
    }
    #[inline]
    pub fn y(&self) -> &Rational {
        &self.y
    }
    #[inline]
    pub fn w(&self) -> &Rational {
        &self.w
    }

    #[inline]
    pub fn is_at_infinity(&self) -> bool {
        self.w.is_zero()
    }

    /// Back to Q², or `None` for a point at infinity.
    pub fn to_point(&self) -> Option<Point> {
        if self.is_at_infinity() {
            return None;
        }
        Some(Point::new(&self.x / &self.w, &self.y / &self.w))
    }

    /// Equality as projective points (coordinates proportional).
    pub fn same_point(&self, other: &ProjectivePoint) -> bool {
        self.support().cross(&other.support()).is_zero()
    }

    /// Support shifted to `(w, x, y)`.
    #[inline]
    pub(crate) fn support(&self) -> Support3 {
        Support3::new(self.w.clone(), self.x.clone(), self.y.clone())
    }

    fn from_support(s: Support3) -> Self {
        debug_assert!(!s.is_zero());
        Self {
            x: s.b,
            y: s.c,
            w: s.a,
        }
    }
}

impl fmt::Display for ProjectivePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} : {} : {})", self.x, self.y, self.w)
    }
}

/// The line `c0 + c1·x + c2·y = 0` of PQ².
///
/// Invariant: the three coefficients are not all zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectiveLine {
    c0: Rational,
    c1: Rational,
    c2: Rational,
}

/// Meet of two projective lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineIntersection {
    /// Both lines are the same: every point of the line is shared.
    Coincident(ProjectiveLine),
    Point(ProjectivePoint),
}

impl ProjectiveLine {
    pub fn new(c0: Rational, c1: Rational, c2: Rational) -> Result<Self, GeometryError> {
        if c0.is_zero() && c1.is_zero() && c2.is_zero() {
            return Err(GeometryError::DegenerateProjectiveElement);
        }
        Ok(Self { c0, c1, c2 })
    }

    /// The line joining two points; fails if they are the same projective point.
    pub fn through(p0: &ProjectivePoint, p1: &ProjectivePoint) -> Result<Self, GeometryError> {
        let s = p0.support().cross(&p1.support());
        if s.is_zero() {
            return Err(GeometryError::DegenerateProjectiveElement);
        }
        Ok(Self::from_support(s))
    }

    /// The supporting line of a segment.
    pub fn from_segment(s: &Segment) -> Self {
        let support = ProjectivePoint::from_point(s.p0())
            .support()
            .cross(&ProjectivePoint::from_point(s.p1()).support());
        // Distinct affine points are distinct projective points.
        Self::from_support(support)
    }

    #[inline]
    pub fn coefficients(&self) -> (&Rational, &Rational, &Rational) {
        (&self.c0, &self.c1, &self.c2)
    }

    #[inline]
    pub(crate) fn support(&self) -> Support3 {
        Support3::new(self.c0.clone(), self.c1.clone(), self.c2.clone())
    }

    fn from_support(s: Support3) -> Self {
        debug_assert!(!s.is_zero());
        Self {
            c0: s.a,
            c1: s.b,
            c2: s.c,
        }
    }

    /// Incidence test.
    #[inline]
    pub fn contains(&self, p: &ProjectivePoint) -> bool {
        self.support().dot(&p.support()).is_zero()
    }

    /// Equality as projective lines (coefficients proportional).
    pub fn same_line(&self, other: &ProjectiveLine) -> bool {
        self.support().cross(&other.support()).is_zero()
    }

    /// Meet of two lines: the common point, or `Coincident(self)` when the
    /// lines are the same.
    pub fn intersection(&self, other: &ProjectiveLine) -> LineIntersection {
        let meet = self.support().cross(&other.support());
        if meet.is_zero() {
            LineIntersection::Coincident(self.clone())
        } else {
            LineIntersection::Point(ProjectivePoint::from_support(meet))
        }
    }
}

impl fmt::Display for ProjectiveLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}·x + {}·y = 0", self.c0, self.c1, self.c2)
    }
}
