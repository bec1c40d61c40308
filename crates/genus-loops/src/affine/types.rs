//! Points and vectors of the affine plane Q².

use std::fmt;
use std::ops::{Add, Neg, Sub};

use num_traits::Zero;

use crate::rational::{int, Rational};

/// A point of Q² seen as an affine space.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: Rational,
    pub y: Rational,
}

impl Point {
    #[inline]
    pub fn new(x: Rational, y: Rational) -> Self {
        Self { x, y }
    }
    #[inline]
    pub fn from_ints(x: i64, y: i64) -> Self {
        Self::new(int(x), int(y))
    }
    #[inline]
    pub fn origin() -> Self {
        Self::new(Rational::zero(), Rational::zero())
    }
    /// `self + v`.
    #[inline]
    pub fn translate(&self, v: &Vector) -> Point {
        Point::new(&self.x + &v.x, &self.y + &v.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A vector of Q².
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Vector {
    pub x: Rational,
    pub y: Rational,
}

impl Vector {
    #[inline]
    pub fn new(x: Rational, y: Rational) -> Self {
        Self { x, y }
    }
    #[inline]
    pub fn zero() -> Self {
        Self::new(Rational::zero(), Rational::zero())
    }
    /// The vector `p1 - p0`.
    #[inline]
    pub fn from_points(p0: &Point, p1: &Point) -> Self {
        Self::new(&p1.x - &p0.x, &p1.y - &p0.y)
    }
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }
    /// Canonical dot product.
    #[inline]
    pub fn dot(&self, v: &Vector) -> Rational {
        &self.x * &v.x + &self.y * &v.y
    }
    /// Determinant of the columns `[self v]`: `self.x * v.y - self.y * v.x`.
    #[inline]
    pub fn det(&self, v: &Vector) -> Rational {
        &self.x * &v.y - &self.y * &v.x
    }
    /// Alias for [`Vector::det`] (the z-component of the 3D cross product).
    #[inline]
    pub fn cross(&self, v: &Vector) -> Rational {
        self.det(v)
    }
    /// True iff `det(self, v) == 0`.
    ///
    /// The zero vector is colinear to every vector, itself included.
    #[inline]
    pub fn colinear_to(&self, v: &Vector) -> bool {
        self.det(v).is_zero()
    }
    #[inline]
    pub fn scale(&self, lambda: &Rational) -> Vector {
        Vector::new(&self.x * lambda, &self.y * lambda)
    }
}

impl Add<&Vector> for &Vector {
    type Output = Vector;
    #[inline]
    fn add(self, rhs: &Vector) -> Vector {
        Vector::new(&self.x + &rhs.x, &self.y + &rhs.y)
    }
}
impl Add for Vector {
    type Output = Vector;
    #[inline]
    fn add(self, rhs: Vector) -> Vector {
        &self + &rhs
    }
}
impl Sub<&Vector> for &Vector {
    type Output = Vector;
    #[inline]
    fn sub(self, rhs: &Vector) -> Vector {
        Vector::new(&self.x - &rhs.x, &self.y - &rhs.y)
    }
}
impl Sub for Vector {
    type Output = Vector;
    #[inline]
    fn sub(self, rhs: Vector) -> Vector {
        &self - &rhs
    }
}
impl Neg for Vector {
    type Output = Vector;
    #[inline]
    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}
