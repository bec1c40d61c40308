//! Exact vertex placement on the unit circle.
//!
//! Rational points of the circle come from the stereographic
//! parameterization `t ↦ ((1−t²)/(1+t²), 2t/(1+t²))`. Strictly increasing
//! `t` gives strictly increasing angles, so the vertices are in convex,
//! counterclockwise position. Spacing is only roughly uniform.

use num_traits::One;

use crate::affine::Point;
use crate::rational::{rat, Rational};

/// `n` rational points of the unit circle in counterclockwise order.
///
/// Parameters are `t_k = (2k + 1 − n) / (n / 2)`, symmetric around zero.
pub fn circle_vertices(n: usize) -> Vec<Point> {
    let n = n as i64;
    let half = (n / 2).max(1);
    (0..n)
        .map(|k| stereographic(&rat(2 * k + 1 - n, half)))
        .collect()
}

fn stereographic(t: &Rational) -> Point {
    let one = Rational::one();
    let t2 = t * t;
    let den = &one + &t2;
    let two_t = t + t;
    Point::new((&one - &t2) / &den, two_t / den)
}
