use super::*;
use crate::error::GeometryError;
use crate::rational::{int, rat, Rational};
use proptest::prelude::*;

fn pt(x: i64, y: i64) -> Point {
    Point::from_ints(x, y)
}

fn small_point() -> impl Strategy<Value = Point> {
    (-50i64..50, -50i64..50, 1i64..7, 1i64..7)
        .prop_map(|(x, y, dx, dy)| Point::new(rat(x, dx), rat(y, dy)))
}

#[test]
fn vector_self_equality_and_arithmetic() {
    let v = Vector::new(int(1), int(0));
    assert_eq!(v, v.clone());
    let w = Vector::new(rat(1, 2), int(3));
    assert_eq!(&v + &w, Vector::new(rat(3, 2), int(3)));
    assert_eq!(&v - &w, Vector::new(rat(1, 2), int(-3)));
    assert_eq!(v.dot(&w), rat(1, 2));
    assert_eq!(v.det(&w), int(3));
    assert_eq!(w.det(&v), int(-3));
    assert_eq!(v.cross(&w), v.det(&w));
}

#[test]
fn colinearity_is_exact() {
    let a = Vector::new(rat(1, 3), rat(2, 3));
    let b = Vector::new(int(1), int(2));
    assert!(a.colinear_to(&b));
    let c = Vector::new(int(1), rat(2, 1) + rat(1, 1_000_000_000));
    assert!(!a.colinear_to(&c));
}

#[test]
fn degenerate_segment_is_rejected() {
    assert_eq!(
        Segment::new(pt(1, 1), Point::new(rat(2, 2), int(1))),
        Err(GeometryError::DegenerateSegment)
    );
}

#[test]
fn segment_round_trip_keeps_endpoints() {
    let p0 = Point::new(rat(1, 3), rat(-2, 5));
    let p1 = Point::new(int(4), rat(7, 2));
    let s = Segment::new(p0.clone(), p1.clone()).unwrap();
    assert_eq!(s.p0(), &p0);
    assert_eq!(s.p1(), &p1);
    assert_eq!(s.vec(), Vector::from_points(&p0, &p1));
    assert_eq!(s.into_points(), (p0, p1));
}

#[test]
fn containment_on_axis_segment() {
    let s = Segment::new(pt(0, 0), pt(4, 0)).unwrap();
    assert!(s.contains(&pt(0, 0)));
    assert!(s.contains(&pt(4, 0)));
    assert!(s.contains(&Point::new(rat(7, 3), int(0))));
    assert!(!s.contains(&pt(5, 0)));
    assert!(!s.contains(&pt(-1, 0)));
    assert!(!s.contains(&Point::new(int(2), rat(1, 1000))));
    assert!(s.aligned_with_point(&pt(-10, 0)));
}

#[test]
fn parameter_of_and_point_at_agree() {
    let s = Segment::new(pt(1, 1), pt(3, 5)).unwrap();
    let t = rat(3, 4);
    let p = s.point_at(&t);
    assert_eq!(p, Point::new(rat(5, 2), int(4)));
    assert_eq!(s.parameter_of(&p), Some(t));
    assert_eq!(s.parameter_of(&pt(0, 0)), None);
}

#[test]
fn reversed_segment_swaps_endpoints_and_keeps_support() {
    let s = Segment::new(pt(0, 1), pt(2, 3)).unwrap();
    let r = s.reversed();
    assert_eq!(r.p0(), s.p1());
    assert_eq!(r.p1(), s.p0());
    assert!(s.aligned_with_segment(&r));
    let other = Segment::new(pt(0, 0), pt(1, 0)).unwrap();
    assert!(!s.aligned_with_segment(&other));
}

proptest! {
    #[test]
    fn zero_vector_is_colinear_to_everything(p in small_point(), q in small_point()) {
        let zero = Vector::from_points(&p, &p);
        prop_assert!(zero.is_zero());
        let v = Vector::from_points(&p, &q);
        prop_assert!(zero.colinear_to(&v));
        prop_assert!(v.colinear_to(&zero));
        prop_assert!(zero.colinear_to(&zero));
    }

    #[test]
    fn affine_combinations_inside_unit_range_are_contained(
        p0 in small_point(),
        p1 in small_point(),
        n in 0i64..=24,
    ) {
        prop_assume!(p0 != p1);
        let s = Segment::new(p0, p1).unwrap();
        let t = rat(n, 24);
        prop_assert!(s.contains(&s.point_at(&t)));
    }

    #[test]
    fn affine_combinations_outside_unit_range_are_not_contained(
        p0 in small_point(),
        p1 in small_point(),
        n in 1i64..=48,
        before in any::<bool>(),
    ) {
        prop_assume!(p0 != p1);
        let s = Segment::new(p0, p1).unwrap();
        let offset = rat(n, 24);
        let t: Rational = if before { -offset } else { int(1) + offset };
        let p = s.point_at(&t);
        prop_assert!(&p != s.p0() && &p != s.p1());
        prop_assert!(!s.contains(&p));
        prop_assert!(s.aligned_with_point(&p));
    }
}
