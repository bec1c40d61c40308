use super::*;
use crate::affine::{Point, Segment};
use crate::error::GeometryError;
use crate::rational::{int, rat, Rational};
use num_traits::Zero;
use proptest::prelude::*;

fn seg(x0: i64, y0: i64, x1: i64, y1: i64) -> Segment {
    Segment::new(Point::from_ints(x0, y0), Point::from_ints(x1, y1)).unwrap()
}

#[test]
fn degenerate_projective_elements_are_rejected() {
    let z = Rational::zero;
    assert_eq!(
        ProjectivePoint::new(z(), z(), z()),
        Err(GeometryError::DegenerateProjectiveElement)
    );
    assert_eq!(
        ProjectiveLine::new(z(), z(), z()),
        Err(GeometryError::DegenerateProjectiveElement)
    );
    // Any single non-zero coordinate is enough.
    assert!(ProjectivePoint::new(int(1), z(), z()).is_ok());
    assert!(ProjectiveLine::new(z(), z(), int(1)).is_ok());
}

#[test]
fn points_at_infinity_have_no_affine_image() {
    let p = ProjectivePoint::new(int(1), int(2), Rational::zero()).unwrap();
    assert!(p.is_at_infinity());
    assert_eq!(p.to_point(), None);
    let q = ProjectivePoint::new(int(3), int(6), int(3)).unwrap();
    assert!(!q.is_at_infinity());
    assert_eq!(q.to_point(), Some(Point::from_ints(1, 2)));
    assert!(q.same_point(&ProjectivePoint::from_point(&Point::from_ints(1, 2))));
}

#[test]
fn line_through_points_contains_them() {
    let a = ProjectivePoint::from_point(&Point::new(rat(1, 2), int(3)));
    let b = ProjectivePoint::from_point(&Point::new(int(-2), rat(5, 7)));
    let l = ProjectiveLine::through(&a, &b).unwrap();
    assert!(l.contains(&a));
    assert!(l.contains(&b));
    assert!(!l.contains(&ProjectivePoint::from_point(&Point::origin())));
    assert_eq!(
        ProjectiveLine::through(&a, &a.clone()),
        Err(GeometryError::DegenerateProjectiveElement)
    );
}

#[test]
fn segment_line_has_expected_equation() {
    // Through (0,0) and (1,0): the x axis, 0 + 0·x + 1·y = 0.
    let l = ProjectiveLine::from_segment(&seg(0, 0, 1, 0));
    let (c0, c1, c2) = l.coefficients();
    assert!(c0.is_zero() && c1.is_zero());
    assert_eq!(c2, &int(1));
}

#[test]
fn line_meets_itself_in_coincident_case() {
    let s = seg(1, 2, 5, -3);
    let l = ProjectiveLine::from_segment(&s);
    match l.intersection(&l) {
        LineIntersection::Coincident(same) => assert!(same.same_line(&l)),
        LineIntersection::Point(p) => panic!("expected coincident lines, got {p}"),
    }
    // Same support from another pair of points, opposite orientation.
    let l2 = ProjectiveLine::from_segment(&Segment::new(s.point_at(&int(3)), s.point_at(&rat(-1, 2))).unwrap());
    assert!(matches!(l.intersection(&l2), LineIntersection::Coincident(_)));
}

#[test]
fn crossing_lines_meet_in_a_finite_point() {
    let l0 = ProjectiveLine::from_segment(&seg(0, 0, 2, 2));
    let l1 = ProjectiveLine::from_segment(&seg(0, 2, 2, 0));
    match l0.intersection(&l1) {
        LineIntersection::Point(p) => assert_eq!(p.to_point(), Some(Point::from_ints(1, 1))),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn parallel_lines_meet_at_infinity() {
    let l0 = ProjectiveLine::from_segment(&seg(0, 0, 1, 1));
    let l1 = ProjectiveLine::from_segment(&seg(0, 1, 1, 2));
    match l0.intersection(&l1) {
        LineIntersection::Point(p) => assert!(p.is_at_infinity()),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn segment_intersection_cases() {
    // Crossing.
    let r = seg(0, 0, 2, 2).intersection(&seg(0, 2, 2, 0));
    assert_eq!(r, SegmentIntersection::Point(Point::from_ints(1, 1)));
    // Non-integral crossing.
    let r = seg(0, 0, 3, 1).intersection(&seg(0, 1, 1, 0));
    assert_eq!(r.point(), Some(Point::new(rat(3, 4), rat(1, 4))));
    // Parallel.
    assert!(seg(0, 0, 1, 0).intersection(&seg(0, 1, 1, 1)).is_empty());
    // Supports cross outside of the segments: still the meet of the lines.
    assert_eq!(
        seg(0, 0, 1, 0).intersection(&seg(5, -1, 5, 1)),
        SegmentIntersection::Point(Point::from_ints(5, 0))
    );
    // Touching at an endpoint.
    assert_eq!(
        seg(0, 0, 1, 0).intersection(&seg(1, 0, 1, 4)),
        SegmentIntersection::Point(Point::from_ints(1, 0))
    );
}

#[test]
fn bounded_intersection_keeps_points_on_both_segments() {
    let a = seg(0, 0, 1, 0);
    assert!(a.bounded_intersection(&seg(5, -1, 5, 1)).is_empty());
    // On the support of `b` only.
    assert!(a.bounded_intersection(&seg(1, 1, 1, 4)).is_empty());
    assert_eq!(
        a.bounded_intersection(&seg(1, 0, 1, 4)),
        SegmentIntersection::Point(Point::from_ints(1, 0))
    );
    assert_eq!(
        seg(0, 0, 2, 2).bounded_intersection(&seg(0, 2, 2, 0)),
        SegmentIntersection::Point(Point::from_ints(1, 1))
    );
    assert!(a.bounded_intersection(&seg(0, 1, 1, 1)).is_empty());
}

#[test]
fn overlapping_colinear_segments_are_conservatively_empty() {
    let a = seg(0, 0, 4, 0);
    let b = seg(2, 0, 6, 0);
    assert!(a.intersection(&b).is_empty());
    assert!(a.intersection(&a).is_empty());
    assert!(a.bounded_intersection(&b).is_empty());
}

#[test]
fn clipped_intersection_resolves_overlaps() {
    let a = seg(0, 0, 4, 0);
    assert_eq!(
        a.clipped_intersection(&seg(6, 0, 2, 0)),
        SegmentIntersection::Segment(seg(2, 0, 4, 0))
    );
    assert_eq!(
        a.clipped_intersection(&seg(4, 0, 9, 0)),
        SegmentIntersection::Point(Point::from_ints(4, 0))
    );
    assert!(a.clipped_intersection(&seg(5, 0, 9, 0)).is_empty());
    assert_eq!(a.clipped_intersection(&a), SegmentIntersection::Segment(a.clone()));
    // Non-colinear input falls back to the bounded intersection.
    assert_eq!(
        a.clipped_intersection(&seg(1, -1, 1, 1)),
        SegmentIntersection::Point(Point::from_ints(1, 0))
    );
    assert!(a.clipped_intersection(&seg(7, -1, 7, 1)).is_empty());
}

proptest! {
    #[test]
    fn segment_support_meets_itself_coincidently(
        x0 in -20i64..20, y0 in -20i64..20, x1 in -20i64..20, y1 in -20i64..20,
    ) {
        prop_assume!((x0, y0) != (x1, y1));
        let l = ProjectiveLine::from_segment(&seg(x0, y0, x1, y1));
        prop_assert!(matches!(l.intersection(&l), LineIntersection::Coincident(_)));
    }

    #[test]
    fn crossing_point_lies_on_both_supports(
        x0 in -20i64..20, y0 in -20i64..20, x1 in -20i64..20, y1 in -20i64..20,
        u0 in -20i64..20, v0 in -20i64..20, u1 in -20i64..20, v1 in -20i64..20,
    ) {
        prop_assume!((x0, y0) != (x1, y1) && (u0, v0) != (u1, v1));
        let a = seg(x0, y0, x1, y1);
        let b = seg(u0, v0, u1, v1);
        prop_assume!(!a.vec().colinear_to(&b.vec()));
        let la = ProjectiveLine::from_segment(&a);
        let lb = ProjectiveLine::from_segment(&b);
        match la.intersection(&lb) {
            LineIntersection::Point(pp) => {
                let p = pp.to_point().expect("non-parallel supports meet at a finite point");
                prop_assert!(a.aligned_with_point(&p));
                prop_assert!(b.aligned_with_point(&p));
                prop_assert_eq!(a.intersection(&b), SegmentIntersection::Point(p));
            }
            LineIntersection::Coincident(_) => prop_assert!(false, "distinct directions"),
        }
    }
}
