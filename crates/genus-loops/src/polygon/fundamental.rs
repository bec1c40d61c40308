//! Side table, matcher and exact classification.

use num_traits::Signed;

use super::layout::circle_vertices;
use super::types::{EdgeId, PolygonSide, SideId};
use crate::affine::{Point, Segment, Vector};
use crate::cfg::MAX_GENUS;
use crate::error::PolygonError;
use crate::position::{CanvasPosition, EdgeParam, ManifoldPosition, SidePosition};

/// Fundamental polygon of a genus-g orientable surface: `4g` sides glued
/// pairwise into `2g` logical edges.
///
/// Invariants:
/// - `matcher[k]` is the partner of side `k`; the map is an involution
///   without fixed points.
/// - `sides[k].edge == EdgeId(k / 2)`.
/// - `vertices` are in strictly convex counterclockwise position.
///
/// Side ids are only meaningful for the polygon that produced them; passing
/// a foreign out-of-range `SideId` to the lookups panics like slice indexing.
#[derive(Clone, Debug)]
pub struct FundamentalPolygon {
    genus: usize,
    sides: Vec<PolygonSide>,
    matcher: Vec<SideId>,
    vertices: Vec<Point>,
}

impl FundamentalPolygon {
    pub fn new(genus: usize) -> Result<Self, PolygonError> {
        if !(1..=MAX_GENUS).contains(&genus) {
            return Err(PolygonError::InvalidGenus(genus));
        }
        let n = 4 * genus;
        let vertices = circle_vertices(n);

        let mut sides = Vec::with_capacity(n);
        let mut matcher = Vec::with_capacity(n);
        for i in 0..2 * genus {
            let edge = EdgeId(i);
            let (a, b) = (SideId(2 * i), SideId(2 * i + 1));
            let shared = 2 * i + 1;

            sides.push(PolygonSide {
                id: a,
                edge,
                partner: b,
                from: 2 * i,
                to: shared,
                segment: Segment::new(vertices[2 * i].clone(), vertices[shared].clone())?,
            });
            matcher.push(b);

            let far = (2 * i + 2) % n;
            sides.push(PolygonSide {
                id: b,
                edge,
                partner: a,
                from: far,
                to: shared,
                segment: Segment::new(vertices[far].clone(), vertices[shared].clone())?,
            });
            matcher.push(a);
        }
        tracing::debug!(genus, sides = n, "fundamental polygon built");
        Ok(Self {
            genus,
            sides,
            matcher,
            vertices,
        })
    }

    #[inline]
    pub fn genus(&self) -> usize {
        self.genus
    }
    #[inline]
    pub fn side_count(&self) -> usize {
        self.sides.len()
    }
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.sides.len() / 2
    }
    #[inline]
    pub fn sides(&self) -> &[PolygonSide] {
        &self.sides
    }
    #[inline]
    pub fn side(&self, side: SideId) -> &PolygonSide {
        &self.sides[side.0]
    }
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Validate a raw side index.
    pub fn try_side(&self, k: usize) -> Result<SideId, PolygonError> {
        if k < self.sides.len() {
            Ok(SideId(k))
        } else {
            Err(PolygonError::SideOutOfRange {
                side: k,
                sides: self.sides.len(),
            })
        }
    }

    /// The other occurrence of the same logical edge.
    #[inline]
    pub fn paired_side(&self, side: SideId) -> SideId {
        self.matcher[side.0]
    }

    #[inline]
    pub fn logical_edge_of(&self, side: SideId) -> EdgeId {
        self.sides[side.0].edge
    }

    /// The two sides glued into `edge`, even side first.
    #[inline]
    pub fn sides_of_edge(&self, edge: EdgeId) -> (SideId, SideId) {
        let a = SideId(2 * edge.0);
        (a, self.paired_side(a))
    }

    /// Same parameter on the partner side.
    pub fn paired_position(&self, pos: &SidePosition) -> SidePosition {
        SidePosition::new(self.paired_side(pos.side), pos.t.clone())
    }

    #[inline]
    pub fn side_segment(&self, side: SideId) -> &Segment {
        &self.sides[side.0].segment
    }

    /// Exact location of an on-side position in the layout.
    pub fn point_at(&self, pos: &SidePosition) -> Point {
        self.side_segment(pos.side).point_at(pos.t.value())
    }

    pub fn position_point(&self, pos: &ManifoldPosition) -> Point {
        match pos {
            ManifoldPosition::Interior(p) => p.clone(),
            ManifoldPosition::OnEdge(sp) => self.point_at(sp),
        }
    }

    /// Classify a point of Q² against the layout.
    ///
    /// Points on a side are `OnSide` with their parameter clamped into the
    /// `EdgeParam` window (corners therefore land near an end of the first
    /// side containing them). Points strictly inside are `Interior`.
    pub fn classify(&self, p: &Point) -> CanvasPosition {
        for side in &self.sides {
            if side.segment.contains(p) {
                if let Some(t) = side.segment.parameter_of(p) {
                    return CanvasPosition::OnSide(SidePosition::new(
                        side.id,
                        EdgeParam::clamped(t),
                    ));
                }
            }
        }
        if self.strictly_inside(p) {
            CanvasPosition::Interior(p.clone())
        } else {
            CanvasPosition::Outside
        }
    }

    fn strictly_inside(&self, p: &Point) -> bool {
        let n = self.vertices.len();
        (0..n).all(|j| {
            let a = &self.vertices[j];
            let b = &self.vertices[(j + 1) % n];
            Vector::from_points(a, b)
                .det(&Vector::from_points(a, p))
                .is_positive()
        })
    }

    /// Boundary word read side by side, e.g. `x0 x0^-1 x1 x1^-1`.
    pub fn boundary_word(&self) -> String {
        self.sides
            .iter()
            .map(PolygonSide::letter)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
