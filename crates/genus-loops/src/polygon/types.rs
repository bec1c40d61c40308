//! Identifiers and side records.

use std::fmt;

use crate::affine::Segment;

/// Logical edge: an identification class of two physical sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub usize);

/// Physical side of the drawn polygon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SideId(pub usize);

impl SideId {
    /// Logical edge this side belongs to (`k / 2`).
    #[inline]
    pub fn edge(self) -> EdgeId {
        EdgeId(self.0 / 2)
    }
    /// Odd sides traverse their edge against the boundary orientation.
    #[inline]
    pub fn is_inverse(self) -> bool {
        self.0 % 2 == 1
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.0)
    }
}

impl fmt::Display for SideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "side {}", self.0)
    }
}

/// One physical side with its gluing data and exact placement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolygonSide {
    pub id: SideId,
    pub edge: EdgeId,
    pub partner: SideId,
    /// Vertex index at parameter 0.
    pub from: usize,
    /// Vertex index at parameter 1.
    pub to: usize,
    pub segment: Segment,
}

impl PolygonSide {
    /// Edge letter with orientation, e.g. `x1` or `x1^-1`.
    pub fn letter(&self) -> String {
        if self.id.is_inverse() {
            format!("{}^-1", self.edge)
        } else {
            self.edge.to_string()
        }
    }
}
