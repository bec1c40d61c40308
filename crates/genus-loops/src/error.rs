//! Error types.
//!
//! Construction invariants (`GeometryError`, `PolygonError`, `PositionError`)
//! are hard failures for malformed input data. `LoopError` values reject a
//! single user action and leave the builder untouched.

use crate::polygon::EdgeId;
use crate::rational::Rational;

/// Violated construction invariants of geometric values.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    #[error("a segment cannot be empty: both endpoints coincide")]
    DegenerateSegment,
    #[error("projective element with three null coordinates")]
    DegenerateProjectiveElement,
}

/// Failures while building or querying a fundamental polygon.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PolygonError {
    #[error("genus must be between 1 and {max}, got {0}", max = crate::cfg::MAX_GENUS)]
    InvalidGenus(usize),
    #[error("side {side} out of range for a polygon with {sides} sides")]
    SideOutOfRange { side: usize, sides: usize },
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Invalid on-edge positions.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    #[error("position on edge {0} is not between 1/100 and 99/100")]
    ParameterOutOfRange(Rational),
}

/// Rejected loop-building steps. The builder state is unchanged.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoopError {
    #[error("the first point must be placed inside the polygon, not on an edge")]
    InvalidStart,
    #[error("point equals the loop start, no addition has been done")]
    DuplicateStart,
    #[error("point lies on edge {0} like the previous one; pass through the interior first")]
    ConsecutiveSameEdge(EdgeId),
    #[error("no loop is being built with this builder")]
    NotBuilding,
    #[error("a loop is already being built with this builder")]
    AlreadyStarted,
}
