use std::fmt;
use std::hash::{Hash, Hasher};

use crate::affine::Point;
use crate::cfg::{PARAM_DEN, PARAM_MAX_NUM, PARAM_MIN_NUM};
use crate::error::PositionError;
use crate::polygon::{EdgeId, SideId};
use crate::rational::{rat, Rational};

/// Parameter along a side, restricted to `[1/100, 99/100]`.
///
/// The window keeps positions off the polygon corners, where sides meet.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeParam(Rational);

impl EdgeParam {
    #[inline]
    pub fn min_value() -> Rational {
        rat(PARAM_MIN_NUM, PARAM_DEN)
    }
    #[inline]
    pub fn max_value() -> Rational {
        rat(PARAM_MAX_NUM, PARAM_DEN)
    }

    pub fn new(t: Rational) -> Result<Self, PositionError> {
        if t < Self::min_value() || t > Self::max_value() {
            return Err(PositionError::ParameterOutOfRange(t));
        }
        Ok(Self(t))
    }

    /// Clamp any rational into the window.
    pub fn clamped(t: Rational) -> Self {
        Self(t.clamp(Self::min_value(), Self::max_value()))
    }

    #[inline]
    pub fn value(&self) -> &Rational {
        &self.0
    }
}

impl fmt::Display for EdgeParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A point on one physical side.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SidePosition {
    pub side: SideId,
    pub t: EdgeParam,
}

impl SidePosition {
    #[inline]
    pub fn new(side: SideId, t: EdgeParam) -> Self {
        Self { side, t }
    }
    #[inline]
    pub fn edge(&self) -> EdgeId {
        self.side.edge()
    }
}

/// Surface-intrinsic position: which physical side was touched is gone.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CanonicalPosition {
    Interior(Point),
    OnEdge { edge: EdgeId, t: EdgeParam },
}

/// A position on the surface as tracked by the loop builder.
///
/// Equality and hashing go through [`ManifoldPosition::canonical`].
#[derive(Clone, Debug)]
pub enum ManifoldPosition {
    Interior(Point),
    OnEdge(SidePosition),
}

impl ManifoldPosition {
    #[inline]
    pub fn on_side(side: SideId, t: EdgeParam) -> Self {
        ManifoldPosition::OnEdge(SidePosition::new(side, t))
    }

    /// Reduce to `(logical edge, parameter)` for on-edge positions.
    pub fn canonical(&self) -> CanonicalPosition {
        match self {
            ManifoldPosition::Interior(p) => CanonicalPosition::Interior(p.clone()),
            ManifoldPosition::OnEdge(sp) => CanonicalPosition::OnEdge {
                edge: sp.edge(),
                t: sp.t.clone(),
            },
        }
    }

    #[inline]
    pub fn edge(&self) -> Option<EdgeId> {
        match self {
            ManifoldPosition::Interior(_) => None,
            ManifoldPosition::OnEdge(sp) => Some(sp.edge()),
        }
    }

    #[inline]
    pub fn is_interior(&self) -> bool {
        matches!(self, ManifoldPosition::Interior(_))
    }
}

impl PartialEq for ManifoldPosition {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ManifoldPosition::Interior(a), ManifoldPosition::Interior(b)) => a == b,
            (ManifoldPosition::OnEdge(a), ManifoldPosition::OnEdge(b)) => {
                a.edge() == b.edge() && a.t == b.t
            }
            _ => false,
        }
    }
}
impl Eq for ManifoldPosition {}

impl Hash for ManifoldPosition {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl fmt::Display for ManifoldPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifoldPosition::Interior(p) => write!(f, "{p}"),
            ManifoldPosition::OnEdge(sp) => write!(f, "{}@{} ({})", sp.edge(), sp.t, sp.side),
        }
    }
}

/// Classification of a canvas point by the presentation boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CanvasPosition {
    Outside,
    Interior(Point),
    OnSide(SidePosition),
}

impl CanvasPosition {
    /// Drop `Outside`; everything else is a surface position.
    pub fn into_manifold(self) -> Option<ManifoldPosition> {
        match self {
            CanvasPosition::Outside => None,
            CanvasPosition::Interior(p) => Some(ManifoldPosition::Interior(p)),
            CanvasPosition::OnSide(sp) => Some(ManifoldPosition::OnEdge(sp)),
        }
    }
}

impl From<ManifoldPosition> for CanvasPosition {
    fn from(pos: ManifoldPosition) -> Self {
        match pos {
            ManifoldPosition::Interior(p) => CanvasPosition::Interior(p),
            ManifoldPosition::OnEdge(sp) => CanvasPosition::OnSide(sp),
        }
    }
}
