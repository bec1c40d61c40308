//! Loops on closed orientable surfaces of genus g >= 1.
//!
//! A surface is presented as a regular 4g-gon with sides glued in the
//! pattern x0 x0⁻¹ x1 x1⁻¹ ...; a loop is entered as a sequence of interior
//! and on-edge positions, and crossing a side continues from its partner.
//! All coordinates are exact rationals.
//!
//! Layers, bottom-up:
//! - `rational`, `affine`, `projective`: exact planar geometry on Q².
//! - `polygon`: the fundamental polygon and its side gluing.
//! - `position`: points of the surface, with glued sides identified.
//! - `loops`: the loop-building state machine.
//! - `session`: click handling on top of the builder.
//! - `sample`: replayable random walks for benches and the CLI.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.

pub mod affine;
pub mod cfg;
pub mod error;
pub mod loops;
pub mod polygon;
pub mod position;
pub mod projective;
pub mod rational;
pub mod sample;
pub mod session;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{GeometryError, LoopError, PolygonError, PositionError};
pub use rational::Rational;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::affine::{Point, Segment, Vector};
    pub use crate::loops::{BuilderState, Loop, LoopBuilder, LoopSegment};
    pub use crate::polygon::{EdgeId, FundamentalPolygon, SideId};
    pub use crate::position::{CanvasPosition, EdgeParam, ManifoldPosition, SidePosition};
    pub use crate::projective::{ProjectiveLine, ProjectivePoint, SegmentIntersection};
    pub use crate::rational::{int, parse_rational, rat, Rational};
    pub use crate::sample::{draw_walk, ReplayToken, WalkCfg};
    pub use crate::session::{DrawingSession, SessionEvent, SessionWarning};
}
