//! Positions on the glued surface.
//!
//! - `CanvasPosition`: what a presentation layer classifies a click into
//!   (outside, interior, or on one physical side).
//! - `ManifoldPosition`: a position the loop builder accepts; `Outside` is
//!   not representable.
//! - `CanonicalPosition`: the surface-intrinsic form. Two on-edge positions
//!   touching paired sides at the same parameter are the same surface point,
//!   so `ManifoldPosition` compares (and hashes) through this form.

mod types;

pub use types::{CanonicalPosition, CanvasPosition, EdgeParam, ManifoldPosition, SidePosition};
